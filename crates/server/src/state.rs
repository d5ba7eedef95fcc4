use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::console::repository::SeaOrmConsoleRepository;
use service::game::repository::SeaOrmGameRepository;
use service::{ConsoleService, GameService};

/// Shared handler state. The store handle is injected here rather than held globally.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub consoles: Arc<ConsoleService<SeaOrmConsoleRepository>>,
    pub games: Arc<GameService<SeaOrmGameRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let consoles = ConsoleService::new(Arc::new(SeaOrmConsoleRepository { db: db.clone() }));
        let games = GameService::new(Arc::new(SeaOrmGameRepository { db: db.clone() }));
        Self { db, consoles: Arc::new(consoles), games: Arc::new(games) }
    }
}
