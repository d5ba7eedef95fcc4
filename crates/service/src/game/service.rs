use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::CreateGameInput;
use super::repository::GameRepository;
use crate::errors::ServiceError;

/// Game business service independent of web framework
pub struct GameService<R: GameRepository> {
    repo: Arc<R>,
}

impl<R: GameRepository> GameService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<models::game::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<models::game::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("game"))
    }

    /// Validate, check the parent console and title uniqueness, then persist.
    ///
    /// A missing console is reported as `Conflict`, the same class as a duplicate title.
    ///
    /// # Examples
    /// ```
    /// use service::game::{service::GameService, repository::mock::MockGameRepository, domain::CreateGameInput};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = GameService::new(Arc::new(MockGameRepository::with_consoles([1])));
    /// let game = tokio_test::block_on(svc.create(CreateGameInput { title: Some("Doom".into()), console_id: Some(1) })).unwrap();
    /// assert_eq!(game.console_id, 1);
    /// let orphan = tokio_test::block_on(svc.create(CreateGameInput { title: Some("Quake".into()), console_id: Some(0) }));
    /// assert!(matches!(orphan, Err(ServiceError::Conflict(_))));
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateGameInput) -> Result<models::game::Model, ServiceError> {
        let new = input.validate()?;
        if !self.repo.console_exists(new.console_id).await? {
            warn!(console_id = new.console_id, "game references unknown console");
            return Err(ServiceError::Conflict(format!("console {} does not exist", new.console_id)));
        }
        if let Some(existing) = self.repo.find_by_title(&new.title).await? {
            debug!(id = existing.id, "game title taken");
            return Err(ServiceError::Conflict(format!("game '{}' already exists", new.title)));
        }
        let created = self.repo.create(new).await?;
        info!(id = created.id, title = %created.title, console_id = created.console_id, "game_created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::domain::NewGame;
    use crate::game::repository::{mock::MockGameRepository, SeaOrmGameRepository};
    use models::db::test_support::memory_db;

    fn input(title: &str, console_id: i32) -> CreateGameInput {
        CreateGameInput { title: Some(title.into()), console_id: Some(console_id.into()) }
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let svc = GameService::new(Arc::new(MockGameRepository::with_consoles([1])));
        let no_console = CreateGameInput { title: Some("Pong".into()), console_id: None };
        assert!(matches!(svc.create(no_console).await, Err(ServiceError::Validation(_))));
        let no_title = CreateGameInput { title: None, console_id: Some(1) };
        assert!(matches!(svc.create(no_title).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn unknown_console_is_conflict_not_not_found() -> Result<(), anyhow::Error> {
        let repo = Arc::new(MockGameRepository::default());
        let svc = GameService::new(repo.clone());
        let res = svc.create(input("Pitfall", 0)).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let svc = GameService::new(Arc::new(MockGameRepository::default()));
        assert!(matches!(svc.get(0).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn seven_games_under_one_console() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let console = models::console::create(&db, "SNES").await?;
        let svc = GameService::new(Arc::new(SeaOrmGameRepository { db: db.clone() }));

        for i in 0..7 {
            svc.create(input(&format!("Title {i}"), console.id)).await?;
        }
        let all = svc.list().await?;
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|g| g.console_id == console.id));
        Ok(())
    }

    #[tokio::test]
    async fn game_crud_service() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let console = models::console::create(&db, "Genesis").await?;
        let repo = Arc::new(SeaOrmGameRepository { db: db.clone() });
        let svc = GameService::new(repo.clone());

        let g = svc.create(input("Sonic", console.id)).await?;
        assert_eq!(svc.get(g.id).await?, g);

        let dup = svc.create(input("Sonic", console.id)).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        let orphan = svc.create(input("Ecco", console.id + 100)).await;
        assert!(matches!(orphan, Err(ServiceError::Conflict(_))));
        assert_eq!(svc.list().await?.len(), 1);

        // cleanup
        assert!(repo.delete(g.id).await?);
        models::console::hard_delete(&db, console.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn store_rejects_dangling_parent_without_precheck() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let repo = SeaOrmGameRepository { db };
        let res = repo.create(NewGame { title: "Lost".into(), console_id: 42 }).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))), "got {res:?}");
        Ok(())
    }

    #[tokio::test]
    async fn store_failures_surface_as_db_errors() -> Result<(), anyhow::Error> {
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let svc = GameService::new(Arc::new(SeaOrmGameRepository { db }));
        assert!(matches!(svc.list().await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.create(input("Zork", 1)).await, Err(ServiceError::Db(_))));
        Ok(())
    }
}
