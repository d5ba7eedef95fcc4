use async_trait::async_trait;
use models::errors::ModelError;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::domain::NewGame;
use crate::errors::ServiceError;

/// Persistence operations for games.
///
/// `create` relies on the store's unique and foreign-key constraints; either
/// violation is reported as [`ServiceError::Conflict`].
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::game::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::game::Model>, ServiceError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<models::game::Model>, ServiceError>;
    async fn console_exists(&self, console_id: i32) -> Result<bool, ServiceError>;
    async fn create(&self, new: NewGame) -> Result<models::game::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmGameRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl GameRepository for SeaOrmGameRepository {
    async fn list(&self) -> Result<Vec<models::game::Model>, ServiceError> {
        let rows = models::game::Entity::find().all(&self.db).await.map_err(ModelError::from)?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<models::game::Model>, ServiceError> {
        let found = models::game::Entity::find_by_id(id).one(&self.db).await.map_err(ModelError::from)?;
        Ok(found)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<models::game::Model>, ServiceError> {
        Ok(models::game::find_by_title(&self.db, title).await?)
    }

    async fn console_exists(&self, console_id: i32) -> Result<bool, ServiceError> {
        let found = models::console::Entity::find_by_id(console_id)
            .one(&self.db)
            .await
            .map_err(ModelError::from)?;
        Ok(found.is_some())
    }

    async fn create(&self, new: NewGame) -> Result<models::game::Model, ServiceError> {
        models::game::create(&self.db, &new.title, new.console_id).await.map_err(|e| match e {
            ModelError::Conflict(msg) => ServiceError::Conflict(format!("game '{}' rejected by store: {}", new.title, msg)),
            other => other.into(),
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::game::hard_delete(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and benches
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockGameRepository {
        consoles: Mutex<HashSet<i32>>,
        rows: Mutex<BTreeMap<i32, models::game::Model>>,
        last_id: Mutex<i32>,
    }

    impl MockGameRepository {
        /// Mock whose parent table holds the given console ids.
        pub fn with_consoles(ids: impl IntoIterator<Item = i32>) -> Self {
            let repo = Self::default();
            repo.consoles.lock().unwrap().extend(ids);
            repo
        }
    }

    #[async_trait]
    impl GameRepository for MockGameRepository {
        async fn list(&self) -> Result<Vec<models::game::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<models::game::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_title(&self, title: &str) -> Result<Option<models::game::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().find(|g| g.title == title).cloned())
        }

        async fn console_exists(&self, console_id: i32) -> Result<bool, ServiceError> {
            Ok(self.consoles.lock().unwrap().contains(&console_id))
        }

        async fn create(&self, new: NewGame) -> Result<models::game::Model, ServiceError> {
            if !self.consoles.lock().unwrap().contains(&new.console_id) {
                return Err(ServiceError::Conflict(format!("console {} does not exist", new.console_id)));
            }
            let mut rows = self.rows.lock().unwrap();
            if rows.values().any(|g| g.title == new.title) {
                return Err(ServiceError::Conflict(format!("game '{}' already exists", new.title)));
            }
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let model = models::game::Model { id: *last_id, title: new.title, console_id: new.console_id };
            rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
