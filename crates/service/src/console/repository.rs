use async_trait::async_trait;
use models::errors::ModelError;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::domain::NewConsole;
use crate::errors::ServiceError;

/// Persistence operations for consoles.
///
/// `create` must let the store's unique constraint decide: a duplicate name
/// that slips past a pre-check still comes back as [`ServiceError::Conflict`].
#[async_trait]
pub trait ConsoleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::console::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::console::Model>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<models::console::Model>, ServiceError>;
    async fn create(&self, new: NewConsole) -> Result<models::console::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmConsoleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ConsoleRepository for SeaOrmConsoleRepository {
    async fn list(&self) -> Result<Vec<models::console::Model>, ServiceError> {
        let rows = models::console::Entity::find().all(&self.db).await.map_err(ModelError::from)?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<models::console::Model>, ServiceError> {
        let found = models::console::Entity::find_by_id(id).one(&self.db).await.map_err(ModelError::from)?;
        Ok(found)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<models::console::Model>, ServiceError> {
        Ok(models::console::find_by_name(&self.db, name).await?)
    }

    async fn create(&self, new: NewConsole) -> Result<models::console::Model, ServiceError> {
        models::console::create(&self.db, &new.name).await.map_err(|e| match e {
            ModelError::Conflict(_) => ServiceError::Conflict(format!("console '{}' already exists", new.name)),
            other => other.into(),
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::console::hard_delete(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and benches
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockConsoleRepository {
        rows: Mutex<BTreeMap<i32, models::console::Model>>,
        last_id: Mutex<i32>,
    }

    #[async_trait]
    impl ConsoleRepository for MockConsoleRepository {
        async fn list(&self) -> Result<Vec<models::console::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<models::console::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<models::console::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().find(|c| c.name == name).cloned())
        }

        async fn create(&self, new: NewConsole) -> Result<models::console::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.values().any(|c| c.name == new.name) {
                return Err(ServiceError::Conflict(format!("console '{}' already exists", new.name)));
            }
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let model = models::console::Model { id: *last_id, name: new.name };
            rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
