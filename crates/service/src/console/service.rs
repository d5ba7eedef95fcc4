use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::CreateConsoleInput;
use super::repository::ConsoleRepository;
use crate::errors::ServiceError;

/// Console business service independent of web framework
pub struct ConsoleService<R: ConsoleRepository> {
    repo: Arc<R>,
}

impl<R: ConsoleRepository> ConsoleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All consoles in store order; empty when none exist.
    pub async fn list(&self) -> Result<Vec<models::console::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<models::console::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("console"))
    }

    /// Validate and persist a new console.
    ///
    /// # Examples
    /// ```
    /// use service::console::{service::ConsoleService, repository::mock::MockConsoleRepository, domain::CreateConsoleInput};
    /// use std::sync::Arc;
    /// let svc = ConsoleService::new(Arc::new(MockConsoleRepository::default()));
    /// let created = tokio_test::block_on(svc.create(CreateConsoleInput { name: Some("Atari 2600".into()) })).unwrap();
    /// assert_eq!(created.name, "Atari 2600");
    /// assert!(tokio_test::block_on(svc.create(CreateConsoleInput { name: Some("Atari 2600".into()) })).is_err());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateConsoleInput) -> Result<models::console::Model, ServiceError> {
        let new = input.validate()?;
        if let Some(existing) = self.repo.find_by_name(&new.name).await? {
            debug!(id = existing.id, "console name taken");
            return Err(ServiceError::Conflict(format!("console '{}' already exists", new.name)));
        }
        let created = self.repo.create(new).await?;
        info!(id = created.id, name = %created.name, "console_created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::repository::{mock::MockConsoleRepository, SeaOrmConsoleRepository};
    use models::db::test_support::memory_db;

    fn input(name: &str) -> CreateConsoleInput { CreateConsoleInput { name: Some(name.into()) } }

    #[tokio::test]
    async fn list_is_empty_on_fresh_store() -> Result<(), anyhow::Error> {
        let svc = ConsoleService::new(Arc::new(MockConsoleRepository::default()));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_name_creates_nothing() -> Result<(), anyhow::Error> {
        let repo = Arc::new(MockConsoleRepository::default());
        let svc = ConsoleService::new(repo.clone());
        let res = svc.create(CreateConsoleInput::default()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let svc = ConsoleService::new(Arc::new(MockConsoleRepository::default()));
        assert!(matches!(svc.get(0).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn console_crud_service() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let repo = Arc::new(SeaOrmConsoleRepository { db });
        let svc = ConsoleService::new(repo.clone());

        let a = svc.create(input("Neo Geo")).await?;
        let b = svc.create(input("Jaguar")).await?;
        assert_ne!(a.id, b.id);

        let found = svc.get(a.id).await?;
        assert_eq!(found, a);

        let all = svc.list().await?;
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|c| c.name == "Jaguar"));

        // cleanup
        assert!(repo.delete(a.id).await?);
        assert!(matches!(svc.get(a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict_and_single_row() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;
        let svc = ConsoleService::new(Arc::new(SeaOrmConsoleRepository { db }));

        svc.create(input("Wii")).await?;
        let dup = svc.create(input("Wii")).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));
        assert_eq!(svc.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn store_constraint_backs_up_the_precheck() -> Result<(), anyhow::Error> {
        use crate::console::domain::NewConsole;
        let db = memory_db().await?;
        let repo = SeaOrmConsoleRepository { db };

        repo.create(NewConsole { name: "Vectrex".into() }).await?;
        // bypasses the service pre-check, as a concurrent request would
        let raced = repo.create(NewConsole { name: "Vectrex".into() }).await;
        assert!(matches!(raced, Err(ServiceError::Conflict(_))), "got {raced:?}");
        Ok(())
    }

    #[tokio::test]
    async fn store_failures_surface_as_db_errors() -> Result<(), anyhow::Error> {
        // no migrations: every query hits a missing table
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let svc = ConsoleService::new(Arc::new(SeaOrmConsoleRepository { db }));
        assert!(matches!(svc.list().await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.get(1).await, Err(ServiceError::Db(_))));
        Ok(())
    }
}
