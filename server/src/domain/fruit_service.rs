//! Fruit domain service implementing the driving ports.
//!
//! The service composes repository calls into a single linear chain per
//! request and translates port errors into the domain failure union. The
//! `Aborted` composite raised by the transactional pipeline is preserved as
//! [`Error::Wrapped`] so the response boundary can unwrap it to the root
//! cause exactly once.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{FruitRepository, FruitRepositoryError, FruitsCommand, FruitsQuery};
use crate::domain::{Error, Fruit, FruitDraft, FruitId, FruitName};

/// Fruit service wiring the driving ports to the repository.
#[derive(Clone)]
pub struct FruitService<R> {
    repository: Arc<R>,
}

impl<R> FruitService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: FruitRepositoryError) -> Error {
    match error {
        FruitRepositoryError::Connection { message } => {
            Error::unavailable(format!("fruit store unavailable: {message}"))
        }
        FruitRepositoryError::Query { message } => {
            Error::internal(format!("fruit store error: {message}"))
        }
        FruitRepositoryError::UniqueViolation { message } => Error::conflict(message),
        FruitRepositoryError::Aborted { cause } => Error::wrapped(map_repository_error(*cause)),
    }
}

#[async_trait]
impl<R> FruitsQuery for FruitService<R>
where
    R: FruitRepository,
{
    async fn list(&self) -> Result<Vec<Fruit>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find(&self, id: FruitId) -> Result<Option<Fruit>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> FruitsCommand for FruitService<R>
where
    R: FruitRepository,
{
    async fn create(&self, draft: FruitDraft) -> Result<Fruit, Error> {
        self.repository
            .create(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn rename(&self, id: FruitId, name: FruitName) -> Result<Option<Fruit>, Error> {
        self.repository
            .update_name(id, &name)
            .await
            .map_err(map_repository_error)
    }

    async fn delete(&self, id: FruitId) -> Result<bool, Error> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}
