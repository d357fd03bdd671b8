//! Driving port for fruit mutations.
//!
//! Each method is one logical unit of work; implementations route it through
//! the transactional store.

use async_trait::async_trait;

use crate::domain::{Error, Fruit, FruitDraft, FruitId, FruitName};

/// Use-case surface consumed by the HTTP adapter for mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FruitsCommand: Send + Sync {
    /// Persist a draft, assigning its identity.
    async fn create(&self, draft: FruitDraft) -> Result<Fruit, Error>;

    /// Rename an existing fruit; `None` when no fruit matches the id.
    async fn rename(&self, id: FruitId, name: FruitName) -> Result<Option<Fruit>, Error>;

    /// Delete a fruit, reporting whether a row was removed.
    async fn delete(&self, id: FruitId) -> Result<bool, Error>;
}

/// Fixture implementation that discards writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFruitsCommand;

#[async_trait]
impl FruitsCommand for FixtureFruitsCommand {
    async fn create(&self, draft: FruitDraft) -> Result<Fruit, Error> {
        Ok(Fruit {
            id: FruitId::new(1),
            name: draft.name,
        })
    }

    async fn rename(&self, _id: FruitId, _name: FruitName) -> Result<Option<Fruit>, Error> {
        Ok(None)
    }

    async fn delete(&self, _id: FruitId) -> Result<bool, Error> {
        Ok(false)
    }
}
