//! Driving port for read-only fruit lookups.
//!
//! Reads have no durability requirement and run outside any transaction.

use async_trait::async_trait;

use crate::domain::{Error, Fruit, FruitId};

/// Use-case surface consumed by the HTTP adapter for reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FruitsQuery: Send + Sync {
    /// List every fruit ordered by name ascending.
    async fn list(&self) -> Result<Vec<Fruit>, Error>;

    /// Look up one fruit; `None` when absent.
    async fn find(&self, id: FruitId) -> Result<Option<Fruit>, Error>;
}

/// Fixture implementation behaving like an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFruitsQuery;

#[async_trait]
impl FruitsQuery for FixtureFruitsQuery {
    async fn list(&self) -> Result<Vec<Fruit>, Error> {
        Ok(Vec::new())
    }

    async fn find(&self, _id: FruitId) -> Result<Option<Fruit>, Error> {
        Ok(None)
    }
}
