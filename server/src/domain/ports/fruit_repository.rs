//! Port for fruit persistence.
//!
//! The [`FruitRepository`] trait is the entity store contract: it owns all
//! persisted state, and every operation re-reads or re-writes through it.
//! Adapters are expected to run each mutating operation inside exactly one
//! transaction, committing on success and rolling back on failure while
//! re-raising the original failure unchanged.

use async_trait::async_trait;

use crate::domain::{Fruit, FruitDraft, FruitId, FruitName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by fruit repository adapters.
    pub enum FruitRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "fruit repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "fruit repository query failed: {message}",
        /// A uniqueness constraint rejected the write.
        UniqueViolation { message: String } =>
            "fruit uniqueness constraint violated: {message}",
        /// Composite raised when the transactional pipeline aggregates a
        /// failure from one of its stages.
        Aborted { cause: Box<FruitRepositoryError> } =>
            "fruit transaction aborted: {cause}",
    }
}

/// Port for fruit storage and retrieval.
///
/// # Absence semantics
///
/// Lookups signal a missing row with `None` (or `false` for deletes), never
/// with an error. Errors are reserved for store-level faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FruitRepository: Send + Sync {
    /// Fetch every fruit, deterministically ordered by name ascending.
    async fn list_all(&self) -> Result<Vec<Fruit>, FruitRepositoryError>;

    /// Fetch a single fruit, or `None` when no row matches.
    async fn find_by_id(&self, id: FruitId) -> Result<Option<Fruit>, FruitRepositoryError>;

    /// Persist a draft, assigning its identity.
    ///
    /// Fails with [`FruitRepositoryError::UniqueViolation`] when the name is
    /// already taken.
    async fn create(&self, draft: &FruitDraft) -> Result<Fruit, FruitRepositoryError>;

    /// Load the fruit and rename it in place within one transaction.
    ///
    /// Returns `None` without mutating anything when no row matches; the
    /// lookup short-circuits the mutation step.
    async fn update_name(
        &self,
        id: FruitId,
        name: &FruitName,
    ) -> Result<Option<Fruit>, FruitRepositoryError>;

    /// Delete a fruit, reporting whether a row was actually removed.
    async fn delete_by_id(&self, id: FruitId) -> Result<bool, FruitRepositoryError>;
}

/// Fixture implementation for wiring tests without a real database.
///
/// Behaves like an empty, write-discarding store: lookups return `None`,
/// creates echo the draft back with identity `1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFruitRepository;

#[async_trait]
impl FruitRepository for FixtureFruitRepository {
    async fn list_all(&self) -> Result<Vec<Fruit>, FruitRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: FruitId) -> Result<Option<Fruit>, FruitRepositoryError> {
        Ok(None)
    }

    async fn create(&self, draft: &FruitDraft) -> Result<Fruit, FruitRepositoryError> {
        Ok(Fruit {
            id: FruitId::new(1),
            name: draft.name.clone(),
        })
    }

    async fn update_name(
        &self,
        _id: FruitId,
        _name: &FruitName,
    ) -> Result<Option<Fruit>, FruitRepositoryError> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: FruitId) -> Result<bool, FruitRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_lookups_report_absence() {
        let repo = FixtureFruitRepository;

        assert!(
            repo.find_by_id(FruitId::new(7))
                .await
                .expect("fixture lookup")
                .is_none()
        );
        assert!(!repo.delete_by_id(FruitId::new(7)).await.expect("fixture delete"));
    }

    #[tokio::test]
    async fn fixture_create_assigns_identity() {
        let repo = FixtureFruitRepository;
        let draft = FruitDraft::new("Apple").expect("valid draft");

        let created = repo.create(&draft).await.expect("fixture create");
        assert_eq!(created.id, FruitId::new(1));
        assert_eq!(created.name, draft.name);
    }

    #[test]
    fn aborted_composite_preserves_its_cause() {
        let err = FruitRepositoryError::aborted(FruitRepositoryError::unique_violation(
            "duplicate key value violates unique constraint \"fruits_name_key\"",
        ));
        assert!(err.to_string().starts_with("fruit transaction aborted:"));
    }
}
