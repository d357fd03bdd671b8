//! Test doubles shared by the endpoint tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use fruit_service::domain::ports::{FruitRepository, FruitRepositoryError};
use fruit_service::domain::{Fruit, FruitDraft, FruitId, FruitName};

/// In-memory stand-in for the PostgreSQL store.
///
/// Enforces the unique-name constraint and reports the violation the way
/// the transactional pipeline does: as an `Aborted` composite wrapping the
/// root cause. The endpoint tests rely on that to prove the boundary
/// unwraps composites before classification.
#[derive(Debug, Default)]
pub struct InMemoryFruitRepository {
    rows: Mutex<Vec<Fruit>>,
    next_id: AtomicI64,
}

impl InMemoryFruitRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<Fruit>> {
        self.rows.lock().expect("repository mutex poisoned")
    }
}

#[async_trait]
impl FruitRepository for InMemoryFruitRepository {
    async fn list_all(&self) -> Result<Vec<Fruit>, FruitRepositoryError> {
        let mut fruits = self.rows().clone();
        fruits.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(fruits)
    }

    async fn find_by_id(&self, id: FruitId) -> Result<Option<Fruit>, FruitRepositoryError> {
        Ok(self.rows().iter().find(|fruit| fruit.id == id).cloned())
    }

    async fn create(&self, draft: &FruitDraft) -> Result<Fruit, FruitRepositoryError> {
        let mut rows = self.rows();
        if rows.iter().any(|fruit| fruit.name == draft.name) {
            return Err(FruitRepositoryError::aborted(
                FruitRepositoryError::unique_violation(format!(
                    "duplicate key value violates unique constraint \"fruits_name_key\": {}",
                    draft.name
                )),
            ));
        }

        let fruit = Fruit {
            id: FruitId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: draft.name.clone(),
        };
        rows.push(fruit.clone());
        Ok(fruit)
    }

    async fn update_name(
        &self,
        id: FruitId,
        name: &FruitName,
    ) -> Result<Option<Fruit>, FruitRepositoryError> {
        let mut rows = self.rows();
        match rows.iter_mut().find(|fruit| fruit.id == id) {
            None => Ok(None),
            Some(fruit) => {
                fruit.name = name.clone();
                Ok(Some(fruit.clone()))
            }
        }
    }

    async fn delete_by_id(&self, id: FruitId) -> Result<bool, FruitRepositoryError> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|fruit| fruit.id != id);
        Ok(rows.len() < before)
    }
}
