//! PostgreSQL-backed `FruitRepository` implementation using Diesel ORM.
//!
//! This adapter is the transaction boundary for the fruit store: every
//! mutating operation runs inside exactly one `conn.transaction` scope,
//! which commits when the unit of work resolves and rolls back when it
//! fails, re-raising the failure unchanged. Reads run outside any
//! transaction; row isolation is the storage engine's concern.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::debug;

use crate::domain::ports::{FruitRepository, FruitRepositoryError};
use crate::domain::{Fruit, FruitDraft, FruitId, FruitName};

use super::models::{FruitRow, NewFruitRow};
use super::pool::{DbPool, PoolError};
use super::schema::fruits;

/// Diesel-backed implementation of the [`FruitRepository`] port.
#[derive(Clone)]
pub struct DieselFruitRepository {
    pool: DbPool,
}

impl DieselFruitRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FruitRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            FruitRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
///
/// `RollbackErrorOnCommit` is Diesel's composite for a unit of work whose
/// commit failed; it is folded into [`FruitRepositoryError::Aborted`] so the
/// root cause survives for classification at the boundary.
fn map_diesel_error(error: diesel::result::Error) -> FruitRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            FruitRepositoryError::unique_violation(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            FruitRepositoryError::connection(info.message().to_owned())
        }
        DieselError::RollbackErrorOnCommit { commit_error, .. } => {
            FruitRepositoryError::aborted(map_diesel_error(*commit_error))
        }
        other => FruitRepositoryError::query(other.to_string()),
    }
}

fn row_to_fruit(row: FruitRow) -> Result<Fruit, FruitRepositoryError> {
    let name = FruitName::new(row.name)
        .map_err(|err| FruitRepositoryError::query(format!("corrupt fruit row {}: {err}", row.id)))?;
    Ok(Fruit {
        id: FruitId::new(row.id),
        name,
    })
}

#[async_trait]
impl FruitRepository for DieselFruitRepository {
    async fn list_all(&self) -> Result<Vec<Fruit>, FruitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FruitRow> = fruits::table
            .select(FruitRow::as_select())
            .order_by(fruits::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_fruit).collect()
    }

    async fn find_by_id(&self, id: FruitId) -> Result<Option<Fruit>, FruitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FruitRow> = fruits::table
            .find(id.as_i64())
            .select(FruitRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_fruit).transpose()
    }

    async fn create(&self, draft: &FruitDraft) -> Result<Fruit, FruitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewFruitRow {
            name: draft.name.as_str(),
        };

        let row: FruitRow = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(fruits::table)
                        .values(&new_row)
                        .returning(FruitRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        row_to_fruit(row)
    }

    async fn update_name(
        &self,
        id: FruitId,
        name: &FruitName,
    ) -> Result<Option<Fruit>, FruitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Load-then-mutate forms one unit of work; an absent row
        // short-circuits the mutation step and the scope closes as a no-op.
        let row: Option<FruitRow> = conn
            .transaction(|conn| {
                async move {
                    let existing: Option<FruitRow> = fruits::table
                        .find(id.as_i64())
                        .select(FruitRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;

                    match existing {
                        None => Ok(None),
                        Some(_) => diesel::update(fruits::table.find(id.as_i64()))
                            .set(fruits::name.eq(name.as_str()))
                            .returning(FruitRow::as_returning())
                            .get_result(conn)
                            .await
                            .map(Some),
                    }
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        row.map(row_to_fruit).transpose()
    }

    async fn delete_by_id(&self, id: FruitId) -> Result<bool, FruitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(fruits::table.find(id.as_i64()))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
