//! Row models bridging Diesel and the domain.

use diesel::prelude::*;

use super::schema::fruits;

/// Database row for a persisted fruit.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = fruits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FruitRow {
    pub id: i64,
    pub name: String,
}

/// Insertable row for a new fruit; the store assigns `id`.
#[derive(Debug, Insertable)]
#[diesel(table_name = fruits)]
pub struct NewFruitRow<'a> {
    pub name: &'a str,
}
