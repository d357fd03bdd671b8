//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the SQL under `migrations/` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Fruit catalogue.
    ///
    /// `name` carries a UNIQUE constraint; concurrent inserts of the same
    /// name surface as a unique-violation database error.
    fruits (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Unique display name.
        name -> Varchar,
    }
}
