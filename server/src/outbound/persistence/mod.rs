//! Diesel-backed persistence adapters.

mod diesel_fruit_repository;
mod models;
mod pool;
pub mod schema;

pub use diesel_fruit_repository::DieselFruitRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
