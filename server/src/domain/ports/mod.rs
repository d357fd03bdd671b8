//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod fruit_repository;
mod fruits_command;
mod fruits_query;

#[cfg(test)]
pub use fruit_repository::MockFruitRepository;
pub use fruit_repository::{FixtureFruitRepository, FruitRepository, FruitRepositoryError};
#[cfg(test)]
pub use fruits_command::MockFruitsCommand;
pub use fruits_command::{FixtureFruitsCommand, FruitsCommand};
#[cfg(test)]
pub use fruits_query::MockFruitsQuery;
pub use fruits_query::{FixtureFruitsQuery, FruitsQuery};
