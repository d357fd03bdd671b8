//! Domain primitives and services.
//!
//! Purpose: strongly typed fruit aggregate, the transport-agnostic failure
//! union, and the services implementing the driving ports. Inbound adapters
//! map these types to the wire; outbound adapters implement the driven
//! ports declared under [`ports`].

pub mod error;
pub mod fruit;
mod fruit_service;
pub mod ports;

pub use self::error::Error;
pub use self::fruit::{Fruit, FruitDraft, FruitId, FruitName, FruitValidationError};
pub use self::fruit_service::FruitService;
