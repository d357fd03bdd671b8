//! Fruit service library modules.
//!
//! Hexagonal split: [`domain`] owns the fruit aggregate, the failure union
//! and the services; [`inbound`] maps HTTP onto driving ports; [`outbound`]
//! implements the driven ports over Diesel/PostgreSQL; [`middleware`]
//! carries the request tracing layer.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
