//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FruitsCommand, FruitsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Mutation use-cases backed by the transactional store.
    pub fruits: Arc<dyn FruitsCommand>,
    /// Read use-cases running outside any transaction.
    pub fruits_query: Arc<dyn FruitsQuery>,
}

impl HttpState {
    /// Bundle the driving port implementations for the handlers.
    pub fn new(fruits: Arc<dyn FruitsCommand>, fruits_query: Arc<dyn FruitsQuery>) -> Self {
        Self {
            fruits,
            fruits_query,
        }
    }
}
