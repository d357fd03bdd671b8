//! HTTP inbound adapter exposing the REST surface.

pub mod error;
pub mod fruits;
pub mod state;
pub mod validation;

pub use error::ApiResult;
