//! Shared validation helpers for inbound HTTP payloads.
//!
//! Validation failures are local and fast: they are raised before any store
//! call, so no transaction is ever opened for a rejected request.

use crate::domain::{Error, FruitName};

pub(crate) fn forbidden_field_error(field: &str) -> Error {
    Error::validation(format!("{field} was invalidly set on request."))
}

pub(crate) fn missing_field_error(field: &str) -> Error {
    Error::validation(format!("Fruit {field} was not set on request."))
}

/// Require a present, non-empty name from a request payload.
pub(crate) fn require_name(raw: Option<String>) -> Result<FruitName, Error> {
    let raw = raw.ok_or_else(|| missing_field_error("name"))?;
    FruitName::new(raw).map_err(|_| missing_field_error("name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn absent_name_is_a_validation_error() {
        let err = require_name(None).expect_err("missing name");
        assert_eq!(err, Error::validation("Fruit name was not set on request."));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_name_is_a_validation_error(#[case] raw: &str) {
        assert!(require_name(Some(raw.to_owned())).is_err());
    }

    #[rstest]
    fn present_name_passes_through() {
        let name = require_name(Some("Apple".to_owned())).expect("valid name");
        assert_eq!(name.as_str(), "Apple");
    }
}
