//! Fruit data model.
//!
//! Purpose: strongly typed fruit aggregate shared by the HTTP and
//! persistence layers. Identity is assigned by the store on creation and is
//! immutable thereafter; the name is the only mutable attribute.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`FruitName::new`] and [`FruitDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FruitValidationError {
    EmptyName,
}

impl fmt::Display for FruitValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "fruit name must not be empty"),
        }
    }
}

impl std::error::Error for FruitValidationError {}

/// Store-assigned fruit identifier backed by a `BIGSERIAL` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitId(i64);

impl FruitId {
    /// Wrap a raw database identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FruitId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Validated fruit name.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FruitName(String);

impl FruitName {
    /// Validate and construct a [`FruitName`].
    pub fn new(name: impl Into<String>) -> Result<Self, FruitValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FruitValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Borrow the raw name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for FruitName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FruitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FruitName> for String {
    fn from(value: FruitName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FruitName {
    type Error = FruitValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Persisted fruit aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    /// Store-assigned identity.
    pub id: FruitId,
    /// Unique display name.
    pub name: FruitName,
}

/// A fruit awaiting creation; carries everything but the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitDraft {
    /// Unique display name for the new fruit.
    pub name: FruitName,
}

impl FruitDraft {
    /// Validate and construct a draft from a raw name.
    pub fn new(name: impl Into<String>) -> Result<Self, FruitValidationError> {
        Ok(Self {
            name: FruitName::new(name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_names(#[case] raw: &str) {
        assert_eq!(
            FruitName::new(raw).expect_err("blank name"),
            FruitValidationError::EmptyName
        );
    }

    #[rstest]
    fn accepts_and_preserves_names() {
        let name = FruitName::new("Apple").expect("valid name");
        assert_eq!(name.as_str(), "Apple");
        assert_eq!(String::from(name), "Apple");
    }

    #[rstest]
    fn draft_carries_no_identity() {
        let draft = FruitDraft::new("Pear").expect("valid draft");
        assert_eq!(draft.name.as_str(), "Pear");
    }

    #[rstest]
    fn fruit_serializes_to_wire_shape() {
        let fruit = Fruit {
            id: FruitId::new(1),
            name: FruitName::new("Apple").expect("valid name"),
        };
        let json = serde_json::to_value(&fruit).expect("serialize fruit");
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Apple" }));
    }
}
