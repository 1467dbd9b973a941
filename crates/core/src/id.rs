//! Validated UUID identifier used as entity identity.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Length of the canonical hyphenated form (8-4-4-4-12).
const HYPHENATED_LEN: usize = 36;

/// Generator + syntax checker for identifier strings.
///
/// [`Uuid`] never parses or generates UUIDs itself; it delegates to an
/// implementation of this trait.
pub trait IdentifierSyntax {
    /// Produce a new identifier string that satisfies [`Self::is_valid`].
    fn generate() -> String;

    /// Returns true if `value` is a well-formed identifier.
    fn is_valid(value: &str) -> bool;
}

/// Random (v4) UUIDs in canonical hyphenated form, backed by the `uuid` crate.
#[derive(Debug, Copy, Clone, Default)]
pub struct UuidV4Syntax;

impl IdentifierSyntax for UuidV4Syntax {
    fn generate() -> String {
        uuid::Uuid::new_v4().hyphenated().to_string()
    }

    fn is_valid(value: &str) -> bool {
        // `try_parse` also accepts the simple, braced and URN forms.
        value.len() == HYPHENATED_LEN && uuid::Uuid::try_parse(value).is_ok()
    }
}

/// Identifier value object wrapping a UUID-formatted string.
///
/// The stored string is always syntactically valid and is kept exactly as
/// supplied (no case normalization).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid {
    id: String,
}

impl Uuid {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self::generate_with::<UuidV4Syntax>()
    }

    /// Validate and wrap `value`.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        Self::parse_with::<UuidV4Syntax>(value)
    }

    /// Create a new identifier using a specific syntax provider.
    ///
    /// Generated values are trusted without re-validation.
    pub fn generate_with<S: IdentifierSyntax>() -> Self {
        Self { id: S::generate() }
    }

    /// Validate `value` with a specific syntax provider.
    pub fn parse_with<S: IdentifierSyntax>(value: impl Into<String>) -> DomainResult<Self> {
        let id = value.into();
        if !S::is_valid(&id) {
            tracing::warn!(value = %id, "rejected malformed identifier");
            return Err(DomainError::invalid_identifier(id));
        }
        Ok(Self { id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for Uuid {}

impl core::fmt::Display for Uuid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.id)
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl FromStr for Uuid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.id
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Self {
        Self {
            id: value.hyphenated().to_string(),
        }
    }
}
