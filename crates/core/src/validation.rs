//! Declarative per-field validation.
//!
//! Entities describe their constraints as a static table of [`FieldRules`];
//! [`validate_fields`] evaluates every rule of every field against a JSON
//! snapshot and groups the violations by field name. Evaluation never stops at
//! the first failure.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// A single predicate + message pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Rejects `null` and the empty string. Any other value passes.
    NotEmpty,
    /// Value must be a string.
    IsString,
    /// Value must be a string of at most `n` characters.
    MaxLength(usize),
    /// Value must be a boolean.
    IsBoolean,
}

impl Rule {
    /// Returns true if `value` satisfies the rule.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Rule::NotEmpty => !(value.is_null() || value.as_str() == Some("")),
            Rule::IsString => value.is_string(),
            // Length is counted in characters, not bytes.
            Rule::MaxLength(max) => value.as_str().is_some_and(|s| s.chars().count() <= *max),
            Rule::IsBoolean => value.is_boolean(),
        }
    }

    /// Human-readable violation message for `field`.
    pub fn message(&self, field: &str) -> String {
        match self {
            Rule::NotEmpty => format!("{field} should not be empty"),
            Rule::IsString => format!("{field} must be a string"),
            Rule::MaxLength(max) => {
                format!("{field} must be shorter than or equal to {max} characters")
            }
            Rule::IsBoolean => format!("{field} must be a boolean value"),
        }
    }
}

/// Ordered rules declared for one field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: &'static str,
    /// Optional fields skip all of their rules when the value is null or absent.
    pub optional: bool,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn required(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            field,
            optional: false,
            rules,
        }
    }

    pub const fn optional(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            field,
            optional: true,
            rules,
        }
    }
}

/// Violations grouped by field name, each list in rule declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// `Ok(())` when there are no violations, otherwise
    /// [`DomainError::EntityValidation`].
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::entity_validation(self))
        }
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, messages)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: [{}]", messages.join(", "))?;
        }
        Ok(())
    }
}

/// Evaluate `rules` against `values`. Absent fields are treated as `null`.
pub fn validate_fields(rules: &[FieldRules], values: &Map<String, Value>) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field_rules in rules {
        let value = values.get(field_rules.field).unwrap_or(&Value::Null);
        if field_rules.optional && value.is_null() {
            continue;
        }
        for rule in field_rules.rules {
            if !rule.check(value) {
                errors.push(field_rules.field, rule.message(field_rules.field));
            }
        }
    }

    errors
}
