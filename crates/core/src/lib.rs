//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! value objects, entities, the validated [`Uuid`] identifier and the declarative
//! field validation used by catalog entities.

pub mod entity;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdentifierSyntax, Uuid, UuidV4Syntax};
pub use validation::{FieldErrors, FieldRules, Rule, validate_fields};
pub use value_object::ValueObject;
