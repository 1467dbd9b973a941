//! Categories domain module.
//!
//! This crate contains the business rules for catalog categories, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;

pub use category::{CATEGORY_RULES, Category, CategoryProps, CreateCategory, NAME_MAX_LENGTH};
