//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::any::Any;

/// Trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Structural equality
/// comes from a derived `PartialEq`: every field is compared, and nested value
/// objects are compared through their own equality rather than by reference.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Usage Pattern
///
/// ```
/// use catalog_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Slug(String);
///
/// impl ValueObject for Slug {}
///
/// let a = Slug("movies".to_string());
/// let b = Slug("movies".to_string());
/// assert!(a.equals(Some(&b)));
/// assert!(!a.equals(Some(&"movies")));
/// assert!(!a.equals::<Slug>(None));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + 'static {
    /// Returns true iff `other` is present, is the same concrete type, and all
    /// of its fields compare equal.
    ///
    /// Never panics; a missing value or a different type is simply unequal.
    fn equals<O: Any>(&self, other: Option<&O>) -> bool {
        other
            .and_then(|o| (o as &dyn Any).downcast_ref::<Self>())
            .is_some_and(|o| self == o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct StringValueObject {
        value: String,
    }

    impl ValueObject for StringValueObject {}

    #[derive(Debug, Clone, PartialEq)]
    struct ComplexValueObject {
        prop1: String,
        prop2: i64,
    }

    impl ValueObject for ComplexValueObject {}

    #[derive(Debug, Clone, PartialEq)]
    struct Nested {
        inner: StringValueObject,
        weight: i64,
    }

    impl ValueObject for Nested {}

    fn string_vo(value: &str) -> StringValueObject {
        StringValueObject {
            value: value.to_string(),
        }
    }

    fn complex_vo(prop1: &str, prop2: i64) -> ComplexValueObject {
        ComplexValueObject {
            prop1: prop1.to_string(),
            prop2,
        }
    }

    #[test]
    fn string_value_objects_with_same_value_are_equal() {
        assert!(string_vo("test").equals(Some(&string_vo("test"))));
    }

    #[test]
    fn string_value_objects_with_different_values_are_not_equal() {
        assert!(!string_vo("test").equals(Some(&string_vo("test2"))));
    }

    #[test]
    fn complex_value_objects_compare_every_field() {
        assert!(complex_vo("test", 1).equals(Some(&complex_vo("test", 1))));
        assert!(!complex_vo("test", 1).equals(Some(&complex_vo("test2", 2))));
        assert!(!complex_vo("test", 1).equals(Some(&complex_vo("test", 2))));
    }

    #[test]
    fn nested_value_objects_compare_structurally() {
        let a = Nested {
            inner: string_vo("x"),
            weight: 3,
        };
        let b = Nested {
            inner: string_vo("x"),
            weight: 3,
        };
        let c = Nested {
            inner: string_vo("y"),
            weight: 3,
        };
        assert!(a.equals(Some(&b)));
        assert!(!a.equals(Some(&c)));
    }

    #[test]
    fn missing_or_different_type_is_not_equal() {
        let a = string_vo("test");
        assert!(!a.equals::<StringValueObject>(None));
        assert!(!a.equals(Some(&complex_vo("test", 1))));
        assert!(!a.equals(Some(&"test".to_string())));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: equals agrees with field-wise comparison.
            #[test]
            fn equals_matches_field_comparison(
                a in "[a-z]{0,8}", x in any::<i64>(),
                b in "[a-z]{0,8}", y in any::<i64>()
            ) {
                let left = complex_vo(&a, x);
                let right = complex_vo(&b, y);
                prop_assert_eq!(left.equals(Some(&right)), a == b && x == y);
                prop_assert!(left.equals(Some(&left.clone())));
            }
        }
    }
}
