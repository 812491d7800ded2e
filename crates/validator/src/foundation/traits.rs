//! Core traits for the validation system
//!
//! Every primitive checker implements [`Validate`]. [`ValidateExt`] adds the
//! fluent `.and()` composition used to build per-field rule chains.

use crate::combinators::And;
use crate::foundation::Violation;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all primitive checkers implement.
///
/// A validator tests one raw value against one rule. It is generic over its
/// input so that string checkers take `str` and numeric checkers take the
/// number type they bound.
///
/// # Examples
///
/// ```
/// use patrimony_validator::foundation::{Validate, Violation, ViolationKind};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), Violation> {
///         if input.contains(' ') {
///             Err(Violation::new(ViolationKind::PatternMismatch, "Spaces are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("A-100").is_ok());
/// assert!(NoSpaces.validate("A 100").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), Violation>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// The right validator only runs when the left one passes, so the first
    /// failure in a chain is the one reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrimony_validator::checks::{digits, exact_length};
    /// use patrimony_validator::foundation::{Validate, ValidateExt, ViolationKind};
    ///
    /// let dni = exact_length(8).and(digits());
    /// assert!(dni.validate("12345678").is_ok());
    ///
    /// // Length is checked first; the charset rule never runs.
    /// let err = dni.validate("12a").unwrap_err();
    /// assert_eq!(err.kind, ViolationKind::FormatLength);
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ViolationKind;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), Violation> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), Violation> {
            Err(Violation::new(ViolationKind::PatternMismatch, "Always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_reference_is_validator() {
        let v = &AlwaysFails;
        assert!(Validate::validate(&v, "x").is_err());
    }
}
