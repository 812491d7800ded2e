//! AND combinator - logical conjunction of checkers
//!
//! Rule chains are ordered: format rules come before semantic rules, and the
//! first failing rule is the only one reported. That gives "length before
//! charset before checksum" priority without any extra bookkeeping.

use crate::foundation::{Validate, Violation};

/// Combines two checkers with logical AND.
///
/// The right checker only runs when the left one passes.
///
/// # Examples
///
/// ```
/// use patrimony_validator::checks::{alphanumeric, length_range};
/// use patrimony_validator::combinators::And;
/// use patrimony_validator::foundation::Validate;
///
/// let passport = And::new(length_range(6, 12), alphanumeric());
/// assert!(passport.validate("AB12345").is_ok());
/// assert!(passport.validate("AB-1234").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), Violation> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, ViolationKind};

    struct MinLen(usize);

    impl Validate for MinLen {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), Violation> {
            if input.len() >= self.0 {
                Ok(())
            } else {
                Err(Violation::format_length(format!("at least {}", self.0), input.len()))
            }
        }
    }

    struct Upper;

    impl Validate for Upper {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), Violation> {
            if input.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()) {
                Ok(())
            } else {
                Err(Violation::pattern_mismatch("uppercase letters"))
            }
        }
    }

    #[test]
    fn test_and_both_pass() {
        assert!(And::new(MinLen(3), Upper).validate("ABC").is_ok());
    }

    #[test]
    fn test_and_left_failure_wins() {
        let err = And::new(MinLen(3), Upper).validate("ab").unwrap_err();
        assert_eq!(err.kind, ViolationKind::FormatLength);
    }

    #[test]
    fn test_and_right_failure() {
        let err = MinLen(3).and(Upper).validate("abc").unwrap_err();
        assert_eq!(err.kind, ViolationKind::PatternMismatch);
    }
}
