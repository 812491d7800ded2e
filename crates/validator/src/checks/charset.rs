//! Character-class checkers
//!
//! Identity documents are ASCII-only; these checkers deliberately reject
//! Unicode digits and letters that `char::is_numeric` would accept.

use crate::foundation::{Violation, ViolationKind};

crate::validator! {
    /// Validates that a string contains only ASCII digits.
    pub Digits for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { Violation::pattern_mismatch("digits only") }
    fn digits();
}

crate::validator! {
    /// Validates that a string contains only ASCII letters and digits.
    pub Alphanumeric for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_alphanumeric()) }
    error(input) { Violation::pattern_mismatch("letters and digits only") }
    fn alphanumeric();
}

crate::validator! {
    /// Rejects strings made up entirely of `'0'`.
    ///
    /// An empty string passes; emptiness is a length concern.
    pub NotAllZero for str;
    rule(input) { input.is_empty() || input.bytes().any(|b| b != b'0') }
    error(input) {
        Violation::new(ViolationKind::OutOfRange, "Value cannot be all zeros")
            .with_param("actual", input.to_string())
    }
    fn not_all_zero();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_digits() {
        assert!(digits().validate("0123456789").is_ok());
        assert!(digits().validate("12a4").is_err());
        assert!(digits().validate("١٢٣").is_err());
    }

    #[test]
    fn test_alphanumeric() {
        assert!(alphanumeric().validate("AB12cd").is_ok());
        assert!(alphanumeric().validate("AB-12").is_err());
        assert!(alphanumeric().validate("AB 12").is_err());
    }

    #[test]
    fn test_not_all_zero() {
        assert!(not_all_zero().validate("00000001").is_ok());
        let err = not_all_zero().validate("00000000").unwrap_err();
        assert_eq!(err.kind, ViolationKind::OutOfRange);
    }
}
