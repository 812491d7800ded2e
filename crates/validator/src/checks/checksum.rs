//! Check-digit validation for business tax identifiers (RUC).
//!
//! The eleventh digit is derived from the first ten with a weighted mod-11
//! sum. A remainder of 0 maps to check digit 1 and a remainder of 1 maps to
//! 0; otherwise the check digit is `11 - remainder`.

use crate::foundation::{Violation, ViolationKind};

/// Weights applied to the first ten digits.
pub const TAX_ID_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Computes the expected check digit for the first ten digits of a tax ID.
///
/// Returns `None` if `digits` is not exactly ten ASCII digits.
///
/// # Examples
///
/// ```
/// use patrimony_validator::checks::tax_id_check_digit;
///
/// assert_eq!(tax_id_check_digit("2010007097"), Some(0));
/// assert_eq!(tax_id_check_digit("201000709"), None);
/// ```
pub fn tax_id_check_digit(digits: &str) -> Option<u32> {
    if digits.len() != TAX_ID_WEIGHTS.len() {
        return None;
    }
    let mut sum = 0;
    for (c, w) in digits.chars().zip(TAX_ID_WEIGHTS) {
        sum += c.to_digit(10)? * w;
    }
    Some((11 - sum % 11) % 10)
}

crate::validator! {
    /// Validates the check digit of an 11-digit tax ID.
    ///
    /// Run it after length and charset checks; malformed input simply fails.
    pub TaxIdChecksum for str;
    rule(input) {
        input.len() == 11
            && input.is_char_boundary(10)
            && matches!(
                (tax_id_check_digit(&input[..10]), input[10..].parse::<u32>()),
                (Some(expected), Ok(actual)) if expected == actual
            )
    }
    error(input) {
        let expected = input
            .get(..10)
            .and_then(tax_id_check_digit)
            .map_or_else(|| "?".to_string(), |d| d.to_string());
        Violation::new(ViolationKind::ChecksumFailure, "Check digit is invalid")
            .with_param("expected", expected)
    }
    fn tax_id_checksum();
}
