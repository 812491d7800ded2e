//! Length checkers
//!
//! Length is measured in Unicode scalar values, so a passport number typed
//! with a stray accented letter is still counted as one character per glyph.

use crate::foundation::{Validate, Violation};

crate::validator! {
    /// Validates that a string has exactly `length` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) {
        Violation::format_length(self.length.to_string(), input.chars().count())
    }
    fn exact_length(length: usize);
}

/// Validates that a string length is within an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthRange {
    /// Creates a new length range checker.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), Violation> {
        let len = input.chars().count();
        if (self.min..=self.max).contains(&len) {
            Ok(())
        } else {
            Err(Violation::format_length(
                format!("between {} and {}", self.min, self.max),
                len,
            )
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string()))
        }
    }
}

/// Creates a [`LengthRange`] checker.
#[must_use]
pub fn length_range(min: usize, max: usize) -> LengthRange {
    LengthRange::new(min, max)
}

crate::validator! {
    /// Validates that a string is not empty after trimming whitespace.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { Violation::missing_required() }
    fn not_blank();
}
