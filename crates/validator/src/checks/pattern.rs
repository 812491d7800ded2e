//! Regular-expression checker
//!
//! Configuration patterns are authored by administrators and may or may not
//! carry `^`/`$` anchors. [`FullMatch`] always matches the entire input, so
//! `"[0-9]+"` and `"^[0-9]+$"` behave the same.

use crate::foundation::{Validate, Violation};

/// Validates that a string matches a regular expression in full.
#[derive(Debug, Clone)]
pub struct FullMatch {
    source: String,
    regex: regex::Regex,
}

impl FullMatch {
    /// Compiles `pattern`, anchoring it to the whole input.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = regex::Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as it was authored.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if `input` matches in full.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl PartialEq for FullMatch {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Validate for FullMatch {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), Violation> {
        if self.is_match(input) {
            Ok(())
        } else {
            Err(Violation::pattern_mismatch(format!("pattern {}", self.source))
                .with_param("pattern", self.source.clone()))
        }
    }
}

/// Creates a [`FullMatch`] checker.
pub fn full_match(pattern: &str) -> Result<FullMatch, regex::Error> {
    FullMatch::new(pattern)
}
