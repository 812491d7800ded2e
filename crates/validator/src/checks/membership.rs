//! Allowed-value membership checker

use std::fmt::Display;

use crate::foundation::{Validate, Violation};

/// Validates that a value is one of an ordered set of allowed values.
///
/// An empty set means membership is unrestricted.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<T> {
    /// Allowed values, in declaration order.
    pub allowed: Vec<T>,
}

impl<T> OneOf<T> {
    /// Creates a membership checker.
    #[must_use]
    pub fn new(allowed: Vec<T>) -> Self {
        Self { allowed }
    }

    /// Returns `true` if no restriction applies.
    pub fn is_unrestricted(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl<T: Display> OneOf<T> {
    fn check(&self, is_member: impl Fn(&T) -> bool) -> Result<(), Violation> {
        if self.is_unrestricted() || self.allowed.iter().any(is_member) {
            Ok(())
        } else {
            Err(Violation::not_allowed(self.allowed.as_slice()))
        }
    }
}

impl Validate for OneOf<String> {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), Violation> {
        self.check(|a| a == input)
    }
}

impl Validate for OneOf<f64> {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), Violation> {
        self.check(|a| a == input)
    }
}

impl Validate for OneOf<bool> {
    type Input = bool;

    fn validate(&self, input: &bool) -> Result<(), Violation> {
        self.check(|a| a == input)
    }
}

/// Creates a [`OneOf`] checker.
#[must_use]
pub fn one_of<T>(allowed: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(allowed.into_iter().collect())
}
