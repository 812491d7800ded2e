//! Numeric range checkers

use std::fmt::Display;

use crate::foundation::{Violation, ViolationKind};

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) { Violation::out_of_range(self.min, self.max, *input) }
    fn in_range(min: T, max: T);
}

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub AtLeast<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        Violation::new(ViolationKind::OutOfRange, format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn at_least(min: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub AtMost<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        Violation::new(ViolationKind::OutOfRange, format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn at_most(max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_in_range_inclusive() {
        let v = in_range(10.0, 50.0);
        assert!(v.validate(&10.0).is_ok());
        assert!(v.validate(&50.0).is_ok());
        assert!(v.validate(&9.99).is_err());
        assert!(v.validate(&50.01).is_err());
    }

    #[test]
    fn test_in_range_params() {
        let err = in_range(2, 50).validate(&1).unwrap_err();
        assert_eq!(err.kind, ViolationKind::OutOfRange);
        assert_eq!(err.param("min"), Some("2"));
        assert_eq!(err.param("max"), Some("50"));
        assert_eq!(err.param("actual"), Some("1"));
    }

    #[test]
    fn test_one_sided() {
        assert!(at_least(1).validate(&1).is_ok());
        assert!(at_least(1).validate(&0).is_err());
        assert!(at_most(5.5).validate(&5.5).is_ok());
        assert!(at_most(5.5).validate(&6.0).is_err());
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(in_range(0.0, 1.0).validate(&f64::NAN).is_err());
    }
}
