//! Type-driven validation of configuration values
//!
//! [`validate_value`] checks a candidate (in its textual form, as the console
//! submits it) against a [`ConstraintSpec`]. Independent constraints are all
//! reported: a number inside its range but outside the allowed set yields a
//! `SetMembership` violation, and a number that is both out of range and not
//! allowed yields two violations, range first.

use crate::checks::{InRange, at_least, at_most, in_range, not_blank};
use crate::foundation::{Violation, check_field};
use crate::spec::{ConstraintSpec, NumberRange, TypedConstraints};

/// Field name attached to value violations.
pub const VALUE_FIELD: &str = "value";

/// Validates `candidate` against `spec`.
///
/// Returns an empty list when the value is acceptable. Pure: the same inputs
/// always produce the same violations in the same order.
///
/// # Examples
///
/// ```
/// use patrimony_validator::foundation::ViolationKind;
/// use patrimony_validator::spec::ConstraintSpec;
/// use patrimony_validator::value::validate_value;
///
/// let spec = ConstraintSpec::number(Some(1.0), Some(10.0), vec![2.0, 4.0]).unwrap();
/// assert!(validate_value(&spec, "4").is_empty());
///
/// let kinds: Vec<_> = validate_value(&spec, "3").iter().map(|v| v.kind).collect();
/// assert_eq!(kinds, vec![ViolationKind::SetMembership]);
/// ```
pub fn validate_value(spec: &ConstraintSpec, candidate: &str) -> Vec<Violation> {
    let mut out = Vec::new();

    if !check_field(&mut out, VALUE_FIELD, &not_blank(), candidate) {
        return out;
    }

    match spec.constraints() {
        TypedConstraints::Number { range, allowed } => {
            let Some(number) = parse_number(candidate) else {
                out.push(
                    Violation::type_mismatch("number", candidate.to_string())
                        .with_field(VALUE_FIELD),
                );
                return out;
            };
            check_range(&mut out, range, number);
            check_field(&mut out, VALUE_FIELD, allowed, &number);
        }
        TypedConstraints::Boolean { allowed } => {
            let flag = match candidate {
                "true" => true,
                "false" => false,
                _ => {
                    out.push(
                        Violation::type_mismatch("boolean", candidate.to_string())
                            .with_field(VALUE_FIELD),
                    );
                    return out;
                }
            };
            check_field(&mut out, VALUE_FIELD, allowed, &flag);
        }
        TypedConstraints::Text { pattern, allowed } => {
            if let Some(pattern) = pattern {
                check_field(&mut out, VALUE_FIELD, pattern, candidate);
            }
            check_field(&mut out, VALUE_FIELD, allowed, candidate);
        }
    }

    tracing::trace!(
        data_type = %spec.data_type(),
        violations = out.len(),
        "validated configuration value"
    );
    out
}

/// Parses a finite decimal number. `inf` and `NaN` are rejected.
fn parse_number(candidate: &str) -> Option<f64> {
    candidate
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn check_range(out: &mut Vec<Violation>, range: &NumberRange, number: f64) {
    match (range.minimum, range.maximum) {
        (Some(min), Some(max)) => {
            let bounds: InRange<f64> = in_range(min, max);
            check_field(out, VALUE_FIELD, &bounds, &number);
        }
        (Some(min), None) => {
            check_field(out, VALUE_FIELD, &at_least(min), &number);
        }
        (None, Some(max)) => {
            check_field(out, VALUE_FIELD, &at_most(max), &number);
        }
        (None, None) => {}
    }
}

/// Returns `true` if `candidate` is acceptable for `spec`.
pub fn is_valid_value(spec: &ConstraintSpec, candidate: &str) -> bool {
    validate_value(spec, candidate).is_empty()
}
