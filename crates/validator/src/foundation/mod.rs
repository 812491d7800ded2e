//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Violations**: [`Violation`], [`ViolationKind`], [`Severity`]
//! - **Reports**: [`ValidationReport`]
//! - **Fatal errors**: [`SpecError`]
//!
//! Primitive checkers return `Result<(), Violation>` for a single rule. The
//! record-level validators run several checkers, attach field names, and
//! collect the failures in declaration order with [`check_field`].

pub mod error;
pub mod report;
pub mod traits;

pub use error::{Severity, SpecError, ViolationKind, Violation};
pub use report::ValidationReport;
pub use traits::{Validate, ValidateExt};

/// Runs `validator` against `input` and records a failure under `field`.
///
/// Returns `true` when the check passed, so callers can skip dependent rules.
///
/// # Examples
///
/// ```
/// use patrimony_validator::checks::exact_length;
/// use patrimony_validator::foundation::check_field;
///
/// let mut out = Vec::new();
/// assert!(!check_field(&mut out, "accountingAccount", &exact_length(4), "123"));
/// assert_eq!(out[0].field, "accountingAccount");
/// ```
pub fn check_field<V>(
    out: &mut Vec<Violation>,
    field: &'static str,
    validator: &V,
    input: &V::Input,
) -> bool
where
    V: Validate + ?Sized,
{
    match validator.validate(input) {
        Ok(()) => true,
        Err(violation) => {
            out.push(violation.with_field(field));
            false
        }
    }
}
