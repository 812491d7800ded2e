//! Violation and error types
//!
//! Two failure channels exist:
//!
//! - [`Violation`]: a recoverable problem with user-submitted data. Violations
//!   are collected into a [`ValidationReport`](super::ValidationReport) and
//!   handed back to the caller for display.
//! - [`SpecError`]: a defect in a constraint specification or policy. This is
//!   never the user's fault and is propagated through `Result`.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! field names and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spec::DataType;

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required value is empty or absent.
    MissingRequired,
    /// The value cannot be interpreted as the declared type.
    TypeMismatch,
    /// A numeric value, or a value with a numeric meaning, is outside its bounds.
    OutOfRange,
    /// The value contains characters outside the expected class or does not
    /// match the declared pattern.
    PatternMismatch,
    /// The value is not one of the allowed values.
    SetMembership,
    /// A check digit does not agree with the rest of the identifier.
    ChecksumFailure,
    /// The value has the wrong length.
    FormatLength,
    /// A parent/child relationship is invalid.
    HierarchyViolation,
    /// The value is already used by another record.
    DuplicateValue,
    /// The constraint specification itself is broken.
    MalformedSpecification,
}

impl ViolationKind {
    /// Stable machine-readable code for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingRequired => "missing_required",
            Self::TypeMismatch => "type_mismatch",
            Self::OutOfRange => "out_of_range",
            Self::PatternMismatch => "pattern_mismatch",
            Self::SetMembership => "set_membership",
            Self::ChecksumFailure => "checksum_failure",
            Self::FormatLength => "format_length",
            Self::HierarchyViolation => "hierarchy_violation",
            Self::DuplicateValue => "duplicate_value",
            Self::MalformedSpecification => "malformed_specification",
        }
    }

    /// Returns `true` if the user can fix this by editing the record.
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::MalformedSpecification)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Severity level of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks persistence (default).
    #[default]
    Error,
    /// Reported to the user but does not block persistence.
    Warning,
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single recoverable validation failure.
///
/// Primitive checkers produce violations with an empty `field`; the
/// component that knows which field was checked attaches it with
/// [`Violation::with_field`].
///
/// # Examples
///
/// ```
/// use patrimony_validator::foundation::{Violation, ViolationKind};
///
/// let v = Violation::new(ViolationKind::OutOfRange, "Value must be between 10 and 50")
///     .with_field("annualDepreciationPct")
///     .with_param("min", "10")
///     .with_param("max", "50");
///
/// assert_eq!(v.code(), "out_of_range");
/// assert_eq!(v.param("max"), Some("50"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the offending field, as the record declares it.
    pub field: Cow<'static, str>,

    /// Failure classification.
    pub kind: ViolationKind,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered template parameters (typically 0-3).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Whether this violation blocks persistence.
    #[serde(default)]
    pub severity: Severity,
}

impl Violation {
    /// Creates a new error-severity violation with no field attached.
    pub fn new(kind: ViolationKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: Cow::Borrowed(""),
            kind,
            message: message.into(),
            params: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Sets the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = field.into();
        self
    }

    /// Appends a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the severity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Machine-readable code of the violation kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Looks up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns `true` if this violation blocks persistence.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)?;
        } else {
            write!(f, "[{}] {}: {}", self.field, self.kind, self.message)?;
        }
        if self.severity == Severity::Warning {
            write!(f, " (warning)")?;
        }
        Ok(())
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl Violation {
    /// A required value is missing.
    pub fn missing_required() -> Self {
        Self::new(ViolationKind::MissingRequired, "This field is required")
    }

    /// A value cannot be read as `expected`.
    pub fn type_mismatch(expected: &'static str, actual: impl Into<Cow<'static, str>>) -> Self {
        Self::new(
            ViolationKind::TypeMismatch,
            format!("Value must be a valid {expected}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// A value lies outside an inclusive range.
    pub fn out_of_range<T: fmt::Display>(min: T, max: T, actual: T) -> Self {
        Self::new(
            ViolationKind::OutOfRange,
            format!("Value must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// A value has the wrong length.
    pub fn format_length(expected: impl Into<Cow<'static, str>>, actual: usize) -> Self {
        let expected = expected.into();
        Self::new(
            ViolationKind::FormatLength,
            format!("Value must have {expected} characters"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual.to_string())
    }

    /// A value does not match a pattern or character class.
    pub fn pattern_mismatch(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new(
            ViolationKind::PatternMismatch,
            format!("Value must match {expected}"),
        )
        .with_param("expected", expected)
    }

    /// A value is not among the allowed values.
    pub fn not_allowed(allowed: &[impl fmt::Display]) -> Self {
        let list = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            ViolationKind::SetMembership,
            format!("Value must be one of: {list}"),
        )
        .with_param("allowed", list)
    }

    /// A hierarchy rule was broken.
    pub fn hierarchy(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ViolationKind::HierarchyViolation, message)
    }
}

// ============================================================================
// SPECIFICATION ERRORS
// ============================================================================

/// A structurally malformed constraint specification or policy.
///
/// These are authoring defects and are fatal for the validation call that
/// encounters them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SpecError {
    /// The `dataType` is not one of the recognized variants.
    #[error("unrecognized data type `{0}`")]
    UnknownDataType(String),

    /// A document kind code is not recognized.
    #[error("unrecognized document kind `{0}`")]
    UnknownDocumentKind(String),

    /// A numeric specification has `minimum > maximum`.
    #[error("minimum {minimum} is greater than maximum {maximum}")]
    InvertedRange {
        /// Declared lower bound.
        minimum: f64,
        /// Declared upper bound.
        maximum: f64,
    },

    /// The pattern is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// Offending pattern source.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// An allowed value cannot be read as the declared type.
    #[error("allowed value `{value}` is not a valid {data_type}")]
    AllowedValueType {
        /// Offending allowed value.
        value: String,
        /// Declared data type.
        data_type: DataType,
    },

    /// An allowed value does not satisfy the declared pattern.
    #[error("allowed value `{value}` does not match pattern `{pattern}`")]
    AllowedValuePattern {
        /// Offending allowed value.
        value: String,
        /// Declared pattern.
        pattern: String,
    },

    /// A numeric bound is `NaN` or infinite.
    #[error("numeric bound {0} is not finite")]
    NonFiniteBound(f64),

    /// A category policy is unreadable or has inverted bounds.
    #[error("invalid category policy: {0}")]
    InvalidPolicy(String),
}

impl SpecError {
    /// Every specification error is a [`ViolationKind::MalformedSpecification`].
    pub const fn kind(&self) -> ViolationKind {
        ViolationKind::MalformedSpecification
    }
}

// ============================================================================
// TESTS
// ============================================================================
