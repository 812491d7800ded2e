//! Constraint specifications for typed configuration entries
//!
//! A configuration entry declares a [`DataType`] and, depending on it, a
//! numeric range, a pattern, and an ordered set of allowed values. The
//! constraint fields live inside [`TypedConstraints`] variants, so a range can
//! only exist on a `Number` spec and a pattern only on a `Text` spec.
//!
//! Specifications arrive from storage as [`RawConstraintSpec`] (camelCase
//! JSON, data type as a string, allowed values as strings) and are checked
//! once, when converted into a [`ConstraintSpec`]. Every structural defect is
//! a [`SpecError`]; a built `ConstraintSpec` is always internally consistent.
//!
//! # Examples
//!
//! ```
//! use patrimony_validator::spec::{ConstraintSpec, RawConstraintSpec};
//!
//! let raw: RawConstraintSpec = serde_json::from_str(
//!     r#"{"dataType": "number", "minimum": 1, "maximum": 30, "isEditable": true}"#,
//! ).unwrap();
//! let spec = ConstraintSpec::try_from(raw).unwrap();
//! assert!(spec.flags().is_editable);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checks::{FullMatch, OneOf};
use crate::foundation::SpecError;

// ============================================================================
// DATA TYPE
// ============================================================================

/// Declared type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free text, optionally constrained by a pattern.
    Text,
    /// A finite decimal number.
    Number,
    /// `true` or `false`.
    Boolean,
}

impl DataType {
    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = SpecError;

    /// Case-insensitive; the console's Spanish labels are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "texto" => Ok(Self::Text),
            "number" | "numeric" | "numero" | "número" => Ok(Self::Number),
            "boolean" | "bool" | "booleano" => Ok(Self::Boolean),
            _ => Err(SpecError::UnknownDataType(s.to_string())),
        }
    }
}

// ============================================================================
// METADATA FLAGS
// ============================================================================

/// Metadata carried by a specification. Never affects validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecFlags {
    /// Administrators may change the value from the console.
    pub is_editable: bool,
    /// A change takes effect only after a restart.
    pub requires_restart: bool,
    /// The value must be masked when displayed.
    pub is_sensitive: bool,
}

// ============================================================================
// TYPED CONSTRAINTS
// ============================================================================

/// Optional inclusive bounds of a numeric specification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberRange {
    /// Lower bound, if any.
    pub minimum: Option<f64>,
    /// Upper bound, if any.
    pub maximum: Option<f64>,
}

/// Constraints that only make sense for one data type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedConstraints {
    /// Text constraints.
    Text {
        /// Full-match pattern.
        pattern: Option<FullMatch>,
        /// Allowed values; every member matches `pattern`.
        allowed: OneOf<String>,
    },
    /// Number constraints.
    Number {
        /// Inclusive bounds; `minimum <= maximum` when both are set.
        range: NumberRange,
        /// Allowed values.
        allowed: OneOf<f64>,
    },
    /// Boolean constraints.
    Boolean {
        /// Allowed literals.
        allowed: OneOf<bool>,
    },
}

impl TypedConstraints {
    /// An unconstrained set for `data_type`.
    pub fn empty(data_type: DataType) -> Self {
        match data_type {
            DataType::Text => Self::Text {
                pattern: None,
                allowed: OneOf::new(Vec::new()),
            },
            DataType::Number => Self::Number {
                range: NumberRange::default(),
                allowed: OneOf::new(Vec::new()),
            },
            DataType::Boolean => Self::Boolean {
                allowed: OneOf::new(Vec::new()),
            },
        }
    }

    /// The data type these constraints belong to.
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Text { .. } => DataType::Text,
            Self::Number { .. } => DataType::Number,
            Self::Boolean { .. } => DataType::Boolean,
        }
    }
}

// ============================================================================
// CONSTRAINT SPEC
// ============================================================================

/// A validated constraint specification.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSpec {
    constraints: TypedConstraints,
    flags: SpecFlags,
}

impl ConstraintSpec {
    /// Builds a text specification.
    ///
    /// Fails if the pattern does not compile, or an allowed value is blank or
    /// does not match it. Blank candidates are reported missing before
    /// membership is checked.
    pub fn text(pattern: Option<&str>, allowed: Vec<String>) -> Result<Self, SpecError> {
        let pattern = pattern
            .filter(|p| !p.is_empty())
            .map(|p| {
                FullMatch::new(p).map_err(|e| SpecError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        if let Some(blank) = allowed.iter().find(|v| v.trim().is_empty()) {
            return Err(SpecError::AllowedValueType {
                value: blank.clone(),
                data_type: DataType::Text,
            });
        }

        if let Some(pattern) = &pattern {
            if let Some(bad) = allowed.iter().find(|v| !pattern.is_match(v)) {
                return Err(SpecError::AllowedValuePattern {
                    value: bad.clone(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }

        Ok(Self::from_constraints(TypedConstraints::Text {
            pattern,
            allowed: OneOf::new(allowed),
        }))
    }

    /// Builds a numeric specification.
    ///
    /// Fails if a bound is not finite or `minimum > maximum`.
    pub fn number(
        minimum: Option<f64>,
        maximum: Option<f64>,
        allowed: Vec<f64>,
    ) -> Result<Self, SpecError> {
        if let Some(bad) = [minimum, maximum].into_iter().flatten().find(|b| !b.is_finite()) {
            return Err(SpecError::NonFiniteBound(bad));
        }
        if let (Some(min), Some(max)) = (minimum, maximum) {
            if min > max {
                return Err(SpecError::InvertedRange {
                    minimum: min,
                    maximum: max,
                });
            }
        }
        if let Some(bad) = allowed.iter().find(|v| !v.is_finite()) {
            return Err(SpecError::AllowedValueType {
                value: bad.to_string(),
                data_type: DataType::Number,
            });
        }

        Ok(Self::from_constraints(TypedConstraints::Number {
            range: NumberRange { minimum, maximum },
            allowed: OneOf::new(allowed),
        }))
    }

    /// Builds a boolean specification.
    pub fn boolean(allowed: Vec<bool>) -> Self {
        Self::from_constraints(TypedConstraints::Boolean {
            allowed: OneOf::new(allowed),
        })
    }

    fn from_constraints(constraints: TypedConstraints) -> Self {
        Self {
            constraints,
            flags: SpecFlags::default(),
        }
    }

    /// Replaces the metadata flags.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_flags(mut self, flags: SpecFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Switches to another data type.
    ///
    /// All type-specific constraints are discarded, including allowed values;
    /// only the flags survive. Any stored value was written for the old type,
    /// so the caller must clear it as well.
    #[must_use = "switching returns a new specification"]
    pub fn switch_type(self, data_type: DataType) -> Self {
        Self {
            constraints: TypedConstraints::empty(data_type),
            flags: self.flags,
        }
    }

    /// Declared data type.
    pub const fn data_type(&self) -> DataType {
        self.constraints.data_type()
    }

    /// Type-specific constraints.
    pub const fn constraints(&self) -> &TypedConstraints {
        &self.constraints
    }

    /// Metadata flags.
    pub const fn flags(&self) -> SpecFlags {
        self.flags
    }

    /// Converts back to the storage form.
    pub fn to_raw(&self) -> RawConstraintSpec {
        let mut raw = RawConstraintSpec {
            data_type: self.data_type().as_str().to_string(),
            minimum: None,
            maximum: None,
            allowed_values: Vec::new(),
            pattern: None,
            flags: self.flags,
        };
        match &self.constraints {
            TypedConstraints::Text { pattern, allowed } => {
                raw.pattern = pattern.as_ref().map(|p| p.as_str().to_string());
                raw.allowed_values = allowed.allowed.clone();
            }
            TypedConstraints::Number { range, allowed } => {
                raw.minimum = range.minimum;
                raw.maximum = range.maximum;
                raw.allowed_values = allowed.allowed.iter().map(f64::to_string).collect();
            }
            TypedConstraints::Boolean { allowed } => {
                raw.allowed_values = allowed.allowed.iter().map(bool::to_string).collect();
            }
        }
        raw
    }
}

// ============================================================================
// RAW (STORAGE) FORM
// ============================================================================

/// A specification as stored by the console.
///
/// Constraint fields that do not belong to `data_type` are ignored when
/// building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConstraintSpec {
    /// Declared type name.
    pub data_type: String,
    /// Lower bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Upper bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Allowed values in their textual form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
    /// Pattern for text values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Metadata flags.
    #[serde(flatten)]
    pub flags: SpecFlags,
}

impl RawConstraintSpec {
    /// Creates a raw specification with only a data type.
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            minimum: None,
            maximum: None,
            allowed_values: Vec::new(),
            pattern: None,
            flags: SpecFlags::default(),
        }
    }

    /// Checks the specification and builds a [`ConstraintSpec`].
    pub fn build(&self) -> Result<ConstraintSpec, SpecError> {
        let data_type: DataType = self.data_type.parse()?;
        let spec = match data_type {
            DataType::Text => {
                ConstraintSpec::text(self.pattern.as_deref(), self.allowed_values.clone())?
            }
            DataType::Number => {
                let allowed = self
                    .allowed_values
                    .iter()
                    .map(|v| {
                        v.trim()
                            .parse::<f64>()
                            .map_err(|_| SpecError::AllowedValueType {
                                value: v.clone(),
                                data_type,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                ConstraintSpec::number(self.minimum, self.maximum, allowed)?
            }
            DataType::Boolean => {
                let allowed = self
                    .allowed_values
                    .iter()
                    .map(|v| match v.as_str() {
                        "true" => Ok(true),
                        "false" => Ok(false),
                        _ => Err(SpecError::AllowedValueType {
                            value: v.clone(),
                            data_type,
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                ConstraintSpec::boolean(allowed)
            }
        };
        Ok(spec.with_flags(self.flags))
    }
}

impl TryFrom<RawConstraintSpec> for ConstraintSpec {
    type Error = SpecError;

    fn try_from(raw: RawConstraintSpec) -> Result<Self, Self::Error> {
        raw.build()
    }
}

impl TryFrom<&RawConstraintSpec> for ConstraintSpec {
    type Error = SpecError;

    fn try_from(raw: &RawConstraintSpec) -> Result<Self, Self::Error> {
        raw.build()
    }
}
