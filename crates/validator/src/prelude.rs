//! Prelude module for convenient imports.
//!
//! ```rust
//! use patrimony_validator::prelude::*;
//!
//! let account = exact_length(4).and(digits()).and(not_all_zero());
//! assert!(account.validate("1503").is_ok());
//! ```

pub use crate::foundation::{
    Severity, SpecError, Validate, ValidateExt, ValidationReport, Violation, ViolationKind,
};

#[allow(clippy::wildcard_imports)]
pub use crate::checks::*;

pub use crate::config::{Bounds, CategoryPolicy};
pub use crate::document::{DocumentIdentity, DocumentKind, validate_document};
pub use crate::hierarchy::{CategoryRecord, validate_hierarchy, validate_hierarchy_with};
pub use crate::report::{ReportBuilder, Submission};
pub use crate::spec::{ConstraintSpec, DataType, RawConstraintSpec, SpecFlags};
pub use crate::uniqueness::{LookupError, RecordLookup, StoredValue, check_unique};
pub use crate::value::{is_valid_value, validate_value};
