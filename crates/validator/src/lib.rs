//! # patrimony-validator
//!
//! Validation rules for the administration console of an asset-management
//! platform: typed configuration values, identity documents, and the asset
//! category hierarchy.
//!
//! ## Quick Start
//!
//! ```rust
//! use patrimony_validator::prelude::*;
//!
//! let spec = ConstraintSpec::number(Some(1.0), Some(30.0), vec![]).unwrap();
//! assert!(validate_value(&spec, "15").is_empty());
//!
//! let out = validate_document(DocumentKind::TaxId, "20100070971", None);
//! assert_eq!(out[0].kind, ViolationKind::ChecksumFailure);
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, violations,
//!   reports and fatal errors
//! - [`checks`]: primitive single-rule checkers, composed with
//!   [`and`](foundation::ValidateExt::and)
//! - [`spec`], [`value`]: configuration specifications and value validation
//! - [`document`]: document number validation
//! - [`hierarchy`], [`config`]: category validation and its bounds
//! - [`uniqueness`]: duplicate detection through an async lookup
//! - [`report`]: aggregation into a [`ValidationReport`](foundation::ValidationReport)
//!
//! Use the [`validator!`] macro to declare new checkers.

// Violation carries a message and params; boxing it would add indirection to
// every check.
#![allow(clippy::result_large_err)]

pub mod checks;
pub mod combinators;
pub mod config;
pub mod document;
pub mod foundation;
pub mod hierarchy;
mod macros;
pub mod prelude;
pub mod report;
pub mod spec;
pub mod uniqueness;
pub mod value;
