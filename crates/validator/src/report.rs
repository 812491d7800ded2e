//! Aggregation of every validator into a single report
//!
//! A [`Submission`] gathers whatever a console form sends: a configuration
//! value with its specification, document numbers, a category, and the
//! outcome of uniqueness checks. [`ReportBuilder::build`] runs the
//! validators in a fixed order:
//!
//! 1. configuration value
//! 2. documents, in submission order
//! 3. category hierarchy and attributes
//! 4. uniqueness
//!
//! Invalid data only ever produces violations. The build fails only when the
//! configuration specification itself is malformed.

use serde::{Deserialize, Serialize};

use crate::config::CategoryPolicy;
use crate::document::DocumentIdentity;
use crate::foundation::{SpecError, ValidationReport, Violation};
use crate::hierarchy::{CategoryRecord, validate_hierarchy_with};
use crate::spec::RawConstraintSpec;
use crate::uniqueness::{RecordLookup, check_unique};
use crate::value::validate_value;

/// A configuration value together with the specification it must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    /// Specification as stored.
    pub spec: RawConstraintSpec,
    /// Candidate value in textual form.
    pub candidate: String,
}

/// A submitted document number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    /// Kind and number.
    #[serde(flatten)]
    pub identity: DocumentIdentity,
    /// Number currently stored for the edited record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_value: Option<String>,
}

/// A category together with the categories it is checked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    /// Category being saved.
    pub candidate: CategoryRecord,
    /// Categories already stored.
    #[serde(default)]
    pub existing: Vec<CategoryRecord>,
}

/// Everything submitted by one form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Configuration value, if the form edits one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_entry: Option<ConfigEntry>,
    /// Document numbers, in form order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentEntry>,
    /// Category, if the form edits one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryEntry>,
    /// Outcomes of uniqueness checks already run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uniqueness: Vec<Violation>,
}

impl Submission {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a configuration value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config_entry(mut self, spec: RawConstraintSpec, candidate: impl Into<String>) -> Self {
        self.config_entry = Some(ConfigEntry {
            spec,
            candidate: candidate.into(),
        });
        self
    }

    /// Adds a document number.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_document(mut self, identity: DocumentIdentity, stored_value: Option<String>) -> Self {
        self.documents.push(DocumentEntry {
            identity,
            stored_value,
        });
        self
    }

    /// Adds a category.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_category(mut self, candidate: CategoryRecord, existing: Vec<CategoryRecord>) -> Self {
        self.category = Some(CategoryEntry {
            candidate,
            existing,
        });
        self
    }

    /// Adds precomputed uniqueness outcomes.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_uniqueness(mut self, violations: impl IntoIterator<Item = Violation>) -> Self {
        self.uniqueness.extend(violations);
        self
    }

    /// Runs a uniqueness check against `lookup` and records its outcome.
    pub async fn check_unique<L>(
        mut self,
        lookup: &L,
        field: &'static str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> Self
    where
        L: RecordLookup + ?Sized,
    {
        let outcome = check_unique(lookup, field, value, exclude_id).await;
        self.uniqueness.extend(outcome);
        self
    }
}

/// Builds [`ValidationReport`]s from submissions.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    policy: CategoryPolicy,
}

impl ReportBuilder {
    /// Creates a builder with the default category policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with a custom category policy.
    pub fn with_policy(policy: CategoryPolicy) -> Result<Self, SpecError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The category policy in use.
    pub fn policy(&self) -> &CategoryPolicy {
        &self.policy
    }

    /// Validates everything in `submission`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if the configuration specification is
    /// malformed. No other validator runs in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use patrimony_validator::document::{DocumentIdentity, DocumentKind};
    /// use patrimony_validator::foundation::ViolationKind;
    /// use patrimony_validator::report::{ReportBuilder, Submission};
    /// use patrimony_validator::spec::RawConstraintSpec;
    ///
    /// let mut spec = RawConstraintSpec::new("number");
    /// spec.minimum = Some(1.0);
    /// spec.maximum = Some(30.0);
    ///
    /// let submission = Submission::new()
    ///     .with_config_entry(spec, "45")
    ///     .with_document(DocumentIdentity::new(DocumentKind::NationalId, "1234"), None);
    ///
    /// let report = ReportBuilder::new().build(&submission).unwrap();
    /// assert_eq!(
    ///     report.kinds(),
    ///     vec![ViolationKind::OutOfRange, ViolationKind::FormatLength]
    /// );
    /// assert!(!report.is_accepted());
    /// ```
    pub fn build(&self, submission: &Submission) -> Result<ValidationReport, SpecError> {
        let mut report = ValidationReport::new();

        if let Some(entry) = &submission.config_entry {
            let spec = entry.spec.build().inspect_err(|error| {
                tracing::warn!(%error, data_type = %entry.spec.data_type, "malformed specification");
            })?;
            report.extend(validate_value(&spec, &entry.candidate));
        }

        for document in &submission.documents {
            report.extend(document.identity.validate(document.stored_value.as_deref()));
        }

        if let Some(category) = &submission.category {
            report.extend(validate_hierarchy_with(
                &self.policy,
                &category.candidate,
                &category.existing,
            ));
        }

        report.extend(submission.uniqueness.iter().cloned());

        tracing::debug!(
            violations = report.len(),
            accepted = report.is_accepted(),
            "built validation report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentKind;
    use crate::foundation::{Severity, ViolationKind};

    #[test]
    fn test_empty_submission_is_accepted() {
        let report = ReportBuilder::new().build(&Submission::new()).unwrap();
        assert!(report.is_empty());
        assert!(report.is_accepted());
    }

    #[test]
    fn test_malformed_spec_is_fatal() {
        let mut spec = RawConstraintSpec::new("number");
        spec.minimum = Some(10.0);
        spec.maximum = Some(1.0);
        let submission = Submission::new()
            .with_config_entry(spec, "5")
            .with_document(DocumentIdentity::new(DocumentKind::NationalId, "1"), None);

        let err = ReportBuilder::new().build(&submission).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::MalformedSpecification);
    }

    #[test]
    fn test_warnings_do_not_block() {
        let warning = Violation::new(ViolationKind::DuplicateValue, "Could not verify")
            .with_field("name")
            .with_severity(Severity::Warning);
        let report = ReportBuilder::new()
            .build(&Submission::new().with_uniqueness([warning]))
            .unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.is_accepted());
    }

    #[test]
    fn test_documents_keep_submission_order() {
        let submission = Submission::new()
            .with_document(DocumentIdentity::new(DocumentKind::Passport, "X1"), None)
            .with_document(DocumentIdentity::new(DocumentKind::TaxId, "20100070971"), None);
        let report = ReportBuilder::new().build(&submission).unwrap();
        assert_eq!(
            report.kinds(),
            vec![ViolationKind::FormatLength, ViolationKind::ChecksumFailure]
        );
    }

    #[test]
    fn test_custom_policy_rejected_when_inverted() {
        let mut policy = CategoryPolicy::default();
        policy.useful_life_years = crate::config::Bounds::new(60.0, 2.0);
        assert!(ReportBuilder::with_policy(policy).is_err());
    }

    #[test]
    fn test_submission_from_json() {
        let json = r#"{
            "configEntry": { "spec": { "dataType": "boolean" }, "candidate": "yes" },
            "documents": [ { "documentKind": "DNI", "rawValue": "12345678" } ]
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        let report = ReportBuilder::new().build(&submission).unwrap();
        assert_eq!(report.kinds(), vec![ViolationKind::TypeMismatch]);
    }
}
