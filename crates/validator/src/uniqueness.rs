//! Duplicate detection against stored records
//!
//! Uniqueness is the one rule that needs data the validator does not own.
//! Callers supply a [`RecordLookup`]; [`check_unique`] awaits it once and
//! compares the candidate with every stored value of the same field.
//!
//! A failing lookup never blocks a submission: the outcome degrades to a
//! single warning that the value could not be verified.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::{Severity, Violation, ViolationKind};

/// A stored value of the field being checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredValue {
    /// Identifier of the record that holds the value.
    pub record_id: String,
    /// The stored value.
    pub value: String,
}

impl StoredValue {
    /// Creates a stored value.
    pub fn new(record_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            value: value.into(),
        }
    }
}

/// Failure of a [`RecordLookup`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The backing store could not be reached.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with something that could not be read.
    #[error("malformed lookup response: {0}")]
    Malformed(String),
}

/// Source of the stored values for a field.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Fetches every stored value of `field`.
    async fn fetch_all(&self, field: &str) -> Result<Vec<StoredValue>, LookupError>;
}

fn comparable(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Checks that `value` is not already stored under `field`.
///
/// Comparison ignores surrounding whitespace and case. The record with id
/// `exclude_id` (the one being edited) is skipped. At most one violation is
/// returned.
pub async fn check_unique<L>(
    lookup: &L,
    field: &'static str,
    value: &str,
    exclude_id: Option<&str>,
) -> Vec<Violation>
where
    L: RecordLookup + ?Sized,
{
    let wanted = comparable(value);
    if wanted.is_empty() {
        return Vec::new();
    }

    let stored = match lookup.fetch_all(field).await {
        Ok(stored) => stored,
        Err(error) => {
            tracing::warn!(field, %error, "uniqueness lookup failed; value not verified");
            return vec![
                Violation::new(
                    ViolationKind::DuplicateValue,
                    "Could not verify that the value is unique",
                )
                .with_field(field)
                .with_severity(Severity::Warning),
            ];
        }
    };

    let clash = stored
        .iter()
        .filter(|s| exclude_id != Some(s.record_id.as_str()))
        .find(|s| comparable(&s.value) == wanted);

    match clash {
        Some(existing) => {
            tracing::debug!(field, record_id = %existing.record_id, "duplicate value");
            vec![
                Violation::new(ViolationKind::DuplicateValue, "Value is already in use")
                    .with_field(field)
                    .with_param("recordId", existing.record_id.clone()),
            ]
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<StoredValue>);

    #[async_trait]
    impl RecordLookup for Fixed {
        async fn fetch_all(&self, _field: &str) -> Result<Vec<StoredValue>, LookupError> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    #[async_trait]
    impl RecordLookup for Down {
        async fn fetch_all(&self, _field: &str) -> Result<Vec<StoredValue>, LookupError> {
            Err(LookupError::Unavailable("connection refused".into()))
        }
    }

    fn store() -> Fixed {
        Fixed(vec![
            StoredValue::new("1", "Furniture"),
            StoredValue::new("2", "Vehicles"),
        ])
    }

    #[tokio::test]
    async fn test_duplicate_ignores_case_and_whitespace() {
        let out = check_unique(&store(), "name", "  FURNITURE ", None).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::DuplicateValue);
        assert_eq!(out[0].field, "name");
        assert_eq!(out[0].param("recordId"), Some("1"));
        assert!(out[0].is_blocking());
    }

    #[tokio::test]
    async fn test_edited_record_is_excluded() {
        assert!(check_unique(&store(), "name", "furniture", Some("1")).await.is_empty());
        assert!(!check_unique(&store(), "name", "furniture", Some("2")).await.is_empty());
    }

    #[tokio::test]
    async fn test_new_value_passes() {
        assert!(check_unique(&store(), "name", "Buildings", None).await.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_degrades_to_warning() {
        let out = check_unique(&Down, "name", "Furniture", None).await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::DuplicateValue);
        assert_eq!(out[0].severity, Severity::Warning);
        assert!(!out[0].is_blocking());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let lookup: Box<dyn RecordLookup> = Box::new(store());
        assert_eq!(check_unique(lookup.as_ref(), "name", "vehicles", None).await.len(), 1);
    }
}
