//! End-to-end report building, including the async uniqueness check.

use async_trait::async_trait;
use patrimony_validator::prelude::*;
use pretty_assertions::assert_eq;

struct Categories(Vec<StoredValue>);

#[async_trait]
impl RecordLookup for Categories {
    async fn fetch_all(&self, field: &str) -> Result<Vec<StoredValue>, LookupError> {
        match field {
            "name" => Ok(self.0.clone()),
            other => Err(LookupError::Malformed(format!("unknown field {other}"))),
        }
    }
}

struct Offline;

#[async_trait]
impl RecordLookup for Offline {
    async fn fetch_all(&self, _field: &str) -> Result<Vec<StoredValue>, LookupError> {
        Err(LookupError::Unavailable("timeout after 5s".into()))
    }
}

fn furniture() -> CategoryRecord {
    CategoryRecord {
        id: Some(1),
        name: "Furniture".into(),
        level: 1,
        parent_id: None,
        accounting_account: "3351".into(),
        annual_depreciation_pct: 10.0,
        useful_life_years: 10.0,
        residual_value_pct: 10.0,
    }
}

fn chairs(level: i32) -> CategoryRecord {
    CategoryRecord {
        id: None,
        name: "Chairs".into(),
        level,
        parent_id: Some(1),
        ..furniture()
    }
}

#[test]
fn violations_follow_validator_order() {
    let mut spec = RawConstraintSpec::new("text");
    spec.pattern = Some("[a-z_]+".into());

    let submission = Submission::new()
        .with_category(chairs(1), vec![furniture()])
        .with_document(DocumentIdentity::new(DocumentKind::TaxId, "20100070971"), None)
        .with_config_entry(spec, "Not Snake");

    let report = ReportBuilder::new().build(&submission).unwrap();
    assert_eq!(
        report.kinds(),
        vec![
            ViolationKind::PatternMismatch,
            ViolationKind::ChecksumFailure,
            ViolationKind::HierarchyViolation,
        ]
    );
    let fields: Vec<&str> = report.violations().iter().map(|v| v.field.as_ref()).collect();
    assert_eq!(fields, vec!["value", "documentNumber", "level"]);
}

#[test]
fn pattern_rejecting_allowed_value_is_malformed() {
    let mut spec = RawConstraintSpec::new("text");
    spec.pattern = Some("^[0-9]+$".into());
    spec.allowed_values = vec!["12a".into()];

    let err = ReportBuilder::new()
        .build(&Submission::new().with_config_entry(spec, "12"))
        .unwrap_err();
    assert_eq!(err.kind(), ViolationKind::MalformedSpecification);
}

#[test]
fn report_serializes_as_violation_list() {
    let submission = Submission::new()
        .with_document(DocumentIdentity::new(DocumentKind::NationalId, "00000000"), None);
    let report = ReportBuilder::new().build(&submission).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json[0]["field"], "documentNumber");
    assert_eq!(json[0]["kind"], "out_of_range");
    assert_eq!(json[0]["severity"], "error");
}

#[tokio::test]
async fn duplicate_name_blocks_submission() {
    let lookup = Categories(vec![StoredValue::new("1", "Furniture"), StoredValue::new("2", "Chairs")]);
    let submission = Submission::new()
        .with_category(chairs(2), vec![furniture()])
        .check_unique(&lookup, "name", " chairs ", None)
        .await;

    let report = ReportBuilder::new().build(&submission).unwrap();
    assert_eq!(report.kinds(), vec![ViolationKind::DuplicateValue]);
    assert!(!report.is_accepted());
}

#[tokio::test]
async fn editing_keeps_own_name() {
    let lookup = Categories(vec![StoredValue::new("2", "Chairs")]);
    let submission = Submission::new()
        .check_unique(&lookup, "name", "Chairs", Some("2"))
        .await;
    assert!(ReportBuilder::new().build(&submission).unwrap().is_empty());
}

#[tokio::test]
async fn lookup_failure_still_accepts() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let submission = Submission::new()
        .with_category(chairs(2), vec![furniture()])
        .check_unique(&Offline, "name", "Chairs", None)
        .await;

    let report = ReportBuilder::new().build(&submission).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.warnings().count(), 1);
    assert!(report.is_accepted());
    assert!(report.into_result().is_ok());
}

#[tokio::test]
async fn lookups_run_concurrently() {
    let lookup = Categories(vec![StoredValue::new("1", "Furniture")]);
    let (a, b) = tokio::join!(
        check_unique(&lookup, "name", "furniture", None),
        check_unique(&lookup, "name", "tools", None),
    );
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ConstraintSpec>();
    assert_send_sync::<RawConstraintSpec>();
    assert_send_sync::<ValidationReport>();
    assert_send_sync::<ReportBuilder>();
    assert_send_sync::<Submission>();
    assert_send_sync::<CategoryPolicy>();
    assert_send_sync::<Violation>();
    assert_send_sync::<SpecError>();
    assert_send_sync::<LookupError>();
}
