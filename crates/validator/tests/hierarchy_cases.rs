//! Category hierarchy and attribute bounds.

use patrimony_validator::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn tree() -> Vec<CategoryRecord> {
    vec![
        category(1, 1, None),
        category(2, 2, Some(1)),
        category(3, 3, Some(2)),
    ]
}

fn category(id: i64, level: i32, parent_id: Option<i64>) -> CategoryRecord {
    CategoryRecord {
        id: Some(id),
        name: format!("Category {id}"),
        level,
        parent_id,
        accounting_account: "3361".into(),
        annual_depreciation_pct: 25.0,
        useful_life_years: 4.0,
        residual_value_pct: 5.0,
    }
}

#[rstest]
#[case::under_root(2, 1)]
#[case::skips_levels(5, 1)]
#[case::under_leaf(4, 3)]
fn deeper_than_parent_is_accepted(
    tree: Vec<CategoryRecord>,
    #[case] level: i32,
    #[case] parent: i64,
) {
    let candidate = category(10, level, Some(parent));
    assert!(validate_hierarchy(&candidate, &tree).is_empty());
}

#[rstest]
#[case::same_level(1, 1)]
#[case::shallower(1, 2)]
#[case::same_as_leaf(3, 3)]
fn not_deeper_than_parent_is_rejected(
    tree: Vec<CategoryRecord>,
    #[case] level: i32,
    #[case] parent: i64,
) {
    let out = validate_hierarchy(&category(10, level, Some(parent)), &tree);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ViolationKind::HierarchyViolation);
    assert_eq!(out[0].field, "level");
}

#[rstest]
#[case::root(1)]
#[case::middle(2)]
#[case::leaf(3)]
fn self_parent_is_rejected(tree: Vec<CategoryRecord>, #[case] id: i64) {
    let mut me = tree[(id - 1) as usize].clone();
    me.parent_id = Some(id);
    me.level = 9;
    let out = validate_hierarchy(&me, &tree);
    assert_eq!(out[0].kind, ViolationKind::HierarchyViolation);
    assert_eq!(out[0].field, "parentId");
}

#[rstest]
#[case::depreciation_low("annualDepreciationPct", 9.99)]
#[case::depreciation_high("annualDepreciationPct", 50.01)]
#[case::life_low("usefulLifeYears", 1.0)]
#[case::life_high("usefulLifeYears", 51.0)]
#[case::residual_low("residualValuePct", 4.0)]
#[case::residual_high("residualValuePct", 30.5)]
fn attribute_out_of_bounds(#[case] field: &str, #[case] value: f64) {
    let mut c = category(1, 1, None);
    match field {
        "annualDepreciationPct" => c.annual_depreciation_pct = value,
        "usefulLifeYears" => c.useful_life_years = value,
        _ => c.residual_value_pct = value,
    }
    let out = validate_hierarchy(&c, &[]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ViolationKind::OutOfRange);
    assert_eq!(out[0].field, field);
}

#[rstest]
#[case::zeros("0000", ViolationKind::OutOfRange)]
#[case::short("336", ViolationKind::FormatLength)]
#[case::long("33611", ViolationKind::FormatLength)]
#[case::letter("33a1", ViolationKind::PatternMismatch)]
fn accounting_account_rejected(#[case] account: &str, #[case] expected: ViolationKind) {
    let mut c = category(1, 1, None);
    c.accounting_account = account.into();
    let out = validate_hierarchy(&c, &[]);
    assert_eq!(out[0].kind, expected);
    assert_eq!(out[0].field, "accountingAccount");
}

#[cfg(feature = "toml")]
#[test]
fn policy_from_toml_widens_bounds() {
    let policy = CategoryPolicy::from_toml_str(
        "[usefulLifeYears]\nmin = 1.0\nmax = 100.0\n",
    )
    .unwrap();
    let mut c = category(1, 1, None);
    c.useful_life_years = 75.0;
    assert!(validate_hierarchy_with(&policy, &c, &[]).is_empty());
}

#[test]
fn record_from_json() {
    let json = r#"{
        "id": 7, "name": "Computers", "level": 2, "parentId": 1,
        "accountingAccount": "3362", "annualDepreciationPct": 25,
        "usefulLifeYears": 4, "residualValuePct": 10
    }"#;
    let record: CategoryRecord = serde_json::from_str(json).unwrap();
    assert!(validate_hierarchy(&record, &[category(1, 1, None)]).is_empty());
}
