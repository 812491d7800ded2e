//! Category hierarchy and attribute validation
//!
//! A category may hang under a parent category. The child must sit strictly
//! deeper than its parent, and its accounting attributes must fall within the
//! bounds of a [`CategoryPolicy`].
//!
//! Only the immediate parent is inspected. A loop through a grandparent
//! (A → B → A with compatible levels) is not detected.

use serde::{Deserialize, Serialize};

use crate::checks::{at_least, digits, exact_length, not_all_zero};
use crate::config::CategoryPolicy;
use crate::foundation::{ValidateExt, Violation, check_field};

/// Identifier of a category record.
pub type CategoryId = i64;

/// The subset of a category record that validation looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Identifier; `None` for a record that has not been stored yet.
    #[serde(default)]
    pub id: Option<CategoryId>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Depth in the hierarchy, starting at 1.
    pub level: i32,
    /// Parent category, if any.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    /// Four-digit accounting account.
    pub accounting_account: String,
    /// Annual depreciation, in percent.
    pub annual_depreciation_pct: f64,
    /// Useful life, in years.
    pub useful_life_years: f64,
    /// Residual value, in percent.
    pub residual_value_pct: f64,
}

impl CategoryRecord {
    /// Returns `true` if the record names itself as parent.
    pub fn is_self_parented(&self) -> bool {
        self.id.is_some() && self.parent_id == self.id
    }
}

/// Validates a category against `all_existing` using the default policy.
///
/// # Examples
///
/// ```
/// use patrimony_validator::foundation::ViolationKind;
/// use patrimony_validator::hierarchy::{CategoryRecord, validate_hierarchy};
///
/// let root = CategoryRecord {
///     id: Some(1),
///     name: "Furniture".into(),
///     level: 1,
///     parent_id: None,
///     accounting_account: "1503".into(),
///     annual_depreciation_pct: 10.0,
///     useful_life_years: 10.0,
///     residual_value_pct: 10.0,
/// };
/// let child = CategoryRecord { id: Some(2), level: 1, parent_id: Some(1), ..root.clone() };
///
/// let out = validate_hierarchy(&child, &[root.clone()]);
/// assert_eq!(out[0].kind, ViolationKind::HierarchyViolation);
///
/// let child = CategoryRecord { level: 2, ..child };
/// assert!(validate_hierarchy(&child, &[root]).is_empty());
/// ```
pub fn validate_hierarchy(
    candidate: &CategoryRecord,
    all_existing: &[CategoryRecord],
) -> Vec<Violation> {
    validate_hierarchy_with(&CategoryPolicy::default(), candidate, all_existing)
}

/// Validates a category against `all_existing` using `policy`.
///
/// Violations follow field order: `parentId`, `level`, `accountingAccount`,
/// `annualDepreciationPct`, `usefulLifeYears`, `residualValuePct`.
pub fn validate_hierarchy_with(
    policy: &CategoryPolicy,
    candidate: &CategoryRecord,
    all_existing: &[CategoryRecord],
) -> Vec<Violation> {
    let mut out = Vec::new();

    let parent = if candidate.is_self_parented() {
        out.push(
            Violation::hierarchy("A category cannot be its own parent").with_field("parentId"),
        );
        None
    } else if let Some(parent_id) = candidate.parent_id {
        let found = all_existing.iter().find(|c| c.id == Some(parent_id));
        if found.is_none() {
            out.push(
                Violation::hierarchy("Parent category does not exist")
                    .with_field("parentId")
                    .with_param("parentId", parent_id.to_string()),
            );
        }
        found
    } else {
        None
    };

    check_field(&mut out, "level", &at_least(policy.min_level), &candidate.level);
    if let Some(parent) = parent {
        if candidate.level <= parent.level {
            out.push(
                Violation::hierarchy(format!(
                    "Level must be greater than the parent's level ({})",
                    parent.level
                ))
                .with_field("level")
                .with_param("parentLevel", parent.level.to_string())
                .with_param("actual", candidate.level.to_string()),
            );
        }
    }

    let account = exact_length(4).and(digits()).and(not_all_zero());
    check_field(
        &mut out,
        "accountingAccount",
        &account,
        candidate.accounting_account.as_str(),
    );

    check_field(
        &mut out,
        "annualDepreciationPct",
        &policy.annual_depreciation_pct.checker(),
        &candidate.annual_depreciation_pct,
    );
    check_field(
        &mut out,
        "usefulLifeYears",
        &policy.useful_life_years.checker(),
        &candidate.useful_life_years,
    );
    check_field(
        &mut out,
        "residualValuePct",
        &policy.residual_value_pct.checker(),
        &candidate.residual_value_pct,
    );

    tracing::trace!(
        category_id = ?candidate.id,
        parent_id = ?candidate.parent_id,
        violations = out.len(),
        "validated category"
    );
    out
}
