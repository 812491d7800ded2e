//! Domain bounds for category records
//!
//! The defaults are the accounting rules the console ships with. Deployments
//! that need different bounds load a [`CategoryPolicy`] from JSON or TOML;
//! missing keys fall back to the defaults.
//!
//! ```toml
//! minLevel = 1
//!
//! [annualDepreciationPct]
//! min = 10.0
//! max = 50.0
//! ```

use serde::{Deserialize, Serialize};

use crate::checks::{InRange, in_range};
use crate::foundation::SpecError;

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Creates bounds.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range checker for these bounds.
    pub fn checker(self) -> InRange<f64> {
        in_range(self.min, self.max)
    }

    fn check(self, name: &str) -> Result<(), SpecError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(SpecError::InvalidPolicy(format!(
                "{name}: min {} must not exceed max {}",
                self.min, self.max
            )))
        }
    }
}

/// Bounds applied to category records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPolicy {
    /// Lowest allowed hierarchy level.
    pub min_level: i32,
    /// Annual depreciation, in percent.
    pub annual_depreciation_pct: Bounds,
    /// Useful life, in years.
    pub useful_life_years: Bounds,
    /// Residual value, in percent of acquisition cost.
    pub residual_value_pct: Bounds,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            min_level: 1,
            annual_depreciation_pct: Bounds::new(10.0, 50.0),
            useful_life_years: Bounds::new(2.0, 50.0),
            residual_value_pct: Bounds::new(5.0, 30.0),
        }
    }
}

impl CategoryPolicy {
    /// Checks that every bound is well formed.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.annual_depreciation_pct.check("annualDepreciationPct")?;
        self.useful_life_years.check("usefulLifeYears")?;
        self.residual_value_pct.check("residualValuePct")
    }

    /// Parses and checks a JSON policy.
    pub fn from_json_str(input: &str) -> Result<Self, SpecError> {
        let policy: Self =
            serde_json::from_str(input).map_err(|e| SpecError::InvalidPolicy(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parses and checks a TOML policy.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self, SpecError> {
        let policy: Self =
            toml::from_str(input).map_err(|e| SpecError::InvalidPolicy(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }
}
