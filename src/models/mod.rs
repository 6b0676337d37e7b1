//! Sigmoidal growth curve models.
//!
//! Each model maps a time value and the three curve parameters to a predicted
//! value:
//!
//! * `a` - steepness, the time the curve takes to rise from 10% to 90% of `k`
//! * `k` - asymptotic amplitude
//! * `b` - midpoint (time of inflection for the logistic curve)
//!
//! Both models reject `a == 0` with a [`LogletError::DomainError`] instead of
//! silently producing infinities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LogletError, Result};

mod gompertz;
mod logistic;

pub use gompertz::{gompertz, LN_LN_81};
pub use logistic::{logistic, LN_81};

/// The curve model used for every component of a regression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// Logistic growth ("loglet").
    #[default]
    Logistic,

    /// Gompertz growth.
    Gompertz,
}

impl CurveType {
    /// Evaluate the selected model at `t`.
    pub fn evaluate(self, t: f64, a: f64, k: f64, b: f64) -> Result<f64> {
        match self {
            CurveType::Logistic => logistic(t, a, k, b),
            CurveType::Gompertz => gompertz(t, a, k, b),
        }
    }

    /// Name of the model as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            CurveType::Logistic => "logistic",
            CurveType::Gompertz => "gompertz",
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveType {
    type Err = LogletError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistic" | "loglet" => Ok(CurveType::Logistic),
            "gompertz" => Ok(CurveType::Gompertz),
            other => Err(LogletError::InvalidInput(format!(
                "Unknown curve type '{}', expected 'logistic' or 'gompertz'",
                other
            ))),
        }
    }
}

fn check_steepness(a: f64) -> Result<()> {
    if a == 0.0 {
        return Err(LogletError::DomainError(
            "steepness `a` must be nonzero".to_string(),
        ));
    }
    Ok(())
}
