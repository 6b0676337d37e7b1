//! Gompertz growth curve.

use super::check_steepness;
use crate::error::Result;

/// `ln(ln(81))`, the Gompertz counterpart of [`super::LN_81`].
pub const LN_LN_81: f64 = 1.4803421887365897;

/// Evaluate a Gompertz curve.
///
/// $f(t) = k \, e^{-e^{(t - b) \ln(\ln 81) / (-a)}}$
///
/// Returns a domain error if `a == 0`.
pub fn gompertz(t: f64, a: f64, k: f64, b: f64) -> Result<f64> {
    check_steepness(a)?;
    Ok(k * (-((LN_LN_81 / -a) * (t - b)).exp()).exp())
}
