//! Logistic ("loglet") growth curve.

use super::check_steepness;
use crate::error::Result;

/// Natural logarithm of 81.
///
/// Scaling the exponent by `ln(81) / a` makes `a` the 10%-90% rise time.
pub const LN_81: f64 = 4.394449154672439;

/// Evaluate a logistic curve.
///
/// $f(t) = \frac{k}{1 + e^{(t - b) \ln(81) / (-a)}}$
///
/// # Arguments
///
/// * `t` - Time value
/// * `a` - Steepness (must be nonzero)
/// * `k` - Asymptotic amplitude
/// * `b` - Midpoint, where the curve equals `k / 2`
///
/// # Returns
///
/// * The curve value, or a domain error if `a == 0`
pub fn logistic(t: f64, a: f64, k: f64, b: f64) -> Result<f64> {
    check_steepness(a)?;
    Ok(k / (1.0 + ((t - b) * (LN_81 / -a)).exp()))
}
