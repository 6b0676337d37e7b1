//! Default search constraints derived from the data.
//!
//! The heuristics mirror the defaults of the Loglet Lab web tool:
//!
//! * baseline `d` is pinned to `[0, 0]`
//! * amplitude `k` spans `[0.5 max(y) / K, 4 max(y) / K]`
//! * steepness `a` spans `[range(x) / 8K, range(x) / K]`
//! * midpoint `b` is only defined for one or two curves
//!
//! Three or more curves need caller-supplied midpoint intervals, either as
//! complete [`Constraints`] or through [`estimate_constraints_with_midpoints`].

use crate::data::SampleSeries;
use crate::error::{LogletError, Result};
use crate::parameters::{Bounds, ComponentBounds, Constraints};

/// Estimate constraints for a fit of `n_curves` components.
///
/// # Errors
///
/// * [`LogletError::InvalidInput`] if `n_curves` is zero
/// * [`LogletError::MissingMidpointBounds`] if `n_curves >= 3`
/// * [`LogletError::InvalidBounds`] if the data produce an inverted interval
///   (for example a series whose maximum is negative)
pub fn estimate_constraints(data: &SampleSeries, n_curves: usize) -> Result<Constraints> {
    let midpoints = estimate_midpoints(data, n_curves)?;
    estimate_constraints_with_midpoints(data, n_curves, &midpoints)
}

/// Estimate baseline, steepness and amplitude intervals, taking the midpoint
/// intervals from the caller.
pub fn estimate_constraints_with_midpoints(
    data: &SampleSeries,
    n_curves: usize,
    midpoints: &[Bounds],
) -> Result<Constraints> {
    check_curve_count(n_curves)?;
    if midpoints.len() != n_curves {
        return Err(LogletError::DimensionMismatch(format!(
            "Expected {} midpoint intervals, got {}",
            n_curves,
            midpoints.len()
        )));
    }

    let n = n_curves as f64;
    let y_max = data.y_max();
    let x_range = data.x_range();

    let components = midpoints
        .iter()
        .map(|&b| -> Result<ComponentBounds> {
            Ok(ComponentBounds::new(
                Bounds::new(x_range / (8.0 * n), x_range / n)?,
                Bounds::new(0.5 * y_max / n, 4.0 * y_max / n)?,
                b,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Constraints::new(Bounds::fixed(0.0)?, components))
}

/// Default midpoint intervals for one or two curves.
fn estimate_midpoints(data: &SampleSeries, n_curves: usize) -> Result<Vec<Bounds>> {
    check_curve_count(n_curves)?;

    let x_min = data.x_min();
    let x_max = data.x_max();
    let x_mid = x_min + data.x_range() / 2.0;

    match n_curves {
        1 => Ok(vec![Bounds::new(x_min, 2.0 * x_max - x_min)?]),
        2 => Ok(vec![Bounds::new(x_min, x_mid)?, Bounds::new(x_mid, x_max)?]),
        _ => Err(LogletError::MissingMidpointBounds { n_curves }),
    }
}

fn check_curve_count(n_curves: usize) -> Result<()> {
    if n_curves == 0 {
        return Err(LogletError::InvalidInput(
            "At least one curve is required".to_string(),
        ));
    }
    Ok(())
}
