//! Series synthesis: evaluating curve parameters over a sample grid.
//!
//! The single- and double-curve helpers produce plotting-ready series. The
//! K-component functions are what the annealing engine scores candidates with.

use ndarray::{Array1, ArrayView1};

use crate::error::{LogletError, Result};
use crate::models::CurveType;
use crate::parameters::{layout, CurveParams, ParameterSet};

/// Output of [`calculate_series_double`].
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleSeries {
    /// Elementwise sum of both components
    pub total: Array1<f64>,

    /// First component alone
    pub first: Array1<f64>,

    /// Second component alone
    pub second: Array1<f64>,
}

/// Evaluate one curve at every point of `x`.
pub fn calculate_series(
    x: &Array1<f64>,
    params: CurveParams,
    curve_type: CurveType,
) -> Result<Array1<f64>> {
    let values = x
        .iter()
        .map(|&t| curve_type.evaluate(t, params.a, params.k, params.b))
        .collect::<Result<Vec<f64>>>()?;
    Ok(Array1::from_vec(values))
}

/// Evaluate two curves at every point of `x`, returning their sum together
/// with each individual component.
pub fn calculate_series_double(
    x: &Array1<f64>,
    first: CurveParams,
    second: CurveParams,
    curve_type: CurveType,
) -> Result<DoubleSeries> {
    let first = calculate_series(x, first, curve_type)?;
    let second = calculate_series(x, second, curve_type)?;
    let total = &first + &second;
    Ok(DoubleSeries {
        total,
        first,
        second,
    })
}

/// Evaluate every component of `params` separately (without the baseline).
pub fn component_series(
    x: &Array1<f64>,
    params: &ParameterSet,
    curve_type: CurveType,
) -> Result<Vec<Array1<f64>>> {
    params
        .components
        .iter()
        .map(|&c| calculate_series(x, c, curve_type))
        .collect()
}

/// Evaluate the full model: the sum of all components plus the baseline `d`.
pub fn synthesize(
    x: &Array1<f64>,
    params: &ParameterSet,
    curve_type: CurveType,
) -> Result<Array1<f64>> {
    synthesize_flat(x, params.to_array().view(), curve_type)
}

/// [`synthesize`] over a flat `[d, a0, k0, b0, ...]` parameter vector.
pub fn synthesize_flat(
    x: &Array1<f64>,
    params: ArrayView1<f64>,
    curve_type: CurveType,
) -> Result<Array1<f64>> {
    let n_curves = layout::curves_for_len(params.len()).ok_or_else(|| {
        LogletError::DimensionMismatch(format!(
            "{} values do not fit the [d, a, k, b, ...] layout",
            params.len()
        ))
    })?;
    let d = params[layout::D];

    let values = x
        .iter()
        .map(|&t| -> Result<f64> {
            let mut y = d;
            for i in 0..n_curves {
                y += curve_type.evaluate(
                    t,
                    params[layout::a(i)],
                    params[layout::k(i)],
                    params[layout::b(i)],
                )?;
            }
            Ok(y)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Array1::from_vec(values))
}

/// Root-mean-square error between an observed and a predicted series.
pub fn rms_error(observed: &Array1<f64>, predicted: &Array1<f64>) -> Result<f64> {
    if observed.len() != predicted.len() {
        return Err(LogletError::DimensionMismatch(format!(
            "observed has {} samples, predicted has {}",
            observed.len(),
            predicted.len()
        )));
    }
    if observed.is_empty() {
        return Err(LogletError::InvalidInput(
            "Cannot score an empty series".to_string(),
        ));
    }

    let sum_sq: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(o, p)| (o - p).powi(2))
        .sum();
    Ok((sum_sq / observed.len() as f64).sqrt())
}

/// Energy of a flat candidate: the RMS error of its synthesized series.
pub fn energy_flat(
    x: &Array1<f64>,
    y: &Array1<f64>,
    params: ArrayView1<f64>,
    curve_type: CurveType,
) -> Result<f64> {
    let predicted = synthesize_flat(x, params, curve_type)?;
    rms_error(y, &predicted)
}
