//! Concrete curve parameters.

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::layout;
use crate::error::{LogletError, Result};

/// Parameters of a single curve component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Steepness (10%-90% rise time); must be nonzero
    pub a: f64,

    /// Asymptotic amplitude
    pub k: f64,

    /// Midpoint
    pub b: f64,
}

impl CurveParams {
    pub fn new(a: f64, k: f64, b: f64) -> Self {
        Self { a, k, b }
    }
}

/// A full parameter set: baseline offset plus one [`CurveParams`] per component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Baseline offset, added once per sample
    pub d: f64,

    /// Per-component parameters
    pub components: Vec<CurveParams>,
}

impl ParameterSet {
    pub fn new(d: f64, components: Vec<CurveParams>) -> Self {
        Self { d, components }
    }

    /// Starting parameters before any candidate has been accepted: `d = 0`,
    /// every `a`, `k` and `b` equal to one.
    pub fn initial(n_curves: usize) -> Self {
        Self::new(0.0, vec![CurveParams::new(1.0, 1.0, 1.0); n_curves])
    }

    /// Number of curve components.
    pub fn n_curves(&self) -> usize {
        self.components.len()
    }

    /// Flatten into the `[d, a0, k0, b0, ...]` layout.
    pub fn to_array(&self) -> Array1<f64> {
        let mut flat = Array1::zeros(layout::vector_len(self.n_curves()));
        flat[layout::D] = self.d;
        for (i, c) in self.components.iter().enumerate() {
            flat[layout::a(i)] = c.a;
            flat[layout::k(i)] = c.k;
            flat[layout::b(i)] = c.b;
        }
        flat
    }

    /// Rebuild a parameter set from the flat layout.
    pub fn from_view(flat: ArrayView1<f64>) -> Result<Self> {
        let n_curves = layout::curves_for_len(flat.len()).ok_or_else(|| {
            LogletError::DimensionMismatch(format!(
                "{} values do not fit the [d, a, k, b, ...] layout",
                flat.len()
            ))
        })?;

        let components = (0..n_curves)
            .map(|i| CurveParams::new(flat[layout::a(i)], flat[layout::k(i)], flat[layout::b(i)]))
            .collect();

        Ok(Self::new(flat[layout::D], components))
    }
}
