//! Search constraints for a multi-curve regression.
//!
//! [`Constraints`] holds one baseline interval and one [`ComponentBounds`]
//! record per curve, indexed by component position.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::layout;
use crate::error::{LogletError, Result};

/// Search intervals for the three parameters of one curve component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentBounds {
    /// Steepness interval
    pub a: Bounds,

    /// Amplitude interval
    pub k: Bounds,

    /// Midpoint interval
    pub b: Bounds,
}

impl ComponentBounds {
    /// Create a component record from its three intervals.
    pub fn new(a: Bounds, k: Bounds, b: Bounds) -> Self {
        Self { a, k, b }
    }

    /// Validate the three intervals.
    ///
    /// A steepness interval pinned at zero can only ever produce zero
    /// steepness and is rejected as a domain error.
    pub fn validate(&self) -> Result<()> {
        self.a.validate()?;
        self.k.validate()?;
        self.b.validate()?;
        if self.a.min == 0.0 && self.a.max == 0.0 {
            return Err(LogletError::DomainError(
                "steepness bounds [0, 0] admit only a == 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Search intervals for a whole regression: the baseline `d` plus one
/// [`ComponentBounds`] per curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Baseline offset interval, shared by all components
    pub d: Bounds,

    /// Per-component intervals
    pub components: Vec<ComponentBounds>,
}

impl Constraints {
    /// Create constraints from a baseline interval and per-component records.
    pub fn new(d: Bounds, components: Vec<ComponentBounds>) -> Self {
        Self { d, components }
    }

    /// Number of curve components covered.
    pub fn n_curves(&self) -> usize {
        self.components.len()
    }

    /// Check the constraints against a regression with `n_curves` components.
    pub fn validate(&self, n_curves: usize) -> Result<()> {
        if self.components.len() != n_curves {
            return Err(LogletError::DimensionMismatch(format!(
                "Constraints cover {} curves, regression uses {}",
                self.components.len(),
                n_curves
            )));
        }
        self.d.validate()?;
        for component in &self.components {
            component.validate()?;
        }
        Ok(())
    }

    /// Flatten into the `[d, a0, k0, b0, ...]` layout.
    pub fn to_flat(&self) -> Vec<Bounds> {
        let mut flat = Vec::with_capacity(layout::vector_len(self.n_curves()));
        flat.push(self.d);
        for c in &self.components {
            flat.push(c.a);
            flat.push(c.k);
            flat.push(c.b);
        }
        flat
    }

    /// Rebuild constraints from the flat layout.
    pub fn from_flat(flat: &[Bounds]) -> Result<Self> {
        let n_curves = layout::curves_for_len(flat.len()).ok_or_else(|| {
            LogletError::DimensionMismatch(format!(
                "{} bounds do not fit the [d, a, k, b, ...] layout",
                flat.len()
            ))
        })?;

        let components = (0..n_curves)
            .map(|i| {
                ComponentBounds::new(
                    flat[layout::a(i)],
                    flat[layout::k(i)],
                    flat[layout::b(i)],
                )
            })
            .collect();

        Ok(Self::new(flat[layout::D], components))
    }

    /// Load constraints from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize constraints to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
