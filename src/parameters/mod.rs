//! # Parameter System
//!
//! Curve parameters and the search intervals the annealing engine samples from.
//!
//! ## Core Components
//!
//! - [`Bounds`]: a validated `[min, max]` search interval for one scalar
//! - [`ComponentBounds`] and [`Constraints`]: per-curve and baseline intervals
//! - [`CurveParams`] and [`ParameterSet`]: one concrete candidate or fit
//!
//! ## Flat Layout
//!
//! The engine works on flat vectors. Both [`Constraints`] and [`ParameterSet`]
//! convert to and from the layout `[d, a0, k0, b0, a1, k1, b1, ...]`, see
//! [`layout`].
//!
//! ```rust
//! use loglet_rs::parameters::{Bounds, ComponentBounds, Constraints};
//!
//! let constraints = Constraints::new(
//!     Bounds::new(0.0, 0.0).unwrap(),
//!     vec![ComponentBounds::new(
//!         Bounds::new(1.0, 10.0).unwrap(),
//!         Bounds::new(2.5, 20.0).unwrap(),
//!         Bounds::new(0.0, 20.0).unwrap(),
//!     )],
//! );
//! assert_eq!(constraints.n_curves(), 1);
//! assert_eq!(constraints.to_flat().len(), 4);
//! ```

pub mod bounds;
pub mod constraints;
pub mod parameter_set;

pub use bounds::Bounds;
pub use constraints::{ComponentBounds, Constraints};
pub use parameter_set::{CurveParams, ParameterSet};

/// Index arithmetic for the flat parameter layout.
pub mod layout {
    /// Number of scalars per curve component (`a`, `k`, `b`).
    pub const PARAMS_PER_CURVE: usize = 3;

    /// Position of the baseline offset `d`.
    pub const D: usize = 0;

    /// Length of a flat vector for `n_curves` components.
    pub fn vector_len(n_curves: usize) -> usize {
        1 + PARAMS_PER_CURVE * n_curves
    }

    /// Position of the steepness `a` of component `i`.
    pub fn a(i: usize) -> usize {
        1 + PARAMS_PER_CURVE * i
    }

    /// Position of the amplitude `k` of component `i`.
    pub fn k(i: usize) -> usize {
        2 + PARAMS_PER_CURVE * i
    }

    /// Position of the midpoint `b` of component `i`.
    pub fn b(i: usize) -> usize {
        3 + PARAMS_PER_CURVE * i
    }

    /// Component count for a flat vector of length `len`, if the length fits the layout.
    pub fn curves_for_len(len: usize) -> Option<usize> {
        if len >= 1 && (len - 1) % PARAMS_PER_CURVE == 0 {
            Some((len - 1) / PARAMS_PER_CURVE)
        } else {
            None
        }
    }
}
