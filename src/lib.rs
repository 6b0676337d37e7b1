//! # loglet-rs
//!
//! `loglet-rs` fits a sum of sigmoidal growth curves (logistic "loglets" or
//! Gompertz curves) to an observed time series using a Monte-Carlo
//! simulated-annealing search instead of gradient-based regression.
//!
//! The library provides:
//! - Logistic and Gompertz curve models
//! - Data-driven default search constraints
//! - The annealing regression engine with a geometric cooling schedule
//! - Series synthesis helpers for plotting and reporting
//!
//! ## Basic Usage
//!
//! ```
//! use loglet_rs::{AnnealConfig, CurveType, LogletFit};
//! use ndarray::Array1;
//! use rand::SeedableRng;
//!
//! let x = Array1::linspace(1900.0, 2000.0, 21);
//! let y = x.mapv(|t| loglet_rs::models::logistic(t, 40.0, 100.0, 1950.0).unwrap());
//!
//! let config = AnnealConfig::new()
//!     .with_mc_iterations(1000)
//!     .with_anneal_iterations(10);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let fit = LogletFit::new(x, y, 1)
//!     .unwrap()
//!     .with_config(config)
//!     .regress(None, CurveType::Logistic, &mut rng)
//!     .unwrap();
//! println!("{}", fit);
//! ```

pub mod anneal;
pub mod data;
pub mod error;
pub mod estimate;
pub mod fit;
pub mod models;
pub mod parameters;
pub mod series;

// Re-exports for convenience
pub use anneal::{AnnealConfig, AnnealingRegression, BestResult, RoundSummary};
pub use data::SampleSeries;
pub use error::{LogletError, Result};
pub use estimate::{estimate_constraints, estimate_constraints_with_midpoints};
pub use fit::{FitSummary, LogletFit};
pub use models::{gompertz, logistic, CurveType};
pub use parameters::{Bounds, ComponentBounds, Constraints, CurveParams, ParameterSet};
pub use series::{calculate_series, calculate_series_double, DoubleSeries};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
