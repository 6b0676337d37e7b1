//! The fit result object.
//!
//! A [`LogletFit`] ties an observed series to a curve count, an annealing
//! configuration and the running best result. Regression returns an updated
//! copy, leaving the original untouched on failure.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::anneal::{AnnealConfig, AnnealingRegression, BestResult, RoundSummary};
use crate::data::SampleSeries;
use crate::error::{LogletError, Result};
use crate::models::CurveType;
use crate::parameters::{Constraints, ParameterSet};
use crate::series::{component_series, rms_error, synthesize};

/// Energy of a fit before any candidate has been accepted.
pub const ENERGY_SENTINEL: f64 = 1e23;

/// Number of points in the plotting curve returned by [`LogletFit::curve`].
pub const DEFAULT_CURVE_POINTS: usize = 256;

/// Annealing rounds used by [`LogletFit::new`].
pub const DEFAULT_FIT_ANNEAL_ITERATIONS: usize = 25;

/// Growth-curve fit of one observed series.
#[derive(Debug, Clone)]
pub struct LogletFit {
    data: SampleSeries,
    config: AnnealConfig,
    best: BestResult,
    curve_type: Option<CurveType>,
    constraints: Option<Constraints>,
    rounds: Vec<RoundSummary>,
}

/// Serializable snapshot of a fit, for an external persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    pub n_curves: usize,
    pub n_points: usize,
    pub curve_type: Option<CurveType>,
    pub best: BestResult,
    pub config: AnnealConfig,
    pub constraints: Option<Constraints>,
    pub rounds: Vec<RoundSummary>,
}

impl LogletFit {
    /// Create a fit of `n_curves` components with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use loglet_rs::{CurveType, LogletFit};
    /// use ndarray::Array1;
    /// use rand::SeedableRng;
    ///
    /// let x = Array1::linspace(0.0, 10.0, 11);
    /// let y = x.mapv(|t| 10.0 / (1.0 + (-(t - 5.0) * 81f64.ln() / 5.0).exp()));
    ///
    /// let fit = LogletFit::new(x, y, 1).unwrap();
    /// let config = fit.config().clone().with_mc_iterations(500).with_anneal_iterations(5);
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let fitted = fit
    ///     .with_config(config)
    ///     .regress(None, CurveType::Logistic, &mut rng)
    ///     .unwrap();
    /// assert!(fitted.best_energy() < 10.0);
    /// ```
    pub fn new(x: Array1<f64>, y: Array1<f64>, n_curves: usize) -> Result<Self> {
        Self::from_series(SampleSeries::new(x, y)?, n_curves)
    }

    /// Create a fit from an already validated series.
    pub fn from_series(data: SampleSeries, n_curves: usize) -> Result<Self> {
        if n_curves == 0 {
            return Err(LogletError::InvalidInput(
                "At least one curve is required".to_string(),
            ));
        }
        Ok(Self {
            data,
            config: AnnealConfig::default()
                .with_anneal_iterations(DEFAULT_FIT_ANNEAL_ITERATIONS),
            best: BestResult {
                energy: ENERGY_SENTINEL,
                params: ParameterSet::initial(n_curves),
            },
            curve_type: None,
            constraints: None,
            rounds: Vec::new(),
        })
    }

    /// Replace the annealing configuration.
    pub fn with_config(mut self, config: AnnealConfig) -> Self {
        self.config = config;
        self
    }

    pub fn data(&self) -> &SampleSeries {
        &self.data
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn n_curves(&self) -> usize {
        self.best.params.n_curves()
    }

    pub fn best(&self) -> &BestResult {
        &self.best
    }

    pub fn best_energy(&self) -> f64 {
        self.best.energy
    }

    pub fn best_params(&self) -> &ParameterSet {
        &self.best.params
    }

    /// Curve model of the last regression, if any.
    pub fn curve_type(&self) -> Option<CurveType> {
        self.curve_type
    }

    /// Constraints the last regression started from.
    pub fn constraints(&self) -> Option<&Constraints> {
        self.constraints.as_ref()
    }

    /// Round summaries of every regression run on this fit, in order.
    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    /// Run the annealing regression and return the updated fit.
    ///
    /// The search continues from this fit's running best, so calling
    /// `regress` again can only lower the best energy. A fit that already
    /// holds a result for one curve model cannot be continued with another.
    pub fn regress<R: Rng + ?Sized>(
        &self,
        constraints: Option<&Constraints>,
        curve_type: CurveType,
        rng: &mut R,
    ) -> Result<Self> {
        if let Some(previous) = self.curve_type {
            if previous != curve_type {
                return Err(LogletError::InvalidConfig(format!(
                    "Fit holds a {} result and cannot continue as {}",
                    previous, curve_type
                )));
            }
        }

        let engine = AnnealingRegression::new(curve_type, self.config.clone());
        let outcome = engine.run(&self.data, &self.best, constraints, rng)?;

        let mut fitted = self.clone();
        fitted.best = outcome.best;
        fitted.curve_type = Some(curve_type);
        fitted.constraints = Some(outcome.constraints);
        fitted.rounds.extend(outcome.rounds);
        Ok(fitted)
    }

    fn fitted_curve_type(&self) -> Result<CurveType> {
        self.curve_type.ok_or(LogletError::NotFitted)
    }

    /// Model prediction at each observed `x`.
    pub fn fitted_values(&self) -> Result<Array1<f64>> {
        synthesize(self.data.x(), &self.best.params, self.fitted_curve_type()?)
    }

    /// Observed minus predicted values.
    pub fn residuals(&self) -> Result<Array1<f64>> {
        Ok(self.data.y() - &self.fitted_values()?)
    }

    /// Residuals divided by their population standard deviation.
    ///
    /// All zeros when the residuals have no spread.
    pub fn standardised_residuals(&self) -> Result<Array1<f64>> {
        let residuals = self.residuals()?;
        let std = residuals.std(0.0);
        if std == 0.0 {
            return Ok(Array1::zeros(residuals.len()));
        }
        Ok(residuals / std)
    }

    /// RMS error of the best parameters, recomputed from the data.
    pub fn rms_error(&self) -> Result<f64> {
        rms_error(self.data.y(), &self.fitted_values()?)
    }

    /// Dense plotting curve: `n_points` evenly spaced times over the observed
    /// `x` range and the model prediction at each.
    pub fn curve(&self, n_points: usize) -> Result<(Array1<f64>, Array1<f64>)> {
        if n_points == 0 {
            return Err(LogletError::InvalidInput(
                "Curve needs at least one point".to_string(),
            ));
        }
        let t = Array1::linspace(self.data.x_min(), self.data.x_max(), n_points);
        let y = synthesize(&t, &self.best.params, self.fitted_curve_type()?)?;
        Ok((t, y))
    }

    /// Each component of the best fit evaluated separately at `x`.
    pub fn components(&self, x: &Array1<f64>) -> Result<Vec<Array1<f64>>> {
        component_series(x, &self.best.params, self.fitted_curve_type()?)
    }

    /// Serializable snapshot.
    pub fn summary(&self) -> FitSummary {
        FitSummary {
            n_curves: self.n_curves(),
            n_points: self.data.len(),
            curve_type: self.curve_type,
            best: self.best.clone(),
            config: self.config.clone(),
            constraints: self.constraints.clone(),
            rounds: self.rounds.clone(),
        }
    }
}

impl fmt::Display for LogletFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loglet Fit Result:")?;
        match self.curve_type {
            Some(curve_type) => writeln!(f, "  Curve type: {}", curve_type)?,
            None => writeln!(f, "  Curve type: (not fitted)")?,
        }
        writeln!(f, "  Points: {}", self.data.len())?;
        writeln!(f, "  Rounds: {}", self.rounds.len())?;
        writeln!(f, "  Best RMS error: {:.6e}", self.best.energy)?;
        writeln!(f, "  Baseline d: {:.6}", self.best.params.d)?;
        for (i, c) in self.best.params.components.iter().enumerate() {
            writeln!(
                f,
                "  Curve {}: a = {:.6}, k = {:.6}, b = {:.6}",
                i, c.a, c.k, c.b
            )?;
        }
        Ok(())
    }
}
