//! Monte-Carlo annealing regression.
//!
//! Each annealing round draws `mc_iterations` candidates uniformly from the
//! current search intervals, scores them by RMS error, and then contracts every
//! interval to the span of the best `anneal_sample_size` candidates (widened
//! to keep the best-known solution inside). The elite size shrinks
//! geometrically from round to round, which is the cooling schedule.

use serde::{Deserialize, Serialize};

use crate::error::{LogletError, Result};

mod engine;
mod pool;
mod sampler;

pub use engine::{AnnealOutcome, AnnealingRegression, BestResult, RoundSummary};
pub use pool::SamplePool;
pub use sampler::draw_candidate;

/// Configuration of an annealing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Candidates drawn per annealing round. Default: 5000
    pub mc_iterations: usize,

    /// Number of annealing rounds. Default: 50
    pub anneal_iterations: usize,

    /// Initial elite size used to contract the bounds. Default: 100
    pub anneal_sample_size: usize,

    /// Elite size the cooling schedule decays towards. Default: 20
    pub t_min: f64,

    /// Score the candidates of a round on the rayon thread pool. Default: false
    pub parallel: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            mc_iterations: 5000,
            anneal_iterations: 50,
            anneal_sample_size: 100,
            t_min: 20.0,
            parallel: false,
        }
    }
}

impl AnnealConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mc_iterations(mut self, mc_iterations: usize) -> Self {
        self.mc_iterations = mc_iterations;
        self
    }

    pub fn with_anneal_iterations(mut self, anneal_iterations: usize) -> Self {
        self.anneal_iterations = anneal_iterations;
        self
    }

    pub fn with_anneal_sample_size(mut self, anneal_sample_size: usize) -> Self {
        self.anneal_sample_size = anneal_sample_size;
        self
    }

    pub fn with_t_min(mut self, t_min: f64) -> Self {
        self.t_min = t_min;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.mc_iterations == 0 {
            return Err(LogletError::InvalidConfig(
                "mc_iterations must be at least 1".to_string(),
            ));
        }
        if self.anneal_iterations == 0 {
            return Err(LogletError::InvalidConfig(
                "anneal_iterations must be at least 1".to_string(),
            ));
        }
        if self.anneal_sample_size == 0 {
            return Err(LogletError::InvalidConfig(
                "anneal_sample_size must be at least 1".to_string(),
            ));
        }
        if !self.t_min.is_finite() || self.t_min <= 0.0 {
            return Err(LogletError::InvalidConfig(format!(
                "t_min must be positive and finite, got {}",
                self.t_min
            )));
        }
        Ok(())
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Geometric cooling schedule for the elite size.
///
/// The decay factor `alpha = (t_min / initial) ^ (1 / rounds)` is fixed up
/// front; each round the size is multiplied by `alpha` and truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    alpha: f64,
    sample_size: usize,
}

impl CoolingSchedule {
    pub fn new(initial_sample_size: usize, t_min: f64, rounds: usize) -> Self {
        let alpha = (t_min / initial_sample_size as f64).powf(1.0 / rounds as f64);
        Self {
            alpha,
            sample_size: initial_sample_size,
        }
    }

    /// Schedule for a validated configuration.
    pub fn from_config(config: &AnnealConfig) -> Self {
        Self::new(
            config.anneal_sample_size,
            config.t_min,
            config.anneal_iterations,
        )
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current `anneal_sample_size`.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of elite samples to use from a pool of `pool_len` candidates.
    ///
    /// Always at least one and never more than the pool holds.
    pub fn elite_len(&self, pool_len: usize) -> usize {
        self.sample_size.max(1).min(pool_len)
    }

    /// Cool by one round.
    pub fn advance(&mut self) {
        self.sample_size = (self.sample_size as f64 * self.alpha) as usize;
    }
}
