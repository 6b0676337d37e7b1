//! The annealing regression engine.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AnnealConfig, CoolingSchedule, SamplePool};
use crate::data::SampleSeries;
use crate::error::Result;
use crate::estimate::estimate_constraints;
use crate::models::CurveType;
use crate::parameters::{Constraints, ParameterSet};

/// Lowest energy found so far and the parameters that achieved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestResult {
    /// Root-mean-square error of `params` against the observed series
    pub energy: f64,

    /// Best parameters
    pub params: ParameterSet,
}

/// State recorded at the end of one annealing round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Zero-based round index
    pub round: usize,

    /// `anneal_sample_size` in effect during the round
    pub sample_size: usize,

    /// Number of candidates the bounds were contracted around
    pub elite_len: usize,

    /// Best energy after the round
    pub best_energy: f64,

    /// Contracted bounds the next round samples from
    pub bounds: Constraints,
}

/// Everything a completed run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealOutcome {
    /// Running best after the final round
    pub best: BestResult,

    /// Initial constraints the run started from
    pub constraints: Constraints,

    /// One summary per round
    pub rounds: Vec<RoundSummary>,
}

/// Monte-Carlo annealing regression for a sum of growth curves.
///
/// The engine is stateless between runs: it takes the running best to start
/// from and returns the improved best, so repeated runs continue to refine a
/// result without ever resetting it.
#[derive(Debug, Clone)]
pub struct AnnealingRegression {
    curve_type: CurveType,
    config: AnnealConfig,
}

impl AnnealingRegression {
    /// Create an engine for the given curve model and configuration.
    pub fn new(curve_type: CurveType, config: AnnealConfig) -> Self {
        Self { curve_type, config }
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Run the regression.
    ///
    /// The number of curves is taken from `start.params`. When `constraints`
    /// is `None` they are estimated from the data.
    ///
    /// # Arguments
    ///
    /// * `data` - Observed series
    /// * `start` - Running best to improve on
    /// * `constraints` - Initial search intervals, or `None` to estimate them
    /// * `rng` - Random number generator
    ///
    /// # Errors
    ///
    /// Configuration and constraint problems are reported before the first
    /// candidate is drawn. A zero steepness drawn during the run fails it.
    pub fn run<R: Rng + ?Sized>(
        &self,
        data: &SampleSeries,
        start: &BestResult,
        constraints: Option<&Constraints>,
        rng: &mut R,
    ) -> Result<AnnealOutcome> {
        self.config.validate()?;

        let n_curves = start.params.n_curves();
        let constraints = match constraints {
            Some(c) => c.clone(),
            None => estimate_constraints(data, n_curves)?,
        };
        constraints.validate(n_curves)?;

        info!(
            curve_type = %self.curve_type,
            n_curves,
            rounds = self.config.anneal_iterations,
            samples_per_round = self.config.mc_iterations,
            "starting annealing regression"
        );

        let mut bounds = constraints.to_flat();
        let mut best_params: Array1<f64> = start.params.to_array();
        let mut best_energy = start.energy;

        let mut schedule = CoolingSchedule::from_config(&self.config);
        let mut pool = SamplePool::new(self.config.mc_iterations, bounds.len());
        let mut rounds = Vec::with_capacity(self.config.anneal_iterations);

        for round in 0..self.config.anneal_iterations {
            pool.fill(&bounds, rng)?;
            pool.score(data.x(), data.y(), self.curve_type, self.config.parallel)?;

            if let Some(i) = pool.best_below(best_energy) {
                best_energy = pool.energies()[i];
                best_params.assign(&pool.sample(i));
            }

            let sample_size = schedule.sample_size();
            let elite_len = schedule.elite_len(pool.len());
            bounds = pool.contract(elite_len, best_params.view())?;
            schedule.advance();

            debug!(round, sample_size, elite_len, best_energy, "annealing round complete");

            rounds.push(RoundSummary {
                round,
                sample_size,
                elite_len,
                best_energy,
                bounds: Constraints::from_flat(&bounds)?,
            });
        }

        info!(best_energy, "annealing regression finished");

        Ok(AnnealOutcome {
            best: BestResult {
                energy: best_energy,
                params: ParameterSet::from_view(best_params.view())?,
            },
            constraints,
            rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogletError;
    use crate::parameters::{Bounds, ComponentBounds};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn start(n_curves: usize) -> BestResult {
        BestResult {
            energy: 1e23,
            params: ParameterSet::initial(n_curves),
        }
    }

    fn logistic_data() -> SampleSeries {
        let x = Array1::linspace(0.0, 10.0, 11);
        let y = x.mapv(|t| crate::models::logistic(t, 5.0, 10.0, 5.0).unwrap());
        SampleSeries::new(x, y).unwrap()
    }

    fn small_config() -> AnnealConfig {
        AnnealConfig::new()
            .with_mc_iterations(300)
            .with_anneal_iterations(8)
    }

    #[test]
    fn test_run_records_every_round() {
        let engine = AnnealingRegression::new(CurveType::Logistic, small_config());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = engine.run(&logistic_data(), &start(1), None, &mut rng).unwrap();

        assert_eq!(outcome.rounds.len(), 8);
        assert!(outcome.best.energy < 1e23);
        assert_eq!(outcome.rounds[0].sample_size, 100);
        assert_eq!(outcome.rounds.last().unwrap().best_energy, outcome.best.energy);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let engine = AnnealingRegression::new(CurveType::Gompertz, small_config());
        let data = logistic_data();
        let a = engine
            .run(&data, &start(1), None, &mut ChaCha8Rng::seed_from_u64(9))
            .unwrap();
        let b = engine
            .run(&data, &start(1), None, &mut ChaCha8Rng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data = logistic_data();
        let sequential = AnnealingRegression::new(CurveType::Logistic, small_config())
            .run(&data, &start(1), None, &mut ChaCha8Rng::seed_from_u64(4))
            .unwrap();
        let parallel =
            AnnealingRegression::new(CurveType::Logistic, small_config().with_parallel(true))
                .run(&data, &start(1), None, &mut ChaCha8Rng::seed_from_u64(4))
                .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_rejects_inverted_constraints_before_sampling() {
        let mut constraints = estimate_constraints(&logistic_data(), 1).unwrap();
        constraints.components[0].k = Bounds { min: 5.0, max: 1.0 };

        let engine = AnnealingRegression::new(CurveType::Logistic, small_config());
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut untouched = ChaCha8Rng::seed_from_u64(2);
        let err = engine
            .run(&logistic_data(), &start(1), Some(&constraints), &mut rng)
            .unwrap_err();
        assert!(matches!(err, LogletError::InvalidBounds { .. }));
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_three_curves_without_constraints() {
        let engine = AnnealingRegression::new(CurveType::Logistic, small_config());
        let err = engine
            .run(&logistic_data(), &start(3), None, &mut ChaCha8Rng::seed_from_u64(2))
            .unwrap_err();
        assert!(matches!(err, LogletError::MissingMidpointBounds { n_curves: 3 }));
    }

    #[test]
    fn test_constraint_count_must_match() {
        let constraints = Constraints::new(
            Bounds::fixed(0.0).unwrap(),
            vec![ComponentBounds::new(
                Bounds::new(1.0, 2.0).unwrap(),
                Bounds::new(1.0, 2.0).unwrap(),
                Bounds::new(1.0, 2.0).unwrap(),
            )],
        );
        let engine = AnnealingRegression::new(CurveType::Logistic, small_config());
        let err = engine
            .run(
                &logistic_data(),
                &start(2),
                Some(&constraints),
                &mut ChaCha8Rng::seed_from_u64(2),
            )
            .unwrap_err();
        assert!(matches!(err, LogletError::DimensionMismatch(_)));
    }
}
