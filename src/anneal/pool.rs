//! Per-round candidate pool and bound contraction.

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use rayon::prelude::*;

use super::sampler::draw_candidate;
use crate::error::{LogletError, Result};
use crate::models::CurveType;
use crate::parameters::Bounds;
use crate::series::energy_flat;

/// Candidates drawn in one annealing round together with their energies.
///
/// Row `i` of the sample matrix is the `i`-th draw of the round in flat
/// `[d, a0, k0, b0, ...]` layout. The buffers are reused across rounds.
#[derive(Debug, Clone)]
pub struct SamplePool {
    samples: Array2<f64>,
    energies: Vec<f64>,
}

impl SamplePool {
    /// Allocate a pool for `size` candidates of `dim` parameters each.
    pub fn new(size: usize, dim: usize) -> Self {
        Self {
            samples: Array2::zeros((size, dim)),
            energies: vec![f64::INFINITY; size],
        }
    }

    /// Number of candidates per round.
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn sample(&self, index: usize) -> ArrayView1<'_, f64> {
        self.samples.row(index)
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// Draw a fresh set of candidates from `bounds`, overwriting the previous round.
    pub fn fill<R: Rng + ?Sized>(&mut self, bounds: &[Bounds], rng: &mut R) -> Result<()> {
        if bounds.len() != self.samples.ncols() {
            return Err(LogletError::DimensionMismatch(format!(
                "Pool holds {} parameters, got {} bounds",
                self.samples.ncols(),
                bounds.len()
            )));
        }
        for row in self.samples.rows_mut() {
            draw_candidate(bounds, row, rng);
        }
        self.energies.fill(f64::INFINITY);
        Ok(())
    }

    /// Score every candidate against the observed series.
    pub fn score(
        &mut self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        curve_type: CurveType,
        parallel: bool,
    ) -> Result<()> {
        let samples = &self.samples;
        if parallel {
            self.energies
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(i, energy)| -> Result<()> {
                    *energy = energy_flat(x, y, samples.row(i), curve_type)?;
                    Ok(())
                })
        } else {
            for (energy, row) in self.energies.iter_mut().zip(samples.rows()) {
                *energy = energy_flat(x, y, row, curve_type)?;
            }
            Ok(())
        }
    }

    /// Index of the first candidate with the lowest energy, if it beats `threshold`.
    pub fn best_below(&self, threshold: f64) -> Option<usize> {
        let mut best = None;
        let mut best_energy = threshold;
        for (i, &e) in self.energies.iter().enumerate() {
            if e < best_energy {
                best_energy = e;
                best = Some(i);
            }
        }
        best
    }

    /// Candidate indices sorted by ascending energy; ties keep draw order.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&i, &j| self.energies[i].total_cmp(&self.energies[j]));
        order
    }

    /// Contracted bounds: for every parameter, the span of its values among
    /// the `elite_len` lowest-energy candidates, widened to contain `best`.
    pub fn contract(&self, elite_len: usize, best: ArrayView1<f64>) -> Result<Vec<Bounds>> {
        if best.len() != self.samples.ncols() {
            return Err(LogletError::DimensionMismatch(format!(
                "Pool holds {} parameters, best has {}",
                self.samples.ncols(),
                best.len()
            )));
        }

        let ranking = self.ranking();
        let elite = &ranking[..elite_len.min(ranking.len())];

        Ok((0..self.samples.ncols())
            .map(|p| {
                let mut bound = Bounds {
                    min: best[p],
                    max: best[p],
                };
                for &i in elite {
                    bound.include(self.samples[[i, p]]);
                }
                bound
            })
            .collect())
    }
}
