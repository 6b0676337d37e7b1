//! Uniform candidate generation.

use ndarray::ArrayViewMut1;
use rand::Rng;

use crate::parameters::Bounds;

/// Fill `candidate` with one uniform draw from each interval in `bounds`.
///
/// Draws happen in flat-layout order (`d`, then `a`, `k`, `b` per component),
/// so a seeded generator always yields the same candidate sequence.
pub fn draw_candidate<R: Rng + ?Sized>(
    bounds: &[Bounds],
    mut candidate: ArrayViewMut1<f64>,
    rng: &mut R,
) {
    for (value, bound) in candidate.iter_mut().zip(bounds) {
        *value = bound.sample(rng);
    }
}
