//! Observed sample series.

use ndarray::Array1;

use crate::error::{LogletError, Result};

/// An observed `(x, y)` series.
///
/// Both sequences have the same nonzero length and contain only finite
/// values. The series is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl SampleSeries {
    /// Create a validated series.
    ///
    /// # Errors
    ///
    /// * [`LogletError::DimensionMismatch`] if `x` and `y` differ in length
    /// * [`LogletError::InvalidInput`] if the series is empty or not finite
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LogletError::DimensionMismatch(format!(
                "x has {} samples, y has {}",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(LogletError::InvalidInput(
                "Sample series must contain at least one point".to_string(),
            ));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(LogletError::InvalidInput(
                "Sample series must contain only finite values".to_string(),
            ));
        }
        Ok(Self { x, y })
    }

    /// Create a validated series from slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::new(Array1::from_vec(x.to_vec()), Array1::from_vec(y.to_vec()))
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed series; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x_min(&self) -> f64 {
        self.x.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn x_max(&self) -> f64 {
        self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `max(x) - min(x)`.
    pub fn x_range(&self) -> f64 {
        self.x_max() - self.x_min()
    }

    pub fn y_max(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_extrema() {
        let s = SampleSeries::new(array![3.0, -1.0, 9.0], array![2.0, 7.0, 5.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.x_min(), -1.0);
        assert_eq!(s.x_max(), 9.0);
        assert_eq!(s.x_range(), 10.0);
        assert_eq!(s.y_max(), 7.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = SampleSeries::from_slices(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, LogletError::DimensionMismatch(_)));
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert!(matches!(
            SampleSeries::from_slices(&[], &[]),
            Err(LogletError::InvalidInput(_))
        ));
        assert!(matches!(
            SampleSeries::from_slices(&[0.0, f64::NAN], &[1.0, 2.0]),
            Err(LogletError::InvalidInput(_))
        ));
    }
}
