//! Search interval for a single scalar parameter.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LogletError, Result};

/// A closed `[min, max]` search interval.
///
/// Intervals are always finite with `min <= max`. `min == max` is allowed and
/// pins the parameter to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Lower end of the interval
    pub min: f64,

    /// Upper end of the interval
    pub max: f64,
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper {
            min: f64,
            max: f64,
        }

        let helper = BoundsHelper::deserialize(deserializer)?;
        Bounds::new(helper.min, helper.max).map_err(serde::de::Error::custom)
    }
}

impl Bounds {
    /// Create a new interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use loglet_rs::parameters::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 10.0).unwrap();
    /// assert_eq!(bounds.width(), 10.0);
    /// assert!(Bounds::new(2.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// An interval containing exactly `value`.
    pub fn fixed(value: f64) -> Result<Self> {
        Self::new(value, value)
    }

    /// Check that the interval is finite and not inverted.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(LogletError::NonFiniteBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(LogletError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies inside the interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Widen the interval minimally so that it contains `value`.
    pub fn include(&mut self, value: f64) {
        if self.min > value {
            self.min = value;
        }
        if self.max < value {
            self.max = value;
        }
    }

    /// Draw a value uniformly from the interval.
    ///
    /// A degenerate interval always yields `min`. The result never exceeds
    /// `max`, even under rounding.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (self.width() * rng.gen::<f64>() + self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_rejects_inverted() {
        match Bounds::new(5.0, 1.0) {
            Err(LogletError::InvalidBounds { min, max }) => {
                assert_eq!(min, 5.0);
                assert_eq!(max, 1.0);
            }
            other => panic!("Expected InvalidBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_include_widens_minimally() {
        let mut b = Bounds::new(1.0, 2.0).unwrap();
        b.include(1.5);
        assert_eq!(b, Bounds::new(1.0, 2.0).unwrap());
        b.include(0.5);
        assert_eq!(b.min, 0.5);
        assert_eq!(b.max, 2.0);
        b.include(3.0);
        assert_eq!(b.max, 3.0);
    }

    #[test]
    fn test_sample_stays_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let b = Bounds::new(-3.0, 4.0).unwrap();
        for _ in 0..1000 {
            assert!(b.contains(b.sample(&mut rng)));
        }

        let fixed = Bounds::fixed(2.5).unwrap();
        assert_eq!(fixed.sample(&mut rng), 2.5);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Bounds = serde_json::from_str(r#"{"min": 0.0, "max": 1.0}"#).unwrap();
        assert_eq!(ok.max, 1.0);
        assert!(serde_json::from_str::<Bounds>(r#"{"min": 2.0, "max": 1.0}"#).is_err());
    }
}
