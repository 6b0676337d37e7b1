//! Property tests for the logistic and Gompertz curve models.

use approx::assert_relative_eq;
use loglet_rs::error::LogletError;
use loglet_rs::models::{gompertz, logistic, CurveType};

const STEEPNESS: [f64; 5] = [-3.0, -0.5, 0.5, 2.0, 10.0];
const AMPLITUDE: [f64; 3] = [0.1, 1.0, 7.5];
const MIDPOINT: [f64; 3] = [-5.0, 0.0, 1950.0];

/// Times within three rise-times of the midpoint, where neither asymptote
/// is reached in floating point.
fn times_around(a: f64, b: f64) -> Vec<f64> {
    (-12..=12).map(|i| b + a.abs() * i as f64 / 4.0).collect()
}

#[test]
fn test_logistic_strictly_between_zero_and_k() {
    for &a in &STEEPNESS {
        for &k in &AMPLITUDE {
            for &b in &MIDPOINT {
                for t in times_around(a, b) {
                    let y = logistic(t, a, k, b).unwrap();
                    assert!(y > 0.0 && y < k, "logistic({t}, {a}, {k}, {b}) = {y}");
                }
            }
        }
    }
}

#[test]
fn test_logistic_half_height_at_midpoint() {
    for &a in &STEEPNESS {
        for &k in &AMPLITUDE {
            for &b in &MIDPOINT {
                assert_relative_eq!(logistic(b, a, k, b).unwrap(), k / 2.0);
            }
        }
    }
}

#[test]
fn test_gompertz_strictly_between_zero_and_k() {
    for &a in &STEEPNESS {
        for &k in &AMPLITUDE {
            for &b in &MIDPOINT {
                for t in times_around(a, b) {
                    let y = gompertz(t, a, k, b).unwrap();
                    assert!(y > 0.0 && y < k, "gompertz({t}, {a}, {k}, {b}) = {y}");
                }
            }
        }
    }
}

#[test]
fn test_gompertz_asymptotes() {
    for &a in STEEPNESS.iter().filter(|a| **a > 0.0) {
        for &k in &AMPLITUDE {
            let b = 3.0;
            assert_relative_eq!(gompertz(b + 40.0 * a, a, k, b).unwrap(), k, epsilon = 1e-12);
            assert!(gompertz(b - 40.0 * a, a, k, b).unwrap() < 1e-9);
        }
    }
}

#[test]
fn test_zero_steepness_is_a_domain_error() {
    for curve_type in [CurveType::Logistic, CurveType::Gompertz] {
        match curve_type.evaluate(1.0, 0.0, 5.0, 0.0) {
            Err(LogletError::DomainError(_)) => (),
            other => panic!("{} accepted a == 0: {:?}", curve_type, other),
        }
    }
}
