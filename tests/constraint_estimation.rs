//! Tests for the default constraint heuristics.

use approx::assert_relative_eq;
use loglet_rs::error::LogletError;
use loglet_rs::{estimate_constraints, estimate_constraints_with_midpoints, Bounds, SampleSeries};

#[test]
fn test_single_curve_reference_values() {
    let data = SampleSeries::from_slices(&[0.0, 5.0, 10.0], &[0.0, 5.0, 10.0]).unwrap();
    let c = estimate_constraints(&data, 1).unwrap();

    assert_eq!(c.d.min, 0.0);
    assert_eq!(c.d.max, 0.0);

    let c0 = &c.components[0];
    assert_relative_eq!(c0.k.min, 2.5);
    assert_relative_eq!(c0.k.max, 20.0);
    assert_relative_eq!(c0.a.min, 1.25);
    assert_relative_eq!(c0.a.max, 10.0);
    assert_relative_eq!(c0.b.min, 0.0);
    assert_relative_eq!(c0.b.max, 20.0);
}

#[test]
fn test_unsorted_offset_series() {
    let data = SampleSeries::from_slices(&[1990.0, 1970.0, 2010.0, 1980.0], &[4.0, 1.0, 8.0, 2.0])
        .unwrap();

    let one = estimate_constraints(&data, 1).unwrap();
    assert_eq!(one.components[0].b, Bounds::new(1970.0, 2050.0).unwrap());

    let two = estimate_constraints(&data, 2).unwrap();
    assert_eq!(two.components[0].b, Bounds::new(1970.0, 1990.0).unwrap());
    assert_eq!(two.components[1].b, Bounds::new(1990.0, 2010.0).unwrap());
    assert_relative_eq!(two.components[1].k.max, 16.0);
    assert_relative_eq!(two.components[1].a.min, 2.5);
}

#[test]
fn test_negative_maximum_is_rejected() {
    let data = SampleSeries::from_slices(&[0.0, 1.0], &[-3.0, -1.0]).unwrap();
    assert!(matches!(
        estimate_constraints(&data, 1),
        Err(LogletError::InvalidBounds { .. })
    ));
}

#[test]
fn test_many_curves_require_midpoints() {
    let data = SampleSeries::from_slices(&[0.0, 10.0], &[0.0, 10.0]).unwrap();
    for n in 3..6 {
        assert!(matches!(
            estimate_constraints(&data, n),
            Err(LogletError::MissingMidpointBounds { n_curves }) if n_curves == n
        ));
    }

    let mids: Vec<Bounds> = (0..4)
        .map(|i| Bounds::new(2.5 * i as f64, 2.5 * (i + 1) as f64).unwrap())
        .collect();
    let c = estimate_constraints_with_midpoints(&data, 4, &mids).unwrap();
    assert!(c.validate(4).is_ok());
}
