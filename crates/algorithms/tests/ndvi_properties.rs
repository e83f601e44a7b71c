//! Property tests for NDVI over randomly shaped bands.

use proptest::prelude::*;
use verdex_algorithms::imagery::{calculate_ndvi, ndvi, ndvi_pixel, NDVI_EPSILON};
use verdex_core::{Band, Error};

/// A random shape (1-3 axes, each 1-5 long) and two bands' worth of values
fn band_pair() -> impl Strategy<Value = (Vec<usize>, Vec<f64>, Vec<f64>)> {
    prop::collection::vec(1usize..=5, 1..=3).prop_flat_map(|shape| {
        let len: usize = shape.iter().product();
        (
            Just(shape),
            prop::collection::vec(-1.0e4f64..1.0e4, len),
            prop::collection::vec(-1.0e4f64..1.0e4, len),
        )
    })
}

fn bands(shape: &[usize], nir: Vec<f64>, red: Vec<f64>) -> (Band, Band) {
    (
        Band::from_shape_vec(shape, nir).unwrap(),
        Band::from_shape_vec(shape, red).unwrap(),
    )
}

proptest! {
    /// Output shape equals input shape.
    #[test]
    fn output_shape_matches_input((shape, nir, red) in band_pair()) {
        let (nir, red) = bands(&shape, nir, red);
        let out = ndvi(&nir, &red).unwrap();
        prop_assert_eq!(out.shape(), &shape[..]);
    }

    /// Every output cell lies in [-1, 1].
    #[test]
    fn output_within_unit_range((shape, nir, red) in band_pair()) {
        let (nir, red) = bands(&shape, nir, red);
        let out = ndvi(&nir, &red).unwrap();
        for &v in out.iter() {
            prop_assert!((-1.0..=1.0).contains(&v), "NDVI out of range: {}", v);
        }
    }

    /// Clipping an output a second time changes nothing.
    #[test]
    fn reclipping_is_identity((shape, nir, red) in band_pair()) {
        let (nir, red) = bands(&shape, nir, red);
        let out = ndvi(&nir, &red).unwrap();
        let reclipped = out.mapv(|v| v.clamp(-1.0, 1.0));
        prop_assert_eq!(reclipped, out);
    }

    /// Swapping the bands negates the index.
    #[test]
    fn swapping_bands_negates((shape, nir, red) in band_pair()) {
        let (nir, red) = bands(&shape, nir, red);
        let forward = ndvi(&nir, &red).unwrap();
        let backward = ndvi(&red, &nir).unwrap();
        for (&f, &b) in forward.iter().zip(backward.iter()) {
            prop_assert_eq!(f, -b);
        }
    }

    /// Bands that cancel out give exactly 0.0, never NaN or infinity.
    #[test]
    fn cancelling_bands_give_zero((shape, nir, _red) in band_pair()) {
        let red: Vec<f64> = nir.iter().map(|v| -v).collect();
        let (nir, red) = bands(&shape, nir, red);
        let out = ndvi(&nir, &red).unwrap();
        prop_assert!(out.iter().all(|&v| v == 0.0));
    }

    /// Same result whether values arrive as nested sequences or as a band.
    #[test]
    fn nested_sequences_match_bands(
        rows in 1usize..=6,
        cols in 1usize..=6,
        seed in prop::collection::vec(0u16..10_000, 72),
    ) {
        let nir: Vec<Vec<u16>> = (0..rows)
            .map(|r| (0..cols).map(|c| seed[r * cols + c]).collect())
            .collect();
        let red: Vec<Vec<u16>> = (0..rows)
            .map(|r| (0..cols).map(|c| seed[36 + r * cols + c]).collect())
            .collect();

        let from_nested = calculate_ndvi(nir.clone(), red.clone()).unwrap();
        let from_bands = ndvi(
            &Band::coerce(nir).unwrap(),
            &Band::coerce(red).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(from_nested, from_bands);
    }

    /// Any pair of f64 values, including NaN and infinities, stays in range.
    #[test]
    fn pixel_rule_total(nir in prop::num::f64::ANY, red in prop::num::f64::ANY) {
        let v = ndvi_pixel(nir, red, NDVI_EPSILON);
        prop_assert!((-1.0..=1.0).contains(&v), "ndvi_pixel({}, {}) = {}", nir, red, v);
    }

    /// Shapes that cannot broadcast are rejected.
    #[test]
    fn incompatible_shapes_fail(rows in 2usize..6, cols in 2usize..6) {
        let nir = Band::from_shape_vec(&[rows, cols], vec![0.5; rows * cols]).unwrap();
        let red = Band::from_shape_vec(
            &[rows + 1, cols + 1],
            vec![0.1; (rows + 1) * (cols + 1)],
        )
        .unwrap();
        let is_shape_mismatch = matches!(ndvi(&nir, &red), Err(Error::ShapeMismatch { .. }));
        prop_assert!(is_shape_mismatch);
    }
}
