//! Property tests for the distance metrics over random points.

use proptest::prelude::*;
use segment_metrics::{GeometryError, Metric, Point, Segment};

fn arb_point_pair(len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (
        proptest::collection::vec(-100.0f64..100.0, len),
        proptest::collection::vec(-100.0f64..100.0, len),
    )
}

fn arb_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..12).prop_flat_map(arb_point_pair)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1. + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn dimension_and_graphability(coords in proptest::collection::vec(any::<f64>(), 0..10)) {
        let len = coords.len();
        let point = Point::from(coords.clone());
        prop_assert_eq!(point.dimension(), len);
        prop_assert_eq!(point.is_graphable(), (1..=3).contains(&len));
        prop_assert_eq!(point.coordinates().len(), len);
    }

    #[test]
    fn set_coordinates_round_trip(
        first in proptest::collection::vec(-1e6f64..1e6, 0..8),
        second in proptest::collection::vec(-1e6f64..1e6, 0..8),
    ) {
        let mut point = Point::from(first);
        point.set_coordinates(second.clone());
        prop_assert_eq!(point.coordinates(), second.as_slice());
        prop_assert_eq!(point.dimension(), second.len());
        prop_assert_eq!(point.is_graphable(), (1..=3).contains(&second.len()));
    }

    #[test]
    fn named_axes_match_indices(coords in proptest::collection::vec(-1e6f64..1e6, 1..6)) {
        let point = Point::from(coords.clone());
        for (idx, name) in ["x", "y", "z"].iter().enumerate() {
            match coords.get(idx) {
                Some(value) => {
                    prop_assert_eq!(point.coordinate(*name), Ok(*value));
                    prop_assert_eq!(point.coordinate(name.to_uppercase()), Ok(*value));
                }
                None => prop_assert!(
                    matches!(point.coordinate(*name), Err(GeometryError::IndexOutOfRange { .. })),
                    "axis {} should be out of range", name
                ),
            }
        }
    }

    #[test]
    fn metrics_are_symmetric_and_non_negative((a, b) in arb_pair()) {
        let (a, b) = (Point::from(a), Point::from(b));
        let forward = Segment::new(&a, &b).unwrap();
        let backward = Segment::new(&b, &a).unwrap();

        for metric in [Metric::Manhattan, Metric::Euclidean, Metric::Minkowski { order: 3. }] {
            let d_ab = forward.distance(metric).unwrap();
            let d_ba = backward.distance(metric).unwrap();
            prop_assert!(d_ab >= 0.);
            prop_assert!(close(d_ab, d_ba), "{}: {} vs {}", metric, d_ab, d_ba);
        }
    }

    #[test]
    fn identity_is_zero(coords in proptest::collection::vec(-100.0f64..100.0, 0..12)) {
        let point = Point::from(coords);
        let segment = Segment::new(&point, &point).unwrap();
        prop_assert_eq!(segment.manhattan(), 0.);
        prop_assert_eq!(segment.euclidean(), 0.);
        prop_assert_eq!(segment.minkowski(1.5).unwrap(), 0.);
    }

    #[test]
    fn minkowski_generalizes_l1_and_l2((a, b) in arb_pair()) {
        let (a, b) = (Point::from(a), Point::from(b));
        let segment = Segment::new(&a, &b).unwrap();
        prop_assert_eq!(segment.minkowski(1.).unwrap(), segment.manhattan());
        prop_assert_eq!(segment.minkowski(2.).unwrap(), segment.euclidean());
    }

    #[test]
    fn norms_are_ordered((a, b) in arb_pair()) {
        // L1 >= L2 >= L3 for the same pair
        let (a, b) = (Point::from(a), Point::from(b));
        let segment = Segment::new(&a, &b).unwrap();
        let l1 = segment.manhattan();
        let l2 = segment.euclidean();
        let l3 = segment.minkowski(3.).unwrap();
        prop_assert!(l1 + 1e-9 >= l2);
        prop_assert!(l2 + 1e-9 >= l3);
    }

    #[test]
    fn canberra_terms_are_bounded(
        (a, b) in (0usize..12).prop_flat_map(|len| (
            proptest::collection::vec(1.0f64..100.0, len),
            proptest::collection::vec(-100.0f64..-1.0, len),
        ))
    ) {
        let dims = a.len() as f64;
        let (a, b) = (Point::from(a), Point::from(b));
        let d = Segment::new(&a, &b).unwrap().canberra().unwrap();
        // opposite signs make every term exactly one
        prop_assert!(close(d, dims), "{} vs {}", d, dims);
    }

    #[test]
    fn mismatched_dimensions_never_build(
        a in proptest::collection::vec(-1.0f64..1.0, 0..6),
        b in proptest::collection::vec(-1.0f64..1.0, 0..6),
    ) {
        prop_assume!(a.len() != b.len());
        let (start, end) = (Point::from(a), Point::from(b));
        prop_assert_eq!(
            Segment::new(&start, &end).unwrap_err(),
            GeometryError::DimensionMismatch { start: start.dimension(), end: end.dimension() }
        );
    }
}
