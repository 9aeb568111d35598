//! Property-based tests for the fitness evaluator and zone queries.
//!
//! Run with: cargo test --test properties

use nofly::math::{Point3, SAFETY_MARGIN};
use nofly::operations::evaluate::FitnessBreakdown;
use nofly::operations::query::{PointInZone, SegmentIntersectsCylinder};
use nofly::{NoFlyZone, Path};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point3> {
    prop::array::uniform3(-50.0..50.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Zone with center in [-20, 20]^2, height in [0, 30], radius in [0.5, 10].
fn arb_zone() -> impl Strategy<Value = NoFlyZone> {
    (-20.0..20.0f64, -20.0..20.0f64, 0.0..30.0f64, 0.5..10.0f64).prop_map(|(x, y, h, r)| {
        NoFlyZone::new(x, y, h, r).unwrap_or_else(|e| panic!("strategy produced bad zone: {e}"))
    })
}

// =============================================================================
// Point containment
// =============================================================================

proptest! {
    #[test]
    fn outside_widened_radius_is_never_inside(
        zone in arb_zone(),
        angle in 0.0..std::f64::consts::TAU,
        extra in 1e-6..40.0f64,
        z in -10.0..40.0f64,
    ) {
        let dist = zone.radius() + SAFETY_MARGIN + extra;
        let point = Point3::new(
            zone.center().x + dist * angle.cos(),
            zone.center().y + dist * angle.sin(),
            z,
        );
        let r = PointInZone::new(&point, &zone).execute();
        prop_assert!(!r.inside);
        let expected = (point.x - zone.center().x).hypot(point.y - zone.center().y);
        prop_assert!((r.distance_xy - expected).abs() < 1e-9);
    }

    #[test]
    fn outside_height_is_never_inside(
        zone in arb_zone(),
        point in arb_point(),
        above in prop::bool::ANY,
        offset in 1e-6..20.0f64,
    ) {
        let z = if above { zone.height() + offset } else { -offset };
        let point = Point3::new(point.x, point.y, z);
        let r = PointInZone::new(&point, &zone).execute();
        prop_assert!(!r.inside);
        let expected = (point.x - zone.center().x).hypot(point.y - zone.center().y);
        prop_assert!((r.distance_xy - expected).abs() < 1e-9);
    }
}

// =============================================================================
// Exact segment intersection
// =============================================================================

proptest! {
    #[test]
    fn segment_test_is_undirected(zone in arb_zone(), a in arb_point(), b in arb_point()) {
        let forward = SegmentIntersectsCylinder::new(&a, &b, &zone).execute();
        let backward = SegmentIntersectsCylinder::new(&b, &a, &zone).execute();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn vertical_segment_inside_radius_overlapping_height_hits(
        zone in arb_zone(),
        angle in 0.0..std::f64::consts::TAU,
        frac in 0.0..0.99f64,
        z0 in -10.0..40.0f64,
        z1 in -10.0..40.0f64,
    ) {
        let (lo, hi) = (z0.min(z1), z0.max(z1));
        prop_assume!(lo <= zone.height() && hi >= 0.0);
        let dist = zone.radius() * frac;
        let x = zone.center().x + dist * angle.cos();
        let y = zone.center().y + dist * angle.sin();
        let a = Point3::new(x, y, z0);
        let b = Point3::new(x, y, z1);
        prop_assert!(SegmentIntersectsCylinder::new(&a, &b, &zone).execute());
    }

    #[test]
    fn vertical_segment_outside_height_misses(
        zone in arb_zone(),
        frac in 0.0..0.99f64,
        above in prop::bool::ANY,
        gap in 1e-3..10.0f64,
        span in 0.0..20.0f64,
    ) {
        let x = zone.center().x + zone.radius() * frac;
        let y = zone.center().y;
        let (z0, z1) = if above {
            (zone.height() + gap, zone.height() + gap + span)
        } else {
            (-gap, -gap - span)
        };
        let a = Point3::new(x, y, z0);
        let b = Point3::new(x, y, z1);
        prop_assert!(!SegmentIntersectsCylinder::new(&a, &b, &zone).execute());
    }
}

// =============================================================================
// Fitness and path assembly
// =============================================================================

proptest! {
    #[test]
    fn fitness_monotone_in_each_term(
        distance in 0.0..1e4f64,
        penalty in 0.0..1e3f64,
        d_extra in 0.0..1e3f64,
        p_extra in 0.0..1e3f64,
    ) {
        let base = FitnessBreakdown::combine(distance, penalty).fitness;
        prop_assert!(FitnessBreakdown::combine(distance, penalty + p_extra).fitness >= base);
        prop_assert!(FitnessBreakdown::combine(distance + d_extra, penalty).fitness >= base);
    }

    #[test]
    fn reshape_then_flatten_recovers_vector(
        flat in prop::collection::vec(-1e3..1e3f64, 0..10).prop_map(|v| {
            v.into_iter().flat_map(|x| [x, x * 0.5, -x]).collect::<Vec<_>>()
        }),
        start in arb_point(),
        goal in arb_point(),
    ) {
        let path = Path::assemble(start, &flat, goal, 3)
            .unwrap_or_else(|e| panic!("assemble failed: {e}"));
        prop_assert_eq!(path.waypoints().len(), flat.len() / 3);
        prop_assert_eq!(path.flatten_waypoints(), flat);
        prop_assert_eq!(*path.start(), start);
        prop_assert_eq!(*path.goal(), goal);
    }

    #[test]
    fn path_length_is_non_negative_and_bounded_below_by_chord(
        flat in prop::collection::vec(-100.0..100.0f64, 0..4)
            .prop_map(|v| v.into_iter().flat_map(|x| [x, -x, x]).collect::<Vec<_>>()),
        start in arb_point(),
        goal in arb_point(),
    ) {
        let path = Path::assemble(start, &flat, goal, 3)
            .unwrap_or_else(|e| panic!("assemble failed: {e}"));
        let chord = (goal - start).norm();
        prop_assert!(path.length() + 1e-9 >= chord);
    }
}
