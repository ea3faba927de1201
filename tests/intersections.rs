// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Intersection query verification
//!
//! Covers the dispatch symmetry contract, boundary inclusion, and the
//! reference scenarios on exact, floating-point and big-integer
//! kernels.

use anyhow::Result;
use approx::assert_relative_eq;
use hedra::{
    do_intersect, intersection, Homogeneous, KernelError, Line3, LinearIntersection, Point3,
    Quotient, Ray3, Segment3, SimpleHomogeneous, Tetrahedron3, Vector3,
};
use num_bigint::BigInt;

type Exact = SimpleHomogeneous<i64>;
type Approx = SimpleHomogeneous<f64, f64>;

/// The reference solid scaled by 5 so every coordinate is integral:
/// vertices (0,0,0), (5,0,0), (0,5,0), (0,0,5).
fn scaled_tetrahedron() -> Tetrahedron3<Exact> {
    Tetrahedron3::new(
        Point3::new(0, 0, 0),
        Point3::new(5, 0, 0),
        Point3::new(0, 5, 0),
        Point3::new(0, 0, 5),
    )
}

fn unit_tetrahedron_f64() -> Tetrahedron3<Approx> {
    Tetrahedron3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    )
}

#[test]
fn test_scenario_origin_inside_solid() {
    // Origin (0.2, 0.2, 0.2) of the unit solid, i.e. (1,1,1) of the
    // scaled one; represented exactly via a homogeneous weight as well.
    let solid = scaled_tetrahedron();
    let ray = Ray3::new(Point3::new(1, 1, 1), Vector3::new(1, 1, 1));
    assert!(do_intersect(&ray, &solid));

    let unit = Tetrahedron3::<Exact>::new(
        Point3::new(0, 0, 0),
        Point3::new(1, 0, 0),
        Point3::new(0, 1, 0),
        Point3::new(0, 0, 1),
    );
    let fractional = Ray3::new(Point3::from_homogeneous(1, 1, 1, 5), Vector3::new(1, 1, 1));
    assert!(do_intersect(&fractional, &unit));
}

#[test]
fn test_scenario_ray_pointing_away() {
    let solid = scaled_tetrahedron();
    let ray = Ray3::new(Point3::new(10, 10, 10), Vector3::new(1, 1, 1));
    assert!(!do_intersect(&ray, &solid));
}

#[test]
fn test_scenario_ray_pointing_toward() {
    let solid = scaled_tetrahedron();
    let ray = Ray3::new(Point3::new(10, 10, 10), Vector3::new(-1, -1, -1));
    assert!(do_intersect(&ray, &solid));
}

#[test]
fn test_scenarios_on_floating_point_kernel() {
    let solid = unit_tetrahedron_f64();
    let inside = Ray3::new(Point3::new(0.2, 0.2, 0.2), Vector3::new(1.0, 1.0, 1.0));
    let away = Ray3::new(Point3::new(2.0, 2.0, 2.0), Vector3::new(1.0, 1.0, 1.0));
    let toward = Ray3::new(Point3::new(2.0, 2.0, 2.0), Vector3::new(-1.0, -1.0, -1.0));

    assert!(do_intersect(&inside, &solid));
    assert!(!do_intersect(&away, &solid));
    assert!(do_intersect(&toward, &solid));
}

#[test]
fn test_scenario_zero_direction_is_out_of_contract() {
    // A zero-length direction is a precondition violation, rejected by
    // the checked constructor rather than silently miscomputed.
    let rejected = Ray3::<Exact>::try_new(Point3::new(1, 1, 1), Vector3::zero());
    assert_eq!(rejected.unwrap_err(), KernelError::DegenerateDirection);
}

#[test]
fn test_boundary_touching_counts_as_intersecting() {
    // Origin exactly on the x+y+z = 5 face, directed away from the
    // interior: the shared boundary point is an intersection.
    let solid = scaled_tetrahedron();
    let on_face = Point3::from_homogeneous(5, 5, 5, 3);
    let ray = Ray3::new(on_face, Vector3::new(1, 1, 1));
    assert!(do_intersect(&ray, &solid));
}

#[test]
fn test_vertex_graze_yields_a_point() {
    let solid = scaled_tetrahedron();
    // Descends through the vertex (5, 0, 0) only.
    let ray = Ray3::new(Point3::new(5, 0, 5), Vector3::new(0, 0, -1));
    let q = |n: i64| Quotient::<i64>::from(n);

    assert!(do_intersect(&ray, &solid));
    assert_eq!(
        intersection(&ray, &solid),
        LinearIntersection::Point(nalgebra_point(q(5), q(0), q(0)))
    );
}

fn nalgebra_point(
    x: Quotient<i64>,
    y: Quotient<i64>,
    z: Quotient<i64>,
) -> nalgebra::Point3<Quotient<i64>> {
    nalgebra::Point3::new(x, y, z)
}

#[test]
fn test_ray_crossing_yields_the_exact_chord() -> Result<()> {
    let solid = Tetrahedron3::<Exact>::new(
        Point3::new(0, 0, 0),
        Point3::new(4, 0, 0),
        Point3::new(0, 4, 0),
        Point3::new(0, 0, 4),
    );
    let ray = Ray3::try_new(Point3::new(-4, 1, 1), Vector3::new(1, 0, 0))?;
    let q = |n: i64| Quotient::<i64>::from(n);

    let chord = intersection(&ray, &solid);
    assert_eq!(
        chord,
        LinearIntersection::Segment(
            nalgebra_point(q(0), q(1), q(1)),
            nalgebra_point(q(2), q(1), q(1)),
        )
    );
    Ok(())
}

#[test]
fn test_missing_ray_yields_empty() {
    let solid = scaled_tetrahedron();
    let ray = Ray3::new(Point3::new(9, 9, 9), Vector3::new(1, 0, 0));
    assert!(intersection(&ray, &solid).is_empty());
}

#[test]
fn test_segment_and_line_queries() {
    let solid = scaled_tetrahedron();

    let crossing = Segment3::new(Point3::new(-1, 1, 1), Point3::new(9, 1, 1));
    let outside = Segment3::new(Point3::new(9, 9, 9), Point3::new(10, 10, 10));
    assert!(do_intersect(&crossing, &solid));
    assert!(!do_intersect(&outside, &solid));

    // The line through a ray that points away still meets the solid.
    let line = Line3::new(Point3::new(10, 10, 10), Vector3::new(1, 1, 1));
    assert!(do_intersect(&line, &solid));
    let off_line = Line3::new(Point3::new(10, 0, 0), Vector3::new(0, 0, 1));
    assert!(!do_intersect(&off_line, &solid));
}

#[test]
fn test_point_queries() {
    let solid = scaled_tetrahedron();
    assert!(do_intersect(&Point3::new(1, 1, 1), &solid));
    assert!(!do_intersect(&Point3::new(5, 5, 5), &solid));
    // Face centroid: boundary counts.
    assert!(do_intersect(&Point3::from_homogeneous(5, 5, 5, 3), &solid));

    let ray = Ray3::<Exact>::new(Point3::new(0, 0, 0), Vector3::new(1, 2, 3));
    assert!(do_intersect(&Point3::new(2, 4, 6), &ray));
    assert!(!do_intersect(&Point3::new(-1, -2, -3), &ray));

    let seg = Segment3::<Exact>::new(Point3::new(0, 0, 0), Point3::new(2, 0, 0));
    assert!(do_intersect(&Point3::new(1, 0, 0), &seg));
    assert!(!do_intersect(&Point3::new(3, 0, 0), &seg));
}

#[test]
fn test_symmetry_across_every_registered_pair() {
    let solid = scaled_tetrahedron();
    let ray = Ray3::new(Point3::new(10, 10, 10), Vector3::new(-1, -1, -1));
    let seg = Segment3::new(Point3::new(-1, 1, 1), Point3::new(9, 1, 1));
    let line = Line3::new(Point3::new(10, 10, 10), Vector3::new(1, 1, 1));
    let point = Point3::new(1, 1, 1);

    assert_eq!(do_intersect(&ray, &solid), do_intersect(&solid, &ray));
    assert_eq!(do_intersect(&seg, &solid), do_intersect(&solid, &seg));
    assert_eq!(do_intersect(&line, &solid), do_intersect(&solid, &line));
    assert_eq!(do_intersect(&point, &solid), do_intersect(&solid, &point));
    assert_eq!(do_intersect(&point, &ray), do_intersect(&ray, &point));
    assert_eq!(do_intersect(&point, &seg), do_intersect(&seg, &point));

    assert_eq!(intersection(&ray, &solid), intersection(&solid, &ray));
    assert_eq!(intersection(&seg, &solid), intersection(&solid, &seg));
    assert_eq!(intersection(&line, &solid), intersection(&solid, &line));
}

#[test]
fn test_sharing_policy_answers_identically() {
    type Cow = Homogeneous<i64>;
    let solid = Tetrahedron3::<Cow>::new(
        Point3::new(0, 0, 0),
        Point3::new(5, 0, 0),
        Point3::new(0, 5, 0),
        Point3::new(0, 0, 5),
    );

    let toward = Ray3::new(Point3::new(10, 10, 10), Vector3::new(-1, -1, -1));
    let away = Ray3::new(Point3::new(10, 10, 10), Vector3::new(1, 1, 1));
    assert!(do_intersect(&toward, &solid));
    assert!(!do_intersect(&away, &solid));
}

#[test]
fn test_big_integer_kernel() -> Result<()> {
    type Big = SimpleHomogeneous<BigInt>;
    let b = |v: i64| BigInt::from(v);

    let solid = Tetrahedron3::<Big>::try_new(
        Point3::new(b(0), b(0), b(0)),
        Point3::new(b(5_000_000_000), b(0), b(0)),
        Point3::new(b(0), b(5_000_000_000), b(0)),
        Point3::new(b(0), b(0), b(5_000_000_000)),
    )?;
    let toward = Ray3::new(
        Point3::new(b(10_000_000_000), b(10_000_000_000), b(10_000_000_000)),
        Vector3::new(b(-1), b(-1), b(-1)),
    );
    assert!(do_intersect(&toward, &solid));
    assert!(do_intersect(&solid, &toward));
    Ok(())
}

#[test]
fn test_floating_point_kernel_cartesian_accessors() {
    let p = Point3::<Approx>::new(0.2, 0.2, 0.2);
    assert_relative_eq!(p.x(), 0.2);
    assert_relative_eq!(p.z(), 0.2);
}
