// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Symmetric pairwise intersection queries
//!
//! For every registered primitive pair there is exactly one decision
//! routine, written for one canonical argument order. The generator
//! macros below turn each registration into the full public query
//! surface: the query is callable with the operands in either order and
//! both entry points forward, in the canonical order, to that single
//! routine, so `intersects(a, b) == intersects(b, a)` holds by
//! construction.
//!
//! Both operands must be built under the same kernel; mixing kernels, or
//! querying a pair that was never registered, fails to compile.

mod internal;

use nalgebra as na;

use crate::geometry::{Line3, Point3, Ray3, Segment3, Tetrahedron3};
use crate::kernel::Kernel;
use crate::number::FieldNumber;

/// Existence query: do the two shapes share at least one point?
///
/// Boundary contact counts. Degenerate operands (zero directions,
/// coplanar solids) are precondition violations with unspecified
/// results.
pub trait Intersects<Rhs> {
    fn intersects(&self, other: &Rhs) -> bool;
}

/// Construction query: the shared point set itself, as a tagged result.
pub trait Intersection<Rhs> {
    type Output;

    fn intersection(&self, other: &Rhs) -> Self::Output;
}

/// Intersection of a linear object (line, ray or segment) with a convex
/// solid, in Cartesian field-type coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearIntersection<FT: FieldNumber> {
    Empty,
    Point(na::Point3<FT>),
    Segment(na::Point3<FT>, na::Point3<FT>),
}

impl<FT: FieldNumber> LinearIntersection<FT> {
    pub fn is_empty(&self) -> bool {
        matches!(self, LinearIntersection::Empty)
    }
}

/// Free-function form of [`Intersects`], callable with the operands in
/// either order.
pub fn do_intersect<A, B>(a: &A, b: &B) -> bool
where
    A: Intersects<B>,
{
    a.intersects(b)
}

/// Free-function form of [`Intersection`].
pub fn intersection<A, B>(a: &A, b: &B) -> <A as Intersection<B>>::Output
where
    A: Intersection<B>,
{
    a.intersection(b)
}

/// Registers the symmetric boolean query surface for one primitive
/// pair: both argument orders, one canonical routine.
macro_rules! symmetric_intersects {
    ($lhs:ident, $rhs:ident, $routine:path) => {
        impl<K: Kernel> Intersects<$rhs<K>> for $lhs<K> {
            fn intersects(&self, other: &$rhs<K>) -> bool {
                $routine(self, other)
            }
        }

        impl<K: Kernel> Intersects<$lhs<K>> for $rhs<K> {
            fn intersects(&self, other: &$lhs<K>) -> bool {
                $routine(other, self)
            }
        }
    };
}

/// Registers the symmetric construction query surface for one primitive
/// pair of the linear-object-vs-solid family.
macro_rules! symmetric_intersection {
    ($lhs:ident, $rhs:ident, $routine:path) => {
        impl<K: Kernel> Intersection<$rhs<K>> for $lhs<K> {
            type Output = LinearIntersection<K::FT>;

            fn intersection(&self, other: &$rhs<K>) -> Self::Output {
                $routine(self, other)
            }
        }

        impl<K: Kernel> Intersection<$lhs<K>> for $rhs<K> {
            type Output = LinearIntersection<K::FT>;

            fn intersection(&self, other: &$lhs<K>) -> Self::Output {
                $routine(other, self)
            }
        }
    };
}

symmetric_intersects!(Ray3, Tetrahedron3, internal::ray_intersects_tetrahedron);
symmetric_intersects!(Segment3, Tetrahedron3, internal::segment_intersects_tetrahedron);
symmetric_intersects!(Line3, Tetrahedron3, internal::line_intersects_tetrahedron);
symmetric_intersects!(Point3, Tetrahedron3, internal::point_intersects_tetrahedron);
symmetric_intersects!(Point3, Ray3, internal::point_intersects_ray);
symmetric_intersects!(Point3, Segment3, internal::point_intersects_segment);

symmetric_intersection!(Ray3, Tetrahedron3, internal::ray_tetrahedron_intersection);
symmetric_intersection!(
    Segment3,
    Tetrahedron3,
    internal::segment_tetrahedron_intersection
);
symmetric_intersection!(Line3, Tetrahedron3, internal::line_tetrahedron_intersection);
