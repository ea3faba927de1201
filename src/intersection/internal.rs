// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Canonical per-pair decision routines
//!
//! One function per registered primitive pair, always taking its
//! arguments in the pair's canonical order. The linear-object-vs-solid
//! family shares one half-space clipping core: the object's parameter
//! interval (ray `[0, inf)`, segment `[0, 1]`, line `(-inf, inf)`) is
//! narrowed by each face plane of the solid and the query answers from
//! what remains. Touching configurations count as intersecting: every
//! comparison against a face is closed.
//!
//! All arithmetic runs in the kernel's field type, so results are exact
//! whenever the field type is.

use nalgebra as na;

use super::LinearIntersection;
use crate::geometry::{Line3, Point3, Ray3, Segment3, Tetrahedron3};
use crate::kernel::Kernel;
use crate::number::{sign_of, FieldNumber, RingNumber, Sign};

/// A (possibly half-open) parameter interval; `None` means unbounded on
/// that side.
struct ParamRange<FT> {
    lo: Option<FT>,
    hi: Option<FT>,
}

impl<FT: FieldNumber> ParamRange<FT> {
    fn raise_lo(&mut self, t: FT) {
        self.lo = Some(match self.lo.take() {
            Some(lo) if lo > t => lo,
            _ => t,
        });
    }

    fn lower_hi(&mut self, t: FT) {
        self.hi = Some(match self.hi.take() {
            Some(hi) if hi < t => hi,
            _ => t,
        });
    }

    /// A zero-width interval is not empty: touching counts.
    fn is_empty(&self) -> bool {
        matches!((&self.lo, &self.hi), (Some(lo), Some(hi)) if lo > hi)
    }
}

/// The four faces of a tetrahedron, each paired with its opposite
/// vertex. The opposite vertex fixes which side of the face plane is
/// inside.
const FACES: [([usize; 3], usize); 4] = [
    ([1, 2, 3], 0),
    ([0, 2, 3], 1),
    ([0, 1, 3], 2),
    ([0, 1, 2], 3),
];

/// Narrows `range` to the parameters `t` for which `origin + t * dir`
/// lies inside the solid. Returns `None` as soon as the interval
/// empties.
fn clip_by_tetrahedron<K: Kernel>(
    origin: &na::Point3<K::FT>,
    dir: &na::Vector3<K::FT>,
    solid: &Tetrahedron3<K>,
    mut range: ParamRange<K::FT>,
) -> Option<ParamRange<K::FT>> {
    let corners: [na::Point3<K::FT>; 4] = [
        solid.vertex(0).to_cartesian(),
        solid.vertex(1).to_cartesian(),
        solid.vertex(2).to_cartesian(),
        solid.vertex(3).to_cartesian(),
    ];

    for ([i, j, k], opp) in FACES {
        let a = &corners[i];
        let normal = (&corners[j] - a).cross(&(&corners[k] - a));

        // The point set of the moving point relative to this face is the
        // affine function num + t * den; inside is its non-negative side
        // once flipped toward the opposite vertex.
        let mut num = normal.dot(&(origin - a));
        let mut den = normal.dot(dir);
        if sign_of(&normal.dot(&(&corners[opp] - a))) == Sign::Negative {
            num = -num;
            den = -den;
        }

        match sign_of(&den) {
            Sign::Zero => {
                // Parallel to the face plane: position alone decides.
                if sign_of(&num) == Sign::Negative {
                    return None;
                }
            }
            Sign::Positive => range.raise_lo(-(num / den)),
            Sign::Negative => range.lower_hi(-(num / den)),
        }

        if range.is_empty() {
            return None;
        }
    }

    Some(range)
}

fn zero_to_inf<FT: FieldNumber>() -> ParamRange<FT> {
    ParamRange {
        lo: Some(FT::zero()),
        hi: None,
    }
}

fn zero_to_one<FT: FieldNumber>() -> ParamRange<FT> {
    ParamRange {
        lo: Some(FT::zero()),
        hi: Some(FT::one()),
    }
}

fn unbounded<FT: FieldNumber>() -> ParamRange<FT> {
    ParamRange { lo: None, hi: None }
}

pub(crate) fn ray_intersects_tetrahedron<K: Kernel>(
    ray: &Ray3<K>,
    solid: &Tetrahedron3<K>,
) -> bool {
    clip_by_tetrahedron(
        &ray.origin().to_cartesian(),
        &ray.direction().to_cartesian(),
        solid,
        zero_to_inf(),
    )
    .is_some()
}

pub(crate) fn segment_intersects_tetrahedron<K: Kernel>(
    segment: &Segment3<K>,
    solid: &Tetrahedron3<K>,
) -> bool {
    clip_by_tetrahedron(
        &segment.source().to_cartesian(),
        &segment.to_vector().to_cartesian(),
        solid,
        zero_to_one(),
    )
    .is_some()
}

pub(crate) fn line_intersects_tetrahedron<K: Kernel>(
    line: &Line3<K>,
    solid: &Tetrahedron3<K>,
) -> bool {
    clip_by_tetrahedron(
        &line.point().to_cartesian(),
        &line.direction().to_cartesian(),
        solid,
        unbounded(),
    )
    .is_some()
}

/// Containment, boundary included: the point must not lie strictly
/// outside any face plane.
pub(crate) fn point_intersects_tetrahedron<K: Kernel>(
    point: &Point3<K>,
    solid: &Tetrahedron3<K>,
) -> bool {
    let q = point.to_cartesian();
    let corners: [na::Point3<K::FT>; 4] = [
        solid.vertex(0).to_cartesian(),
        solid.vertex(1).to_cartesian(),
        solid.vertex(2).to_cartesian(),
        solid.vertex(3).to_cartesian(),
    ];

    for ([i, j, k], opp) in FACES {
        let a = &corners[i];
        let normal = (&corners[j] - a).cross(&(&corners[k] - a));
        let side_q = sign_of(&normal.dot(&(&q - a)));
        let side_in = sign_of(&normal.dot(&(&corners[opp] - a)));
        if side_q == side_in.opposite() && !side_q.is_zero() {
            return false;
        }
    }
    true
}

fn is_zero_vector<T: RingNumber>(v: &na::Vector3<T>) -> bool {
    v.x.is_zero() && v.y.is_zero() && v.z.is_zero()
}

pub(crate) fn point_intersects_ray<K: Kernel>(point: &Point3<K>, ray: &Ray3<K>) -> bool {
    let u = &point.to_cartesian() - &ray.origin().to_cartesian();
    let d = ray.direction().to_cartesian();
    is_zero_vector(&u.cross(&d)) && !sign_of(&u.dot(&d)).is_negative()
}

pub(crate) fn point_intersects_segment<K: Kernel>(
    point: &Point3<K>,
    segment: &Segment3<K>,
) -> bool {
    let u = &point.to_cartesian() - &segment.source().to_cartesian();
    let d = segment.to_vector().to_cartesian();
    if !is_zero_vector(&u.cross(&d)) {
        return false;
    }
    let along = u.dot(&d);
    !sign_of(&along).is_negative() && along <= d.dot(&d)
}

/// Shared construction body for the linear-object-vs-solid queries.
fn linear_tetrahedron_intersection<K: Kernel>(
    origin: &na::Point3<K::FT>,
    dir: &na::Vector3<K::FT>,
    solid: &Tetrahedron3<K>,
    range: ParamRange<K::FT>,
) -> LinearIntersection<K::FT> {
    let Some(range) = clip_by_tetrahedron(origin, dir, solid, range) else {
        return LinearIntersection::Empty;
    };
    // A bounded solid clips the surviving interval on both sides.
    let (Some(lo), Some(hi)) = (range.lo, range.hi) else {
        return LinearIntersection::Empty;
    };

    let entry = origin + dir * lo.clone();
    if lo == hi {
        LinearIntersection::Point(entry)
    } else {
        LinearIntersection::Segment(entry, origin + dir * hi)
    }
}

pub(crate) fn ray_tetrahedron_intersection<K: Kernel>(
    ray: &Ray3<K>,
    solid: &Tetrahedron3<K>,
) -> LinearIntersection<K::FT> {
    linear_tetrahedron_intersection(
        &ray.origin().to_cartesian(),
        &ray.direction().to_cartesian(),
        solid,
        zero_to_inf(),
    )
}

pub(crate) fn segment_tetrahedron_intersection<K: Kernel>(
    segment: &Segment3<K>,
    solid: &Tetrahedron3<K>,
) -> LinearIntersection<K::FT> {
    linear_tetrahedron_intersection(
        &segment.source().to_cartesian(),
        &segment.to_vector().to_cartesian(),
        solid,
        zero_to_one(),
    )
}

pub(crate) fn line_tetrahedron_intersection<K: Kernel>(
    line: &Line3<K>,
    solid: &Tetrahedron3<K>,
) -> LinearIntersection<K::FT> {
    linear_tetrahedron_intersection(
        &line.point().to_cartesian(),
        &line.direction().to_cartesian(),
        solid,
        unbounded(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector3;
    use crate::kernel::SimpleHomogeneous;

    type K = SimpleHomogeneous<i64>;

    fn unit_tetrahedron() -> Tetrahedron3<K> {
        Tetrahedron3::new(
            Point3::new(0, 0, 0),
            Point3::new(1, 0, 0),
            Point3::new(0, 1, 0),
            Point3::new(0, 0, 1),
        )
    }

    #[test]
    fn test_clip_rejects_ray_pointing_away() {
        let ray = Ray3::<K>::new(Point3::new(2, 2, 2), Vector3::new(1, 1, 1));
        assert!(!ray_intersects_tetrahedron(&ray, &unit_tetrahedron()));
    }

    #[test]
    fn test_clip_accepts_ray_through_interior() {
        let ray = Ray3::<K>::new(Point3::new(2, 2, 2), Vector3::new(-1, -1, -1));
        assert!(ray_intersects_tetrahedron(&ray, &unit_tetrahedron()));
    }

    #[test]
    fn test_point_on_face_counts_as_inside() {
        // Centroid of the x = 0 face.
        let p = Point3::<K>::from_homogeneous(0, 1, 1, 3);
        assert!(point_intersects_tetrahedron(&p, &unit_tetrahedron()));
    }

    #[test]
    fn test_point_on_ray() {
        let ray = Ray3::<K>::new(Point3::new(0, 0, 0), Vector3::new(1, 2, 0));
        assert!(point_intersects_ray(&Point3::new(2, 4, 0), &ray));
        assert!(!point_intersects_ray(&Point3::new(-1, -2, 0), &ray));
        assert!(!point_intersects_ray(&Point3::new(1, 1, 0), &ray));
    }
}
