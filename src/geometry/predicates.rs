// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Orientation predicates over Cartesian coordinates
//!
//! These run in the kernel's field type: exact whenever the field type
//! is exact (the default `Quotient` over an integer ring), ordinary
//! floating-point otherwise.

use nalgebra as na;

use crate::number::{sign_of, RingNumber, Sign};

/// The determinant
///
/// ```text
/// | b - a |
/// | c - a |
/// | d - a |
/// ```
///
/// Six times the signed volume of the tetrahedron `(a, b, c, d)`:
/// positive when `d` lies on the positive side of the plane through
/// `a, b, c` oriented counterclockwise.
pub fn orientation_value<T: RingNumber>(
    a: &na::Point3<T>,
    b: &na::Point3<T>,
    c: &na::Point3<T>,
    d: &na::Point3<T>,
) -> T {
    let u = b - a;
    let v = c - a;
    let w = d - a;
    u.dot(&v.cross(&w))
}

/// Orientation of `d` relative to the plane through `a, b, c`.
pub fn orientation<T: RingNumber>(
    a: &na::Point3<T>,
    b: &na::Point3<T>,
    c: &na::Point3<T>,
    d: &na::Point3<T>,
) -> Sign {
    sign_of(&orientation_value(a, b, c, d))
}

/// Whether the four points lie in a common plane.
pub fn coplanar<T: RingNumber>(
    a: &na::Point3<T>,
    b: &na::Point3<T>,
    c: &na::Point3<T>,
    d: &na::Point3<T>,
) -> bool {
    orientation(a, b, c, d).is_zero()
}
