// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Tetrahedra in 3-space

use core::fmt;

use super::{predicates, Point3};
use crate::error::KernelError;
use crate::kernel::{GeometricObject, Kernel};
use crate::number::Sign;

/// The closed convex region spanned by four vertices under kernel `K`:
/// the intersection of the four oriented half-spaces bounded by its
/// faces.
///
/// Coplanar vertices are a precondition violation; `try_new` rejects
/// them, `new` does not check.
pub struct Tetrahedron3<K: Kernel> {
    vertices: [Point3<K>; 4],
}

impl<K: Kernel> Tetrahedron3<K> {
    /// Precondition: the vertices are not coplanar.
    pub fn new(p0: Point3<K>, p1: Point3<K>, p2: Point3<K>, p3: Point3<K>) -> Self {
        Self {
            vertices: [p0, p1, p2, p3],
        }
    }

    /// Checked variant of [`Tetrahedron3::new`].
    pub fn try_new(
        p0: Point3<K>,
        p1: Point3<K>,
        p2: Point3<K>,
        p3: Point3<K>,
    ) -> Result<Self, KernelError> {
        let t = Self::new(p0, p1, p2, p3);
        if t.orientation().is_zero() {
            return Err(KernelError::DegenerateSolid);
        }
        Ok(t)
    }

    /// Vertex `i`, counted 0..=3.
    pub fn vertex(&self, i: usize) -> &Point3<K> {
        &self.vertices[i]
    }

    pub fn vertices(&self) -> &[Point3<K>; 4] {
        &self.vertices
    }

    /// Orientation of vertex 3 relative to the plane through vertices
    /// 0, 1, 2. Zero means the solid is degenerate.
    pub fn orientation(&self) -> Sign {
        predicates::orientation(
            &self.vertices[0].to_cartesian(),
            &self.vertices[1].to_cartesian(),
            &self.vertices[2].to_cartesian(),
            &self.vertices[3].to_cartesian(),
        )
    }
}

impl<K: Kernel> GeometricObject for Tetrahedron3<K> {
    type Kernel = K;
}

impl<K: Kernel> Clone for Tetrahedron3<K> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for Tetrahedron3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.vertices.iter()).finish()
    }
}

impl<K: Kernel> PartialEq for Tetrahedron3<K> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}
