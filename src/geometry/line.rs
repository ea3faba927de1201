// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Lines in 3-space

use core::fmt;

use super::{Point3, Vector3};
use crate::error::KernelError;
use crate::kernel::{GeometricObject, Kernel};

/// The unbounded point set `{P + t·D : t in R}` under kernel `K`.
///
/// Same precondition contract as a ray: the direction must be non-zero.
pub struct Line3<K: Kernel> {
    point: Point3<K>,
    direction: Vector3<K>,
}

impl<K: Kernel> Line3<K> {
    /// Precondition: `direction` is non-zero.
    pub fn new(point: Point3<K>, direction: Vector3<K>) -> Self {
        debug_assert!(!direction.is_zero(), "line direction must be non-zero");
        Self { point, direction }
    }

    /// Checked variant of [`Line3::new`].
    pub fn try_new(point: Point3<K>, direction: Vector3<K>) -> Result<Self, KernelError> {
        if direction.is_zero() {
            return Err(KernelError::DegenerateDirection);
        }
        Ok(Self::new(point, direction))
    }

    pub fn point(&self) -> &Point3<K> {
        &self.point
    }

    pub fn direction(&self) -> &Vector3<K> {
        &self.direction
    }
}

impl<K: Kernel> GeometricObject for Line3<K> {
    type Kernel = K;
}

impl<K: Kernel> Clone for Line3<K> {
    fn clone(&self) -> Self {
        Self {
            point: self.point.clone(),
            direction: self.direction.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for Line3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line3")
            .field("point", &self.point)
            .field("direction", &self.direction)
            .finish()
    }
}
