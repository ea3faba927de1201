// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Rays in 3-space

use core::fmt;

use super::{Point3, Vector3};
use crate::error::KernelError;
use crate::kernel::{GeometricObject, Kernel};

/// The semi-infinite point set `{O + t·D : t >= 0}` under kernel `K`.
///
/// A zero direction is a precondition violation: `new` only checks it in
/// debug builds, `try_new` rejects it.
pub struct Ray3<K: Kernel> {
    origin: Point3<K>,
    direction: Vector3<K>,
}

impl<K: Kernel> Ray3<K> {
    /// Precondition: `direction` is non-zero.
    pub fn new(origin: Point3<K>, direction: Vector3<K>) -> Self {
        debug_assert!(!direction.is_zero(), "ray direction must be non-zero");
        Self { origin, direction }
    }

    /// Checked variant of [`Ray3::new`].
    pub fn try_new(origin: Point3<K>, direction: Vector3<K>) -> Result<Self, KernelError> {
        if direction.is_zero() {
            return Err(KernelError::DegenerateDirection);
        }
        Ok(Self::new(origin, direction))
    }

    /// The ray from `source` through `target`.
    ///
    /// Precondition: the points are distinct.
    pub fn through(source: Point3<K>, target: Point3<K>) -> Self {
        let direction = &target - &source;
        Self::new(source, direction)
    }

    pub fn origin(&self) -> &Point3<K> {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3<K> {
        &self.direction
    }
}

impl<K: Kernel> GeometricObject for Ray3<K> {
    type Kernel = K;
}

impl<K: Kernel> Clone for Ray3<K> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            direction: self.direction.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for Ray3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ray3")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<K: Kernel> PartialEq for Ray3<K> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}
