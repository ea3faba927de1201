// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Segments in 3-space

use core::fmt;

use super::{Point3, Vector3};
use crate::kernel::{GeometricObject, Kernel};

/// The closed segment between two points under kernel `K`.
pub struct Segment3<K: Kernel> {
    source: Point3<K>,
    target: Point3<K>,
}

impl<K: Kernel> Segment3<K> {
    pub fn new(source: Point3<K>, target: Point3<K>) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &Point3<K> {
        &self.source
    }

    pub fn target(&self) -> &Point3<K> {
        &self.target
    }

    /// The difference vector `target - source`.
    pub fn to_vector(&self) -> Vector3<K> {
        &self.target - &self.source
    }
}

impl<K: Kernel> GeometricObject for Segment3<K> {
    type Kernel = K;
}

impl<K: Kernel> Clone for Segment3<K> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for Segment3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment3")
            .field("source", &self.source)
            .field("target", &self.target)
            .finish()
    }
}

impl<K: Kernel> PartialEq for Segment3<K> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}
