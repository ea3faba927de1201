// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Homogeneous coordinate representation
//!
//! Coordinates are stored as ratios `(hx, hy, hz, hw)` with `hw != 0`;
//! the Cartesian position is `(hx/hw, hy/hw, hz/hw)`. This lets a kernel
//! whose ring type has no division (integers, big integers) represent
//! points with rational coordinates exactly.

use nalgebra as na;

use crate::number::{FieldNumber, RingNumber};

/// Backing storage of a point or vector: one homogeneous coordinate
/// quadruple over the kernel's ring type.
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneousRep<RT> {
    coords: na::Vector4<RT>,
}

impl<RT: RingNumber> HomogeneousRep<RT> {
    /// Representation of the Cartesian triple `(x, y, z)` with `hw = 1`.
    pub fn from_cartesian(x: RT, y: RT, z: RT) -> Self {
        Self {
            coords: na::Vector4::new(x, y, z, RT::one()),
        }
    }

    /// Precondition: `hw` is non-zero.
    pub fn from_homogeneous(hx: RT, hy: RT, hz: RT, hw: RT) -> Self {
        debug_assert!(!hw.is_zero(), "homogeneous weight must be non-zero");
        Self {
            coords: na::Vector4::new(hx, hy, hz, hw),
        }
    }

    pub fn hx(&self) -> &RT {
        &self.coords.x
    }

    pub fn hy(&self) -> &RT {
        &self.coords.y
    }

    pub fn hz(&self) -> &RT {
        &self.coords.z
    }

    pub fn hw(&self) -> &RT {
        &self.coords.w
    }

    /// The Cartesian triple `(hx/hw, hy/hw, hz/hw)` in the field type.
    pub fn cartesian<FT>(&self) -> [FT; 3]
    where
        FT: FieldNumber + From<RT>,
    {
        let w = FT::from(self.coords.w.clone());
        [
            FT::from(self.coords.x.clone()) / w.clone(),
            FT::from(self.coords.y.clone()) / w.clone(),
            FT::from(self.coords.z.clone()) / w,
        ]
    }
}
