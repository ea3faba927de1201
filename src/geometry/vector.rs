// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Vectors in 3-space

use core::fmt;
use core::ops::{Add, Mul, Neg};

use nalgebra as na;
use num_traits::Zero;

use crate::error::KernelError;
use crate::handle::HandleFor;
use crate::kernel::{GeometricObject, HandleOf, Kernel, RepOf};
use crate::representation::HomogeneousRep;

/// A direction-and-magnitude in 3-space under kernel `K`.
///
/// Shares the point representation: `(hx, hy, hz, hw)` with Cartesian
/// components `hx/hw, hy/hw, hz/hw`.
pub struct Vector3<K: Kernel> {
    rep: HandleOf<K, RepOf<K>>,
}

impl<K: Kernel> Vector3<K> {
    pub fn new(x: K::RT, y: K::RT, z: K::RT) -> Self {
        Self {
            rep: HandleFor::wrap(HomogeneousRep::from_cartesian(x, y, z)),
        }
    }

    /// Precondition: `hw` is non-zero.
    pub fn from_homogeneous(hx: K::RT, hy: K::RT, hz: K::RT, hw: K::RT) -> Self {
        Self {
            rep: HandleFor::wrap(HomogeneousRep::from_homogeneous(hx, hy, hz, hw)),
        }
    }

    /// Checked variant of [`Vector3::from_homogeneous`].
    pub fn try_from_homogeneous(
        hx: K::RT,
        hy: K::RT,
        hz: K::RT,
        hw: K::RT,
    ) -> Result<Self, KernelError> {
        if hw.is_zero() {
            return Err(KernelError::ZeroWeight);
        }
        Ok(Self::from_homogeneous(hx, hy, hz, hw))
    }

    pub fn zero() -> Self {
        Self::new(K::RT::zero(), K::RT::zero(), K::RT::zero())
    }

    pub fn hx(&self) -> &K::RT {
        self.rep.get().hx()
    }

    pub fn hy(&self) -> &K::RT {
        self.rep.get().hy()
    }

    pub fn hz(&self) -> &K::RT {
        self.rep.get().hz()
    }

    pub fn hw(&self) -> &K::RT {
        self.rep.get().hw()
    }

    pub fn x(&self) -> K::FT {
        let [x, _, _] = self.rep.get().cartesian::<K::FT>();
        x
    }

    pub fn y(&self) -> K::FT {
        let [_, y, _] = self.rep.get().cartesian::<K::FT>();
        y
    }

    pub fn z(&self) -> K::FT {
        let [_, _, z] = self.rep.get().cartesian::<K::FT>();
        z
    }

    /// Whether this is the zero vector (a degenerate direction).
    pub fn is_zero(&self) -> bool {
        self.hx().is_zero() && self.hy().is_zero() && self.hz().is_zero()
    }

    /// Cartesian components in the kernel's field type.
    pub fn to_cartesian(&self) -> na::Vector3<K::FT> {
        let [x, y, z] = self.rep.get().cartesian::<K::FT>();
        na::Vector3::new(x, y, z)
    }

    /// The vector scaled by a ring value.
    pub fn scaled(&self, factor: K::RT) -> Self {
        Self::from_homogeneous(
            self.hx().clone() * factor.clone(),
            self.hy().clone() * factor.clone(),
            self.hz().clone() * factor,
            self.hw().clone(),
        )
    }
}

impl<K: Kernel> GeometricObject for Vector3<K> {
    type Kernel = K;
}

impl<K: Kernel> Clone for Vector3<K> {
    fn clone(&self) -> Self {
        Self {
            rep: self.rep.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for Vector3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector3")
            .field(self.hx())
            .field(self.hy())
            .field(self.hz())
            .field(self.hw())
            .finish()
    }
}

impl<K: Kernel> PartialEq for Vector3<K> {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: &K::RT, b: &K::RT| {
            a.clone() * other.hw().clone() == b.clone() * self.hw().clone()
        };
        same(self.hx(), other.hx()) && same(self.hy(), other.hy()) && same(self.hz(), other.hz())
    }
}

impl<K: Kernel> Add for &Vector3<K> {
    type Output = Vector3<K>;

    fn add(self, other: &Vector3<K>) -> Vector3<K> {
        let aw = self.hw().clone();
        let bw = other.hw().clone();
        Vector3::from_homogeneous(
            self.hx().clone() * bw.clone() + other.hx().clone() * aw.clone(),
            self.hy().clone() * bw.clone() + other.hy().clone() * aw.clone(),
            self.hz().clone() * bw.clone() + other.hz().clone() * aw.clone(),
            aw * bw,
        )
    }
}

impl<K: Kernel> Neg for &Vector3<K> {
    type Output = Vector3<K>;

    fn neg(self) -> Vector3<K> {
        Vector3::from_homogeneous(
            -self.hx().clone(),
            -self.hy().clone(),
            -self.hz().clone(),
            self.hw().clone(),
        )
    }
}

impl<K: Kernel> Mul<K::RT> for &Vector3<K> {
    type Output = Vector3<K>;

    fn mul(self, factor: K::RT) -> Vector3<K> {
        self.scaled(factor)
    }
}
