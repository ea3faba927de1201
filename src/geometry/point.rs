// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Points in 3-space

use core::fmt;
use core::ops::{Add, AddAssign, Sub};

use nalgebra as na;
use num_traits::Zero;

use super::Vector3;
use crate::error::KernelError;
use crate::handle::HandleFor;
use crate::kernel::{GeometricObject, HandleOf, Kernel, RepOf};
use crate::representation::HomogeneousRep;

/// A point in 3-space under kernel `K`.
///
/// Stored homogeneously as `(hx, hy, hz, hw)` behind the kernel's
/// handle; two points are equal when they denote the same Cartesian
/// position, whatever their representations.
pub struct Point3<K: Kernel> {
    rep: HandleOf<K, RepOf<K>>,
}

impl<K: Kernel> Point3<K> {
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

    /// Checked variant of [`Point3::from_homogeneous`].
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

    /// The point at the origin.
    pub fn origin() -> Self {
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

    /// Cartesian position in the kernel's field type.
    pub fn to_cartesian(&self) -> na::Point3<K::FT> {
        let [x, y, z] = self.rep.get().cartesian::<K::FT>();
        na::Point3::new(x, y, z)
    }
}

impl<K: Kernel> GeometricObject for Point3<K> {
    type Kernel = K;
}

impl<K: Kernel> Clone for Point3<K> {
    fn clone(&self) -> Self {
        Self {
            rep: self.rep.clone(),
        }
    }
}

impl<K: Kernel> fmt::Debug for Point3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point3")
            .field(self.hx())
            .field(self.hy())
            .field(self.hz())
            .field(self.hw())
            .finish()
    }
}

impl<K: Kernel> PartialEq for Point3<K> {
    fn eq(&self, other: &Self) -> bool {
        let same = |a: &K::RT, b: &K::RT| {
            a.clone() * other.hw().clone() == b.clone() * self.hw().clone()
        };
        same(self.hx(), other.hx()) && same(self.hy(), other.hy()) && same(self.hz(), other.hz())
    }
}

/// Translation. This is the mutating operation: under a sharing policy
/// it detaches the point from any storage it shares first.
impl<K: Kernel> AddAssign<&Vector3<K>> for Point3<K> {
    fn add_assign(&mut self, v: &Vector3<K>) {
        let moved = {
            let pw = self.hw().clone();
            let vw = v.hw().clone();
            HomogeneousRep::from_homogeneous(
                self.hx().clone() * vw.clone() + v.hx().clone() * pw.clone(),
                self.hy().clone() * vw.clone() + v.hy().clone() * pw.clone(),
                self.hz().clone() * vw.clone() + v.hz().clone() * pw.clone(),
                pw * vw,
            )
        };
        *self.rep.make_mut() = moved;
    }
}

impl<K: Kernel> Add<&Vector3<K>> for &Point3<K> {
    type Output = Point3<K>;

    fn add(self, v: &Vector3<K>) -> Point3<K> {
        let mut out = self.clone();
        out += v;
        out
    }
}

/// Difference vector `self - other`.
impl<K: Kernel> Sub for &Point3<K> {
    type Output = Vector3<K>;

    fn sub(self, other: &Point3<K>) -> Vector3<K> {
        let aw = self.hw().clone();
        let bw = other.hw().clone();
        Vector3::from_homogeneous(
            self.hx().clone() * bw.clone() - other.hx().clone() * aw.clone(),
            self.hy().clone() * bw.clone() - other.hy().clone() * aw.clone(),
            self.hz().clone() * bw.clone() - other.hz().clone() * aw.clone(),
            aw * bw,
        )
    }
}
