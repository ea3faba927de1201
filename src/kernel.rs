// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Kernel assembly: number types + storage policy + canonical identity
//!
//! A kernel is the bundle backing a family of primitive types: a ring
//! type for stored coordinates, a field type for computed coordinates,
//! and a storage policy. The whole capability set is resolved once, in a
//! single configuration trait; the canonical self-type every primitive's
//! owning-kernel alias must resolve to is simply `Self`.

use core::fmt;
use core::marker::PhantomData;

use crate::geometry::{Line3, Point3, Ray3, Segment3, Tetrahedron3, Vector3};
use crate::handle::{CopyOnWrite, StoragePolicy, Unique};
use crate::number::{FieldNumber, Quotient, RingNumber};
use crate::representation::HomogeneousRep;

/// A fully assembled geometric kernel.
///
/// `RT` is the stored (ring) coordinate type, `FT` the computed (field)
/// coordinate type, `Policy` the storage/sharing strategy. Implementors
/// are zero-sized markers; a kernel's identity is fixed at compile time
/// and never changes at runtime.
pub trait Kernel: Sized + 'static {
    type RT: RingNumber;
    type FT: FieldNumber + From<Self::RT>;
    type Policy: StoragePolicy;
}

/// Shorthand for the handle a kernel's policy selects for storage `T`.
pub type HandleOf<K, T> = <<K as Kernel>::Policy as StoragePolicy>::Handle<T>;

/// Shorthand for a kernel's backing coordinate representation.
pub type RepOf<K> = HomogeneousRep<<K as Kernel>::RT>;

/// Owning-kernel alias of a primitive type.
///
/// For every primitive built under an assembled kernel `K`, this alias
/// resolves to `K` itself, never to an intermediate composition
/// artifact. Predicate dispatch and cross-object compatibility are keyed
/// on this identity.
pub trait GeometricObject {
    type Kernel: Kernel;
}

/// Canonical primitive aliases of a kernel.
///
/// Blanket-implemented for every kernel, so each alias is rewritten in
/// terms of the assembled kernel itself: `K::Point3` is `Point3<K>`
/// regardless of how `K` was composed. Together with
/// [`GeometricObject`], this makes owning-kernel identity a compile-time
/// equality (see tests/kernel_types.rs).
pub trait KernelTypes: Kernel {
    type Point3;
    type Vector3;
    type Ray3;
    type Segment3;
    type Line3;
    type Tetrahedron3;
}

impl<K: Kernel> KernelTypes for K {
    type Point3 = Point3<K>;
    type Vector3 = Vector3<K>;
    type Ray3 = Ray3<K>;
    type Segment3 = Segment3<K>;
    type Line3 = Line3<K>;
    type Tetrahedron3 = Tetrahedron3<K>;
}

/// Homogeneous kernel with value-owned storage.
///
/// Every primitive copy is fully independent; there is no shared mutable
/// state, so this is the kernel to prefer for concurrent workloads.
pub struct SimpleHomogeneous<RT, FT = Quotient<RT>> {
    _marker: PhantomData<fn() -> (RT, FT)>,
}

impl<RT, FT> Kernel for SimpleHomogeneous<RT, FT>
where
    RT: RingNumber,
    FT: FieldNumber + From<RT>,
{
    type RT = RT;
    type FT = FT;
    type Policy = Unique;
}

impl<RT, FT> fmt::Debug for SimpleHomogeneous<RT, FT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SimpleHomogeneous")
    }
}

/// Homogeneous kernel with shared, copy-on-write storage.
///
/// Copying a primitive is O(1); a private copy of the backing
/// coordinates is made on first mutation after sharing.
pub struct Homogeneous<RT, FT = Quotient<RT>> {
    _marker: PhantomData<fn() -> (RT, FT)>,
}

impl<RT, FT> Kernel for Homogeneous<RT, FT>
where
    RT: RingNumber,
    FT: FieldNumber + From<RT>,
{
    type RT = RT;
    type FT = FT;
    type Policy = CopyOnWrite;
}

impl<RT, FT> fmt::Debug for Homogeneous<RT, FT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Homogeneous")
    }
}
