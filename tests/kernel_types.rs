// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Canonical kernel-identity verification
//!
//! The owning-kernel alias of every primitive type, and every canonical
//! alias a kernel exposes, must resolve to the assembled kernel type
//! itself. These are compile-time identities: the assertions below only
//! type-check when they hold.

use hedra::{
    CopyOnWrite, GeometricObject, Homogeneous, Kernel, KernelTypes, Line3, Point3, Quotient, Ray3,
    Segment3, SimpleHomogeneous, Tetrahedron3, Unique, Vector3,
};
use num_bigint::BigInt;

trait Same<T> {}
impl<T> Same<T> for T {}
fn assert_same<A: Same<B>, B>() {}

#[test]
fn test_owning_kernel_resolves_to_the_assembled_kernel() {
    type K = SimpleHomogeneous<i64>;
    assert_same::<<Point3<K> as GeometricObject>::Kernel, K>();
    assert_same::<<Vector3<K> as GeometricObject>::Kernel, K>();
    assert_same::<<Ray3<K> as GeometricObject>::Kernel, K>();
    assert_same::<<Segment3<K> as GeometricObject>::Kernel, K>();
    assert_same::<<Line3<K> as GeometricObject>::Kernel, K>();
    assert_same::<<Tetrahedron3<K> as GeometricObject>::Kernel, K>();
}

#[test]
fn test_owning_kernel_identity_holds_for_every_assembly() {
    assert_same::<
        <Point3<Homogeneous<i64>> as GeometricObject>::Kernel,
        Homogeneous<i64>,
    >();
    assert_same::<
        <Tetrahedron3<SimpleHomogeneous<BigInt>> as GeometricObject>::Kernel,
        SimpleHomogeneous<BigInt>,
    >();
    assert_same::<
        <Ray3<SimpleHomogeneous<f64, f64>> as GeometricObject>::Kernel,
        SimpleHomogeneous<f64, f64>,
    >();
}

#[test]
fn test_canonical_aliases_name_primitives_of_the_kernel_itself() {
    type K = Homogeneous<i32>;
    assert_same::<<K as KernelTypes>::Point3, Point3<K>>();
    assert_same::<<K as KernelTypes>::Vector3, Vector3<K>>();
    assert_same::<<K as KernelTypes>::Ray3, Ray3<K>>();
    assert_same::<<K as KernelTypes>::Segment3, Segment3<K>>();
    assert_same::<<K as KernelTypes>::Line3, Line3<K>>();
    assert_same::<<K as KernelTypes>::Tetrahedron3, Tetrahedron3<K>>();
}

#[test]
fn test_round_trip_through_alias_and_owner() {
    // Alias of the owner of an alias is the alias itself.
    type K = SimpleHomogeneous<i64>;
    type P = <K as KernelTypes>::Point3;
    assert_same::<<<P as GeometricObject>::Kernel as KernelTypes>::Point3, P>();
}

#[test]
fn test_configured_capability_set() {
    assert_same::<<SimpleHomogeneous<i64> as Kernel>::RT, i64>();
    assert_same::<<SimpleHomogeneous<i64> as Kernel>::FT, Quotient<i64>>();
    assert_same::<<SimpleHomogeneous<i64> as Kernel>::Policy, Unique>();
    assert_same::<<Homogeneous<i64> as Kernel>::Policy, CopyOnWrite>();
    assert_same::<<SimpleHomogeneous<f64, f64> as Kernel>::FT, f64>();
}
