// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Hedra Geometry Kernel
//!
//! A generic computational-geometry kernel: primitive types and the
//! predicates over them are written once and reused across arbitrary
//! coordinate number types and storage-sharing strategies. A kernel is
//! assembled from a ring type (stored coordinates), a field type
//! (computed coordinates, by default an exact rational built from the
//! ring) and a storage policy; symmetric pairwise queries such as
//! "do these two shapes intersect?" are generated from one routine per
//! primitive pair.

pub mod error;
pub mod geometry;
pub mod handle;
pub mod intersection;
pub mod kernel;
pub mod number;
pub mod representation;

pub use error::KernelError;
pub use geometry::{Line3, Point3, Ray3, Segment3, Tetrahedron3, Vector3};
pub use handle::{CopyOnWrite, StoragePolicy, Unique};
pub use intersection::{do_intersect, intersection, Intersection, Intersects, LinearIntersection};
pub use kernel::{GeometricObject, Homogeneous, Kernel, KernelTypes, SimpleHomogeneous};
pub use number::{FieldNumber, Quotient, RingNumber, Sign};
