// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Storage policies: value-owned vs. shared copy-on-write handles
//!
//! A kernel fixes, once, how every primitive under it stores its backing
//! coordinates: either as a plain owned value (each copy is independent,
//! O(size) to clone) or behind a reference-counted handle with
//! copy-on-write (O(1) to clone, a private copy is made on the first
//! mutation after sharing). Either way the observable value semantics are
//! identical: mutating one copy never affects another.

use core::fmt;
use std::rc::Rc;

/// Ownership wrapper around a primitive's backing storage.
///
/// `get` borrows the stored value; `make_mut` yields a mutable borrow,
/// detaching from any sharing first if the policy shares storage.
pub trait HandleFor<T>: Clone + fmt::Debug {
    fn wrap(value: T) -> Self;

    fn get(&self) -> &T;

    fn make_mut(&mut self) -> &mut T;
}

/// The identity handle: the value is its own storage.
impl<T: Clone + fmt::Debug> HandleFor<T> for T {
    fn wrap(value: T) -> T {
        value
    }

    fn get(&self) -> &T {
        self
    }

    fn make_mut(&mut self) -> &mut T {
        self
    }
}

/// Reference-counted handle with copy-on-write semantics.
///
/// Cloning bumps a (non-atomic) reference count; `make_mut` clones the
/// stored value first if it is currently shared.
pub struct CowHandle<T> {
    inner: Rc<T>,
}

impl<T> CowHandle<T> {
    /// Whether two handles currently share the same backing storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for CowHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CowHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T: Clone + fmt::Debug> HandleFor<T> for CowHandle<T> {
    fn wrap(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }

    fn get(&self) -> &T {
        &self.inner
    }

    fn make_mut(&mut self) -> &mut T {
        Rc::make_mut(&mut self.inner)
    }
}

/// Per-kernel choice of handle type.
///
/// Switching the policy changes copy cost and sharing behavior only,
/// never a primitive's public API.
pub trait StoragePolicy: 'static {
    type Handle<T: Clone + fmt::Debug + 'static>: HandleFor<T>;
}

/// Value-owned storage: every copy of a primitive is fully independent.
///
/// There is no shared mutable state under this policy, so concurrent use
/// needs no coordination; it is the policy to prefer for multi-threaded
/// workloads.
#[derive(Debug, Clone, Copy)]
pub struct Unique;

impl StoragePolicy for Unique {
    type Handle<T: Clone + fmt::Debug + 'static> = T;
}

/// Shared storage with copy-on-write.
///
/// The reference count is non-atomic; primitives under this policy are
/// not `Send`.
#[derive(Debug, Clone, Copy)]
pub struct CopyOnWrite;

impl StoragePolicy for CopyOnWrite {
    type Handle<T: Clone + fmt::Debug + 'static> = CowHandle<T>;
}
