// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Error type for the checked construction surface
//!
//! The query layer itself has no recoverable errors: degenerate input is
//! a precondition violation, not a runtime fault. Callers that want the
//! preconditions validated use the `try_new` constructors, which report
//! through this enum.

use thiserror::Error;

/// Rejected precondition from a checked constructor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("direction vector must be non-zero")]
    DegenerateDirection,

    #[error("tetrahedron vertices must not be coplanar")]
    DegenerateSolid,

    #[error("homogeneous weight must be non-zero")]
    ZeroWeight,
}
