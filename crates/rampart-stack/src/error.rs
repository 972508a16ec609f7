// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-stack.

extern crate alloc;

use alloc::collections::TryReserveError;
use thiserror::Error;

/// Invariant violations detected by [`verify`](crate::RampartStack::verify).
///
/// Listed in verification order; the first violated kind wins. Unlike
/// [`StackError`]'s other variants, corruption is never recoverable: once one
/// of these is detected the stack refuses to serve any further call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum CorruptionKind {
    /// The guard word in front of the data region no longer holds its
    /// sentinel value.
    #[error("front guard word corrupted")]
    FrontGuardCorrupted = 1,

    /// The guard word behind the data region no longer holds its sentinel
    /// value.
    #[error("back guard word corrupted")]
    BackGuardCorrupted = 2,

    /// The control block does not match its recorded checksum.
    #[error("control checksum mismatch")]
    ControlChecksumMismatch = 3,

    /// The buffer does not match its recorded checksum.
    #[error("data checksum mismatch")]
    DataChecksumMismatch = 4,
}

/// Errors returned by stack operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StackError {
    /// A caller-supplied argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Construct was called on a stack that is already constructed.
    #[error("stack has already been constructed")]
    AlreadyConstructed,

    /// The allocator could not satisfy a request; prior state is preserved.
    #[error("memory was not allocated")]
    AllocationFailure,

    /// Pop was called on a stack with zero elements.
    #[error("stack is empty, cannot pop")]
    EmptyUnderflow,

    /// Corruption was detected; the stack is out of service.
    #[error("corruption detected: {0}")]
    Corruption(#[from] CorruptionKind),
}

impl From<TryReserveError> for StackError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailure
    }
}
