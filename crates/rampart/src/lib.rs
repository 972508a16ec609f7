// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>A stack that refuses to run on corrupted memory.</em></p>
//!
//! ---
//!
//! Rampart is a self-verifying dynamic-array stack for environments where
//! silent memory corruption must be caught early rather than propagate.
//! Elements live in one contiguous buffer fenced by guard words; checksums
//! cover the buffer and the control block and are re-verified on every
//! operation.
//!
//! # Features
//!
//! - **Guard words** — fixed sentinels at both ends of the data region catch
//!   out-of-bounds writes the moment the stack is next touched
//! - **Checksummed control block** — external mutation of size, capacity or
//!   the buffer itself is detected, not silently obeyed
//! - **Poison fill** — popped slots are overwritten with a caller-chosen
//!   pattern so use-after-pop bugs become visible
//! - **Amortized resize** — grow by doubling, shrink below a quarter with a
//!   floor of 128, O(1) per operation
//! - **Fail-fast** — ordinary misuse is a recoverable `Err`; detected
//!   corruption takes the stack out of service permanently
//! - **`no_std` compatible** — `alloc` is the only requirement
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::{Origin, RampartStack, StackConfig, StackError};
//!
//! fn main() -> Result<(), StackError> {
//!     let mut stack = RampartStack::<u64>::new(StackConfig::default());
//!     stack.construct_with(16, Some(0xDEAD_DEAD_DEAD_DEAD), Some(Origin::here("demo")))?;
//!
//!     stack.push(1)?;
//!     stack.push(2)?;
//!     assert_eq!(stack.pop()?, 2);
//!
//!     stack.verify().map_err(StackError::from)?;
//!     stack.destroy();
//!     Ok(())
//! }
//! ```
//!
//! # Choosing a protection level
//!
//! Every layer defaults to on. Turning one off is an explicit trade of safety
//! for throughput:
//!
//! ```rust
//! use rampart::{CorruptionPolicy, RampartStack, StackConfig};
//!
//! let config = StackConfig {
//!     diagnostics: false,                           // no poison, no reports
//!     corruption_policy: CorruptionPolicy::Condemn, // fail calls, don't abort
//!     ..StackConfig::default()
//! };
//! let stack = RampartStack::<u32>::new(config);
//! assert!(!stack.is_constructed());
//! ```
//!
//! Disabling guards, checksums *and* diagnostics leaves a plain dynamic
//! array with no corruption detection at all.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use rampart_stack::{
    CorruptionKind, CorruptionPolicy, Origin, RampartStack, StackConfig, StackError,
};

/// The FNV-1a checksum behind the integrity guard, exposed for audits.
pub use rampart_checksum as checksum;
