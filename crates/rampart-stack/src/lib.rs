// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Self-verifying dynamic-array stack with guard words and checksums.
//!
//! `RampartStack<T>` stores `Copy` elements in one contiguous byte buffer
//! laid out as `[front guard][data region][back guard]` and continuously
//! guards both the buffer and its own control block against out-of-bounds
//! writes and accidental external mutation. Detection, not repair, is the
//! contract: ordinary misuse is reported and leaves the stack usable, while
//! detected corruption takes the stack out of service for good.
//!
//! # Protection Layers
//!
//! - **Guard words**: fixed 64-bit sentinels at both ends of the data
//!   region, checked on every operation. An overrun that touches the byte
//!   next to the data region is caught before it can propagate.
//! - **Checksums**: FNV-1a 64 over the control block and over the whole
//!   buffer, recomputed after every committed mutation and compared on entry
//!   to every operation.
//! - **Poison fill**: a caller-supplied value written into vacated slots so
//!   use-after-pop reads become visible in a debugger or dump.
//!
//! Each layer can be disabled through [`StackConfig`]; the default enables
//! all of them, and turning everything off (a plain dynamic array) is always
//! an explicit choice.
//!
//! # Resize Policy
//!
//! Growth doubles capacity before a push that would hit the buffer edge;
//! shrinking halves it after a pop once size falls below a quarter of a
//! capacity above 128. The hysteresis amortizes reallocation to O(1) per
//! operation while bounding wasted memory. `truncate_to_fit` compacts
//! explicitly, outside the automatic policy.
//!
//! # Example
//!
//! ```rust
//! use rampart_stack::{Origin, RampartStack, StackConfig, StackError};
//!
//! fn example() -> Result<(), StackError> {
//!     let mut stack = RampartStack::<u32>::new(StackConfig::default());
//!     stack.construct_with(16, Some(0xDEAD_10CC), Some(Origin::here("parser")))?;
//!
//!     for value in 0..100 {
//!         stack.push(value)?;
//!     }
//!     while let Ok(value) = stack.pop() {
//!         let _ = value;
//!     }
//!
//!     assert!(stack.is_empty());
//!     assert!(stack.verify().is_ok());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Concurrency
//!
//! Single-threaded by design: one logical owner at a time, no internal
//! synchronization. Wrap the stack in a lock if threads must share it.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod config;
mod error;
mod layout;
mod origin;
mod report;
mod stack;

pub use config::{CorruptionPolicy, StackConfig};
pub use error::{CorruptionKind, StackError};
pub use origin::Origin;
pub use stack::RampartStack;
