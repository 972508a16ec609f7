// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! StackBuffer - the owned byte region behind a stack.
//!
//! All allocation is fallible: allocator exhaustion surfaces as
//! `StackError::AllocationFailure` instead of the global OOM abort, and a
//! failed grow leaves the previous buffer untouched so the caller can roll
//! the operation back.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::StackError;

/// Owned byte region holding `[front guard][data][back guard]`.
pub struct StackBuffer {
    bytes: Vec<u8>,
    #[cfg(test)]
    fail_next_resize: bool,
}

impl StackBuffer {
    /// Creates an empty, unallocated buffer.
    pub const fn empty() -> Self {
        Self {
            bytes: Vec::new(),
            #[cfg(test)]
            fail_next_resize: false,
        }
    }

    /// Allocates a zero-filled buffer of exactly `len` bytes.
    pub fn allocate(len: usize) -> Result<Self, StackError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len)?;
        bytes.resize(len, 0);

        Ok(Self {
            bytes,
            #[cfg(test)]
            fail_next_resize: false,
        })
    }

    /// Resizes to exactly `new_len` bytes, preserving the common prefix.
    ///
    /// Growth zero-fills the new tail; shrinking releases the excess. On
    /// allocation failure the buffer is left exactly as it was.
    pub fn resize_preserving(&mut self, new_len: usize) -> Result<(), StackError> {
        #[cfg(test)]
        if core::mem::take(&mut self.fail_next_resize) {
            return Err(StackError::AllocationFailure);
        }

        if new_len > self.bytes.len() {
            self.bytes.try_reserve_exact(new_len - self.bytes.len())?;
            self.bytes.resize(new_len, 0);
        } else {
            self.bytes.truncate(new_len);
            self.bytes.shrink_to_fit();
        }

        Ok(())
    }

    /// Releases the allocation, leaving an empty buffer.
    pub fn release(&mut self) {
        self.bytes = Vec::new();
    }

    /// Length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The whole region, guards included.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the whole region, guards included.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Raw pointer to the start of the region.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Raw mutable pointer to the start of the region.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }
}

// Failure injection so allocator-exhaustion rollback paths stay testable
#[cfg(test)]
impl StackBuffer {
    pub(crate) fn inject_resize_failure(&mut self) {
        self.fail_next_resize = true;
    }
}

impl core::fmt::Debug for StackBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
