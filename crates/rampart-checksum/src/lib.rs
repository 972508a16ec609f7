// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! rampart_checksum - FNV-1a 64-bit checksum for integrity verification.
//!
//! Deterministic, dependency-free and stable across runs and platforms,
//! which is all the integrity guard needs: a single flipped byte anywhere
//! in the covered range changes the result with overwhelming probability.
//! This is corruption *detection*, not cryptography - an adversary who can
//! already write arbitrary memory can forge it, and that is out of scope.
//!
//! # Example
//!
//! ```rust
//! use rampart_checksum::{checksum, Fnv1a};
//!
//! let one_shot = checksum(b"control block");
//!
//! let mut hasher = Fnv1a::new();
//! hasher.write(b"control block");
//! assert_eq!(hasher.finish(), one_shot);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Streaming FNV-1a 64-bit hasher.
///
/// Feed bytes or fixed-width integers in a stable order; the result only
/// depends on the byte sequence fed, never on call boundaries.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a {
    state: u64,
}

impl Fnv1a {
    /// Creates a hasher seeded with the FNV offset basis.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Folds a byte slice into the state.
    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= u64::from(*byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    /// Folds a single byte into the state.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.write(&[value]);
    }

    /// Folds a `u64` into the state as little-endian bytes.
    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.write(&value.to_le_bytes());
    }

    /// Returns the checksum of everything written so far.
    #[inline]
    pub const fn finish(&self) -> u64 {
        self.state
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot FNV-1a 64-bit checksum of a byte slice.
#[inline]
pub fn checksum(bytes: &[u8]) -> u64 {
    let mut hasher = Fnv1a::new();
    hasher.write(bytes);
    hasher.finish()
}
