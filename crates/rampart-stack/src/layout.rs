// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer layout: `[front guard][data, word-aligned][back guard]`.
//!
//! The data region is rounded up to a multiple of the guard word size so the
//! back guard always starts on a machine-word boundary. Both guard slots are
//! reserved in every allocation, whether or not guard verification is enabled;
//! the layout never changes shape under configuration.

/// Size in bytes of one guard word.
pub const GUARD_WORD_SIZE: usize = core::mem::size_of::<u64>();

/// Sentinel written into the guard word in front of the data region.
pub const FRONT_GUARD: u64 = 0xbadc_0ffe_e0dd_f00d;

/// Sentinel written into the guard word behind the data region.
pub const BACK_GUARD: u64 = 0xdead_f00d_baad_c0de;

/// Byte offset of the data region inside the buffer.
pub const DATA_OFFSET: usize = GUARD_WORD_SIZE;

/// Length of the data region for `capacity` elements, rounded up to a
/// guard-word multiple.
///
/// `None` when the byte length overflows `usize`; such a capacity can never
/// be allocated, so callers surface it as an allocation failure.
#[inline]
pub fn aligned_data_len(capacity: i64, element_size: usize) -> Option<usize> {
    let raw = (capacity as usize).checked_mul(element_size)?;

    raw.checked_add(GUARD_WORD_SIZE - 1)
        .map(|len| len & !(GUARD_WORD_SIZE - 1))
}

/// Total buffer length: aligned data region plus the two guard slots.
/// `None` on overflow, like [`aligned_data_len`].
#[inline]
pub fn total_len(capacity: i64, element_size: usize) -> Option<usize> {
    aligned_data_len(capacity, element_size)?.checked_add(2 * GUARD_WORD_SIZE)
}

/// Byte offset of the back guard word inside a buffer of `total` bytes.
#[inline]
pub fn back_guard_offset(total: usize) -> usize {
    total - GUARD_WORD_SIZE
}

/// Reads the guard word stored at `offset`.
#[inline]
pub fn read_word(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; GUARD_WORD_SIZE];
    word.copy_from_slice(&bytes[offset..offset + GUARD_WORD_SIZE]);

    u64::from_le_bytes(word)
}

/// Writes `value` as a guard word at `offset`.
#[inline]
pub fn write_word(bytes: &mut [u8], offset: usize, value: u64) {
    bytes[offset..offset + GUARD_WORD_SIZE].copy_from_slice(&value.to_le_bytes());
}
