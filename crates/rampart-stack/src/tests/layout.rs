// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::layout::{
    aligned_data_len, back_guard_offset, read_word, total_len, write_word, BACK_GUARD,
    DATA_OFFSET, FRONT_GUARD, GUARD_WORD_SIZE,
};

// =============================================================================
// aligned_data_len()
// =============================================================================

#[test]
fn test_aligned_data_len_rounds_up_to_word() {
    assert_eq!(aligned_data_len(0, 4), Some(0));
    assert_eq!(aligned_data_len(1, 1), Some(8));
    assert_eq!(aligned_data_len(2, 4), Some(8));
    assert_eq!(aligned_data_len(1, 8), Some(8));
    assert_eq!(aligned_data_len(3, 3), Some(16));
    assert_eq!(aligned_data_len(2, 8), Some(16));
}

#[test]
fn test_aligned_data_len_exact_multiple_unchanged() {
    assert_eq!(aligned_data_len(4, 8), Some(32));
    assert_eq!(aligned_data_len(16, 4), Some(64));
}

#[test]
fn test_aligned_data_len_overflow_is_none() {
    assert_eq!(aligned_data_len(i64::MAX, 8), None);
    assert_eq!(aligned_data_len(1 << 61, 8), None);
}

// =============================================================================
// total_len() / back_guard_offset()
// =============================================================================

#[test]
fn test_total_len_adds_two_guard_slots() {
    assert_eq!(total_len(0, 8), Some(2 * GUARD_WORD_SIZE));
    assert_eq!(total_len(4, 8), Some(32 + 2 * GUARD_WORD_SIZE));
}

#[test]
fn test_total_len_overflow_is_none() {
    assert_eq!(total_len(i64::MAX, 16), None);
}

#[test]
fn test_back_guard_starts_on_word_boundary() {
    for capacity in 0..32i64 {
        for element_size in [1usize, 2, 3, 4, 7, 8, 16] {
            let total = total_len(capacity, element_size).unwrap();
            assert_eq!(back_guard_offset(total) % GUARD_WORD_SIZE, 0);
        }
    }
}

// =============================================================================
// read_word() / write_word()
// =============================================================================

#[test]
fn test_word_roundtrip() {
    let mut bytes = [0u8; 24];

    write_word(&mut bytes, 0, FRONT_GUARD);
    write_word(&mut bytes, 16, BACK_GUARD);

    assert_eq!(read_word(&bytes, 0), FRONT_GUARD);
    assert_eq!(read_word(&bytes, 16), BACK_GUARD);
    // The data slot in between stays untouched
    assert_eq!(&bytes[DATA_OFFSET..16], &[0u8; 8]);
}

#[test]
fn test_guard_sentinels_differ() {
    assert_ne!(FRONT_GUARD, BACK_GUARD);
}
