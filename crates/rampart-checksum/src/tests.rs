// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{checksum, Fnv1a, FNV_OFFSET_BASIS};

// =============================================================================
// checksum()
// =============================================================================

#[test]
fn test_empty_input_is_offset_basis() {
    assert_eq!(checksum(b""), FNV_OFFSET_BASIS);
}

#[test]
fn test_known_vectors() {
    // Reference vectors for 64-bit FNV-1a
    assert_eq!(checksum(b"a"), 0xaf63dc4c8601ec8c);
    assert_eq!(checksum(b"foobar"), 0x85944171f73967e8);
}

#[test]
fn test_deterministic() {
    let data = [7u8; 1024];

    assert_eq!(checksum(&data), checksum(&data));
}

#[test]
fn test_single_byte_flip_changes_checksum() {
    let mut data = [0u8; 256];
    let baseline = checksum(&data);

    for i in 0..data.len() {
        data[i] ^= 0x01;
        assert_ne!(checksum(&data), baseline, "flip at {i} went undetected");
        data[i] ^= 0x01;
    }
}

#[test]
fn test_order_sensitive() {
    assert_ne!(checksum(b"ab"), checksum(b"ba"));
}

// =============================================================================
// Fnv1a streaming
// =============================================================================

#[test]
fn test_streaming_matches_one_shot() {
    let data = b"the quick brown fox jumps over the lazy dog";

    let mut hasher = Fnv1a::new();
    hasher.write(&data[..10]);
    hasher.write(&data[10..]);

    assert_eq!(hasher.finish(), checksum(data));
}

#[test]
fn test_write_u64_matches_le_bytes() {
    let value = 0x0123_4567_89ab_cdefu64;

    let mut a = Fnv1a::new();
    a.write_u64(value);

    let mut b = Fnv1a::new();
    b.write(&value.to_le_bytes());

    assert_eq!(a.finish(), b.finish());
}

#[test]
fn test_write_u8_matches_slice() {
    let mut a = Fnv1a::new();
    a.write_u8(0x42);

    let mut b = Fnv1a::new();
    b.write(&[0x42]);

    assert_eq!(a.finish(), b.finish());
}

#[test]
fn test_default_equals_new() {
    assert_eq!(Fnv1a::default().finish(), Fnv1a::new().finish());
}
