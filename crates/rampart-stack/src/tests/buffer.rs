// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::buffer::StackBuffer;

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_zero_filled() {
    let buf = StackBuffer::allocate(64).unwrap();

    assert_eq!(buf.len(), 64);
    assert!(buf.as_slice().iter().all(|b| *b == 0));
}

#[test]
fn test_allocate_zero_length() {
    let buf = StackBuffer::allocate(0).unwrap();

    assert_eq!(buf.len(), 0);
}

#[test]
fn test_empty_has_no_allocation() {
    let buf = StackBuffer::empty();

    assert_eq!(buf.len(), 0);
}

// =============================================================================
// resize_preserving()
// =============================================================================

#[test]
fn test_grow_preserves_prefix_and_zero_fills_tail() {
    let mut buf = StackBuffer::allocate(16).unwrap();
    buf.as_mut_slice().copy_from_slice(&[0xAB; 16]);

    buf.resize_preserving(32).unwrap();

    assert_eq!(buf.len(), 32);
    assert_eq!(&buf.as_slice()[..16], &[0xAB; 16]);
    assert_eq!(&buf.as_slice()[16..], &[0x00; 16]);
}

#[test]
fn test_shrink_preserves_prefix() {
    let mut buf = StackBuffer::allocate(32).unwrap();
    buf.as_mut_slice().copy_from_slice(&[0xCD; 32]);

    buf.resize_preserving(8).unwrap();

    assert_eq!(buf.len(), 8);
    assert_eq!(buf.as_slice(), &[0xCD; 8]);
}

// =============================================================================
// release()
// =============================================================================

#[test]
fn test_release_empties_buffer() {
    let mut buf = StackBuffer::allocate(128).unwrap();

    buf.release();

    assert_eq!(buf.len(), 0);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_hides_contents() {
    let buf = StackBuffer::allocate(16).unwrap();
    let rendered = format!("{buf:?}");

    assert!(rendered.contains("len"));
    assert!(!rendered.contains("0xAB"));
}
