// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::tests::quiet_config;
use crate::{RampartStack, StackError};

proptest! {
    #[test]
    fn lifo_holds_for_random_sequences(
        values in proptest::collection::vec(any::<u64>(), 1..200)
    ) {
        let mut stack = RampartStack::<u64>::constructed(4, quiet_config()).unwrap();

        for value in &values {
            stack.push(*value).unwrap();
        }
        prop_assert_eq!(stack.size() as usize, values.len());

        for expected in values.iter().rev() {
            prop_assert_eq!(stack.pop().unwrap(), *expected);
        }
        prop_assert!(stack.is_empty());
        prop_assert!(stack.verify().is_ok());
    }

    #[test]
    fn random_interleavings_match_a_vec_model(
        ops in proptest::collection::vec((any::<bool>(), any::<u32>()), 1..300)
    ) {
        let mut stack = RampartStack::<u32>::constructed(0, quiet_config()).unwrap();
        let mut model: Vec<u32> = Vec::new();

        for (is_push, value) in ops {
            if is_push {
                stack.push(value).unwrap();
                model.push(value);
            } else {
                match model.pop() {
                    Some(expected) => prop_assert_eq!(stack.pop().unwrap(), expected),
                    None => prop_assert_eq!(stack.pop(), Err(StackError::EmptyUnderflow)),
                }
            }

            prop_assert_eq!(stack.size() as usize, model.len());
            prop_assert!(stack.verify().is_ok());
        }
    }

    #[test]
    fn growth_chain_stays_byte_exact_from_zero_capacity(
        count in 1usize..500
    ) {
        let mut stack = RampartStack::<u64>::constructed(0, quiet_config()).unwrap();

        for i in 0..count as u64 {
            stack.push(i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).unwrap();
        }

        for i in (0..count as u64).rev() {
            prop_assert_eq!(stack.pop().unwrap(), i.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        }
    }
}
