// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction-time configuration: protection toggles, resize factors and
//! the corruption response.

/// Default growth and shrink factor.
pub(crate) const DEFAULT_FACTOR: f64 = 2.0;

/// What to do when verification detects corruption.
///
/// Either way the buffer is released first and the stack never serves
/// another call; corrupted memory must not satisfy a subsequent operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CorruptionPolicy {
    /// Write the corruption report and abort the process.
    Abort,
    /// Write the corruption report, latch the corruption kind and fail every
    /// subsequent operation with it. Lets a host observe the failure
    /// in-process instead of dying.
    Condemn,
}

/// Configuration chosen once at construction.
///
/// The default enables every protection; running without guards, checksums
/// or diagnostics is always an explicit opt-out, never a silent default.
/// Disabling all three degrades the stack to a plain dynamic array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    /// Maintain and verify the front/back sentinel words.
    pub guards: bool,

    /// Maintain and verify the control and data checksums.
    pub checksums: bool,

    /// Record construction origin, poison vacated slots and report misuse
    /// to stderr.
    pub diagnostics: bool,

    /// Capacity multiplier applied on grow. Honored only when strictly
    /// between 1 and 25, otherwise 2 is used; validated once at construction.
    pub growth_factor: f64,

    /// Capacity divisor applied on shrink. Honored only when greater than 1
    /// and the shrunk capacity still holds every live element, otherwise 2 is
    /// used. The size-dependent half of that check can only happen at pop
    /// time.
    pub shrink_factor: f64,

    /// Response to detected corruption.
    pub corruption_policy: CorruptionPolicy,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            guards: true,
            checksums: true,
            diagnostics: true,
            growth_factor: DEFAULT_FACTOR,
            shrink_factor: DEFAULT_FACTOR,
            corruption_policy: CorruptionPolicy::Abort,
        }
    }
}

impl StackConfig {
    /// The growth factor that will actually be applied.
    pub(crate) fn effective_growth_factor(&self) -> f64 {
        if self.growth_factor > 1.0 && self.growth_factor < 25.0 {
            self.growth_factor
        } else {
            DEFAULT_FACTOR
        }
    }

    /// The shrink divisor to apply when `size` elements must survive.
    pub(crate) fn effective_shrink_factor(&self, capacity: i64, size: i64) -> f64 {
        if self.shrink_factor > 1.0 && (capacity as f64 / self.shrink_factor) as i64 >= size {
            self.shrink_factor
        } else {
            DEFAULT_FACTOR
        }
    }
}
