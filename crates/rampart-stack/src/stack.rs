// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RampartStack - the self-verifying stack engine.
//!
//! Every mutating operation enters through verification, performs its effect
//! on the buffer, recomputes the checksums exactly once and verifies again
//! before returning. Ordinary misuse (underflow, bad arguments, allocator
//! exhaustion) is reported to the caller and leaves the stack untouched;
//! detected corruption takes the stack out of service permanently.

use core::mem::MaybeUninit;

use rampart_checksum::{checksum, Fnv1a};

use crate::buffer::StackBuffer;
use crate::config::{CorruptionPolicy, StackConfig};
use crate::error::{CorruptionKind, StackError};
use crate::layout;
use crate::origin::Origin;
use crate::report;

/// Lifecycle state of a stack instance.
///
/// Destroy returns the control block to `Uninitialized`, so reconstruction
/// after destroy is legal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
enum Status {
    Uninitialized = 0,
    Constructed = 1,
}

/// A growable stack of `T` that continuously verifies its own memory.
///
/// The element region lives between two guard words inside one owned byte
/// buffer; a checksum covers the control block and another covers the whole
/// buffer. All four invariants are checked on entry to and exit from every
/// push and pop, and after every resize.
///
/// # Example
///
/// ```rust
/// use rampart_stack::{RampartStack, StackConfig, StackError};
///
/// fn example() -> Result<(), StackError> {
///     let mut stack = RampartStack::<u64>::new(StackConfig::default());
///     stack.construct(4)?;
///
///     stack.push(1)?;
///     stack.push(2)?;
///
///     assert_eq!(stack.pop()?, 2);
///     assert_eq!(stack.pop()?, 1);
///     assert!(stack.verify().is_ok());
///
///     stack.destroy();
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RampartStack<T: Copy> {
    capacity: i64,
    size: i64,
    status: Status,
    buf: StackBuffer,
    control_sum: u64,
    data_sum: u64,
    config: StackConfig,
    poison: Option<T>,
    origin: Option<Origin>,
    condemned: Option<CorruptionKind>,
}

impl<T: Copy> RampartStack<T> {
    const ELEMENT_SIZE: usize = core::mem::size_of::<T>();

    /// Creates an unconstructed stack shell with the given configuration.
    ///
    /// No memory is allocated until [`construct`](Self::construct) succeeds.
    pub const fn new(config: StackConfig) -> Self {
        Self {
            capacity: 0,
            size: 0,
            status: Status::Uninitialized,
            buf: StackBuffer::empty(),
            control_sum: 0,
            data_sum: 0,
            config,
            poison: None,
            origin: None,
            condemned: None,
        }
    }

    /// Creates and constructs a stack in one step.
    pub fn constructed(capacity: i64, config: StackConfig) -> Result<Self, StackError> {
        let mut stack = Self::new(config);
        stack.construct(capacity)?;

        Ok(stack)
    }

    /// Constructs the stack with room for `capacity` elements.
    ///
    /// Equivalent to [`construct_with`](Self::construct_with) without poison
    /// or origin diagnostics.
    pub fn construct(&mut self, capacity: i64) -> Result<(), StackError> {
        self.construct_with(capacity, None, None)
    }

    /// Constructs the stack: validates arguments, allocates the zero-filled
    /// buffer, writes the guard words and seeds both checksums.
    ///
    /// `poison` is copied into every vacated slot after a pop and `origin`
    /// names this instance in corruption reports; both are used only while
    /// diagnostics are enabled.
    ///
    /// Fails with `InvalidArgument` on negative capacity or a zero-sized
    /// element type, `AlreadyConstructed` on a live stack and
    /// `AllocationFailure` when the allocator refuses. Every failure leaves
    /// the stack observably unconstructed.
    pub fn construct_with(
        &mut self,
        capacity: i64,
        poison: Option<T>,
        origin: Option<Origin>,
    ) -> Result<(), StackError> {
        if let Some(kind) = self.condemned {
            return Err(kind.into());
        }
        if capacity < 0 {
            self.note_misuse("negative capacity, cannot construct");
            return Err(StackError::InvalidArgument("negative capacity"));
        }
        if Self::ELEMENT_SIZE == 0 {
            return Err(StackError::InvalidArgument("zero-sized element type"));
        }
        if self.status == Status::Constructed {
            self.note_misuse("construct on an already constructed stack");
            return Err(StackError::AlreadyConstructed);
        }

        // Allocate before touching the control block so a failure leaves no
        // partial construction observable. A capacity whose byte length
        // overflows usize can never be allocated either.
        let total = layout::total_len(capacity, Self::ELEMENT_SIZE)
            .ok_or(StackError::AllocationFailure)?;
        let buf = StackBuffer::allocate(total)?;

        self.buf = buf;
        self.capacity = capacity;
        self.size = 0;
        self.poison = poison;
        self.origin = origin;
        self.status = Status::Constructed;
        self.write_guards();
        self.recompute();

        Ok(())
    }

    /// Pushes `value` on top of the stack, growing the buffer first when one
    /// free slot or less remains.
    ///
    /// On a failed grow the push does not happen and size and capacity are
    /// unchanged. On detected corruption the stack goes out of service.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        self.ensure_usable()?;
        self.check()?;

        if self.size >= self.capacity - 1 {
            self.grow()?;
        }

        let offset = layout::DATA_OFFSET + self.size as usize * Self::ELEMENT_SIZE;
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): grow() guaranteed capacity > size,
            // so the slot lies fully inside the data region of the live buffer
            core::ptr::copy_nonoverlapping(
                (&raw const value).cast::<u8>(),
                self.buf.as_mut_ptr().add(offset),
                Self::ELEMENT_SIZE,
            );
        }
        self.size += 1;

        self.recompute();
        self.check()?;

        Ok(())
    }

    /// Pops the top element.
    ///
    /// The vacated slot is overwritten with the poison value (diagnostics
    /// only) and the buffer shrinks once size falls below a quarter of a
    /// capacity above 128. The poison write never affects the returned value.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.ensure_usable()?;

        if self.size <= 0 {
            self.note_misuse("pop on an empty stack");
            return Err(StackError::EmptyUnderflow);
        }

        self.check()?;

        let offset = layout::DATA_OFFSET + (self.size - 1) as usize * Self::ELEMENT_SIZE;
        let value = unsafe {
            // SAFETY (PRECONDITIONS ARE MET): size > 0, so the top slot holds
            // bytes previously copied from a valid T
            let mut tmp = MaybeUninit::<T>::uninit();
            core::ptr::copy_nonoverlapping(
                self.buf.as_ptr().add(offset),
                tmp.as_mut_ptr().cast::<u8>(),
                Self::ELEMENT_SIZE,
            );
            tmp.assume_init()
        };

        if self.config.diagnostics {
            self.poison_slot(offset);
        }
        self.size -= 1;

        if self.size < self.capacity / 4 && self.capacity > 128 {
            match self.shrink() {
                Ok(()) => {}
                Err(err @ StackError::Corruption(_)) => return Err(err),
                Err(_) => {
                    // The pop already took logical effect; only the shrink is
                    // skipped
                    self.note_misuse("shrink failed, keeping current capacity");
                }
            }
        }

        self.recompute();
        self.check()?;

        Ok(value)
    }

    /// Destroys the stack: releases the buffer and resets the control block.
    ///
    /// Destroy on a stack that is not constructed is a reported no-op, never
    /// a double free; reconstruction after destroy is legal.
    pub fn destroy(&mut self) {
        if self.condemned.is_some() || self.status != Status::Constructed {
            self.note_misuse("destroy on a stack that is not constructed");
            return;
        }

        self.buf.release();
        self.size = 0;
        self.capacity = 0;
        self.control_sum = 0;
        self.data_sum = 0;
        self.poison = None;
        self.origin = None;
        self.status = Status::Uninitialized;
    }

    /// Verifies the stack without mutating it.
    ///
    /// Checks, in order: front guard, back guard, control checksum, data
    /// checksum. Returns the first violated invariant. Exposed so hosts and
    /// tests can audit a stack between operations; an unconstructed stack
    /// verifies clean.
    pub fn verify(&self) -> Result<(), CorruptionKind> {
        if let Some(kind) = self.condemned {
            return Err(kind);
        }
        if self.status != Status::Constructed {
            return Ok(());
        }

        if self.config.guards {
            let bytes = self.buf.as_slice();
            if layout::read_word(bytes, 0) != layout::FRONT_GUARD {
                return Err(CorruptionKind::FrontGuardCorrupted);
            }
            let back = layout::back_guard_offset(self.buf.len());
            if layout::read_word(bytes, back) != layout::BACK_GUARD {
                return Err(CorruptionKind::BackGuardCorrupted);
            }
        }

        if self.config.checksums {
            if self.control_checksum() != self.control_sum {
                return Err(CorruptionKind::ControlChecksumMismatch);
            }
            if checksum(self.buf.as_slice()) != self.data_sum {
                return Err(CorruptionKind::DataChecksumMismatch);
            }
        }

        Ok(())
    }

    /// Compacts the buffer to exactly the live elements.
    ///
    /// Explicit operation; never triggered by push or pop. Capacity becomes
    /// `size`, so the resize-policy floor does not apply here.
    pub fn truncate_to_fit(&mut self) -> Result<(), StackError> {
        self.ensure_usable()?;
        self.check()?;

        self.reallocate(self.size)
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Maximum element count the current buffer can hold.
    #[inline]
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Returns `true` if no elements are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` between a successful construct and a destroy.
    #[inline]
    pub fn is_constructed(&self) -> bool {
        self.status == Status::Constructed
    }

    /// Byte width of one element, fixed by `T`.
    #[inline]
    pub const fn element_size(&self) -> usize {
        Self::ELEMENT_SIZE
    }

    /// The construction origin, if diagnostics recorded one.
    #[inline]
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    // -------------------------------------------------------------------------
    // Resize policy
    // -------------------------------------------------------------------------

    fn grow(&mut self) -> Result<(), StackError> {
        let factor = self.config.effective_growth_factor();
        // A fractional factor truncates to no growth at small capacities;
        // the pending push still needs a free slot, so force progress. This
        // also covers the zero-capacity to 1 clamp.
        let new_capacity = ((self.capacity as f64 * factor) as i64).max(self.capacity + 1);

        self.reallocate(new_capacity)
    }

    fn shrink(&mut self) -> Result<(), StackError> {
        let factor = self.config.effective_shrink_factor(self.capacity, self.size);
        let new_capacity = (self.capacity as f64 / factor) as i64;

        self.reallocate(new_capacity)
    }

    /// Moves the buffer to `new_capacity` elements, preserving element bytes,
    /// refilling the region uncovered by growth and rewriting the back guard
    /// at its new offset. Counts as one mutating operation: recomputes and
    /// verifies before returning.
    fn reallocate(&mut self, new_capacity: i64) -> Result<(), StackError> {
        let old_data_len = layout::aligned_data_len(self.capacity, Self::ELEMENT_SIZE)
            .ok_or(StackError::AllocationFailure)?;
        let new_total = layout::total_len(new_capacity, Self::ELEMENT_SIZE)
            .ok_or(StackError::AllocationFailure)?;
        let new_data_len = new_total - 2 * layout::GUARD_WORD_SIZE;

        // Fails without touching the old buffer, so the operation rolls back
        self.buf.resize_preserving(new_total)?;
        self.capacity = new_capacity;

        if new_data_len > old_data_len {
            // The old back-guard slot is now part of the data region; refill
            // everything past the old data end (poison byte under diagnostics,
            // zero otherwise)
            let fill = match self.poison {
                Some(ref poison) if self.config.diagnostics => unsafe {
                    // SAFETY (PRECONDITIONS ARE MET): T is Copy with size > 0,
                    // reading its first byte is reading initialized memory
                    *(&raw const *poison).cast::<u8>()
                },
                _ => 0,
            };
            let start = layout::DATA_OFFSET + old_data_len;
            let end = layout::DATA_OFFSET + new_data_len;
            self.buf.as_mut_slice()[start..end].fill(fill);
        }

        self.write_guards();
        self.recompute();
        self.check()?;

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Integrity guard
    // -------------------------------------------------------------------------

    fn write_guards(&mut self) {
        if !self.config.guards {
            return;
        }

        let back = layout::back_guard_offset(self.buf.len());
        let bytes = self.buf.as_mut_slice();
        layout::write_word(bytes, 0, layout::FRONT_GUARD);
        layout::write_word(bytes, back, layout::BACK_GUARD);
    }

    /// Checksum over the control block, excluding both checksum fields.
    fn control_checksum(&self) -> u64 {
        let mut hasher = Fnv1a::new();
        hasher.write_u64(self.capacity as u64);
        hasher.write_u64(self.size as u64);
        hasher.write_u64(Self::ELEMENT_SIZE as u64);
        hasher.write_u8(self.status as u8);

        hasher.finish()
    }

    /// Rewrites both checksums; called exactly once per committed mutation,
    /// after all data changes are final.
    fn recompute(&mut self) {
        if !self.config.checksums {
            return;
        }

        self.control_sum = self.control_checksum();
        self.data_sum = checksum(self.buf.as_slice());
    }

    /// Verify for mutating operations: on corruption, takes the stack out of
    /// service via the configured policy.
    fn check(&mut self) -> Result<(), StackError> {
        match self.verify() {
            Ok(()) => Ok(()),
            Err(kind) => Err(self.condemn(kind)),
        }
    }

    /// Reports `kind`, releases the buffer and latches the corruption so no
    /// later call can touch the corrupted memory. Under
    /// `CorruptionPolicy::Abort` this never returns.
    fn condemn(&mut self, kind: CorruptionKind) -> StackError {
        report::corruption(kind, self.origin.as_ref());

        self.buf.release();
        self.size = 0;
        self.capacity = 0;
        self.condemned = Some(kind);

        match self.config.corruption_policy {
            CorruptionPolicy::Abort => report::abort(kind),
            CorruptionPolicy::Condemn => StackError::Corruption(kind),
        }
    }

    fn ensure_usable(&mut self) -> Result<(), StackError> {
        if let Some(kind) = self.condemned {
            return Err(kind.into());
        }
        if self.status != Status::Constructed {
            self.note_misuse("operation on a stack that is not constructed");
            return Err(StackError::InvalidArgument("stack is not constructed"));
        }

        Ok(())
    }

    fn poison_slot(&mut self, offset: usize) {
        let Some(poison) = self.poison else {
            return;
        };

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the slot was just read as a T,
            // so it lies fully inside the data region
            core::ptr::copy_nonoverlapping(
                (&raw const poison).cast::<u8>(),
                self.buf.as_mut_ptr().add(offset),
                Self::ELEMENT_SIZE,
            );
        }
    }

    fn note_misuse(&self, what: &str) {
        if self.config.diagnostics {
            report::misuse(what);
        }
    }
}

impl<T: Copy> Drop for RampartStack<T> {
    fn drop(&mut self) {
        // Not a misuse path: dropping an unconstructed shell stays silent
        if self.status == Status::Constructed && self.condemned.is_none() {
            self.destroy();
        }
    }
}

impl<T: Copy> core::fmt::Debug for RampartStack<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RampartStack")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("element_size", &Self::ELEMENT_SIZE)
            .field("constructed", &(self.status == Status::Constructed))
            .field("condemned", &self.condemned)
            .finish_non_exhaustive()
    }
}

// Test-only access used to simulate corruption without going through the API
#[cfg(test)]
impl<T: Copy> RampartStack<T> {
    pub(crate) fn raw_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    pub(crate) fn raw_bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }

    pub(crate) fn bump_size_bypassing_checksums(&mut self) {
        self.size += 1;
    }

    pub(crate) fn inject_resize_failure(&mut self) {
        self.buf.inject_resize_failure();
    }
}
