// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction-site metadata used in corruption reports.

/// Name and source location recorded at construction.
///
/// Purely diagnostic: it is printed in corruption reports so a dead process
/// still tells you *which* stack died and where it was created.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Origin {
    /// Caller-chosen name for the stack instance.
    pub name: &'static str,

    /// Source file of the construction site.
    pub file: &'static str,

    /// Line of the construction site.
    pub line: u32,
}

impl Origin {
    /// Captures the caller's source location together with `name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart_stack::Origin;
    ///
    /// let origin = Origin::here("frame-stack");
    /// assert_eq!(origin.name, "frame-stack");
    /// assert!(origin.line > 0);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn here(name: &'static str) -> Self {
        let location = core::panic::Location::caller();

        Self {
            name,
            file: location.file(),
            line: location.line(),
        }
    }
}

impl core::fmt::Display for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "'{}' constructed at {}:{}", self.name, self.file, self.line)
    }
}
