// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Diagnostic channel: raw stderr writes and the fatal abort path.
//!
//! There is deliberately no logging framework here. Corruption reports must
//! work right before a process abort, so they go straight to fd 2 through
//! libc, the same way the page-protection layer fails.

extern crate alloc;

use alloc::format;

use crate::error::CorruptionKind;
use crate::origin::Origin;

/// Writes the corruption report for `kind` to stderr.
pub fn corruption(kind: CorruptionKind, origin: Option<&Origin>) {
    let msg = match origin {
        Some(origin) => format!("rampart: {kind} (stack {origin})\n"),
        None => format!("rampart: {kind}\n"),
    };

    write_stderr(&msg);
}

/// Reports recoverable misuse (refused operations) to stderr.
pub fn misuse(what: &str) {
    let msg = format!("rampart: {what}\n");

    write_stderr(&msg);
}

/// Aborts the process after a corruption report has been written.
pub fn abort(kind: CorruptionKind) -> ! {
    // Exit instead of abort under test so the fatal path stays observable
    #[cfg(test)]
    std::process::exit(kind as i32);

    #[cfg(not(test))]
    {
        let _ = kind;

        #[cfg(unix)]
        unsafe {
            libc::abort()
        }

        #[cfg(not(unix))]
        panic!("rampart: aborting on detected corruption");
    }
}

#[cfg(unix)]
fn write_stderr(msg: &str) {
    // Best effort; a failed write must not mask the corruption path
    let _ = unsafe { libc::write(2, msg.as_ptr().cast(), msg.len()) };
}

#[cfg(not(unix))]
fn write_stderr(_msg: &str) {}
