// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod buffer;
mod fuzzy;
mod layout;

use crate::{CorruptionPolicy, StackConfig};

/// Default configuration, but corruption condemns instead of aborting so the
/// fatal path stays observable in-process.
pub(crate) fn condemn_config() -> StackConfig {
    StackConfig {
        corruption_policy: CorruptionPolicy::Condemn,
        ..StackConfig::default()
    }
}

/// Condemning configuration without stderr noise, for randomized runs.
pub(crate) fn quiet_config() -> StackConfig {
    StackConfig {
        diagnostics: false,
        corruption_policy: CorruptionPolicy::Condemn,
        ..StackConfig::default()
    }
}
