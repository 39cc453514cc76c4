//! Per-rule options resolved from configuration. Read-only for the core;
//! how they are loaded (config file, CLI) is the caller's concern.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletPrivacyOptions {
    /// Accept `private(set)` as sufficient hiding of the mutation surface.
    /// A publicly-readable-but-privately-settable outlet is a compromise
    /// some users opt into.
    pub allow_private_set: bool,
}

/// All rule options with defaults applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRuleOptions {
    pub outlet_privacy: OutletPrivacyOptions,
}
