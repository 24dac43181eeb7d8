// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the agent crate.

/// Version banner sent as the negotiation probe payload (from Cargo.toml).
pub const CLIENT_VERSION: &str = concat!("SSH-2.0-keywire_", env!("CARGO_PKG_VERSION"));

/// Channel locator of the running agent, from `SSH_AUTH_SOCK`.
///
/// On Unix this is the agent's socket path; on Windows the equivalent
/// pipe name. `None` when unset or empty — no agent is configured.
pub fn auth_socket() -> Option<String> {
    std::env::var("SSH_AUTH_SOCK").ok().filter(|s| !s.is_empty())
}
