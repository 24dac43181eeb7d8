// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public identity as advertised by the agent.

use ssh_key::{Algorithm, Fingerprint, HashAlg, PublicKey};

/// A public key held by the agent, paired with its agent-assigned
/// comment.
///
/// Built fresh on every [`identities`][crate::Agent::identities] call;
/// the crate keeps no cache. The key decodes from the agent's wire blob,
/// so a round trip back through [`sign`][crate::Agent::sign] re-encodes
/// the exact blob the agent advertised.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub key: PublicKey,
    pub comment: String,
}

impl Identity {
    /// Key algorithm, e.g. `ssh-ed25519`.
    pub fn algorithm(&self) -> Algorithm {
        self.key.algorithm()
    }

    /// SHA-256 fingerprint of the public key.
    pub fn fingerprint(&self) -> Fingerprint {
        self.key.fingerprint(HashAlg::Sha256)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.algorithm(), self.comment)
    }
}
