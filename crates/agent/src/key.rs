// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Private key material handed to the agent by `add_key`.
//!
//! A closed set of key kinds rather than open-ended dispatch: the
//! supported set is part of the API, and unsupported kinds fail before
//! anything is written to the channel.

/// Private key parameters for the add-identity exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParams {
    Rsa(RsaKeyParams),
    /// Recognized by the model but not implemented for `add_key`.
    Ed25519(Ed25519KeyParams),
}

impl KeyParams {
    /// The protocol key-type tag for this kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            KeyParams::Rsa(_) => "ssh-rsa",
            KeyParams::Ed25519(_) => "ssh-ed25519",
        }
    }
}

/// RSA numeric components, each an unsigned big-endian magnitude.
///
/// The values are forwarded to the agent verbatim; no mathematical
/// consistency checks are performed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyParams {
    /// Modulus.
    pub n: Vec<u8>,
    /// Public exponent.
    pub e: Vec<u8>,
    /// Private exponent.
    pub d: Vec<u8>,
    /// CRT coefficient (q⁻¹ mod p).
    pub iqmp: Vec<u8>,
    /// First prime factor.
    pub p: Vec<u8>,
    /// Second prime factor.
    pub q: Vec<u8>,
}

/// Ed25519 key pair bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519KeyParams {
    /// 32-byte public point.
    pub public: Vec<u8>,
    /// 32-byte private seed.
    pub seed: Vec<u8>,
}

/// Options for the add-identity exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddKeyOptions {
    /// Free-text comment stored alongside the key.
    pub comment: String,
    /// Require the agent to prompt before each use of the key.
    pub confirm: bool,
    /// Seconds until the agent discards the key; 0 means unlimited.
    pub lifetime_secs: u32,
}

impl Default for AddKeyOptions {
    fn default() -> Self {
        Self { comment: String::new(), confirm: false, lifetime_secs: 0 }
    }
}

impl AddKeyOptions {
    /// True when any key constraint is requested, selecting the
    /// constrained add-identity message.
    pub(crate) fn constrained(&self) -> bool {
        self.confirm || self.lifetime_secs > 0
    }
}
