// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types surfaced by agent operations.

use kw_wire::WireError;
use thiserror::Error;

/// Failures surfaced to callers of [`Agent`][crate::Agent] operations.
///
/// Nothing here is retried internally; every failure is reported once,
/// immediately.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent process cannot be reached, or negotiation showed it
    /// speaks an unsupported protocol variant. Callers typically treat
    /// this as "no agent configured".
    #[error("agent not available: {0}")]
    Unavailable(String),

    /// A well-formed exchange happened but the agent's reply was a
    /// recognized failure code, an unexpected type, or the request used
    /// an unimplemented key kind.
    #[error("{operation}: {detail}")]
    Protocol {
        /// The client operation that observed the reply.
        operation: &'static str,
        /// The offending reply type code, where one was received.
        reply: Option<u8>,
        detail: String,
    },

    /// Malformed frame or a channel that failed mid-exchange. Fatal to
    /// this connection; not classified further.
    #[error(transparent)]
    Transport(#[from] WireError),
}

impl AgentError {
    pub(crate) fn protocol(
        operation: &'static str,
        reply: impl Into<Option<u8>>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Protocol { operation, reply: reply.into(), detail: detail.into() }
    }
}
