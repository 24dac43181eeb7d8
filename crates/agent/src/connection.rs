// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent connection lifecycle and the four client operations.
//!
//! Strictly synchronous request/response: each operation writes one
//! complete frame, then reads one complete frame before returning. The
//! protocol has no pipelining; callers must not issue a second request
//! before the first reply is consumed, and a connection must not be
//! shared across concurrent tasks — one negotiated connection per
//! caller. No timeouts and no retries are imposed here; a hung agent
//! blocks until the channel itself gives up.

use ssh_key::PublicKey;
use tracing::{debug, error, warn};

use kw_wire::{proto, read_frame, write_frame, Buffer};

use crate::channel::{Channel, ChannelFactory};
use crate::env;
use crate::error::AgentError;
use crate::identity::Identity;
use crate::key::{AddKeyOptions, KeyParams};

/// Lifecycle state of an [`Agent`] connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No channel open.
    Disconnected,
    /// Channel open, protocol variant not yet confirmed.
    Connected,
    /// Negotiation succeeded; operations are permitted.
    Ready,
    /// Channel released. Terminal.
    Closed,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connected => "connected",
            ConnectionState::Ready => "ready",
            ConnectionState::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// A connection to a running ssh-agent.
///
/// Owns its channel exclusively; the channel is released on
/// [`close`][Agent::close] or on any unrecoverable I/O failure during
/// negotiation. Lifecycle: [`connect`][Agent::connect] →
/// [`negotiate`][Agent::negotiate] → operations → [`close`][Agent::close].
pub struct Agent {
    channel: Option<Box<dyn Channel>>,
    state: ConnectionState,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("state", &self.state).finish_non_exhaustive()
    }
}

impl Agent {
    /// Open a channel to the agent through the given factory.
    ///
    /// This is the only place a low-level transport failure is
    /// translated into a semantic error: any failure to open the
    /// channel means the agent is absent or unreachable, reported as
    /// [`AgentError::Unavailable`].
    pub async fn connect(
        factory: &dyn ChannelFactory,
        locator: &str,
    ) -> Result<Self, AgentError> {
        debug!(locator, "connecting to ssh-agent");
        match factory.open(locator).await {
            Ok(channel) => {
                Ok(Self { channel: Some(channel), state: ConnectionState::Connected })
            }
            Err(e) => {
                error!(locator, error = %e, "could not connect to ssh-agent");
                Err(AgentError::Unavailable(e.to_string()))
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Confirm the agent speaks a supported protocol variant.
    ///
    /// The wire protocol multiplexes the legacy and current
    /// sub-protocols over one socket with no version field, so the
    /// probe is a legacy request only a legacy-aware agent answers
    /// predictably. Classification of the one reply:
    ///
    /// - legacy RSA-identities answer, or generic failure: supported.
    /// - version response: a protocol-2-only agent; not supported.
    /// - extended failure: a known class of agents mis-respond to the
    ///   probe this way but still handle protocol-2 operations;
    ///   tolerated with a warning.
    /// - anything else: not supported.
    ///
    /// On failure the channel is released and the connection is closed.
    pub async fn negotiate(&mut self) -> Result<(), AgentError> {
        self.expect_state(ConnectionState::Connected, "negotiate")?;

        let mut payload = Buffer::new();
        payload.put_str(env::CLIENT_VERSION);
        let exchange = self
            .send_and_wait(proto::SSH_AGENTC_REQUEST_RSA_IDENTITIES, &payload)
            .await;
        let (kind, body) = match exchange {
            Ok(reply) => reply,
            Err(e) => {
                self.release();
                return Err(e);
            }
        };

        match kind {
            proto::SSH2_AGENT_VERSION_RESPONSE => {
                self.release();
                Err(AgentError::Unavailable(
                    "agent answered the probe with a version response; \
                     protocol-2-only agents are not supported"
                        .into(),
                ))
            }
            proto::SSH2_AGENT_FAILURE => {
                warn!(reply = kind, "unexpected probe reply, ignoring");
                self.state = ConnectionState::Ready;
                Ok(())
            }
            proto::SSH_AGENT_RSA_IDENTITIES_ANSWER | proto::SSH_AGENT_FAILURE => {
                self.state = ConnectionState::Ready;
                Ok(())
            }
            other => {
                self.release();
                Err(AgentError::Unavailable(format!(
                    "unknown probe reply from agent: type {other}, payload {:02x?}",
                    body.as_slice()
                )))
            }
        }
    }

    /// List all identities (public keys) the agent holds.
    ///
    /// A key blob whose type this client cannot decode is skipped with
    /// a diagnostic, not fatal: the loop still consumes the declared
    /// number of entries, so the result holds every decodable identity
    /// with its comment preserved verbatim.
    pub async fn identities(&mut self) -> Result<Vec<Identity>, AgentError> {
        self.expect_state(ConnectionState::Ready, "identities")?;

        let (kind, mut body) = self
            .send_and_wait(proto::SSH2_AGENTC_REQUEST_IDENTITIES, &Buffer::new())
            .await?;
        if agent_failed(kind) {
            return Err(AgentError::protocol(
                "identities",
                kind,
                "could not get identity count",
            ));
        }
        if kind != proto::SSH2_AGENT_IDENTITIES_ANSWER {
            return Err(AgentError::protocol(
                "identities",
                kind,
                format!("bad reply type {kind}"),
            ));
        }

        let count = body.read_u32()?;
        let mut identities = Vec::new();
        for _ in 0..count {
            let blob = body.read_string()?;
            let comment = String::from_utf8_lossy(&body.read_string()?).into_owned();
            match PublicKey::from_bytes(&blob) {
                Ok(key) => identities.push(Identity { key, comment }),
                Err(e) => {
                    warn!(comment = %comment, error = %e, "ignoring unimplemented key");
                }
            }
        }
        debug!(count, returned = identities.len(), "identities listed");
        Ok(identities)
    }

    /// Sign `data` with the agent-held private key matching `key`.
    ///
    /// Returns the signature bytes verbatim; the embedded algorithm
    /// identifier is the caller's to interpret. The flags field is
    /// fixed at 0 — no RSA-SHA2 variant is requested.
    pub async fn sign(&mut self, key: &PublicKey, data: &[u8]) -> Result<Vec<u8>, AgentError> {
        self.expect_state(ConnectionState::Ready, "sign")?;

        let blob = key.to_bytes().map_err(|e| {
            AgentError::protocol("sign", None, format!("could not encode key blob: {e}"))
        })?;
        let mut payload = Buffer::new();
        payload.put_string(&blob);
        payload.put_string(data);
        payload.put_u32(0);

        let (kind, mut reply) = self
            .send_and_wait(proto::SSH2_AGENTC_SIGN_REQUEST, &payload)
            .await?;
        if agent_failed(kind) {
            return Err(AgentError::protocol(
                "sign",
                kind,
                "agent could not sign data with requested identity",
            ));
        }
        if kind != proto::SSH2_AGENT_SIGN_RESPONSE {
            return Err(AgentError::protocol("sign", kind, format!("bad reply type {kind}")));
        }
        Ok(reply.read_string()?)
    }

    /// Hand a private key to the agent.
    ///
    /// Only RSA is implemented; any other [`KeyParams`] kind fails
    /// before a single byte reaches the channel. With default
    /// [`AddKeyOptions`] this is the plain add-identity exchange; a
    /// confirm or lifetime option switches to the constrained variant
    /// with the matching constraint records appended.
    ///
    /// Returns the raw reply type: unlike the other operations,
    /// success/failure classification is left to the caller.
    pub async fn add_key(
        &mut self,
        key: &KeyParams,
        options: &AddKeyOptions,
    ) -> Result<u8, AgentError> {
        self.expect_state(ConnectionState::Ready, "add_key")?;

        let rsa = match key {
            KeyParams::Rsa(rsa) => rsa,
            other => {
                return Err(AgentError::protocol(
                    "add_key",
                    None,
                    format!("only RSA keys are supported, not {}", other.type_tag()),
                ));
            }
        };

        let mut payload = Buffer::new();
        payload.put_str(proto::RSA_KEY_TAG);
        for component in [&rsa.n, &rsa.e, &rsa.d, &rsa.iqmp, &rsa.p, &rsa.q] {
            payload.put_mpint(component);
        }
        payload.put_str(&options.comment);

        let kind = if options.constrained() {
            if options.lifetime_secs > 0 {
                payload.put_u8(proto::SSH_AGENT_CONSTRAIN_LIFETIME);
                payload.put_u32(options.lifetime_secs);
            }
            if options.confirm {
                payload.put_u8(proto::SSH_AGENT_CONSTRAIN_CONFIRM);
            }
            proto::SSH2_AGENTC_ADD_ID_CONSTRAINED
        } else {
            proto::SSH2_AGENTC_ADD_IDENTITY
        };

        let (reply, _body) = self.send_and_wait(kind, &payload).await?;
        Ok(reply)
    }

    /// Release the channel and end the connection.
    ///
    /// The release is unconditional; shutdown errors on the channel are
    /// ignored. Calling `close` on an already-closed connection is a
    /// no-op.
    pub async fn close(&mut self) -> Result<(), AgentError> {
        if let Some(mut channel) = self.channel.take() {
            use tokio::io::AsyncWriteExt as _;
            let _ = channel.shutdown().await;
        }
        self.state = ConnectionState::Closed;
        Ok(())
    }

    /// One request out, one reply back.
    async fn send_and_wait(
        &mut self,
        kind: u8,
        payload: &Buffer,
    ) -> Result<(u8, Buffer), AgentError> {
        let channel = self.channel.as_mut().ok_or_else(|| {
            AgentError::protocol("send", None, "no open channel".to_string())
        })?;
        debug!(kind, len = payload.len(), "sending agent request");
        write_frame(channel, kind, payload.as_slice()).await?;
        let (reply, body) = read_frame(channel).await?;
        debug!(reply, len = body.len(), "received agent reply");
        Ok((reply, body))
    }

    /// Drop the channel after an unrecoverable negotiation failure.
    fn release(&mut self) {
        self.channel = None;
        self.state = ConnectionState::Closed;
    }

    fn expect_state(
        &self,
        wanted: ConnectionState,
        operation: &'static str,
    ) -> Result<(), AgentError> {
        if self.state == wanted {
            Ok(())
        } else {
            Err(AgentError::protocol(
                operation,
                None,
                format!("connection is {}, needs {}", self.state, wanted),
            ))
        }
    }
}

/// True when the reply type is any of the recognized failure codes:
/// legacy, protocol-2 extended, or the ssh.com agent's own.
fn agent_failed(kind: u8) -> bool {
    kind == proto::SSH_AGENT_FAILURE
        || kind == proto::SSH2_AGENT_FAILURE
        || kind == proto::SSH_COM_AGENT2_FAILURE
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
