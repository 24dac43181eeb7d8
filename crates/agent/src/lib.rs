// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kw-agent: client for a running ssh-agent process.
//!
//! Delegates private-key operations (identity listing, signing, adding
//! RSA keys) to an agent reached over a local channel. Private key bytes
//! of agent-held keys never reach this process; only signing requests go
//! out and signatures come back.
//!
//! ```no_run
//! use kw_agent::{channel::platform_factory, env, Agent};
//!
//! # async fn demo() -> Result<(), kw_agent::AgentError> {
//! let factory = platform_factory();
//! let locator = env::auth_socket().ok_or_else(|| {
//!     kw_agent::AgentError::Unavailable("SSH_AUTH_SOCK is not set".into())
//! })?;
//! let mut agent = Agent::connect(&factory, &locator).await?;
//! agent.negotiate().await?;
//! for identity in agent.identities().await? {
//!     println!("{} {}", identity.algorithm(), identity.comment);
//! }
//! agent.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod connection;
pub mod env;
pub mod error;
pub mod identity;
pub mod key;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use connection::{Agent, ConnectionState};
pub use error::AgentError;
pub use identity::Identity;
pub use key::{AddKeyOptions, Ed25519KeyParams, KeyParams, RsaKeyParams};
