// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel transport selection.
//!
//! The connection owns an opaque bidirectional byte stream; how that
//! stream is opened is platform business. Callers inject a
//! [`ChannelFactory`] (usually [`platform_factory`]) instead of the
//! crate consulting global platform state, so tests and embedders can
//! substitute their own transport.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

/// An open bidirectional byte stream to the agent.
pub trait Channel: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> Channel for T {}

/// Opens a [`Channel`] from a locator string (a socket path or pipe
/// name, typically from `SSH_AUTH_SOCK`).
///
/// Factory failures are treated uniformly by the connection layer: the
/// agent is presumed absent or unreachable.
#[async_trait]
pub trait ChannelFactory: Send + Sync {
    async fn open(&self, locator: &str) -> io::Result<Box<dyn Channel>>;
}

/// Unix domain socket transport.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixSocketFactory;

#[cfg(unix)]
#[async_trait]
impl ChannelFactory for UnixSocketFactory {
    async fn open(&self, locator: &str) -> io::Result<Box<dyn Channel>> {
        let stream = tokio::net::UnixStream::connect(locator).await?;
        Ok(Box::new(stream))
    }
}

/// Named pipe transport for agent forwarding on Windows.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedPipeFactory;

#[cfg(windows)]
#[async_trait]
impl ChannelFactory for NamedPipeFactory {
    async fn open(&self, locator: &str) -> io::Result<Box<dyn Channel>> {
        let pipe = tokio::net::windows::named_pipe::ClientOptions::new().open(locator)?;
        Ok(Box::new(pipe))
    }
}

/// The transport appropriate for the compilation target.
#[cfg(unix)]
pub fn platform_factory() -> UnixSocketFactory {
    UnixSocketFactory
}

/// The transport appropriate for the compilation target.
#[cfg(windows)]
pub fn platform_factory() -> NamedPipeFactory {
    NamedPipeFactory
}
