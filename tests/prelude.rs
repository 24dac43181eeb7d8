// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the behavior specs.

#![cfg(unix)]

use std::path::PathBuf;
use std::sync::Once;

pub use kw_agent::channel::UnixSocketFactory;
pub use kw_agent::test_support::{identities_payload, rsa_blob, unknown_blob};
pub use kw_agent::{Agent, AgentError, ConnectionState};
pub use kw_wire::{proto, Buffer};

static INIT: Once = Once::new();

/// Install a fmt subscriber once, honoring `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A scripted agent bound to a real Unix socket.
///
/// Serves the first connection: for each script element it reads one
/// request frame, then writes the canned reply frame. The socket lives
/// in a temp dir that is removed on drop.
pub struct MockAgent {
    socket_path: PathBuf,
    _dir: tempfile::TempDir,
    _task: tokio::task::JoinHandle<()>,
}

impl MockAgent {
    pub async fn serve(script: Vec<(u8, Vec<u8>)>) -> MockAgent {
        init_tracing();
        let dir = tempfile::tempdir().expect("tempdir");
        let socket_path = dir.path().join("agent.sock");
        let listener = tokio::net::UnixListener::bind(&socket_path).expect("bind mock agent");

        let task = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            for (kind, payload) in script {
                kw_wire::read_frame(&mut stream).await.expect("read request");
                kw_wire::write_frame(&mut stream, kind, &payload)
                    .await
                    .expect("write reply");
            }
        });

        MockAgent { socket_path, _dir: dir, _task: task }
    }

    /// Channel locator for the scripted socket.
    pub fn locator(&self) -> String {
        self.socket_path.display().to_string()
    }
}
