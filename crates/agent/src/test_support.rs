// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted channels for exercising the connection without an agent.
//!
//! A [`ScriptedChannel`] serves pre-canned reply bytes to reads and
//! records every byte written, so tests can assert on exact request
//! payloads — including that nothing was written at all.

use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

use kw_wire::Buffer;

use crate::channel::{Channel, ChannelFactory};

/// Shared view of the bytes a connection has written to its channel.
#[derive(Debug, Clone, Default)]
pub struct WriteLog(Arc<Mutex<Vec<u8>>>);

impl WriteLog {
    /// Snapshot of everything written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.0.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    fn append(&self, buf: &[u8]) {
        if let Ok(mut v) = self.0.lock() {
            v.extend_from_slice(buf);
        }
    }
}

/// In-memory channel: reads serve scripted reply bytes until EOF,
/// writes land in a [`WriteLog`].
#[derive(Debug)]
pub struct ScriptedChannel {
    replies: Vec<u8>,
    pos: usize,
    log: WriteLog,
}

impl ScriptedChannel {
    pub fn new(replies: Vec<u8>, log: WriteLog) -> Self {
        Self { replies, pos: 0, log }
    }
}

impl AsyncRead for ScriptedChannel {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let n = (this.replies.len() - this.pos).min(buf.remaining());
        // n == 0 with the script exhausted reads as EOF.
        buf.put_slice(&this.replies[this.pos..this.pos + n]);
        this.pos += n;
        Poll::Ready(Ok(()))
    }
}

impl AsyncWrite for ScriptedChannel {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.log.append(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

/// Hands out one prepared [`ScriptedChannel`]; a second open fails.
pub struct ScriptedFactory {
    channel: Mutex<Option<ScriptedChannel>>,
}

impl ScriptedFactory {
    pub fn new(channel: ScriptedChannel) -> Self {
        Self { channel: Mutex::new(Some(channel)) }
    }
}

#[async_trait]
impl ChannelFactory for ScriptedFactory {
    async fn open(&self, _locator: &str) -> io::Result<Box<dyn Channel>> {
        let taken = self.channel.lock().ok().and_then(|mut slot| slot.take());
        match taken {
            Some(channel) => Ok(Box::new(channel)),
            None => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "scripted channel already taken",
            )),
        }
    }
}

/// Factory whose `open` always fails, as when no agent is listening.
pub struct UnreachableFactory;

#[async_trait]
impl ChannelFactory for UnreachableFactory {
    async fn open(&self, locator: &str) -> io::Result<Box<dyn Channel>> {
        Err(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            format!("connection refused: {locator}"),
        ))
    }
}

/// Encode one reply frame as raw wire bytes.
pub fn frame(kind: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + payload.len());
    out.extend_from_slice(&(payload.len() as u32 + 1).to_be_bytes());
    out.push(kind);
    out.extend_from_slice(payload);
    out
}

/// A factory serving the given reply frames in order, plus the log of
/// everything the connection writes.
pub fn scripted(replies: &[(u8, Vec<u8>)]) -> (ScriptedFactory, WriteLog) {
    let log = WriteLog::default();
    let bytes: Vec<u8> = replies.iter().flat_map(|(kind, payload)| frame(*kind, payload)).collect();
    (ScriptedFactory::new(ScriptedChannel::new(bytes, log.clone())), log)
}

/// Wire-format ed25519 public key blob; always decodable.
pub fn ed25519_blob() -> Vec<u8> {
    let mut blob = Buffer::new();
    blob.put_str("ssh-ed25519");
    blob.put_string(&[0xAB; 32]);
    blob.into_vec()
}

/// Wire-format RSA public key blob (2048-bit modulus); always decodable.
pub fn rsa_blob() -> Vec<u8> {
    let mut blob = Buffer::new();
    blob.put_str("ssh-rsa");
    blob.put_mpint(&[0x01, 0x00, 0x01]);
    blob.put_mpint(&rsa_modulus());
    blob.into_vec()
}

/// Key blob of a type no decoder recognizes; listing must skip it.
pub fn unknown_blob() -> Vec<u8> {
    let mut blob = Buffer::new();
    blob.put_str("ssh-frobnicate@example.com");
    blob.put_string(&[0x55; 16]);
    blob.into_vec()
}

/// Identities-answer payload for `(blob, comment)` pairs.
pub fn identities_payload(entries: &[(Vec<u8>, &str)]) -> Vec<u8> {
    let mut payload = Buffer::new();
    payload.put_u32(entries.len() as u32);
    for (blob, comment) in entries {
        payload.put_string(blob);
        payload.put_str(comment);
    }
    payload.into_vec()
}

fn rsa_modulus() -> Vec<u8> {
    // Deterministic 256-byte odd value with the high bit set.
    let mut modulus: Vec<u8> =
        (0u32..256).map(|i| (i as u8).wrapping_mul(151).wrapping_add(0x3B)).collect();
    modulus[0] |= 0x80;
    modulus[255] |= 0x01;
    modulus
}
