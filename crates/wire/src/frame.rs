// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Frame-level I/O: length-prefixed message envelopes on a byte stream.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::{Buffer, WireError};

/// Upper bound on a declared frame length.
///
/// No legitimate agent reply comes close; a prefix above this is treated
/// as a corrupt stream rather than an allocation request.
pub const MAX_FRAME_LEN: u32 = 1024 * 1024;

/// Write one complete frame: `length:u32be | kind:u8 | payload`.
///
/// The declared length covers the type byte plus the payload.
pub async fn write_frame<W>(stream: &mut W, kind: u8, payload: &[u8]) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin,
{
    let mut frame = Vec::with_capacity(5 + payload.len());
    frame.extend_from_slice(&(payload.len() as u32 + 1).to_be_bytes());
    frame.push(kind);
    frame.extend_from_slice(payload);
    stream.write_all(&frame).await?;
    stream.flush().await?;
    trace!(kind, len = payload.len(), "frame sent");
    Ok(())
}

/// Read one complete frame, returning the type code and a positioned
/// [`Buffer`] over the remaining payload.
///
/// Reads exactly 4 length bytes, then exactly that many more. A stream
/// that closes mid-frame surfaces the underlying I/O error; nothing past
/// the declared length is ever read.
pub async fn read_frame<R>(stream: &mut R) -> Result<(u8, Buffer), WireError>
where
    R: AsyncRead + Unpin,
{
    let mut prefix = [0u8; 4];
    stream.read_exact(&mut prefix).await?;
    let len = u32::from_be_bytes(prefix);
    if len == 0 {
        return Err(WireError::EmptyFrame);
    }
    if len > MAX_FRAME_LEN {
        return Err(WireError::Oversized(len));
    }

    let mut body = vec![0u8; len as usize];
    stream.read_exact(&mut body).await?;
    let kind = body[0];
    trace!(kind, len = body.len() - 1, "frame received");
    Ok((kind, Buffer::from(body.split_off(1))))
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
