// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire codec for the ssh-agent protocol.
//!
//! Frame format: 4-byte length prefix (big-endian) + 1-byte message type
//! + payload. Field-level encoding (strings, mpints) lives in [`Buffer`].

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod buffer;
mod frame;
pub mod proto;

pub use buffer::Buffer;
pub use frame::{read_frame, write_frame, MAX_FRAME_LEN};

use thiserror::Error;

/// Errors from frame and field decoding.
///
/// All of these are fatal to the connection they occur on: a frame that
/// cannot be read completely leaves the stream at an unknown position.
#[derive(Debug, Error)]
pub enum WireError {
    /// Underlying channel I/O failed (includes a stream that closed
    /// before the declared frame length was delivered).
    #[error("channel i/o: {0}")]
    Io(#[from] std::io::Error),

    /// A field decode would read past the end of the frame.
    #[error("truncated field: wanted {wanted} bytes, {remaining} left in frame")]
    Truncated { wanted: usize, remaining: usize },

    /// The 4-byte prefix declared a zero-length frame (no type byte).
    #[error("empty frame: declared length 0 leaves no room for the type byte")]
    EmptyFrame,

    /// The 4-byte prefix declared a length above [`MAX_FRAME_LEN`].
    #[error("oversized frame: declared length {0} exceeds {MAX_FRAME_LEN} bytes")]
    Oversized(u32),
}
