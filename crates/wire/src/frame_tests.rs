// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Frame envelope tests: length-prefix framing and short-stream failures.

use super::*;
use crate::proto;

#[tokio::test]
async fn frame_roundtrip() {
    let mut payload = Buffer::new();
    payload.put_string(b"data to sign");
    payload.put_u32(0);

    let mut stream = Vec::new();
    write_frame(&mut stream, proto::SSH2_AGENTC_SIGN_REQUEST, payload.as_slice())
        .await
        .expect("write");

    let mut cursor = std::io::Cursor::new(stream);
    let (kind, mut body) = read_frame(&mut cursor).await.expect("read");
    assert_eq!(kind, proto::SSH2_AGENTC_SIGN_REQUEST);
    assert_eq!(body.read_string().unwrap(), b"data to sign");
    assert_eq!(body.read_u32().unwrap(), 0);
}

#[tokio::test]
async fn declared_length_covers_type_byte() {
    let mut stream = Vec::new();
    write_frame(&mut stream, 11, &[]).await.expect("write");

    // Empty payload still declares length 1 for the type byte.
    assert_eq!(stream, &[0, 0, 0, 1, 11]);
}

#[tokio::test]
async fn stream_closing_mid_frame_is_io_error() {
    // Declares 10 body bytes but only delivers 3.
    let mut cursor = std::io::Cursor::new(vec![0u8, 0, 0, 10, 14, 0xAA, 0xBB]);
    let err = read_frame(&mut cursor).await.unwrap_err();
    assert!(matches!(err, WireError::Io(_)));
}

#[tokio::test]
async fn stream_closing_inside_prefix_is_io_error() {
    let mut cursor = std::io::Cursor::new(vec![0u8, 0]);
    let err = read_frame(&mut cursor).await.unwrap_err();
    assert!(matches!(err, WireError::Io(_)));
}

#[tokio::test]
async fn zero_length_frame_is_rejected() {
    let mut cursor = std::io::Cursor::new(vec![0u8, 0, 0, 0]);
    let err = read_frame(&mut cursor).await.unwrap_err();
    assert!(matches!(err, WireError::EmptyFrame));
}

#[tokio::test]
async fn oversized_frame_is_rejected_without_reading_body() {
    let mut prefix = (MAX_FRAME_LEN + 1).to_be_bytes().to_vec();
    prefix.push(0xFF);
    let mut cursor = std::io::Cursor::new(prefix);
    let err = read_frame(&mut cursor).await.unwrap_err();
    assert!(matches!(err, WireError::Oversized(_)));
    // Only the prefix was consumed.
    assert_eq!(cursor.position(), 4);
}
