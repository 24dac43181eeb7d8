// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signing specs.

use crate::prelude::*;

use ssh_key::PublicKey;

#[tokio::test]
async fn signature_bytes_pass_through_verbatim() {
    let mut reply = Buffer::new();
    reply.put_string(b"opaque-signature");
    let mock = MockAgent::serve(vec![
        (proto::SSH_AGENT_RSA_IDENTITIES_ANSWER, Vec::new()),
        (proto::SSH2_AGENT_SIGN_RESPONSE, reply.into_vec()),
    ])
    .await;

    let mut agent = Agent::connect(&UnixSocketFactory, &mock.locator()).await.expect("connect");
    agent.negotiate().await.expect("negotiate");

    let key = PublicKey::from_bytes(&rsa_blob()).expect("key");
    let signature = agent.sign(&key, b"the data").await.expect("sign");
    assert_eq!(signature, b"opaque-signature");
}

#[tokio::test]
async fn failure_reply_surfaces_as_protocol_error() {
    let mock = MockAgent::serve(vec![
        (proto::SSH_AGENT_RSA_IDENTITIES_ANSWER, Vec::new()),
        (proto::SSH2_AGENT_FAILURE, Vec::new()),
    ])
    .await;

    let mut agent = Agent::connect(&UnixSocketFactory, &mock.locator()).await.expect("connect");
    agent.negotiate().await.expect("negotiate");

    let key = PublicKey::from_bytes(&rsa_blob()).expect("key");
    let err = agent.sign(&key, b"the data").await.unwrap_err();
    assert!(matches!(err, AgentError::Protocol { operation: "sign", .. }));
}
