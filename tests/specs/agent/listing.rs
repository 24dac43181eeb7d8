// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity listing specs.

use crate::prelude::*;

#[tokio::test]
async fn single_rsa_identity_with_comment() {
    let listing = identities_payload(&[(rsa_blob(), "test@host")]);
    let mock = MockAgent::serve(vec![
        (proto::SSH_AGENT_RSA_IDENTITIES_ANSWER, Vec::new()),
        (proto::SSH2_AGENT_IDENTITIES_ANSWER, listing),
    ])
    .await;

    let mut agent = Agent::connect(&UnixSocketFactory, &mock.locator()).await.expect("connect");
    agent.negotiate().await.expect("negotiate");

    let identities = agent.identities().await.expect("identities");
    assert_eq!(identities.len(), 1);
    assert_eq!(identities[0].comment, "test@host");
    assert!(matches!(identities[0].algorithm(), ssh_key::Algorithm::Rsa { .. }));
}

#[tokio::test]
async fn unrecognized_key_types_are_skipped_not_fatal() {
    let listing = identities_payload(&[
        (unknown_blob(), "mystery@host"),
        (rsa_blob(), "known@host"),
    ]);
    let mock = MockAgent::serve(vec![
        (proto::SSH_AGENT_RSA_IDENTITIES_ANSWER, Vec::new()),
        (proto::SSH2_AGENT_IDENTITIES_ANSWER, listing),
    ])
    .await;

    let mut agent = Agent::connect(&UnixSocketFactory, &mock.locator()).await.expect("connect");
    agent.negotiate().await.expect("negotiate");

    let identities = agent.identities().await.expect("identities");
    assert_eq!(identities.len(), 1);
    assert_eq!(identities[0].comment, "known@host");
}
