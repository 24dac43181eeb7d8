// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle specs: connect, negotiate, close.

use crate::prelude::*;

#[tokio::test]
async fn connect_and_negotiate_against_legacy_agent() {
    let mock =
        MockAgent::serve(vec![(proto::SSH_AGENT_RSA_IDENTITIES_ANSWER, Vec::new())]).await;

    let mut agent = Agent::connect(&UnixSocketFactory, &mock.locator())
        .await
        .expect("agent should be reachable");
    assert_eq!(agent.state(), ConnectionState::Connected);

    agent.negotiate().await.expect("legacy agent should negotiate");
    assert_eq!(agent.state(), ConnectionState::Ready);

    agent.close().await.expect("close");
    assert_eq!(agent.state(), ConnectionState::Closed);
}

#[tokio::test]
async fn connect_fails_as_unavailable_when_nothing_listens() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locator = dir.path().join("no-agent.sock").display().to_string();

    let err = Agent::connect(&UnixSocketFactory, &locator).await.unwrap_err();
    assert!(matches!(err, AgentError::Unavailable(_)));
}

#[tokio::test]
async fn version_response_agent_is_unavailable() {
    let mock =
        MockAgent::serve(vec![(proto::SSH2_AGENT_VERSION_RESPONSE, b"2.0.13".to_vec())])
            .await;

    let mut agent = Agent::connect(&UnixSocketFactory, &mock.locator()).await.expect("connect");
    let err = agent.negotiate().await.unwrap_err();
    assert!(matches!(err, AgentError::Unavailable(_)));
    assert_eq!(agent.state(), ConnectionState::Closed);
}
