// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message type codes for agent protocol versions 1 and 2.
//!
//! Taken from Section 3 of the OpenSSH `PROTOCOL.agent` document. The
//! full table is kept even where this client only sends a subset;
//! replies can legitimately carry any of them. `AGENTC` codes go from
//! client to agent, the rest come back.

// 3.1 Requests from client to agent for protocol 1 key operations
pub const SSH_AGENTC_REQUEST_RSA_IDENTITIES: u8 = 1;
pub const SSH_AGENTC_RSA_CHALLENGE: u8 = 3;
pub const SSH_AGENTC_ADD_RSA_IDENTITY: u8 = 7;
pub const SSH_AGENTC_REMOVE_RSA_IDENTITY: u8 = 8;
pub const SSH_AGENTC_REMOVE_ALL_RSA_IDENTITIES: u8 = 9;
pub const SSH_AGENTC_ADD_RSA_ID_CONSTRAINED: u8 = 24;

// 3.2 Requests from client to agent for protocol 2 key operations
pub const SSH2_AGENTC_REQUEST_IDENTITIES: u8 = 11;
pub const SSH2_AGENTC_SIGN_REQUEST: u8 = 13;
pub const SSH2_AGENTC_ADD_IDENTITY: u8 = 17;
pub const SSH2_AGENTC_REMOVE_IDENTITY: u8 = 18;
pub const SSH2_AGENTC_REMOVE_ALL_IDENTITIES: u8 = 19;
pub const SSH2_AGENTC_ADD_ID_CONSTRAINED: u8 = 25;

// 3.3 Key-type independent requests from client to agent
pub const SSH_AGENTC_ADD_SMARTCARD_KEY: u8 = 20;
pub const SSH_AGENTC_REMOVE_SMARTCARD_KEY: u8 = 21;
pub const SSH_AGENTC_LOCK: u8 = 22;
pub const SSH_AGENTC_UNLOCK: u8 = 23;
pub const SSH_AGENTC_ADD_SMARTCARD_KEY_CONSTRAINED: u8 = 26;

// 3.4 Generic replies from agent to client
pub const SSH_AGENT_FAILURE: u8 = 5;
pub const SSH_AGENT_SUCCESS: u8 = 6;

// 3.5 Replies from agent to client for protocol 1 key operations
pub const SSH_AGENT_RSA_IDENTITIES_ANSWER: u8 = 2;
pub const SSH_AGENT_RSA_RESPONSE: u8 = 4;

// 3.6 Replies from agent to client for protocol 2 key operations
pub const SSH2_AGENT_IDENTITIES_ANSWER: u8 = 12;
pub const SSH2_AGENT_SIGN_RESPONSE: u8 = 14;

// Protocol-2 failure and version replies. 102 is the failure code used
// by the ssh.com agent; 103 is the version response a protocol-2-only
// agent sends to the legacy probe.
pub const SSH2_AGENT_FAILURE: u8 = 30;
pub const SSH_COM_AGENT2_FAILURE: u8 = 102;
pub const SSH2_AGENT_VERSION_RESPONSE: u8 = 103;

// 3.7 Key constraint identifiers
pub const SSH_AGENT_CONSTRAIN_LIFETIME: u8 = 1;
pub const SSH_AGENT_CONSTRAIN_CONFIRM: u8 = 2;

/// Key-type tag for RSA key blobs and add-identity payloads.
pub const RSA_KEY_TAG: &str = "ssh-rsa";
