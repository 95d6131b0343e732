//! Controller-level RPC payloads.

use serde::{Deserialize, Serialize};

/// Input of the `Cisco-IOS-XE-rpc:reload` RPC.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReloadRequest {
    #[serde(rename = "Cisco-IOS-XE-rpc:input")]
    pub input: ReloadInput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReloadInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}
