//! Mobility tunnel state (`Cisco-IOS-XE-wireless-mobility-oper`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MobilityOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-mobility-oper:mobility-oper-data", default)]
    pub data: MobilityOperData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MobilityOperData {
    #[serde(default)]
    pub mm_global_data: Option<MmGlobalData>,
    #[serde(default)]
    pub ap_peer_list: Vec<ApPeer>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MmGlobalDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-mobility-oper:mm-global-data", default)]
    pub data: MmGlobalData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MmGlobalData {
    pub mm_mac_addr: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApPeerListResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-mobility-oper:ap-peer-list", default)]
    pub peers: Vec<ApPeer>,
}

/// A mobility peer as seen from the AP side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApPeer {
    pub peer_ip: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
