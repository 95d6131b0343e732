//! Rogue AP and client detection (`Cisco-IOS-XE-wireless-rogue-oper`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RogueOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data", default)]
    pub data: RogueOperData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RogueOperData {
    #[serde(default)]
    pub rogue_stats: Option<RogueStats>,
    #[serde(default)]
    pub rogue_data: Vec<RogueData>,
    #[serde(default)]
    pub rogue_client_data: Vec<RogueClientData>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RogueStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rogue-oper:rogue-stats", default)]
    pub stats: RogueStats,
}

/// Detection counters, keyed by YANG leaf name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RogueStats {
    #[serde(flatten)]
    pub counters: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RogueDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rogue-oper:rogue-data", default)]
    pub rogues: Vec<RogueData>,
}

/// A detected rogue access point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RogueData {
    pub rogue_address: String,
    pub rogue_class_type: Option<String>,
    pub rogue_mode: Option<String>,
    pub rogue_containment_level: Option<u8>,
    pub last_heard: Option<String>,
    pub max_detected_rssi: Option<i16>,
    pub ssid_max_rssi: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RogueClientDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rogue-oper:rogue-client-data", default)]
    pub clients: Vec<RogueClientData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RogueClientData {
    pub rogue_client_address: String,
    pub rogue_client_bssid: Option<String>,
    pub rogue_client_state: Option<String>,
    pub last_heard: Option<String>,
}
