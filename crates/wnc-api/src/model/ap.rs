//! Access point models (`Cisco-IOS-XE-wireless-access-point-oper`,
//! `Cisco-IOS-XE-wireless-ap-cfg`, and the AP command RPCs).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Operational data ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApOperResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data",
        default
    )]
    pub data: ApOperData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApOperData {
    #[serde(default)]
    pub capwap_data: Vec<CapwapData>,
    #[serde(default)]
    pub ap_name_mac_map: Vec<ApNameMacMap>,
    #[serde(default)]
    pub radio_oper_data: Vec<RadioOperData>,
    #[serde(default)]
    pub lldp_neigh: Vec<LldpNeighbor>,
    #[serde(default)]
    pub cdp_cache_data: Vec<CdpCacheData>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapwapDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:capwap-data", default)]
    pub capwap_data: Vec<CapwapData>,
}

/// CAPWAP join state of one AP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CapwapData {
    pub wtp_mac: String,
    pub ip_addr: Option<String>,
    pub name: Option<String>,
    pub device_detail: Option<DeviceDetail>,
    pub ap_state: Option<ApState>,
    pub ap_location: Option<ApLocation>,
    pub tag_info: Option<TagInfo>,
}

impl CapwapData {
    pub fn serial_number(&self) -> Option<&str> {
        self.device_detail
            .as_ref()?
            .static_info
            .as_ref()?
            .board_data
            .as_ref()?
            .wtp_serial_num
            .as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.device_detail
            .as_ref()?
            .static_info
            .as_ref()?
            .ap_models
            .as_ref()?
            .model
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceDetail {
    pub static_info: Option<StaticInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StaticInfo {
    pub board_data: Option<BoardData>,
    pub ap_models: Option<ApModels>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardData {
    pub wtp_serial_num: Option<String>,
    pub wtp_enet_mac: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApModels {
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApState {
    pub ap_admin_state: Option<String>,
    pub ap_operation_state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApLocation {
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TagInfo {
    pub policy_tag_info: Option<PolicyTagInfo>,
    pub site_tag: Option<SiteTagInfo>,
    pub rf_tag: Option<RfTagInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyTagInfo {
    pub policy_tag_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteTagInfo {
    pub site_tag_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfTagInfo {
    pub rf_tag_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApNameMacMapResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-access-point-oper:ap-name-mac-map",
        default
    )]
    pub entries: Vec<ApNameMacMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApNameMacMap {
    pub wtp_name: String,
    pub wtp_mac: String,
    pub eth_mac: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadioOperDataResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-access-point-oper:radio-oper-data",
        default
    )]
    pub radios: Vec<RadioOperData>,
}

/// Per-slot radio state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RadioOperData {
    pub wtp_mac: String,
    pub radio_slot_id: u8,
    pub slot_id: Option<u8>,
    pub radio_type: Option<String>,
    pub admin_state: Option<String>,
    pub oper_state: Option<String>,
    pub radio_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LldpNeighborResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:lldp-neigh", default)]
    pub neighbors: Vec<LldpNeighbor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LldpNeighbor {
    pub wtp_mac: String,
    pub neighbor_mac: Option<String>,
    pub port_id: Option<String>,
    pub local_port: Option<String>,
    pub system_name: Option<String>,
    pub port_description: Option<String>,
    pub mgmt_addr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdpCacheResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-access-point-oper:cdp-cache-data",
        default
    )]
    pub entries: Vec<CdpCacheData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CdpCacheData {
    pub mac_addr: String,
    pub cdp_cache_device_id: Option<String>,
    pub ap_name: Option<String>,
    pub cdp_cache_local_port: Option<String>,
    pub cdp_cache_device_port: Option<String>,
    pub cdp_cache_platform: Option<String>,
}

// ── Configuration ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data", default)]
    pub data: ApCfgData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApCfgData {
    #[serde(default)]
    pub ap_tags: ApTagList,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Body of `ap-cfg-data/ap-tags`, for reads and merge (PATCH) writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApTagsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-cfg:ap-tags", default)]
    pub ap_tags: ApTagList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApTagList {
    #[serde(default)]
    pub ap_tag: Vec<ApTag>,
}

/// Policy/site/RF tag assignment for one AP, keyed by its Ethernet MAC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApTag {
    pub ap_mac: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rf_tag: Option<String>,
}

// ── RPC inputs ───────────────────────────────────────────────────────

/// Wrapper shared by the AP command RPCs.
#[derive(Debug, Clone, Serialize)]
pub struct ApRpcRequest<T> {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-cmd-rpc:input")]
    pub input: T,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SetApAdminStateInput {
    pub mode: bool,
    pub wtp_mac: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SetApSlotAdminStateInput {
    pub mode: bool,
    pub wtp_mac: String,
    pub slot_id: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApResetInput {
    pub mac_addr: String,
}
