//! Wireless client models (`Cisco-IOS-XE-wireless-client-oper`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:client-oper-data", default)]
    pub data: ClientOperData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientOperData {
    #[serde(default)]
    pub common_oper_data: Vec<CommonOperData>,
    #[serde(default)]
    pub dot11_oper_data: Vec<Dot11OperData>,
    #[serde(default)]
    pub traffic_stats: Vec<TrafficStats>,
    #[serde(default)]
    pub sisf_db_mac: Vec<SisfDbMac>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonOperDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:common-oper-data", default)]
    pub clients: Vec<CommonOperData>,
}

/// Association summary for one client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommonOperData {
    pub client_mac: String,
    pub ap_name: Option<String>,
    pub ms_ap_slot_id: Option<u8>,
    pub ms_radio_type: Option<String>,
    pub wlan_id: Option<u32>,
    pub client_type: Option<String>,
    pub co_state: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dot11OperDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:dot11-oper-data", default)]
    pub clients: Vec<Dot11OperData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dot11OperData {
    pub ms_mac_address: String,
    pub dot11_state: Option<String>,
    pub ms_bssid: Option<String>,
    pub ap_mac_address: Option<String>,
    pub current_channel: Option<u16>,
    pub ms_wlan_id: Option<u32>,
    pub vap_ssid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:traffic-stats", default)]
    pub stats: Vec<TrafficStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrafficStats {
    pub ms_mac_address: String,
    #[serde(default, with = "super::counter")]
    pub bytes_rx: Option<u64>,
    #[serde(default, with = "super::counter")]
    pub bytes_tx: Option<u64>,
    #[serde(default, with = "super::counter")]
    pub pkts_rx: Option<u64>,
    #[serde(default, with = "super::counter")]
    pub pkts_tx: Option<u64>,
    pub most_recent_rssi: Option<i16>,
    pub most_recent_snr: Option<i16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SisfDbMacResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:sisf-db-mac", default)]
    pub entries: Vec<SisfDbMac>,
}

/// IP bindings learnt by device tracking for one client MAC.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SisfDbMac {
    pub mac_addr: String,
    pub ipv4_binding: Option<Ipv4Binding>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Binding {
    pub ip_key: Option<IpKey>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IpKey {
    pub zone_id: Option<u32>,
    pub ip_addr: Option<String>,
}
