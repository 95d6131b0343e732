//! RFID tag tracking (`Cisco-IOS-XE-wireless-rfid-oper`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfidOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rfid-oper:rfid-oper-data", default)]
    pub data: RfidOperData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfidOperData {
    #[serde(default)]
    pub rfid_data: Vec<RfidData>,
    #[serde(default)]
    pub rfid_radio_data: Vec<RfidRadioData>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfidDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rfid-oper:rfid-data", default)]
    pub tags: Vec<RfidData>,
}

/// A tag heard by the controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfidData {
    pub rfid_mac_addr: String,
    pub rfid_type: Option<String>,
    pub rfid_auto_timeout: Option<u32>,
    pub rfid_last_heard: Option<String>,
    #[serde(default, with = "super::counter")]
    pub rfid_bytes_rx: Option<u64>,
    #[serde(default, with = "super::counter")]
    pub rfid_packets_rx: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfidRadioDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rfid-oper:rfid-radio-data", default)]
    pub radios: Vec<RfidRadioData>,
}

/// Signal of one tag as heard by one AP radio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfidRadioData {
    pub rfid_mac_addr: String,
    pub ap_mac_addr: String,
    pub slot: u8,
    pub rssi: Option<i16>,
    pub snr: Option<i16>,
}
