//! WLAN configuration models (`Cisco-IOS-XE-wireless-wlan-cfg`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WlanCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data", default)]
    pub data: WlanCfgData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanCfgData {
    #[serde(default)]
    pub wlan_cfg_entries: WlanCfgEntries,
    #[serde(default)]
    pub wlan_policies: WlanPolicies,
    #[serde(default)]
    pub policy_list_entries: PolicyListEntries,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WlanCfgEntriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entries", default)]
    pub entries: WlanCfgEntries,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanCfgEntries {
    #[serde(default)]
    pub wlan_cfg_entry: Vec<WlanCfgEntry>,
}

/// Response to, and request body for, a single `wlan-cfg-entry`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WlanCfgEntryResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entry", default)]
    pub entries: Vec<WlanCfgEntry>,
}

/// A WLAN profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanCfgEntry {
    pub profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apf_vap_id_data: Option<ApfVapIdData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key_mgmt_psk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key_mgmt_dot1x: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key_mgmt_sae: Option<bool>,
}

impl WlanCfgEntry {
    pub fn ssid(&self) -> Option<&str> {
        self.apf_vap_id_data.as_ref()?.ssid.as_deref()
    }

    /// `wlan-status` defaults to disabled when the controller omits it.
    pub fn enabled(&self) -> bool {
        self.apf_vap_id_data
            .as_ref()
            .and_then(|d| d.wlan_status)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApfVapIdData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_ssid: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WlanPoliciesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-policies", default)]
    pub policies: WlanPolicies,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanPolicies {
    #[serde(default)]
    pub wlan_policy: Vec<WlanPolicy>,
}

/// A policy profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WlanPolicy {
    pub policy_profile_name: String,
    pub description: Option<String>,
    pub status: Option<bool>,
    pub interface_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyListEntriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entries", default)]
    pub entries: PolicyListEntries,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyListEntries {
    #[serde(default)]
    pub policy_list_entry: Vec<PolicyTag>,
}

/// A policy tag: which WLANs map to which policy profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyTag {
    pub tag_name: String,
    pub description: Option<String>,
    pub wlan_policies: Option<PolicyTagWlans>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyTagWlans {
    #[serde(default)]
    pub wlan_policy: Vec<PolicyTagWlan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyTagWlan {
    pub wlan_profile_name: String,
    pub policy_profile_name: Option<String>,
}
