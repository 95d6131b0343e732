//! RF tag and profile configuration (`Cisco-IOS-XE-wireless-rf-cfg`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data", default)]
    pub data: RfCfgData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfCfgData {
    #[serde(default)]
    pub rf_tags: RfTags,
    #[serde(default)]
    pub rf_profiles: RfProfiles,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfTagsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-tags", default)]
    pub rf_tags: RfTags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfTags {
    #[serde(default)]
    pub rf_tag: Vec<RfTag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfTag {
    pub tag_name: String,
    pub description: Option<String>,
    pub dot11a_rf_profile_name: Option<String>,
    pub dot11b_rf_profile_name: Option<String>,
    #[serde(rename = "dot11-6ghz-rf-prof-name")]
    pub dot11_6ghz_rf_profile_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfProfilesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-profiles", default)]
    pub rf_profiles: RfProfiles,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfProfiles {
    #[serde(default)]
    pub rf_profile: Vec<RfProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RfProfile {
    pub name: String,
    pub description: Option<String>,
    pub band: Option<String>,
    pub status: Option<bool>,
    pub tx_power_min: Option<i8>,
    pub tx_power_max: Option<i8>,
}
