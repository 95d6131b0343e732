//! General controller data (`Cisco-IOS-XE-wireless-general-{oper,cfg}`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-oper:general-oper-data", default)]
    pub data: GeneralOperData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralOperData {
    #[serde(default)]
    pub mgmt_intf_data: Option<MgmtIntfData>,
    /// Containers not modelled here.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MgmtIntfDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-oper:mgmt-intf-data", default)]
    pub data: MgmtIntfData,
}

/// Wireless management interface of the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MgmtIntfData {
    pub intf_name: Option<String>,
    pub intf_type: Option<String>,
    pub intf_id: Option<u32>,
    pub mgmt_ip: Option<String>,
    pub net_mask: Option<String>,
    pub mgmt_mac: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data", default)]
    pub data: GeneralCfgData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralCfgData {
    #[serde(default)]
    pub mewlc_config: Option<MewlcConfig>,
    #[serde(default)]
    pub mfp: Option<MfpConfig>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Embedded wireless controller settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MewlcConfig {
    pub mewlc_platform: Option<bool>,
    pub mewlc_vlan: Option<u16>,
}

/// Management frame protection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MfpConfig {
    pub global_mfp_state: Option<bool>,
    pub ap_impersonation_detection: Option<bool>,
}
