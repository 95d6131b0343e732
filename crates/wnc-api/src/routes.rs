//! RESTCONF resource paths, one module per wireless domain.
//!
//! Values are `<yang-module>:<container>[/<child>...]` and are appended to
//! `/restconf/data/` (or `/restconf/operations/` for RPCs). They must match
//! the controller's published YANG names verbatim.

pub mod general {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-general-oper:general-oper-data";
    pub const MGMT_INTF_DATA: &str =
        "Cisco-IOS-XE-wireless-general-oper:general-oper-data/mgmt-intf-data";
    pub const CFG: &str = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data";
}

pub mod ap {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data";
    pub const CAPWAP_DATA: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/capwap-data";
    pub const NAME_MAC_MAP: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/ap-name-mac-map";
    pub const RADIO_OPER_DATA: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/radio-oper-data";
    pub const LLDP_NEIGH: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/lldp-neigh";
    pub const CDP_CACHE_DATA: &str =
        "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/cdp-cache-data";

    pub const CFG: &str = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data";
    pub const TAGS: &str = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data/ap-tags";
    pub const TAG: &str = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data/ap-tags/ap-tag";

    pub const RPC_SET_ADMIN_STATE: &str =
        "Cisco-IOS-XE-wireless-access-point-cmd-rpc:set-ap-admin-state";
    pub const RPC_SET_SLOT_ADMIN_STATE: &str =
        "Cisco-IOS-XE-wireless-access-point-cmd-rpc:set-ap-slot-admin-state";
    pub const RPC_RESET: &str = "Cisco-IOS-XE-wireless-access-point-cmd-rpc:ap-reset";
}

pub mod client {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-client-oper:client-oper-data";
    pub const COMMON_OPER_DATA: &str =
        "Cisco-IOS-XE-wireless-client-oper:client-oper-data/common-oper-data";
    pub const DOT11_OPER_DATA: &str =
        "Cisco-IOS-XE-wireless-client-oper:client-oper-data/dot11-oper-data";
    pub const TRAFFIC_STATS: &str =
        "Cisco-IOS-XE-wireless-client-oper:client-oper-data/traffic-stats";
    pub const SISF_DB_MAC: &str = "Cisco-IOS-XE-wireless-client-oper:client-oper-data/sisf-db-mac";
}

pub mod wlan {
    pub const CFG: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data";
    pub const ENTRIES: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries";
    pub const ENTRY: &str =
        "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries/wlan-cfg-entry";
    pub const POLICIES: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-policies";
    pub const POLICY_LIST_ENTRIES: &str =
        "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/policy-list-entries";
}

pub mod rf {
    pub const CFG: &str = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data";
    pub const RF_TAGS: &str = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-tags";
    pub const RF_PROFILES: &str = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-profiles";
}

pub mod rfid {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-rfid-oper:rfid-oper-data";
    pub const RFID_DATA: &str = "Cisco-IOS-XE-wireless-rfid-oper:rfid-oper-data/rfid-data";
    /// List keyed by `rfid-mac-addr`, `ap-mac-addr`, `slot`.
    pub const RFID_RADIO_DATA: &str =
        "Cisco-IOS-XE-wireless-rfid-oper:rfid-oper-data/rfid-radio-data";
}

pub mod rogue {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data";
    pub const STATS: &str = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data/rogue-stats";
    pub const DATA: &str = "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data/rogue-data";
    pub const CLIENT_DATA: &str =
        "Cisco-IOS-XE-wireless-rogue-oper:rogue-oper-data/rogue-client-data";
}

pub mod mobility {
    pub const OPER: &str = "Cisco-IOS-XE-wireless-mobility-oper:mobility-oper-data";
    pub const GLOBAL_DATA: &str =
        "Cisco-IOS-XE-wireless-mobility-oper:mobility-oper-data/mm-global-data";
    pub const PEER_LIST: &str =
        "Cisco-IOS-XE-wireless-mobility-oper:mobility-oper-data/ap-peer-list";
}

pub mod controller {
    pub const RPC_RELOAD: &str = "Cisco-IOS-XE-rpc:reload";
}
