#![allow(clippy::unwrap_used)]
// Integration tests for the per-domain services using wiremock.

use std::net::SocketAddr;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wnc_api::model::ap::ApTag;
use wnc_api::model::wlan::WlanCfgEntry;
use wnc_api::{Client, Error, Protocol, Services};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Services) {
    let server = MockServer::start().await;
    let client = Client::builder(server.address().to_string(), "dGVzdDp0ZXN0")
        .protocol(Protocol::Http)
        .build()
        .unwrap();
    (server, Services::new(Arc::new(client)))
}

fn data(path: &str) -> String {
    format!("/restconf/data/{path}")
}

fn operations(path: &str) -> String {
    format!("/restconf/operations/{path}")
}

// ── WLAN ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_wlan_entries() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entries": {
                "wlan-cfg-entry": [
                    {
                        "profile-name": "corp",
                        "wlan-id": 1,
                        "apf-vap-id-data": { "ssid": "Corp", "wlan-status": true }
                    },
                    { "profile-name": "guest", "wlan-id": 2 }
                ]
            }
        })))
        .mount(&server)
        .await;

    let resp = svc.wlan.entries().await.unwrap();
    let entries = &resp.entries.wlan_cfg_entry;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].profile_name, "corp");
    assert_eq!(entries[0].ssid(), Some("Corp"));
    assert!(entries[0].enabled());
    assert_eq!(entries[1].wlan_id, Some(2));
    assert!(!entries[1].enabled());
}

#[tokio::test]
async fn test_wlan_create_posts_entry_body() {
    let (server, svc) = setup().await;

    Mock::given(method("POST"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries",
        )))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entry": [
                { "profile-name": "lab", "wlan-id": 7 }
            ]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    svc.wlan
        .create_entry(WlanCfgEntry {
            profile_name: "lab".into(),
            wlan_id: Some(7),
            ..WlanCfgEntry::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_wlan_delete_uses_key_selector() {
    let (server, svc) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/wlan-cfg-entries/wlan-cfg-entry=lab",
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    svc.wlan.delete_entry("lab").await.unwrap();
}

#[tokio::test]
async fn test_wlan_empty_name_is_rejected_locally() {
    let (server, svc) = setup().await;

    let err = svc.wlan.entry_by_name("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "got: {err:?}");
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ── Access points ───────────────────────────────────────────────────

#[tokio::test]
async fn test_ap_get_by_name_missing_is_not_found() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/ap-name-mac-map=ghost",
        )))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = svc.ap.get_by_name("ghost").await.unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_ap_get_by_name_found() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/ap-name-mac-map=ap-lobby",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-access-point-oper:ap-name-mac-map": [
                { "wtp-name": "ap-lobby", "wtp-mac": "aa:bb:cc:00:11:22" }
            ]
        })))
        .mount(&server)
        .await;

    let ap = svc.ap.get_by_name("ap-lobby").await.unwrap();
    assert_eq!(ap.wtp_mac, "aa:bb:cc:00:11:22");
}

#[tokio::test]
async fn test_ap_admin_state_rpc_normalizes_mac() {
    let (server, svc) = setup().await;

    Mock::given(method("POST"))
        .and(path(operations(
            "Cisco-IOS-XE-wireless-access-point-cmd-rpc:set-ap-admin-state",
        )))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-access-point-cmd-rpc:input": {
                "mode": false,
                "wtp-mac": "aa:bb:cc:00:11:22"
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    svc.ap
        .set_admin_state("AABB.CC00.1122", false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ap_set_tags_patches_tag_list() {
    let (server, svc) = setup().await;

    Mock::given(method("PATCH"))
        .and(path(data("Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data/ap-tags")))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-ap-cfg:ap-tags": {
                "ap-tag": [
                    { "ap-mac": "00:11:22:33:44:55", "policy-tag": "corp-pt" }
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    svc.ap
        .set_tags(ApTag {
            ap_mac: "00-11-22-33-44-55".into(),
            policy_tag: Some("corp-pt".into()),
            ..ApTag::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ap_lldp_empty_table_quirk() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data/lldp-neigh",
        )))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "ietf-restconf:errors": {
                "error": [{
                    "error-type": "application",
                    "error-tag": "operation-failed",
                    "error-message": "failed to retrieve table cursor"
                }]
            }
        })))
        .mount(&server)
        .await;

    let resp = svc.ap.lldp_neighbors().await.unwrap();
    assert!(resp.neighbors.is_empty());
}

// ── Clients ─────────────────────────────────────────────────────────

/// Serve one request with a response that declares `Content-Length: 500`
/// but closes the connection after `partial`.
async fn truncating_server(partial: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let head = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n";
        stream.write_all(head.as_bytes()).await.unwrap();
        stream.write_all(partial.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });
    addr
}

fn services_at(addr: SocketAddr) -> Services {
    let client = Client::builder(addr.to_string(), "dGVzdDp0ZXN0")
        .protocol(Protocol::Http)
        .build()
        .unwrap();
    Services::new(Arc::new(client))
}

#[tokio::test]
async fn test_client_sisf_db_connection_dropped_mid_body() {
    let addr = truncating_server(r#"{"Cisco-IOS-XE-wireless-client-oper:sisf-db-mac": ["#).await;
    let svc = services_at(addr);

    let resp = svc.client.sisf_db().await.unwrap();
    assert!(resp.entries.is_empty());
}

#[tokio::test]
async fn test_ap_cdp_connection_dropped_mid_body() {
    let addr = truncating_server("{").await;
    let svc = services_at(addr);

    let resp = svc.ap.cdp_cache().await.unwrap();
    assert!(resp.entries.is_empty());
}

#[tokio::test]
async fn test_client_sisf_db_truncated_json() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-client-oper:client-oper-data/sisf-db-mac",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"Cisco-IOS-XE-wireless-client-oper:sisf-db-mac": [{"mac-addr": "00:11"#,
        ))
        .mount(&server)
        .await;

    let resp = svc.client.sisf_db().await.unwrap();
    assert!(resp.entries.is_empty());
}

#[tokio::test]
async fn test_client_sisf_db_connection_refused_propagates() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let svc = services_at(addr);

    let err = svc.client.sisf_db().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_client_common_truncated_json_is_not_tolerated() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Cisco-IOS-XE"#))
        .mount(&server)
        .await;

    let err = svc.client.common().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_client_sisf_db_other_failures_propagate() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = svc.client.sisf_db().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_client_traffic_counters_accept_strings() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-client-oper:client-oper-data/traffic-stats",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-client-oper:traffic-stats": [
                {
                    "ms-mac-address": "00:11:22:33:44:55",
                    "bytes-rx": "18446744073709551615",
                    "bytes-tx": 42
                }
            ]
        })))
        .mount(&server)
        .await;

    let resp = svc.client.traffic_stats().await.unwrap();
    assert_eq!(resp.stats[0].bytes_rx, Some(u64::MAX));
    assert_eq!(resp.stats[0].bytes_tx, Some(42));
    assert_eq!(resp.stats[0].pkts_rx, None);
}

// ── RFID ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rfid_radio_data_composite_key() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-rfid-oper:rfid-oper-data/rfid-radio-data=00:12:b8:0a:00:01,aa:bb:cc:00:11:22,1",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-rfid-oper:rfid-radio-data": [
                {
                    "rfid-mac-addr": "00:12:b8:0a:00:01",
                    "ap-mac-addr": "aa:bb:cc:00:11:22",
                    "slot": 1,
                    "rssi": -61
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let radio = svc
        .rfid
        .radio_data("0012.b80a.0001", "AA:BB:CC:00:11:22", 1)
        .await
        .unwrap();
    assert_eq!(radio.rssi, Some(-61));
    assert_eq!(radio.slot, 1);
}

#[tokio::test]
async fn test_rfid_invalid_mac_never_reaches_controller() {
    let (server, svc) = setup().await;

    let err = svc.rfid.tag_by_mac("not-a-mac").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "got: {err:?}");
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ── Controller ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_reload_rpc_body() {
    let (server, svc) = setup().await;

    Mock::given(method("POST"))
        .and(path(operations("Cisco-IOS-XE-rpc:reload")))
        .and(body_json(json!({
            "Cisco-IOS-XE-rpc:input": { "reason": "maintenance", "force": true }
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    svc.controller
        .reload(Some("maintenance"), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reload_without_options_sends_empty_input() {
    let (server, svc) = setup().await;

    Mock::given(method("POST"))
        .and(path(operations("Cisco-IOS-XE-rpc:reload")))
        .and(body_json(json!({ "Cisco-IOS-XE-rpc:input": {} })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    svc.controller.reload(None, false).await.unwrap();
}

// ── General ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_general_forbidden_is_classified() {
    let (server, svc) = setup().await;

    Mock::given(method("GET"))
        .and(path(data(
            "Cisco-IOS-XE-wireless-general-oper:general-oper-data",
        )))
        .respond_with(ResponseTemplate::new(403).set_body_string("access denied"))
        .mount(&server)
        .await;

    let err = svc.general.oper().await.unwrap_err();
    assert!(err.is_forbidden());
    assert!(!err.is_not_found());
}
