//! Wireless client command handlers.

use std::collections::HashMap;

use tabled::Tabled;
use wnc_api::Services;
use wnc_api::model::client::{CommonOperData, SisfDbMac};

use crate::cli::{ClientsArgs, ClientsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "WLAN")]
    wlan: String,
    #[tabled(rename = "Radio")]
    radio: String,
    #[tabled(rename = "State")]
    state: String,
}

impl ClientRow {
    fn new(c: &CommonOperData, ips: &HashMap<String, String>) -> Self {
        Self {
            mac: c.client_mac.clone(),
            ip: ips.get(&c.client_mac).cloned().unwrap_or_else(|| "-".into()),
            ap: output::or_dash(c.ap_name.as_deref()),
            wlan: output::or_dash(c.wlan_id),
            radio: output::or_dash(c.ms_radio_type.as_deref()),
            state: output::or_dash(c.co_state.as_deref()),
        }
    }
}

/// Client MAC → IPv4 address, from the device-tracking table.
fn ip_index(entries: &[SisfDbMac]) -> HashMap<String, String> {
    entries
        .iter()
        .filter_map(|e| {
            let ip = e.ipv4_binding.as_ref()?.ip_key.as_ref()?.ip_addr.clone()?;
            Some((e.mac_addr.clone(), ip))
        })
        .collect()
}

fn detail(c: &CommonOperData) -> String {
    output::detail_lines(&[
        ("MAC", c.client_mac.clone()),
        ("Username", output::or_dash(c.username.as_deref())),
        ("AP", output::or_dash(c.ap_name.as_deref())),
        ("Slot", output::or_dash(c.ms_ap_slot_id)),
        ("Radio", output::or_dash(c.ms_radio_type.as_deref())),
        ("WLAN ID", output::or_dash(c.wlan_id)),
        ("Type", output::or_dash(c.client_type.as_deref())),
        ("State", output::or_dash(c.co_state.as_deref())),
    ])
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    services: &Services,
    args: ClientsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ClientsCommand::List => {
            let (common, sisf) =
                tokio::try_join!(services.client.common(), services.client.sisf_db())?;
            let ips = ip_index(&sisf.entries);
            let out = output::render_list(
                &global.output,
                &common.clients,
                |c| ClientRow::new(c, &ips),
                |c| c.client_mac.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ClientsCommand::Get { mac } => {
            let client = services
                .client
                .common_by_mac(&mac)
                .await
                .map_err(|e| util::or_not_found(e, "client", &mac, "clients list"))?;
            let out = output::render_single(&global.output, &client, detail, |c| {
                c.client_mac.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use wnc_api::model::client::{IpKey, Ipv4Binding};

    use super::*;

    #[test]
    fn ip_index_skips_unbound_entries() {
        let entries = vec![
            SisfDbMac {
                mac_addr: "00:11:22:33:44:55".into(),
                ipv4_binding: Some(Ipv4Binding {
                    ip_key: Some(IpKey {
                        zone_id: Some(0),
                        ip_addr: Some("10.1.2.3".into()),
                    }),
                }),
            },
            SisfDbMac {
                mac_addr: "66:77:88:99:aa:bb".into(),
                ipv4_binding: None,
            },
        ];
        let ips = ip_index(&entries);
        assert_eq!(ips.len(), 1);
        assert_eq!(
            ips.get("00:11:22:33:44:55").map(String::as_str),
            Some("10.1.2.3")
        );
    }
}
