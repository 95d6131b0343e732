//! WLAN command handlers.

use tabled::Tabled;
use wnc_api::Services;
use wnc_api::model::wlan::WlanCfgEntry;

use crate::cli::{GlobalOpts, WlansArgs, WlansCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct WlanRow {
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Security")]
    security: String,
}

impl WlanRow {
    fn new(w: &WlanCfgEntry, color: bool) -> Self {
        Self {
            profile: w.profile_name.clone(),
            id: output::or_dash(w.wlan_id),
            ssid: w.ssid().unwrap_or("-").into(),
            status: output::paint_state(Some(w.enabled()), color),
            security: security(w),
        }
    }
}

/// Key management suites enabled on the WLAN, or "open".
fn security(w: &WlanCfgEntry) -> String {
    let suites: Vec<&str> = [
        (w.auth_key_mgmt_psk, "PSK"),
        (w.auth_key_mgmt_dot1x, "802.1X"),
        (w.auth_key_mgmt_sae, "SAE"),
    ]
    .into_iter()
    .filter(|(on, _)| on.unwrap_or(false))
    .map(|(_, name)| name)
    .collect();

    if suites.is_empty() {
        "open".into()
    } else {
        suites.join("+")
    }
}

fn detail(w: &WlanCfgEntry) -> String {
    let broadcast = w.apf_vap_id_data.as_ref().and_then(|d| d.broadcast_ssid);
    output::detail_lines(&[
        ("Profile", w.profile_name.clone()),
        ("WLAN ID", output::or_dash(w.wlan_id)),
        ("SSID", w.ssid().unwrap_or("-").into()),
        ("Enabled", w.enabled().to_string()),
        ("Broadcast", output::or_dash(broadcast)),
        ("Security", security(w)),
        ("Description", w.description.clone().unwrap_or_else(|| "-".into())),
    ])
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    services: &Services,
    args: WlansArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(&global.color);

    match args.command {
        WlansCommand::List => {
            let resp = services.wlan.entries().await?;
            let out = output::render_list(
                &global.output,
                &resp.entries.wlan_cfg_entry,
                |w| WlanRow::new(w, color),
                |w| w.profile_name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WlansCommand::Get { profile } => {
            let entry = services
                .wlan
                .entry_by_name(&profile)
                .await
                .map_err(|e| util::or_not_found(e, "WLAN", &profile, "wlans list"))?;
            let out = output::render_single(&global.output, &entry, detail, |w| {
                w.profile_name.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
