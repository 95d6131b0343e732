//! Access point command handlers.

use tabled::Tabled;
use wnc_api::Services;
use wnc_api::model::ap::{ApTag, CapwapData};

use crate::cli::{ApsArgs, ApsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ApRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "State")]
    state: String,
}

impl From<&CapwapData> for ApRow {
    fn from(ap: &CapwapData) -> Self {
        Self {
            name: output::or_dash(ap.name.as_deref()),
            mac: ap.wtp_mac.clone(),
            ip: output::or_dash(ap.ip_addr.as_deref()),
            model: output::or_dash(ap.model()),
            serial: output::or_dash(ap.serial_number()),
            state: output::or_dash(
                ap.ap_state
                    .as_ref()
                    .and_then(|s| s.ap_operation_state.as_deref()),
            ),
        }
    }
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "AP MAC")]
    mac: String,
    #[tabled(rename = "Policy Tag")]
    policy: String,
    #[tabled(rename = "Site Tag")]
    site: String,
    #[tabled(rename = "RF Tag")]
    rf: String,
}

impl From<&ApTag> for TagRow {
    fn from(t: &ApTag) -> Self {
        Self {
            mac: t.ap_mac.clone(),
            policy: output::or_dash(t.policy_tag.as_deref()),
            site: output::or_dash(t.site_tag.as_deref()),
            rf: output::or_dash(t.rf_tag.as_deref()),
        }
    }
}

fn detail(ap: &CapwapData) -> String {
    let state = ap.ap_state.as_ref();
    let tags = ap.tag_info.as_ref();
    output::detail_lines(&[
        ("Name", output::or_dash(ap.name.as_deref())),
        ("Radio MAC", ap.wtp_mac.clone()),
        ("IP", output::or_dash(ap.ip_addr.as_deref())),
        ("Model", output::or_dash(ap.model())),
        ("Serial", output::or_dash(ap.serial_number())),
        (
            "Admin state",
            output::or_dash(state.and_then(|s| s.ap_admin_state.as_deref())),
        ),
        (
            "Oper state",
            output::or_dash(state.and_then(|s| s.ap_operation_state.as_deref())),
        ),
        (
            "Location",
            output::or_dash(ap.ap_location.as_ref().and_then(|l| l.location.as_deref())),
        ),
        (
            "Policy tag",
            output::or_dash(
                tags.and_then(|t| t.policy_tag_info.as_ref())
                    .and_then(|p| p.policy_tag_name.as_deref()),
            ),
        ),
        (
            "Site tag",
            output::or_dash(
                tags.and_then(|t| t.site_tag.as_ref())
                    .and_then(|s| s.site_tag_name.as_deref()),
            ),
        ),
        (
            "RF tag",
            output::or_dash(
                tags.and_then(|t| t.rf_tag.as_ref())
                    .and_then(|r| r.rf_tag_name.as_deref()),
            ),
        ),
    ])
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(services: &Services, args: ApsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ApsCommand::List => {
            let resp = services.ap.capwap_data().await?;
            let out = output::render_list(
                &global.output,
                &resp.capwap_data,
                |ap| ApRow::from(ap),
                |ap| ap.wtp_mac.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ApsCommand::Get { name } => {
            let entry = services
                .ap
                .get_by_name(&name)
                .await
                .map_err(|e| util::or_not_found(e, "AP", &name, "aps list"))?;
            let ap = services
                .ap
                .capwap_by_mac(&entry.wtp_mac)
                .await
                .map_err(|e| util::or_not_found(e, "AP", &name, "aps list"))?;
            let out = output::render_single(&global.output, &ap, detail, |ap| ap.wtp_mac.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ApsCommand::Tags => {
            let resp = services.ap.tags().await?;
            let out = output::render_list(
                &global.output,
                &resp.ap_tags.ap_tag,
                |t| TagRow::from(t),
                |t| t.ap_mac.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ApsCommand::AdminState {
            mac,
            enable,
            disable: _,
            slot,
        } => {
            let target = slot.map_or_else(|| format!("AP {mac}"), |s| format!("slot {s} of AP {mac}"));
            if !enable && !util::confirm("disable AP", &format!("Disable {target}?"), global.yes)? {
                return Ok(());
            }
            match slot {
                Some(slot) => services.ap.set_radio_admin_state(&mac, slot, enable).await?,
                None => services.ap.set_admin_state(&mac, enable).await?,
            }
            if !global.quiet {
                let verb = if enable { "enabled" } else { "disabled" };
                eprintln!("{target} {verb}");
            }
            Ok(())
        }

        ApsCommand::Reset { mac } => {
            if !util::confirm("reset AP", &format!("Reboot AP {mac}?"), global.yes)? {
                return Ok(());
            }
            services.ap.reset(&mac).await?;
            if !global.quiet {
                eprintln!("Reset sent to AP {mac}");
            }
            Ok(())
        }
    }
}
