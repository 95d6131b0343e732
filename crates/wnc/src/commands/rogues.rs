//! Rogue AP command handlers.

use tabled::Tabled;
use wnc_api::Services;
use wnc_api::model::rogue::RogueData;

use crate::cli::{GlobalOpts, RoguesArgs, RoguesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RogueRow {
    #[tabled(rename = "BSSID")]
    bssid: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "RSSI")]
    rssi: String,
    #[tabled(rename = "Last Heard")]
    last_heard: String,
}

impl From<&RogueData> for RogueRow {
    fn from(r: &RogueData) -> Self {
        Self {
            bssid: r.rogue_address.clone(),
            class: output::or_dash(r.rogue_class_type.as_deref()),
            mode: output::or_dash(r.rogue_mode.as_deref()),
            ssid: output::or_dash(r.ssid_max_rssi.as_deref()),
            rssi: output::or_dash(r.max_detected_rssi),
            last_heard: output::or_dash(r.last_heard.as_deref()),
        }
    }
}

fn detail(r: &RogueData) -> String {
    output::detail_lines(&[
        ("BSSID", r.rogue_address.clone()),
        ("Class", output::or_dash(r.rogue_class_type.as_deref())),
        ("Mode", output::or_dash(r.rogue_mode.as_deref())),
        ("SSID", output::or_dash(r.ssid_max_rssi.as_deref())),
        ("Max RSSI", output::or_dash(r.max_detected_rssi)),
        ("Containment", output::or_dash(r.rogue_containment_level)),
        ("Last heard", output::or_dash(r.last_heard.as_deref())),
    ])
}

pub async fn handle(
    services: &Services,
    args: RoguesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RoguesCommand::List => {
            let resp = services.rogue.rogues().await?;
            let out = output::render_list(
                &global.output,
                &resp.rogues,
                |r| RogueRow::from(r),
                |r| r.rogue_address.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RoguesCommand::Get { mac } => {
            let rogue = services
                .rogue
                .rogue_by_mac(&mac)
                .await
                .map_err(|e| util::or_not_found(e, "rogue", &mac, "rogues list"))?;
            let out = output::render_single(&global.output, &rogue, detail, |r| {
                r.rogue_address.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
