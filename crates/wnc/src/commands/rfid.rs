//! RFID tag command handlers.

use tabled::Tabled;
use wnc_api::Services;
use wnc_api::model::rfid::RfidData;

use crate::cli::{GlobalOpts, RfidArgs, RfidCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct RfidRow {
    #[tabled(rename = "Tag MAC")]
    mac: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Last Heard")]
    last_heard: String,
    #[tabled(rename = "Packets")]
    packets: String,
}

impl From<&RfidData> for RfidRow {
    fn from(t: &RfidData) -> Self {
        Self {
            mac: t.rfid_mac_addr.clone(),
            kind: output::or_dash(t.rfid_type.as_deref()),
            last_heard: output::or_dash(t.rfid_last_heard.as_deref()),
            packets: output::or_dash(t.rfid_packets_rx),
        }
    }
}

pub async fn handle(services: &Services, args: RfidArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        RfidCommand::List => {
            let resp = services.rfid.tags().await?;
            let out = output::render_list(
                &global.output,
                &resp.tags,
                |t| RfidRow::from(t),
                |t| t.rfid_mac_addr.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
