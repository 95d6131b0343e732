//! Controller-level command handlers.

use tracing::warn;
use wnc_api::Services;
use wnc_api::model::general::MgmtIntfData;

use crate::cli::{GlobalOpts, SystemArgs, SystemCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(m: &MgmtIntfData) -> String {
    output::detail_lines(&[
        ("Interface", output::or_dash(m.intf_name.as_deref())),
        ("Type", output::or_dash(m.intf_type.as_deref())),
        ("IP", output::or_dash(m.mgmt_ip.as_deref())),
        ("Netmask", output::or_dash(m.net_mask.as_deref())),
        ("MAC", output::or_dash(m.mgmt_mac.as_deref())),
    ])
}

pub async fn handle(
    services: &Services,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SystemCommand::Info => {
            let resp = services.general.management_interface().await?;
            let out = output::render_single(&global.output, &resp.data, detail, |m| {
                m.mgmt_ip.clone().unwrap_or_default()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SystemCommand::Reload { reason, force } => {
            if !util::confirm("reload controller", "Reload the controller now?", global.yes)? {
                return Ok(());
            }
            match services.controller.reload(reason.as_deref(), force).await {
                Ok(()) => {}
                // The controller often drops the connection, or stops
                // answering, before replying.
                Err(e @ (wnc_api::Error::Transport(_) | wnc_api::Error::RequestTimeout { .. })) => {
                    warn!(error = %e, "no reply to reload request");
                }
                Err(e) => return Err(e.into()),
            }
            if !global.quiet {
                eprintln!("Controller reload initiated");
            }
            Ok(())
        }
    }
}
