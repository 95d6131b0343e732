//! Command dispatch: bridges CLI args -> service calls -> output formatting.

pub mod aps;
pub mod clients;
pub mod config_cmd;
pub mod rfid;
pub mod rogues;
pub mod system;
pub mod util;
pub mod wlans;

use wnc_api::Services;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    services: &Services,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Wlans(args) => wlans::handle(services, args, global).await,
        Command::Aps(args) => aps::handle(services, args, global).await,
        Command::Clients(args) => clients::handle(services, args, global).await,
        Command::Rogues(args) => rogues::handle(services, args, global).await,
        Command::Rfid(args) => rfid::handle(services, args, global).await,
        Command::System(args) => system::handle(services, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
