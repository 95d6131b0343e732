//! Shared helpers for command handlers.

use std::io::IsTerminal;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Refuses to prompt when stdin is not a terminal.
pub fn confirm(action: &str, message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Turn a lookup failure into `NotFound` when the controller says so.
pub fn or_not_found(
    err: wnc_api::Error,
    resource_type: &str,
    identifier: &str,
    list_command: &str,
) -> CliError {
    if err.is_not_found() {
        CliError::not_found(resource_type, identifier, list_command)
    } else {
        err.into()
    }
}
