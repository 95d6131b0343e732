//! Config subcommand handlers.

use secrecy::SecretString;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Format config for display, masking the plaintext token.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "controller = \"{}\"", p.controller);
        if let Some(ref protocol) = p.protocol {
            let _ = writeln!(out, "protocol = \"{protocol}\"");
        }
        if p.token.is_some() {
            let _ = writeln!(out, "token = \"****\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}

/// Check that `name` is a configured profile.
fn require_profile(cfg: &Config, name: &str) -> Result<(), CliError> {
    cfg.profile(name).map(|_| ()).map_err(|_| CliError::ProfileNotFound {
        name: name.into(),
        available: config::available_profiles(cfg),
    })
}

/// One profile per line, the default suffixed with ` *`.
fn format_profiles(cfg: &Config) -> String {
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    cfg.profiles
        .keys()
        .map(|name| {
            if name == default {
                format!("{name} *")
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load()?;
            output::print_output(format_config_redacted(&cfg).trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load()?;
            if cfg.profiles.is_empty() {
                if !global.quiet {
                    eprintln!("No profiles configured in {}", config::config_path().display());
                }
                return Ok(());
            }
            output::print_output(&format_profiles(&cfg), global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load()?;
            require_profile(&cfg, &name)?;
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }

        ConfigCommand::SetToken => {
            let cfg = config::load()?;
            let profile_name = config::active_profile_name(global, &cfg);
            require_profile(&cfg, &profile_name)?;

            let token = rpassword::prompt_password(format!(
                "Access token for '{profile_name}' (base64 of user:password): "
            ))?;
            if token.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "token cannot be empty".into(),
                });
            }

            wnc_config::store_token(&profile_name, &SecretString::from(token.trim().to_owned()))?;
            if !global.quiet {
                eprintln!("Token for profile '{profile_name}' stored in system keyring");
            }
            Ok(())
        }
    }
}
