//! CLI configuration: thin wrapper around `wnc_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--controller, --token, --protocol, --insecure, --timeout) and fills
//! unset display flags from the `[defaults]` table.

use std::path::Path;
use std::time::Duration;

use clap::ArgMatches;
use clap::ValueEnum;
use clap::parser::ValueSource;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use wnc_api::{Client, Protocol};
use wnc_config::{Defaults, TOKEN_ENV};

use crate::cli::{GlobalOpts, ProtocolArg};
use crate::error::CliError;

pub use wnc_config::{Config, Profile, config_path, load_config, save_config};

impl From<ProtocolArg> for Protocol {
    fn from(p: ProtocolArg) -> Self {
        match p {
            ProtocolArg::Https => Self::Https,
            ProtocolArg::Http => Self::Http,
        }
    }
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Load the config file, treating a malformed file as an error.
pub fn load() -> Result<Config, CliError> {
    Ok(load_config()?)
}

/// Apply `[defaults] output` and `color` where neither the flag nor its
/// environment variable was given.
pub fn apply_defaults(
    global: &mut GlobalOpts,
    defaults: &Defaults,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    if matches.value_source("output") == Some(ValueSource::DefaultValue) {
        global.output = parse_default("defaults.output", &defaults.output)?;
    }
    if matches.value_source("color") == Some(ValueSource::DefaultValue) {
        global.color = parse_default("defaults.color", &defaults.color)?;
    }
    Ok(())
}

fn parse_default<T: ValueEnum>(field: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

/// Build a `Client` from the loaded config, profile, and CLI overrides.
///
/// Without a matching profile, `--controller` plus `--token` (or
/// `WNC_ACCESS_TOKEN`) are enough.
pub fn build_client(global: &GlobalOpts, cfg: &Config) -> Result<Client, CliError> {
    let profile_name = active_profile_name(global, cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        debug!(profile = %profile_name, "using config profile");
        return resolve_profile(profile, &profile_name, &cfg.defaults, global);
    }

    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(cfg),
        });
    }

    let controller = global.controller.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let token = global
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .map(SecretString::from)
        .ok_or(CliError::NoCredentials {
            profile: profile_name,
        })?;

    connect(&Connection {
        controller,
        protocol: global.protocol.map(Protocol::from).unwrap_or_default(),
        token: &token,
        insecure: global.insecure || cfg.defaults.insecure,
        ca_cert: None,
        timeout: global.timeout.unwrap_or(cfg.defaults.timeout),
    })
}

/// Translate a `Profile` + global flags into a `Client`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<Client, CliError> {
    let controller = global.controller.as_deref().unwrap_or(&profile.controller);

    let protocol = match global.protocol {
        Some(p) => p.into(),
        None => wnc_config::parse_protocol(profile.protocol.as_deref())?,
    };

    let token = match global.token {
        Some(ref t) => SecretString::from(t.clone()),
        None => wnc_config::resolve_token(profile, profile_name)?,
    };

    connect(&Connection {
        controller,
        protocol,
        token: &token,
        insecure: global.insecure || profile.insecure.unwrap_or(defaults.insecure),
        ca_cert: profile.ca_cert.as_deref(),
        timeout: global
            .timeout
            .or(profile.timeout)
            .unwrap_or(defaults.timeout),
    })
}

pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        return "(none)".into();
    }
    cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
}

// ── Client construction ─────────────────────────────────────────────

struct Connection<'a> {
    controller: &'a str,
    protocol: Protocol,
    token: &'a SecretString,
    insecure: bool,
    ca_cert: Option<&'a Path>,
    timeout: u64,
}

fn connect(conn: &Connection<'_>) -> Result<Client, CliError> {
    let (protocol, host) = wnc_config::parse_controller(conn.controller, conn.protocol)?;
    if conn.timeout == 0 {
        return Err(CliError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    let mut builder = Client::builder(host, conn.token.expose_secret())
        .protocol(protocol)
        .timeout(Duration::from_secs(conn.timeout));
    // --insecure wins over a profile CA.
    match conn.ca_cert {
        Some(ca) if !conn.insecure => builder = builder.ca_cert(ca),
        _ => builder = builder.insecure_skip_verify(conn.insecure),
    }

    Ok(builder.build()?)
}
