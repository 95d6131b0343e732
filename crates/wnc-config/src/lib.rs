//! Shared configuration for WNC tools.
//!
//! TOML profiles, access-token resolution (env + keyring + plaintext),
//! and controller address parsing. The CLI layers its flag overrides on
//! top of this when it builds a `wnc_api::Client`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use wnc_api::Protocol;

/// Keyring service under which access tokens are stored.
pub const KEYRING_SERVICE: &str = "wnc";

/// Environment variable consulted for the access token when the profile
/// names none of its own.
pub const TOKEN_ENV: &str = "WNC_ACCESS_TOKEN";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "WNC_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no access token configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found in config")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error(transparent)]
    Client(#[from] wnc_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    wnc_api::transport::DEFAULT_TIMEOUT.as_secs()
}

/// A named controller profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Controller address: `host`, `host:port`, or `https://host[:port]`.
    pub controller: String,

    /// `https` (default) or `http`. A scheme in `controller` wins.
    pub protocol: Option<String>,

    /// Base64 `user:password` token (plaintext; prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the token.
    pub token_env: Option<String>,

    /// Path to a custom CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,

    /// Skip TLS verification.
    pub insecure: Option<bool>,

    /// Timeout override in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$WNC_CONFIG`, else platform conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "wnc", "wnc").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wnc");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from `path`, layered as defaults → TOML → `WNC_*` env.
///
/// Nested keys use a double underscore (`WNC_DEFAULTS__TIMEOUT=10`).
/// A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("WNC_").split("__"))
        .extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve an access token from the credential chain (no CLI flag step).
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Global env var
    if let Ok(val) = std::env::var(TOKEN_ENV) {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name)) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a profile's token in the system keyring.
pub fn store_token(profile_name: &str, token: &SecretString) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name))?;
    entry.set_password(token.expose_secret())?;
    Ok(())
}

fn keyring_user(profile_name: &str) -> String {
    format!("{profile_name}/token")
}

// ── Controller address ──────────────────────────────────────────────

/// Split a controller address into protocol and `host[:port]`.
///
/// A scheme prefix overrides `fallback`; a trailing `/` is dropped. Any
/// other path component is rejected.
pub fn parse_controller(
    controller: &str,
    fallback: Protocol,
) -> Result<(Protocol, String), ConfigError> {
    let controller = controller.trim();
    let (protocol, rest) = match controller.split_once("://") {
        Some((scheme, rest)) => (scheme.parse::<Protocol>()?, rest),
        None => (fallback, controller),
    };
    let host = rest.trim_end_matches('/');

    if host.is_empty() {
        return Err(ConfigError::Validation {
            field: "controller".into(),
            reason: "controller address is empty".into(),
        });
    }
    if host.contains('/') {
        return Err(ConfigError::Validation {
            field: "controller".into(),
            reason: format!("'{controller}' must not contain a path"),
        });
    }
    Ok((protocol, host.to_owned()))
}

/// Parse an optional protocol name, defaulting to HTTPS.
pub fn parse_protocol(protocol: Option<&str>) -> Result<Protocol, ConfigError> {
    Ok(protocol.map(str::parse::<Protocol>).transpose()?.unwrap_or_default())
}
