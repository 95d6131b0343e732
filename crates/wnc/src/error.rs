//! CLI error types with miette diagnostics.
//!
//! Maps `wnc_api::Error` and `wnc_config::ConfigError` into user-facing
//! errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use wnc_config::ConfigError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to controller")]
    #[diagnostic(
        code(wnc::connection_failed),
        help(
            "Check that the controller is reachable and RESTCONF is enabled\n\
             (`restconf` in the IOS-XE running config).\n\
             Try: wnc system info --insecure"
        )
    )]
    ConnectionFailed {
        #[source]
        source: wnc_api::Error,
    },

    #[error("TLS setup failed: {reason}")]
    #[diagnostic(
        code(wnc::tls_error),
        help(
            "Controllers often use a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(wnc::auth_failed),
        help(
            "The token is base64 of `username:password` for a privilege-15 user.\n\
             Store it with: wnc config set-token"
        )
    )]
    AuthFailed,

    #[error("Access denied by the controller")]
    #[diagnostic(
        code(wnc::forbidden),
        help("The account behind the token lacks the privilege for this operation.")
    )]
    Forbidden,

    #[error("No access token configured for profile '{profile}'")]
    #[diagnostic(
        code(wnc::no_credentials),
        help(
            "Store one with: wnc config set-token\n\
             Or set the WNC_ACCESS_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(wnc::not_found),
        help("Run: wnc {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(wnc::api_error))]
    ApiError { status: u16, message: String },

    #[error(transparent)]
    #[diagnostic(code(wnc::client))]
    Client(wnc_api::Error),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wnc::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(wnc::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No controller configured")]
    #[diagnostic(
        code(wnc::no_config),
        help(
            "Pass --controller or set WNC_CONTROLLER, or add a profile to\n\
             {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(wnc::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(wnc::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(wnc::timeout),
        help("Increase timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(wnc::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(wnc::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    pub fn not_found(resource_type: &str, identifier: &str, list_command: &str) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
            list_command: list_command.into(),
        }
    }
}

// ── wnc_api::Error → CliError ────────────────────────────────────────

impl From<wnc_api::Error> for CliError {
    fn from(err: wnc_api::Error) -> Self {
        use wnc_api::Error as E;

        if err.is_unauthorized() {
            return Self::AuthFailed;
        }
        if err.is_forbidden() {
            return Self::Forbidden;
        }
        if matches!(&err, E::Transport(e) if e.is_connect()) {
            return Self::ConnectionFailed { source: err };
        }

        match err {
            E::RequestTimeout { timeout_secs } => Self::Timeout {
                seconds: timeout_secs,
            },
            E::Tls(reason) => Self::TlsError { reason },
            E::Api(api) => Self::ApiError {
                status: api.status,
                message: api.message,
            },
            E::InvalidConfiguration(reason) => Self::Validation {
                field: "configuration".into(),
                reason,
            },
            E::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Client(other),
        }
    }
}

// ── ConfigError → CliError ───────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::UnknownProfile { name } => Self::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Client(e) => e.into(),
            other => Self::Config(other),
        }
    }
}
