//! Clap derive structures for the `wnc` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wnc -- query and manage Cisco IOS-XE wireless controllers
#[derive(Debug, Parser)]
#[command(
    name = "wnc",
    version,
    about = "Query and manage Cisco IOS-XE wireless controllers over RESTCONF",
    long_about = "A CLI for Cisco Catalyst 9800 / IOS-XE Wireless Network Controllers.\n\n\
        Talks to the controller's RESTCONF interface using the YANG models\n\
        published by Cisco for wireless operational and configuration data.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "WNC_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Controller address, `host[:port]` or `https://host[:port]` (overrides profile)
    #[arg(long, short = 'c', env = "WNC_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Base64 `user:password` access token (overrides profile and WNC_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// URL scheme when the controller address has none
    #[arg(long, env = "WNC_PROTOCOL", global = true)]
    pub protocol: Option<ProtocolArg>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "WNC_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "WNC_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (default: profile, then 60)
    #[arg(long, env = "WNC_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Shared Enums ─────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProtocolArg {
    Https,
    Http,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// WLAN profiles
    #[command(alias = "w")]
    Wlans(WlansArgs),

    /// Access points
    #[command(alias = "ap")]
    Aps(ApsArgs),

    /// Associated wireless clients
    #[command(alias = "cl")]
    Clients(ClientsArgs),

    /// Detected rogue access points
    Rogues(RoguesArgs),

    /// RFID tags heard by the controller
    Rfid(RfidArgs),

    /// Controller info and reload
    #[command(alias = "sys")]
    System(SystemArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── WLANs ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WlansArgs {
    #[command(subcommand)]
    pub command: WlansCommand,
}

#[derive(Debug, Subcommand)]
pub enum WlansCommand {
    /// List WLAN profiles
    #[command(alias = "ls")]
    List,

    /// Show one WLAN profile
    Get {
        /// WLAN profile name
        profile: String,
    },
}

// ── Access points ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ApsArgs {
    #[command(subcommand)]
    pub command: ApsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ApsCommand {
    /// List joined access points
    #[command(alias = "ls")]
    List,

    /// Show one access point by name
    Get {
        /// AP name
        name: String,
    },

    /// List policy/site/RF tag assignments
    Tags,

    /// Enable or disable an AP, or one of its radios
    #[command(group(ArgGroup::new("state").required(true).args(["enable", "disable"])))]
    AdminState {
        /// AP radio MAC address
        mac: String,

        /// Administratively enable
        #[arg(long)]
        enable: bool,

        /// Administratively disable
        #[arg(long)]
        disable: bool,

        /// Radio slot to change instead of the whole AP
        #[arg(long)]
        slot: Option<u8>,
    },

    /// Reboot an access point
    Reset {
        /// AP radio MAC address
        mac: String,
    },
}

// ── Clients ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    /// List associated clients
    #[command(alias = "ls")]
    List,

    /// Show one client by MAC address
    Get {
        /// Client MAC address
        mac: String,
    },
}

// ── Rogues ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoguesArgs {
    #[command(subcommand)]
    pub command: RoguesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoguesCommand {
    /// List detected rogue APs
    #[command(alias = "ls")]
    List,

    /// Show one rogue AP by BSSID
    Get {
        /// Rogue BSSID
        mac: String,
    },
}

// ── RFID ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RfidArgs {
    #[command(subcommand)]
    pub command: RfidCommand,
}

#[derive(Debug, Subcommand)]
pub enum RfidCommand {
    /// List RFID tags
    #[command(alias = "ls")]
    List,
}

// ── System ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Show controller management interface details
    Info,

    /// Reload the controller
    Reload {
        /// Reason recorded by the controller
        #[arg(long)]
        reason: Option<String>,

        /// Reload even with unsaved configuration
        #[arg(long)]
        force: bool,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles (default marked with *)
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to make the default
        name: String,
    },

    /// Store the active profile's access token in the system keyring
    SetToken,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
