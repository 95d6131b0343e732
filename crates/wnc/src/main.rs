mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing_subscriber::EnvFilter;

use wnc_api::Services;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli, &matches).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli, matches: &ArgMatches) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    match command {
        // Config commands don't need a controller connection
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        Command::Completions(args) => {
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "wnc", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let cfg = config::load()?;
            config::apply_defaults(&mut global, &cfg.defaults, matches)?;
            let client = config::build_client(&global, &cfg)?;
            tracing::debug!(host = client.host(), command = ?cmd, "dispatching command");
            let services = Services::new(Arc::new(client));
            commands::dispatch(cmd, &services, &global).await
        }
    }
}
