//! mpris-remote - control a running media player from the shell.

use std::{path::PathBuf, process, sync::Arc};

use clap::Parser;
use mpris_remote::{
    cli::{
        CliError, CliService, CommandRegistry, HELP_COMMAND,
        formatting::{format_error, format_player_list},
    },
    config::RemoteConfig,
    services::{
        bus::{BusClient, DbusClient},
        mpris::MediaError,
    },
    tracing_config,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "mpris-remote")]
#[command(about = "Control a running MPRIS media player")]
#[command(after_help = "Run `mpris-remote help` for the list of player commands.")]
struct Cli {
    /// Player to control (short name or full bus name)
    #[arg(short, long)]
    player: Option<String>,

    /// Configuration file to read instead of the default one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Command to run; shows the current status when omitted
    command: Option<String>,

    /// Arguments for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RemoteConfig::load_from(path)?,
        None => RemoteConfig::load()?,
    };

    tracing_config::init_cli_mode(config.general.log_level.raised(cli.verbose))?;
    debug!(?config, "Loaded configuration");

    if cli.command.as_deref() == Some(HELP_COMMAND) {
        print!("{}", CommandRegistry::with_builtin_commands().help_text());
        return Ok(());
    }

    let player = cli.player.or(config.player.name);

    let bus: Arc<dyn BusClient> = match DbusClient::session().await {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("{}: {e}", format_error("Error"));
            process::exit(1);
        }
    };
    let cli_service = CliService::new(bus);

    let result = cli_service
        .execute_command(player.as_deref(), cli.command.as_deref(), &cli.args)
        .await;

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{}", output.trim_end());
            }
            Ok(())
        }
        Err(e) => {
            report_error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn report_error(error: &CliError) {
    eprintln!("{}: {error}", format_error("Error"));

    if let CliError::Media(
        MediaError::RequestedPlayerNotRunning { running, .. }
        | MediaError::AmbiguousPlayerSelection { running },
    ) = error
    {
        eprint!("Running players:\n{}", format_player_list(running));
    }
}
