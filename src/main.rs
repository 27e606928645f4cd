use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikinote::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vault = wikinote::vault_path(cli.vault.as_deref());
    tracing::debug!(vault = %wikinote::util::display_path(&vault), "vault resolved");

    match run(cli.command, &vault, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, vault: &Path, json: bool) -> wikinote::Result<()> {
    match command {
        Command::Toggle { file, unembed } => cmd::toggle::run(vault, &file, unembed, json),
        Command::Create { selection, title } => cmd::create::run(vault, selection, title, json),
        Command::Check { name } => cmd::check::run(vault, &name, json),
        Command::Settings { value } => cmd::settings::run(vault, value, json),
        Command::Commands => cmd::commands::run(json),
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "wikinote=debug" } else { "wikinote=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

mod cmd {
    pub mod check;
    pub mod commands;
    pub mod create;
    pub mod settings;
    pub mod toggle;
}
