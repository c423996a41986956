mod commands;
mod error;
mod host;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{derive, register, Context};
use crate::error::{exit_code_for, report_error};
use tchap_displayname_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "tchap-displayname",
    version,
    about = "Derive display names from registration emails"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the display name derived from each address
    Derive(derive::DeriveArgs),
    /// Run the registration callback against UIA results
    Register(register::RegisterArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        command,
        ..
    } = cli;

    let source = config::locate(config_path).with_context(|| "locate config")?;
    debug!(source = ?source, "config source");
    let module_config = config::load(&source).with_context(|| "load config")?;
    debug!(
        extract_from_email = module_config.extract_from_email,
        "module config"
    );

    let ctx = Context {
        json,
        config: module_config,
    };

    match command {
        Command::Derive(args) => derive::derive(&ctx, args),
        Command::Register(args) => register::register(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
