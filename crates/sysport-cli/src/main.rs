//! # sysport CLI
//!
//! Derives the js/wasm `syscall` and `x/sys/unix` sources from their
//! linux/arm64 counterparts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sysport_config::logging::{init_logging, LogLevel};
use sysport_config::{log_cli_error, Config};
use sysport_core::Catalog;

mod catalog;
mod config;
mod generate;

/// sysport - regenerate js/wasm syscall bindings from linux/arm64 sources
#[derive(Parser)]
#[command(name = "sysport")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to switch into before generating (default: current)
    #[arg(short = 'C', long, value_name = "DIR")]
    workdir: Option<PathBuf>,

    /// Config file to use instead of the global and project ones
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate js/wasm copies of the standard library syscall package
    Syscall(generate::SyscallArgs),

    /// Generate js/wasm copies of golang.org/x/sys/unix
    Unix(generate::UnixArgs),

    /// Print the file list of a catalog with the derived output names
    Catalog {
        #[arg(value_name = "CATALOG")]
        catalog: Catalog,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(LogLevel::from_verbosity(cli.verbose));

    if let Err(err) = run(cli) {
        log_cli_error!(
            "sysport failed",
            error = tracing::field::display(format!("{err:#}"))
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    if cli.workdir.is_some() {
        config.workdir = cli.workdir;
    }

    match cli.command {
        Commands::Syscall(args) => generate::run_syscall(&mut config, args),
        Commands::Unix(args) => generate::run_unix(&mut config, args),
        Commands::Catalog { catalog } => catalog::run(&config, catalog),
        Commands::Config { command } => config::run(&config, command),
    }
}
