use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use sysport_config::path::{enter_workdir, normalize_or_original, resolve_against};
use sysport_config::{log_cli_debug, log_cli_info, Config};
use sysport_core::{Catalog, Generator};

#[derive(Args, Debug)]
pub struct SyscallArgs {
    /// `go` binary used to resolve GOROOT
    #[arg(long, value_name = "BIN")]
    go: Option<String>,

    /// Read sources from this GOROOT instead of asking `go env GOROOT`
    #[arg(long, value_name = "DIR")]
    goroot: Option<PathBuf>,

    /// Output directory (default: ./syscall)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct UnixArgs {
    /// Source directory (default: ../unix)
    #[arg(short, long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Output directory (default: ../unix)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

pub fn run_syscall(config: &mut Config, args: SyscallArgs) -> Result<()> {
    if let Some(go) = args.go {
        config.toolchain.go = go;
    }
    if args.goroot.is_some() {
        config.toolchain.goroot = args.goroot;
    }
    if args.output.is_some() {
        config.syscall.output_dir = args.output;
    }
    run_catalog(config, Catalog::Syscall)
}

pub fn run_unix(config: &mut Config, args: UnixArgs) -> Result<()> {
    if args.source.is_some() {
        config.unix.source_dir = args.source;
    }
    if args.output.is_some() {
        config.unix.output_dir = args.output;
    }
    run_catalog(config, Catalog::Unix)
}

/// Enter the working directory, then regenerate one catalog.
fn run_catalog(config: &Config, catalog: Catalog) -> Result<()> {
    let workdir = config.workdir.clone().unwrap_or_else(|| PathBuf::from("."));
    let workdir = enter_workdir(&workdir)?;
    log_cli_debug!(
        "Entered working directory",
        dir = tracing::field::display(workdir.display())
    );

    let profile = config.profile(catalog);
    let source_dir = profile
        .source
        .resolve(|| config.resolve_goroot())
        .with_context(|| format!("Failed to locate {catalog} sources"))?;
    let source_dir = resolve_against(&workdir, source_dir);
    let output_dir = resolve_against(&workdir, &profile.output_dir);

    log_cli_info!(
        "Generating",
        catalog = tracing::field::display(catalog),
        source = tracing::field::display(normalize_or_original(&source_dir).display()),
        output = tracing::field::display(normalize_or_original(&output_dir).display()),
        files = profile.files.len()
    );

    let report = Generator::new(profile).run(&source_dir, &output_dir)?;

    log_cli_debug!("Generation complete", written = report.written.len());
    Ok(())
}
