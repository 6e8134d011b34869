//! # sp-cli
//!
//! Terminal delivery layer: argument parsing, bootstrap and the interactive
//! application wizard.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod wizard;

use clap::Parser;

use crate::bootstrap::{resolve_config, wire_dependencies};
use crate::cli::Cli;
use sp_infra::fs::DirsAppDirs;

/// Entry point used by the `scholarship-portal` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirs::new().get_app_dirs()?;
    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&app_dirs.logs_dir()) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = resolve_config(cli.config.clone(), &app_dirs)?;
    let deps = wire_dependencies(&config, &app_dirs)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(commands::dispatch(cli.command, deps))
}
