// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use clap::Parser;
use fstab_mounter::{
    conf::{
        cli::{Cli, Commands},
        cli_handlers,
        config::Config,
    },
    utils,
};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::GenConfig { output } = &cli.command {
        return cli_handlers::handle_gen_config(output);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.fstab.clone(), cli.verbose);

    let _log_guard = utils::init_logging(config.verbose, config.log_file.as_deref())
        .context("Failed to initialize logging")?;

    tracing::debug!("Using mount table {}", config.fstab.display());

    match &cli.command {
        Commands::Add {
            device,
            path,
            fs_type,
        } => cli_handlers::handle_add(&config, device, path, fs_type)?,
        Commands::Remove {
            device,
            path,
            fs_type,
        } => cli_handlers::handle_remove(&config, device, path, fs_type)?,
        Commands::List { json } => cli_handlers::handle_list(&config, *json)?,
        Commands::ShowConfig => cli_handlers::handle_show_config(&config)?,
        Commands::GenConfig { .. } => {}
    }

    Ok(())
}
