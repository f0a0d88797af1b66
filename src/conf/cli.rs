// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::defs;

#[derive(Parser, Debug)]
#[command(
    name = "fstab-mounter",
    version,
    about = "Mount network volumes and record them in fstab"
)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    #[arg(short = 'f', long = "fstab")]
    pub fstab: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mount DEVICE on PATH and record it in the mount table
    Add {
        device: String,
        path: String,
        fs_type: String,
    },
    /// Unmount DEVICE and drop its mount table entry
    Remove {
        device: String,
        path: String,
        fs_type: String,
    },
    /// Show entries managed by this tool
    List {
        #[arg(long)]
        json: bool,
    },
    #[command(name = "gen-config")]
    GenConfig {
        #[arg(short = 'o', long = "output", default_value = defs::CONFIG_FILE)]
        output: PathBuf,
    },
    #[command(name = "show-config")]
    ShowConfig,
}
