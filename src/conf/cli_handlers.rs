// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    conf::config::Config,
    mount::{FstabMounter, MountEntry, Mounter},
    utils,
};

#[derive(Serialize)]
struct EntryStatusJson<'a> {
    #[serde(flatten)]
    entry: &'a MountEntry,
    mounted: bool,
}

pub fn handle_add(config: &Config, device: &str, path: &str, fs_type: &str) -> Result<()> {
    FstabMounter::from_config(config)
        .add_mount(device, path, fs_type)
        .with_context(|| format!("Failed to mount {} on {}", device, path))
}

pub fn handle_remove(config: &Config, device: &str, path: &str, fs_type: &str) -> Result<()> {
    FstabMounter::from_config(config)
        .remove_mount(device, path, fs_type)
        .with_context(|| format!("Failed to unmount {} from {}", device, path))
}

pub fn handle_list(config: &Config, json: bool) -> Result<()> {
    let mounter = FstabMounter::from_config(config);
    let entries = mounter
        .table()
        .entries()
        .with_context(|| format!("Failed to read {}", config.fstab.display()))?;

    let statuses: Vec<_> = entries
        .iter()
        .map(|entry| EntryStatusJson {
            entry,
            mounted: utils::is_mounted(&entry.path),
        })
        .collect();

    if json {
        let out =
            serde_json::to_string(&statuses).context("Failed to serialize entries to JSON")?;
        println!("{}", out);
        return Ok(());
    }

    if statuses.is_empty() {
        println!("No managed entries in {}", config.fstab.display());
    }

    for status in statuses {
        let state = if status.mounted { "mounted" } else { "not mounted" };
        println!("{} [{}]", status.entry, state);
    }

    Ok(())
}

pub fn handle_gen_config(output: &Path) -> Result<()> {
    Config::template()
        .save_to_file(output)
        .with_context(|| format!("Failed to save generated config to {}", output.display()))
}

pub fn handle_show_config(config: &Config) -> Result<()> {
    let json = serde_json::to_string(config).context("Failed to serialize config to JSON")?;

    println!("{}", json);

    Ok(())
}
