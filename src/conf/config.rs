// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{defs, utils::process::Invocation};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_fstab")]
    pub fstab: PathBuf,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_mount_command")]
    pub mount_command: Invocation,
    #[serde(default = "default_umount_command")]
    pub umount_command: Invocation,
}

fn default_fstab() -> PathBuf {
    PathBuf::from(defs::FSTAB_FILE)
}

fn default_mount_command() -> Invocation {
    Invocation::new(defs::MOUNT_BIN)
}

fn default_umount_command() -> Invocation {
    Invocation::new(defs::UMOUNT_BIN)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fstab: default_fstab(),
            log_file: None,
            verbose: false,
            mount_command: default_mount_command(),
            umount_command: default_umount_command(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).context("failed to read config file")?;

        let config: Config = toml::from_str(&content).context("failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Loads `explicit` if given. Otherwise loads the default config file,
    /// falling back to built-in defaults when that file is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_fallback(explicit, Path::new(defs::CONFIG_FILE))
    }

    fn load_with_fallback(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path, true),
            None => (fallback, false),
        };

        if !required && !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    /// Defaults plus the optional settings spelled out, for `gen-config`.
    pub fn template() -> Self {
        Self {
            log_file: Some(PathBuf::from(defs::DAEMON_LOG_FILE)),
            ..Self::default()
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        fs::write(path.as_ref(), content).context("failed to write config file")?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.mount_command.program.trim().is_empty() {
            bail!("mount_command.program must not be empty");
        }
        if self.umount_command.program.trim().is_empty() {
            bail!("umount_command.program must not be empty");
        }
        Ok(())
    }

    pub fn merge_with_cli(&mut self, fstab: Option<PathBuf>, verbose: bool) {
        if let Some(path) = fstab {
            self.fstab = path;
        }

        if verbose {
            self.verbose = true;
        }
    }
}
