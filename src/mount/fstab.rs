// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{path::PathBuf, process::Command};

use super::{
    Mounter,
    block::mount_block,
    error::{CommandError, MountError, Result},
    table::MountTable,
};
use crate::{
    conf::config::Config,
    defs,
    utils::process::{Invocation, combined_output},
};

/// [`Mounter`] backed by the `mount`/`umount` commands and an fstab file.
///
/// A failed table edit after a successful (un)mount is reported but not
/// rolled back, so the node can be left mounted without a table entry
/// (or unmounted with a stale one).
#[derive(Debug)]
pub struct FstabMounter {
    table: MountTable,
    mount_cmd: Invocation,
    umount_cmd: Invocation,
}

impl FstabMounter {
    pub fn new<P: Into<PathBuf>>(table_path: P) -> Self {
        Self {
            table: MountTable::new(table_path),
            mount_cmd: Invocation::new(defs::MOUNT_BIN),
            umount_cmd: Invocation::new(defs::UMOUNT_BIN),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.fstab)
            .with_mount_command(config.mount_command.clone())
            .with_umount_command(config.umount_command.clone())
    }

    pub fn with_mount_command(mut self, invocation: Invocation) -> Self {
        self.mount_cmd = invocation;
        self
    }

    pub fn with_umount_command(mut self, invocation: Invocation) -> Self {
        self.umount_cmd = invocation;
        self
    }

    pub fn table(&self) -> &MountTable {
        &self.table
    }
}

fn execute(cmd: &mut Command) -> std::result::Result<(), (CommandError, String)> {
    tracing::debug!("Running {:?}", cmd);

    match combined_output(cmd) {
        Ok((status, _)) if status.success() => Ok(()),
        Ok((status, output)) => Err((CommandError::Exit(status), output)),
        Err(source) => Err((
            CommandError::Spawn {
                program: cmd.get_program().to_string_lossy().into_owned(),
                source,
            },
            String::new(),
        )),
    }
}

impl Mounter for FstabMounter {
    fn add_mount(&self, device: &str, path: &str, fs_type: &str) -> Result<()> {
        let block = mount_block(device, path, fs_type);

        let mut cmd = self.mount_cmd.command(["-t", fs_type, device, path]);
        execute(&mut cmd).map_err(|(source, output)| MountError::Mount { source, output })?;

        if let Err(source) = self.table.append(&block) {
            tracing::warn!(
                "{} is mounted on {} but could not be recorded in {}",
                device,
                path,
                self.table.path().display()
            );
            return Err(MountError::Persistence {
                block,
                path: self.table.path().to_path_buf(),
                source,
            });
        }

        tracing::info!("Mounted {} on {} ({})", device, path, fs_type);
        Ok(())
    }

    fn remove_mount(&self, device: &str, path: &str, fs_type: &str) -> Result<()> {
        let mut cmd = self.umount_cmd.command([device]);
        execute(&mut cmd).map_err(|(source, output)| MountError::Unmount { source, output })?;

        let block = mount_block(device, path, fs_type);

        match self.table.remove(&block) {
            Ok(true) => {}
            Ok(false) => tracing::debug!(
                "No entry for {} in {}, nothing to remove",
                device,
                self.table.path().display()
            ),
            Err(source) => {
                tracing::warn!(
                    "{} is unmounted but its entry could not be removed from {}",
                    device,
                    self.table.path().display()
                );
                return Err(MountError::Persistence {
                    block,
                    path: self.table.path().to_path_buf(),
                    source,
                });
            }
        }

        tracing::info!("Unmounted {} from {}", device, path);
        Ok(())
    }
}
