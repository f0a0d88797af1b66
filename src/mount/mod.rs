// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod block;
pub mod error;
pub mod fstab;
pub mod table;

pub use self::{
    block::{MountEntry, mount_block},
    error::{CommandError, MountError, Result},
    fstab::FstabMounter,
    table::MountTable,
};

/// Mounts and unmounts volumes on this node, keeping the mount table in step.
///
/// Calls block until the external command and the table edit finish.
/// Retrying is left to the caller.
pub trait Mounter: Send + Sync {
    fn add_mount(&self, device: &str, path: &str, fs_type: &str) -> Result<()>;

    fn remove_mount(&self, device: &str, path: &str, fs_type: &str) -> Result<()>;
}
