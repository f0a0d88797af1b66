// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Why an external command did not succeed.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Exit(ExitStatus),
}

/// Errors returned by [`Mounter`](super::Mounter) operations.
#[derive(Error, Debug)]
pub enum MountError {
    #[error("mount failed with error: {source}, output: {output}")]
    Mount {
        #[source]
        source: CommandError,
        output: String,
    },

    #[error("umount failed with error: {source}, output: {output}")]
    Unmount {
        #[source]
        source: CommandError,
        output: String,
    },

    #[error("error updating mount block {block:?} in {}: {source}", path.display())]
    Persistence {
        block: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MountError>;
