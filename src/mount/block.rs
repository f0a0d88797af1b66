// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fmt, sync::OnceLock};

use regex_lite::Regex;
use serde::Serialize;

use crate::defs;

static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Builds the text block recorded in the mount table for one mount.
///
/// The same block is searched for on removal, so it must be rebuilt
/// byte-for-byte from the same `(device, path, fs_type)`.
pub fn mount_block(device: &str, path: &str, fs_type: &str) -> String {
    format!(
        "\n{device}\t{path}\t{fs_type}\t{}\t{}\n",
        defs::BLOCK_OPTIONS,
        defs::BLOCK_DUMP_PASS
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountEntry {
    pub device: String,
    pub path: String,
    pub fs_type: String,
}

impl MountEntry {
    pub fn new(device: &str, path: &str, fs_type: &str) -> Self {
        Self {
            device: device.to_string(),
            path: path.to_string(),
            fs_type: fs_type.to_string(),
        }
    }

    pub fn block(&self) -> String {
        mount_block(&self.device, &self.path, &self.fs_type)
    }

    /// Parses a single table line written by [`mount_block`].
    ///
    /// Lines of any other shape return `None`; they belong to someone else.
    pub fn parse_line(line: &str) -> Option<Self> {
        let re = ENTRY_REGEX.get_or_init(|| {
            let pattern = format!(
                r"^([^\t\n]+)\t([^\t\n]+)\t([^\t\n]+)\t{}\t{}$",
                regex_lite::escape(defs::BLOCK_OPTIONS),
                regex_lite::escape(defs::BLOCK_DUMP_PASS)
            );
            Regex::new(&pattern).expect("Invalid Regex pattern")
        });
        let caps = re.captures(line)?;
        Some(Self::new(&caps[1], &caps[2], &caps[3]))
    }
}

impl fmt::Display for MountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} type {}", self.device, self.path, self.fs_type)
    }
}
