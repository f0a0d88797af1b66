// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

// Mount table that records every mount this tool performs
pub const FSTAB_FILE: &str = "/etc/fstab";

// External commands
pub const MOUNT_BIN: &str = "mount";
pub const UMOUNT_BIN: &str = "umount";

// Options and dump/pass fields appended to every managed entry
pub const BLOCK_OPTIONS: &str = "defaults";
pub const BLOCK_DUMP_PASS: &str = "0 2";

pub const CONFIG_FILE: &str = "/etc/fstab-mounter/config.toml";
pub const DAEMON_LOG_FILE: &str = "/var/log/fstab-mounter.log";
