// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Node-local mount management for network filesystem volumes.
//!
//! [`mount::FstabMounter`] runs `mount`/`umount` for a device and keeps a
//! matching entry in the system mount table so the mount survives reboots.

pub mod conf;
pub mod defs;
pub mod mount;
pub mod utils;

pub use mount::{FstabMounter, MountError, Mounter};
