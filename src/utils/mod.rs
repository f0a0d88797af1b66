// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod log;
pub mod mount;
pub mod process;

pub use self::{log::*, mount::*, process::*};
