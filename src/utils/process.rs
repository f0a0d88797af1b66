// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    io,
    process::{Command, ExitStatus},
};

use serde::{Deserialize, Serialize};

/// A program plus the arguments placed before any per-call arguments,
/// e.g. `nsenter -t 1 -m -- mount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn command<I, S>(&self, extra: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).args(extra);
        cmd
    }
}

/// Runs `cmd` to completion and returns its status with stdout followed
/// by stderr.
pub fn combined_output(cmd: &mut Command) -> io::Result<(ExitStatus, String)> {
    let output = cmd.output()?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok((output.status, combined.trim_end().to_string()))
}
