// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

use super::block::MountEntry;

/// The on-disk mount table plus the lock that serializes edits to it.
///
/// The lock only covers writers sharing this instance. Other processes
/// editing the same file are not excluded.
#[derive(Debug)]
pub struct MountTable {
    path: PathBuf,
    lock: Mutex<()>,
}

impl MountTable {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // Guarded data is (), a panicked writer leaves nothing to repair.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `block` to the end of the table. The file must already exist.
    pub fn append(&self, block: &str) -> io::Result<()> {
        let _guard = self.lock();

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.sync_data()
    }

    /// Deletes every occurrence of `block` from the table.
    ///
    /// Returns `false` without touching the file when `block` is absent.
    pub fn remove(&self, block: &str) -> io::Result<bool> {
        let _guard = self.lock();

        let content = fs::read(&self.path)?;
        let Some(remaining) = strip_all(&content, block.as_bytes()) else {
            return Ok(false);
        };

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&remaining)?;
        file.sync_data()?;
        Ok(true)
    }

    /// Lists the entries in the table that have the managed block layout.
    pub fn entries(&self) -> io::Result<Vec<MountEntry>> {
        let content = {
            let _guard = self.lock();
            fs::read(&self.path)?
        };

        Ok(String::from_utf8_lossy(&content)
            .lines()
            .filter_map(MountEntry::parse_line)
            .collect())
    }
}

/// Returns `haystack` with every non-overlapping `needle` cut out, or `None`
/// when `needle` does not occur.
fn strip_all(haystack: &[u8], needle: &[u8]) -> Option<Vec<u8>> {
    if needle.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(haystack.len());
    let mut found = false;
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            found = true;
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }

    found.then_some(out)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::mount::block::mount_block;

    const HEADER: &str = "# <fs> <mountpoint> <type> <opts> <dump/pass>\nUUID=1234 / ext4 defaults 0 1\n";

    fn table_with(content: &str) -> (NamedTempFile, MountTable) {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        let table = MountTable::new(file.path());
        (file, table)
    }

    #[test]
    fn append_adds_block_at_end() {
        let (file, table) = table_with(HEADER);
        let block = mount_block("server:/export", "/mnt/data", "nfs");

        table.append(&block).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, format!("{HEADER}{block}"));
    }

    #[test]
    fn append_does_not_create_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fstab");
        let table = MountTable::new(&path);

        let err = table.append("\nx\t/y\tnfs\tdefaults\t0 2\n").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn remove_deletes_exact_block_only() {
        let keep = mount_block("other:/export", "/mnt/other", "nfs");
        let gone = mount_block("server:/export", "/mnt/data", "nfs");
        let (file, table) = table_with(&format!("{HEADER}{gone}{keep}"));

        assert!(table.remove(&gone).unwrap());

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, format!("{HEADER}{keep}"));
    }

    #[test]
    fn remove_absent_block_leaves_file_alone() {
        let (file, table) = table_with(HEADER);
        let before = fs::metadata(file.path()).unwrap().modified().unwrap();

        let removed = table
            .remove(&mount_block("/dev/x", "/mnt/x", "nfs"))
            .unwrap();

        assert!(!removed);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), HEADER);
        assert_eq!(fs::metadata(file.path()).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn remove_on_missing_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = MountTable::new(dir.path().join("fstab"));

        assert!(table.remove("\nblock\n").is_err());
    }

    #[test]
    fn remove_keeps_non_utf8_lines_intact() {
        let block = mount_block("server:/export", "/mnt/data", "nfs");
        let file = NamedTempFile::new().unwrap();
        let mut raw = b"# caf\xe9 latin1 comment\n".to_vec();
        raw.extend_from_slice(block.as_bytes());
        fs::write(file.path(), &raw).unwrap();
        let table = MountTable::new(file.path());

        assert!(table.remove(&block).unwrap());

        assert_eq!(fs::read(file.path()).unwrap(), b"# caf\xe9 latin1 comment\n");
    }

    #[test]
    fn remove_preserves_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let block = mount_block("server:/export", "/mnt/data", "nfs");
        let (file, table) = table_with(&format!("{HEADER}{block}"));
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644)).unwrap();

        assert!(table.remove(&block).unwrap());

        let mode = fs::metadata(file.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), HEADER);
    }

    #[test]
    fn strip_all_cuts_every_occurrence() {
        assert_eq!(strip_all(b"aXbXc", b"X"), Some(b"abc".to_vec()));
        assert_eq!(strip_all(b"abc", b"X"), None);
        assert_eq!(strip_all(b"abc", b""), None);
    }

    #[test]
    fn entries_tolerate_non_utf8_lines() {
        let file = NamedTempFile::new().unwrap();
        let mut raw = b"# caf\xe9\n".to_vec();
        raw.extend_from_slice(mount_block("server:/a", "/mnt/a", "nfs").as_bytes());
        fs::write(file.path(), &raw).unwrap();
        let table = MountTable::new(file.path());

        assert_eq!(
            table.entries().unwrap(),
            vec![MountEntry::new("server:/a", "/mnt/a", "nfs")]
        );
    }

    #[test]
    fn entries_skip_unmanaged_lines() {
        let content = format!(
            "{HEADER}{}{}",
            mount_block("server:/a", "/mnt/a", "nfs"),
            mount_block("server:/b", "/mnt/b", "nfs4"),
        );
        let (_file, table) = table_with(&content);

        let entries = table.entries().unwrap();

        assert_eq!(
            entries,
            vec![
                MountEntry::new("server:/a", "/mnt/a", "nfs"),
                MountEntry::new("server:/b", "/mnt/b", "nfs4"),
            ]
        );
    }
}
