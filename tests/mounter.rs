// Copyright 2026 Fstab Mounter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, sync::Arc, thread};

use fstab_mounter::{
    FstabMounter, MountError, Mounter, conf::config::Config, utils::process::Invocation,
};

fn shared_mounter(fstab: &std::path::Path) -> Arc<dyn Mounter> {
    let config = Config {
        fstab: fstab.to_path_buf(),
        mount_command: Invocation::new("true"),
        umount_command: Invocation::new("true"),
        ..Config::default()
    };
    Arc::new(FstabMounter::from_config(&config))
}

#[test]
fn orchestrator_can_share_a_mounter_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let fstab = dir.path().join("fstab");
    fs::write(&fstab, "proc /proc proc defaults 0 0\n").unwrap();
    let mounter = shared_mounter(&fstab);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mounter = Arc::clone(&mounter);
            thread::spawn(move || {
                mounter.add_mount(&format!("nfs{i}:/export"), &format!("/mnt/pv{i}"), "nfs")
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    for i in (0..8).step_by(2) {
        mounter
            .remove_mount(&format!("nfs{i}:/export"), &format!("/mnt/pv{i}"), "nfs")
            .unwrap();
    }

    let content = fs::read_to_string(&fstab).unwrap();
    assert!(content.starts_with("proc /proc proc defaults 0 0\n"));
    for i in 0..8 {
        let block = format!("\nnfs{i}:/export\t/mnt/pv{i}\tnfs\tdefaults\t0 2\n");
        assert_eq!(content.contains(&block), i % 2 == 1, "block {i}");
    }
}

#[test]
fn error_messages_carry_command_output() {
    let dir = tempfile::tempdir().unwrap();
    let fstab = dir.path().join("fstab");
    fs::write(&fstab, "").unwrap();

    let mounter = FstabMounter::new(&fstab).with_mount_command(
        Invocation::new("sh").with_args(["-c", "echo 'No such device'; exit 19", "sh"]),
    );

    let err = mounter
        .add_mount("server:/export", "/mnt/data", "nfs")
        .unwrap_err();

    assert!(matches!(err, MountError::Mount { .. }));
    let message = err.to_string();
    assert!(message.starts_with("mount failed with error: exit status: 19"));
    assert!(message.ends_with("output: No such device"));
    assert_eq!(fs::read_to_string(&fstab).unwrap(), "");
}
