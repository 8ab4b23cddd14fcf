//! Integration tests: run the fwlink binary against temp dirs and check exit codes and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use sha2::{Digest, Sha256};

const HELLO: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

fn fwlink() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fwlink"));
    cmd.env("NO_COLOR", "1").env_remove("FWLINK_QUIET").env_remove("FWLINK_LOG");
    cmd
}

fn firmware_dir() -> tempfile::TempDir {
    let td = tempfile::tempdir().expect("tmp");
    fs::create_dir(td.path().join("SHA256")).expect("mkdir SHA256");
    td
}

fn sha256_hex(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fs::read(path).unwrap());
    format!("{:x}", hasher.finalize())
}

#[test]
fn test_help() {
    let out = fwlink().arg("--help").output().unwrap();
    assert!(out.status.success(), "fwlink --help should succeed");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("SHA256"));
    assert!(stdout.contains("--dir"));
}

#[test]
fn test_version() {
    let out = fwlink().arg("--version").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_hello_in_current_dir() {
    let td = firmware_dir();
    fs::write(td.path().join("a.bin"), b"hello").unwrap();

    let out = fwlink().current_dir(td.path()).output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), format!("a.bin: {}\n", HELLO));
    assert_eq!(fs::read_to_string(td.path().join("a.bin.sha256")).unwrap(), HELLO);
    assert_eq!(
        fs::read_link(td.path().join("SHA256").join(HELLO)).unwrap(),
        PathBuf::from("../a.bin")
    );
}

#[test]
fn test_dir_flag_and_sanitized_sidecar() {
    let td = firmware_dir();
    let name = "fw-v1(2).bin";
    fs::write(td.path().join(name), vec![0x5Au8; 70_000]).unwrap();

    let out = fwlink().arg("-C").arg(td.path()).arg("-q").output().unwrap();
    assert!(out.status.success());

    let expected = sha256_hex(&td.path().join(name));
    assert_eq!(String::from_utf8_lossy(&out.stdout), format!("{}: {}\n", name, expected));
    assert_eq!(fs::read_to_string(td.path().join("fw_v1_2_.bin.sha256")).unwrap(), expected);
    assert!(out.stderr.is_empty(), "quiet run should not log");
}

#[test]
fn test_rerun_keeps_links() {
    let td = firmware_dir();
    fs::write(td.path().join("a.bin"), b"hello").unwrap();
    fs::write(td.path().join("same.bin"), b"hello").unwrap();

    for _ in 0..2 {
        let out = fwlink().arg("-C").arg(td.path()).output().unwrap();
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 2);
    }
    let links: Vec<_> = fs::read_dir(td.path().join("SHA256")).unwrap().flatten().collect();
    assert_eq!(links.len(), 1);
    assert_eq!(fs::read_to_string(td.path().join("same.bin.sha256")).unwrap(), HELLO);
}

#[test]
fn test_missing_link_dir_fails() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("a.bin"), b"hello").unwrap();

    let out = fwlink().arg("-C").arg(td.path()).output().unwrap();
    assert!(!out.status.success(), "missing SHA256/ should fail");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("SHA256"));
}

#[cfg(unix)]
#[test]
fn test_unopenable_file_fails() {
    let td = firmware_dir();
    std::os::unix::fs::symlink("gone", td.path().join("a.bin")).unwrap();
    fs::write(td.path().join("b.bin"), b"world").unwrap();

    let out = fwlink().arg("-C").arg(td.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("a.bin"));
    assert!(!td.path().join("b.bin.sha256").exists());
}

#[test]
fn test_no_firmware_is_success() {
    let td = firmware_dir();
    let out = fwlink().arg("-C").arg(td.path()).output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_json_report() {
    let td = firmware_dir();
    fs::write(td.path().join("a.bin"), b"hello").unwrap();

    let out = fwlink().args(["--json", "-q", "-C"]).arg(td.path()).output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert_eq!(v["status"], "ok");
    assert_eq!(v["files"][0]["name"], "a.bin");
    assert_eq!(v["files"][0]["digest"], HELLO);
    assert_eq!(v["files"][0]["sidecar"], "a.bin.sha256");
    assert_eq!(v["files"][0]["link"], "created");
}
