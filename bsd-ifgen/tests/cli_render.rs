use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

const HOST_DOC: &str = r#"
[interfaces.em0]
description = "uplink"
addresses = ["10.0.0.1/24", "10.0.0.2/24", "2001:db8::1/64"]

[interfaces.em1]
addresses = ["dhcp", "rtsol"]
options = ["media autoselect"]

[interfaces.vlan5]
raw_values = ["vlan 5 vlandev em1", "inet 192.0.2.1 255.255.255.0 NONE", "up"]
"#;

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

fn write_doc(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write document");
    path
}

#[test]
fn render_single_interface_prints_bare_content() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(dir.path(), "host.toml", HOST_DOC);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--interface")
        .arg("em0")
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .success()
        .stdout(
            "description \"uplink\"\n\
             inet 10.0.0.1 255.255.255.0 NONE\n\
             inet alias 10.0.0.2 255.255.255.0 NONE\n\
             inet6 2001:db8::1 64\n",
        );
}

#[test]
fn render_old_release_keeps_both_autoconf_spellings() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(dir.path(), "host.toml", HOST_DOC);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--interface")
        .arg("em1")
        .arg("--kernel-version")
        .arg("6.1")
        .assert()
        .success()
        .stdout("dhcp media autoselect\ninet6 autoconf\ndhcp\nrtsol\n");
}

#[test]
fn render_all_interfaces_uses_headers() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(dir.path(), "host.toml", HOST_DOC);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .success()
        .stdout(predicate::str::contains("==> hostname.em0 <=="))
        .stdout(predicate::str::contains("==> hostname.em1 <=="))
        .stdout(predicate::str::contains(
            "==> hostname.vlan5 <==\nvlan 5 vlandev em1\ninet 192.0.2.1 255.255.255.0 NONE\nup",
        ));
}

#[test]
fn render_json_maps_file_names_to_content() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "host.json",
        r#"{"interfaces": {"athn0": {"raw_values": ["nwid lab wpakey secret", "dhcp"]}}}"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    let output = cmd
        .arg("render")
        .arg(path_as_str(&doc))
        .arg("--format")
        .arg("json")
        .arg("--kernel-version")
        .arg("7.4")
        .output()
        .expect("run");
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(
        parsed["hostname.athn0"],
        Value::String("nwid lab wpakey secret\ndhcp".to_string())
    );
}

#[test]
fn render_output_dir_writes_files_with_trailing_newline() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(dir.path(), "host.toml", HOST_DOC);
    let out = dir.path().join("etc");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--output-dir")
        .arg(path_as_str(&out))
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    let vlan = fs::read_to_string(out.join("hostname.vlan5")).expect("vlan5 written");
    assert_eq!(
        vlan,
        "vlan 5 vlandev em1\ninet 192.0.2.1 255.255.255.0 NONE\nup\n"
    );
    assert!(out.join("hostname.em0").exists());
    assert!(out.join("hostname.em1").exists());
}

#[test]
fn render_refuses_to_overwrite_input_document() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "hostname.em0",
        "[interfaces.em0]\naddresses = [\"dhcp\"]\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--output-dir")
        .arg(path_as_str(dir.path()))
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite input document"));
}

#[test]
fn refused_render_writes_no_output_files() {
    let dir = tempdir().expect("tempdir");
    let input_body = "[interfaces.em0]\naddresses = [\"dhcp\"]\n\n\
                      [interfaces.em1]\naddresses = [\"10.0.0.1/24\"]\n";
    let doc = write_doc(dir.path(), "hostname.em1", input_body);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--output-dir")
        .arg(path_as_str(dir.path()))
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .failure()
        .stdout(predicate::str::contains("wrote").not())
        .stderr(predicate::str::contains("interface 'em1'"));

    assert!(!dir.path().join("hostname.em0").exists());
    assert_eq!(fs::read_to_string(&doc).expect("input intact"), input_body);
}

#[test]
fn render_reports_invalid_address_with_interface_name() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "host.toml",
        "[interfaces.em0]\naddresses = [\"10.0.0.1/24\", \"uplink\"]\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interface 'em0'"))
        .stderr(predicate::str::contains("addr is 'uplink'"));
}

#[test]
fn render_rejects_unknown_configuration_item() {
    let dir = tempdir().expect("tempdir");
    let doc = write_doc(
        dir.path(),
        "host.toml",
        "[interfaces.em0]\naddresses = [\"dhcp\"]\nnetmask = \"255.0.0.0\"\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bsd-ifgen"));
    cmd.arg("render")
        .arg(path_as_str(&doc))
        .arg("--kernel-version")
        .arg("7.4")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown configuration item found: netmask",
        ));
}
