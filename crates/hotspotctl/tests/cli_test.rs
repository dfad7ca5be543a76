//! Integration tests for the `hotspotctl` binary.
//!
//! These cover argument parsing, help output, completions, the pure
//! preview path, and pre-flight validation -- all without a live
//! daemon.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `hotspotctl` binary with env isolation so
/// tests never read the user's real configuration.
fn hotspotctl() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hotspotctl");
    cmd.env("HOME", "/tmp/hotspotctl-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/hotspotctl-test-nonexistent")
        .env_remove("HOTSPOT_PROFILE")
        .env_remove("HOTSPOT_URL")
        .env_remove("HOTSPOT_OUTPUT")
        .env_remove("HOTSPOT_TIMEOUT")
        .env_remove("HOTSPOT_POLL_INTERVAL");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = hotspotctl().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    hotspotctl().arg("--help").assert().success().stdout(
        predicate::str::contains("start")
            .and(predicate::str::contains("stop"))
            .and(predicate::str::contains("watch"))
            .and(predicate::str::contains("preview"))
            .and(predicate::str::contains("interfaces")),
    );
}

#[test]
fn test_version_flag() {
    hotspotctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hotspotctl"));
}

// ── Preview (pure, no daemon) ───────────────────────────────────────

#[test]
fn test_preview_defaults() {
    hotspotctl()
        .args(["preview", "--ssid", "HomeNet", "--password", "secret123"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "create_ap wlan0 eth0 HomeNet secret123",
        ));
}

#[test]
fn test_preview_open_network() {
    hotspotctl()
        .args(["preview", "--ssid", "CoffeeShop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create_ap wlan0 eth0 CoffeeShop"));
}

#[test]
fn test_preview_five_ghz() {
    hotspotctl()
        .args([
            "preview",
            "--ssid",
            "Lab5G",
            "--password",
            "labpassword",
            "--band",
            "5",
            "--channel",
            "149",
            "--80211n",
            "--80211ac",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "create_ap --freq-band 5 -c 149 --ieee80211n --ieee80211ac wlan0 eth0 Lab5G labpassword",
        ));
}

#[test]
fn test_preview_rejects_unknown_band() {
    let output = hotspotctl()
        .args(["preview", "--ssid", "X", "--band", "6"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("band"));
}

#[test]
fn test_preview_rejects_channel_outside_band() {
    let output = hotspotctl()
        .args(["preview", "--ssid", "X", "--channel", "149"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("not a valid channel"));
}

// ── Pre-flight validation ───────────────────────────────────────────

#[test]
fn test_start_without_ssid_fails_before_any_network() {
    // Port 9 has nothing listening; validation must fire first.
    let output = hotspotctl()
        .args(["--url", "http://127.0.0.1:9", "start"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "expected validation exit");
    assert!(combined_output(&output).contains("ssid is required"));
}

#[test]
fn test_stop_refuses_to_prompt_non_interactively() {
    let output = hotspotctl()
        .args(["--url", "http://127.0.0.1:9", "stop"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));
}

// ── Misc ────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    hotspotctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hotspotctl"));
}

#[test]
fn test_config_path_prints_a_path() {
    hotspotctl()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
