//! Integration tests for the `streamwatch` CLI binary.
//!
//! These validate argument parsing, help output, shell completions,
//! validation errors, and a list round-trip against a mock backend —
//! no real video backend required.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `streamwatch` binary with env isolation.
///
/// Clears all `STREAMWATCH_*` env vars and points config directories at
/// a nonexistent path so tests never touch the user's real configuration.
fn streamwatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("streamwatch").unwrap();
    cmd.env("HOME", "/tmp/streamwatch-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/streamwatch-cli-test-nonexistent")
        .env_remove("STREAMWATCH_PROFILE")
        .env_remove("STREAMWATCH_SERVER")
        .env_remove("STREAMWATCH_OUTPUT")
        .env_remove("STREAMWATCH_TIMEOUT");
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
    let output = streamwatch_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    streamwatch_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("video-processing")
            .and(predicate::str::contains("streams"))
            .and(predicate::str::contains("alerts"))
            .and(predicate::str::contains("watch")),
    );
}

#[test]
fn test_version_flag() {
    streamwatch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("streamwatch"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    streamwatch_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    streamwatch_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Validation (no network involved) ────────────────────────────────

#[test]
fn test_add_requires_name_and_source() {
    streamwatch_cmd()
        .args(["streams", "add"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_add_rejects_unknown_model() {
    let output = streamwatch_cmd()
        .args([
            "streams",
            "add",
            "--name",
            "Cam1",
            "--source",
            "0",
            "--model",
            "face_recognition",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("asset_detection"),
        "error should list the known vocabulary:\n{text}"
    );
}

#[test]
fn test_attach_rejects_unknown_model() {
    streamwatch_cmd()
        .args(["models", "attach", "some-id", "bogus_model"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_remove_without_yes_fails_non_interactive() {
    let output = streamwatch_cmd()
        .args(["streams", "remove", "some-id"])
        .output()
        .unwrap();

    // stdin is not a terminal here, so the confirmation prompt must
    // turn into a usage error instead of hanging
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_server_url() {
    streamwatch_cmd()
        .args(["--server", "not a url", "streams", "list"])
        .assert()
        .failure()
        .code(2);
}

// ── Offline commands ────────────────────────────────────────────────

#[test]
fn test_models_list_is_offline() {
    streamwatch_cmd()
        .args(["models", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("asset_detection")
                .and(predicate::str::contains("defect_analysis")),
        );
}

#[test]
fn test_config_path_prints_a_path() {
    streamwatch_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Against a mock backend ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_streams_list_renders_backend_data() {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "streams": [{
                "id": "1f3a",
                "name": "Cam1",
                "source": "0",
                "source_type": "camera",
                "models": ["asset_detection"],
                "active": true,
                "frame_count": 120
            }]
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        streamwatch_cmd()
            .args(["--server", &uri, "streams", "list", "-o", "plain"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1f3a"), "got: {stdout}");
}
