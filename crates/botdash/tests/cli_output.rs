//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (errors only). Use -v/--verbose to enable logs.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::thread;

/// Run botdash in an isolated directory so no user or project config leaks in.
fn run_botdash(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_botdash"))
        .current_dir(dir)
        .env("HOME", dir)
        .args(args)
        .output()
        .expect("Failed to execute botdash")
}

/// Base URL of a local port with nothing listening on it.
fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Answer every request with `200 OK` and `body`. Returns the base URL.
fn serve_status(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

const EXAMPLE_STATUS: &str = r#"{"is_ready": true, "user": "botA", "guild_count": 12, "total_deployments": 5, "last_deployment": null}"#;

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_botdash(dir.path(), &["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["watch", "once", "health", "ping", "keepalive", "completions"] {
        assert!(
            stdout.contains(subcommand),
            "help should mention '{}': {}",
            subcommand,
            stdout
        );
    }
}

#[test]
fn test_once_renders_example_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = serve_status(EXAMPLE_STATUS);

    let output = run_botdash(dir.path(), &["once", "--url", &base_url]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "once failed. stderr: {}", stderr);
    assert!(stdout.contains("Online"));
    assert!(stdout.contains("botA"));
    assert!(stdout.contains("12"));
    assert!(stdout.contains("No deployments created yet"));

    // Quiet by default: no JSON log lines anywhere
    assert!(stderr.is_empty(), "stderr should be empty, got: {}", stderr);
    assert!(!stdout.contains(r#""event""#));
}

#[test]
fn test_once_json_prints_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = serve_status(EXAMPLE_STATUS);

    let output = run_botdash(dir.path(), &["once", "--json", "--url", &base_url]);
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["is_ready"], true);
    assert_eq!(snapshot["user"], "botA");
    assert_eq!(snapshot["guild_count"], 12);
}

#[test]
fn test_once_unreachable_prints_error_page_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = closed_base_url();

    let output = run_botdash(dir.path(), &["once", "--url", &base_url]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.contains("Connection Error"), "stdout: {}", stdout);
    assert!(stdout.contains("Unable to fetch"));
    assert!(stdout.contains("N/A"));
    assert!(stderr.contains("Could not fetch status"), "stderr: {}", stderr);
}

#[test]
fn test_once_json_unreachable_reports_error_code() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = closed_base_url();

    let output = run_botdash(dir.path(), &["once", "--json", "--url", &base_url]);
    assert!(!output.status.success());

    let failure: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(failure["error_code"], "FETCH_TRANSPORT_ERROR");
}

#[test]
fn test_verbose_logs_json_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = serve_status(EXAMPLE_STATUS);

    let output = run_botdash(dir.path(), &["-v", "once", "--url", &base_url]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("every log line should be JSON"))
        .collect();

    assert!(
        events
            .iter()
            .any(|e| e["fields"]["event"] == "core.poller.poll_succeeded"),
        "expected poll_succeeded event, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_botdash(dir.path(), &["ping", "--url", "not a url"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌"), "stderr: {}", stderr);
}

#[test]
fn test_completions_bash() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_botdash(dir.path(), &["completions", "bash"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("botdash"));
}

/// Parse the JSON log lines on stderr, skipping human-readable messages.
fn log_events(stderr: &str) -> Vec<serde_json::Value> {
    stderr
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

fn find_event<'a>(events: &'a [serde_json::Value], name: &str) -> Option<&'a serde_json::Value> {
    events.iter().find(|e| e["fields"]["event"] == name)
}

#[test]
fn test_failed_command_logs_app_error_when_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = closed_base_url();

    let output = run_botdash(dir.path(), &["once", "--url", &base_url]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let events = log_events(&stderr);
    let app_error = find_event(&events, "core.app.error_occurred")
        .unwrap_or_else(|| panic!("expected core.app.error_occurred, got: {}", stderr));
    assert_eq!(app_error["level"], "ERROR");
}

#[test]
fn test_user_errors_log_as_warnings() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_botdash(dir.path(), &["-v", "ping", "--url", "not a url"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let events = log_events(&stderr);
    let build_failed = find_event(&events, "cli.source.build_failed")
        .unwrap_or_else(|| panic!("expected cli.source.build_failed, got: {}", stderr));
    assert_eq!(build_failed["level"], "WARN");
    assert_eq!(build_failed["fields"]["error_code"], "FETCH_INVALID_URL");

    let base_url = closed_base_url();
    let output = run_botdash(dir.path(), &["-v", "once", "--url", &base_url]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let events = log_events(&stderr);
    let once_failed = find_event(&events, "cli.once_failed")
        .unwrap_or_else(|| panic!("expected cli.once_failed, got: {}", stderr));
    assert_eq!(once_failed["level"], "ERROR");
}
