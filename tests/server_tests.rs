//! Process-level tests for the `mic-server` binary

#![cfg(unix)]

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

#[test]
fn test_sigterm_shuts_down_gracefully() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_mic-server"))
        .env("PORT", "0")
        .env("MIC_DATA_DIR", dir.path())
        .env("RUST_LOG", "info")
        .env_remove("OPENAI_API_KEY")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // The shutdown handler is installed before the listener announces itself
    let stdout = child.stdout.take().unwrap();
    let mut lines = BufReader::new(stdout).lines();
    let started = lines
        .by_ref()
        .map_while(Result::ok)
        .any(|line| line.contains("server running"));
    assert!(started);

    let status = Command::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let exit = loop {
        if let Some(exit) = child.try_wait().unwrap() {
            break exit;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("server did not stop after SIGTERM");
        }
        thread::sleep(Duration::from_millis(50));
    };

    assert!(exit.success(), "server exited with {exit}");
    assert!(lines.map_while(Result::ok).any(|line| line.contains("shutting down")));
}
