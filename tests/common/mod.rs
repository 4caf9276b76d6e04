//! Test helpers for integration tests.
//!
//! Provides a deterministic namespace and a scripted shell runner.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use vfsys::{ManualClock, Namespace, Router, Shell};

/// Instant every test clock starts at.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// Create an empty namespace driven by a manual clock.
pub fn test_namespace() -> (Namespace, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(epoch()));
    (Namespace::with_clock(Arc::clone(&clock)), clock)
}

/// Create a shell that shows timestamps in UTC and prints no prompt.
pub fn test_shell() -> (Shell, Arc<ManualClock>) {
    let (namespace, clock) = test_namespace();
    let router = Router::new(namespace).with_timezone("UTC");
    (Shell::new(router).with_prompt(""), clock)
}

/// Feed a script through a fresh shell and return everything it printed.
pub async fn run_script(lines: &[&str]) -> String {
    let (mut shell, _) = test_shell();
    let input = lines.join("\n") + "\n";
    let mut out: Vec<u8> = Vec::new();

    shell
        .run(input.as_bytes(), &mut out)
        .await
        .expect("in-memory I/O cannot fail");

    String::from_utf8(out).expect("shell output is UTF-8")
}
