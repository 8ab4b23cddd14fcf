use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence log lines for the rest of the process (CLI `--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    if QUIET.load(Ordering::Relaxed) {
        return true;
    }
    if env::var("FWLINK_QUIET").map(|v| v == "1" || v == "true").unwrap_or(false) {
        return true;
    }
    env::var("FWLINK_LOG")
        .map(|v| v.to_lowercase() == "quiet" || v.to_lowercase() == "error")
        .unwrap_or(false)
}

fn stamp(message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] {}", timestamp, message)
}

/// Timestamped log line on stderr. Stdout is reserved for progress lines.
pub fn log(message: &str) {
    if !is_quiet() {
        eprintln!("{}", stamp(message));
    }
}

/// Warnings and errors are always printed, even when quiet.
pub fn log_error(message: &str) {
    eprintln!("{}", stamp(message));
}
