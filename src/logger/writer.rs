//! Request log writer
//!
//! Appends request lines to a fixed log file. The append is best-effort:
//! it runs in a spawned task, and a failure is reported to stdout without
//! touching the request that triggered it.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Global request log path, set once at startup
static REQUEST_LOG: OnceLock<PathBuf> = OnceLock::new();

/// Set the request log file path. Later calls keep the first value.
pub fn init(path: &str) {
    let _ = REQUEST_LOG.set(PathBuf::from(path));
}

/// Write a request line to stdout and queue the file append.
///
/// Before `init` has run, the line still reaches stdout.
pub fn record(line: String) {
    println!("{line}");

    let Some(path) = REQUEST_LOG.get() else {
        return;
    };

    let path = path.clone();
    tokio::spawn(async move {
        if let Err(e) = append_line(&path, &line).await {
            // A log failure must never fail the request; report and move on
            println!("Failed to append to log file '{}': {e}", path.display());
        }
    });
}

/// Append one newline-terminated line to the log file.
pub async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await?;

    Ok(())
}
