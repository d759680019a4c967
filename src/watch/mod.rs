/// Downloads folder monitoring module
///
/// This module handles:
/// - Detecting newly arrived PNG files by diffing snapshots (differ.rs)
/// - The background polling stream feeding the UI (poller.rs)
/// - Locating the watched folder and the guarded source-file deletion

pub mod differ;
pub mod poller;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use differ::{ScanError, SnapshotDiffer};

/// How long the poller sleeps between directory scans
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// What the background watcher reports back to the UI loop
#[derive(Debug, Clone)]
pub enum Event {
    /// A new PNG appeared in the watched folder
    Detected(PathBuf),
    /// A transient scan failure; polling continues
    ScanFailed(String),
    /// The watched folder is gone; polling has stopped for good
    Stopped(String),
}

/// The fixed folder polled for freshly downloaded PNG files
pub fn downloads_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .expect("Could not determine the Downloads directory")
}

/// Delete a source file after an automatic load
///
/// Refuses to touch paths outside the watched folder, no matter what was
/// asked. Returns whether a deletion actually happened.
pub fn remove_from_watched(path: &Path, watched_dir: &Path) -> io::Result<bool> {
    if !path.starts_with(watched_dir) {
        println!(
            "⏭️  Skipping deletion for file outside {}: {}",
            watched_dir.display(),
            path.display()
        );
        return Ok(false);
    }

    fs::remove_file(path)?;
    Ok(true)
}
