use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by a single directory scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The watched folder itself is gone; polling cannot continue
    #[error("watched folder no longer exists: {}", .0.display())]
    Vanished(PathBuf),

    /// A transient listing failure; polling may continue
    #[error("could not scan {}: {}", .0.display(), .1)]
    Listing(PathBuf, #[source] io::Error),
}

/// Detects newly arrived PNG files by diffing directory snapshots
///
/// Keeps one set of known filenames across polls. The set only ever grows:
/// files deleted from the folder stay known, so re-creating a file with the
/// same name is not reported again.
#[derive(Debug)]
pub struct SnapshotDiffer {
    dir: PathBuf,
    known: HashSet<String>,
    primed: bool,
}

impl SnapshotDiffer {
    pub fn new(dir: &Path) -> Self {
        SnapshotDiffer {
            dir: dir.to_path_buf(),
            known: HashSet::new(),
            primed: false,
        }
    }

    /// Scan once and report the next new PNG, if any
    ///
    /// The first call only records the current folder content. When several
    /// files arrive in the same cycle, the lexicographically smallest name is
    /// reported and the rest are absorbed into the known set unreported.
    pub fn poll(&mut self) -> Result<Option<PathBuf>, ScanError> {
        let current = self.list_pngs()?;

        if !self.primed {
            self.known = current;
            self.primed = true;
            return Ok(None);
        }

        let mut fresh: Vec<&String> = current.difference(&self.known).collect();
        fresh.sort();
        let detected = fresh.first().map(|name| self.dir.join(name));

        // The known set never shrinks; everything seen this cycle is absorbed
        self.known.extend(current);

        Ok(detected)
    }

    /// List the PNG files currently in the watched folder
    ///
    /// Matches the `.png` extension case-insensitively and counts regular
    /// files only. Unreadable entries are skipped.
    fn list_pngs(&self) -> Result<HashSet<String>, ScanError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| self.classify(e))?;

        let mut names = HashSet::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if name.to_lowercase().ends_with(".png") {
                names.insert(name);
            }
        }

        Ok(names)
    }

    fn classify(&self, err: io::Error) -> ScanError {
        if err.kind() == io::ErrorKind::NotFound {
            ScanError::Vanished(self.dir.clone())
        } else {
            ScanError::Listing(self.dir.clone(), err)
        }
    }
}
