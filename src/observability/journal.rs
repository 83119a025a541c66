//! Size-rotated line journal for exported spans.
//!
//! When the journal grows past its limit it is renamed to
//! `<stem>.<timestamp>.<ext>` and a fresh file is started. Only the newest
//! backups are retained.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the journal is rotated (10 MB).
pub const MAX_JOURNAL_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated journals kept on disk.
pub const MAX_BACKUPS: usize = 3;

/// Append-only, size-rotated journal file.
pub struct Journal {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened on first write.
    file: Mutex<Option<File>>,
}

impl Journal {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_JOURNAL_BYTES, MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` and a newline, rotating first if the journal is full.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from opening, rotating or writing the file.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("journal lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes) {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::other("journal not open"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f");
        fs::rename(&self.path, self.backup_path(&timestamp.to_string()))?;
        self.prune_backups()
    }

    fn backup_path(&self, timestamp: &str) -> PathBuf {
        let stem = self.stem();
        let name = match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{stem}.{timestamp}.{ext}"),
            None => format!("{stem}.{timestamp}"),
        };
        self.path.with_file_name(name)
    }

    fn stem(&self) -> String {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("journal")
            .to_string()
    }

    /// Backups sorted oldest first; timestamps sort lexically.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = format!("{}.", self.stem());

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path != &self.path)
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in &backups[..excess] {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Journal")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
