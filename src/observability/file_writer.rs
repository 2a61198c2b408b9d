//! Size-rotating line writer for trace files.
//!
//! When the active file grows past the size limit it becomes backup `.1`,
//! existing backups shift up by one (`.1` to `.2` and so on) and the oldest
//! beyond the retention limit is deleted.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default file size before rotation (5 MB).
const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Number of numbered backups kept after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write and kept open between writes.
/// An internal `Mutex` serializes writers.
///
/// # Backup Naming
///
/// For `zemoji-otlp.jsonl` the backups are `zemoji-otlp.jsonl.1` (newest)
/// through `zemoji-otlp.jsonl.3` (oldest).
pub struct FileWriter {
    /// Path to the active file.
    file_path: PathBuf,
    /// Size that triggers rotation before the next write.
    max_bytes: u64,
    /// Lazily opened file handle.
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path` with the default size limit.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_bytes(file_path, DEFAULT_MAX_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    pub const fn with_max_bytes(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, write or flush errors, or if the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate_files()?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    /// Path of the numbered backup `index` (1 is the newest).
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate_files(&self) -> io::Result<()> {
        let oldest = self.backup_path(MAX_BACKUP_FILES);
        remove_if_exists(&oldest)?;

        for index in (1..MAX_BACKUP_FILES).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
