//! Rotating line writer for trace export.
//!
//! Appends one line per export batch. When the file grows past its size limit
//! it is renamed with a UTC timestamp suffix and a fresh file is started; only
//! the newest backups are retained.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file exceeds 10 MB.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction cannot fail.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, write or flush errors, or if the lock is
    /// poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    /// Renames the current file to `<name>.<timestamp>` and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f");
        let backup = free_backup_path(&self.file_path, &stamp.to_string());

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup)?;
        }

        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let parent = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let prefix = backup_prefix(&self.file_path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically; newest first.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old in backups.iter().skip(self.max_backups) {
            if let Err(e) = fs::remove_file(old) {
                tracing::debug!(path = ?old, error = %e, "failed to remove old trace backup");
            }
        }

        Ok(())
    }
}

fn backup_prefix(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| format!("{name}."))
}

fn backup_path(path: &Path, stamp: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(stamp);
    path.with_file_name(name)
}

/// Like [`backup_path`], but appends `.1`, `.2`, ... while the name is taken,
/// so two rotations within one timestamp tick never overwrite each other.
fn free_backup_path(path: &Path, stamp: &str) -> PathBuf {
    let mut candidate = backup_path(path, stamp);
    let mut n = 0u32;
    while candidate.exists() {
        n += 1;
        candidate = backup_path(path, &format!("{stamp}.{n}"));
    }
    candidate
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count();

        assert_eq!(backups, 2);
        assert_eq!(fs::read_to_string(path).unwrap(), "line-5\n");
    }

    #[test]
    fn backup_names_keep_original_name() {
        let path = Path::new("/tmp/titlefetch-otlp.json");
        assert_eq!(
            backup_path(path, "20260101T000000.000000"),
            PathBuf::from("/tmp/titlefetch-otlp.json.20260101T000000.000000")
        );
    }

    #[test]
    fn taken_backup_name_gets_counter_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let stamp = "20260101T000000.000000";

        let first = free_backup_path(&path, stamp);
        assert_eq!(first, backup_path(&path, stamp));
        fs::write(&first, "old").unwrap();

        let second = free_backup_path(&path, stamp);
        assert_eq!(second, backup_path(&path, &format!("{stamp}.1")));
        fs::write(&second, "older").unwrap();

        let third = free_backup_path(&path, stamp);
        assert_eq!(third, backup_path(&path, &format!("{stamp}.2")));
        assert_eq!(fs::read_to_string(first).unwrap(), "old");
    }
}
