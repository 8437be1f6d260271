//! Size-rotated append-only file.
//!
//! Trace batches are appended one JSON document per line. When the live file
//! grows past the policy limit it is shifted to `<name>.1`, older backups move
//! up by one, and anything past the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            backups: 3,
        }
    }
}

/// Line writer over a rotating file.
///
/// The handle is opened lazily on the first write and reopened after each
/// rotation. The mutex exists because span exporters must be `Send + Sync`.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error from rotating, opening or writing, or an
    /// `Other` error if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.current_len() > self.policy.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::other("trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn current_len(&self) -> u64 {
        fs::metadata(&self.path).map_or(0, |m| m.len())
    }

    /// Path of the `n`th backup, `<file name>.<n>`.
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{n}"));
        self.path.with_file_name(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.backups == 0 {
            return remove_if_present(&self.path);
        }

        remove_if_present(&self.backup_path(self.policy.backups))?;
        for n in (1..self.policy.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tiny(dir: &TempDir) -> RotatingFile {
        RotatingFile::new(
            dir.path().join("worklink-otlp.json"),
            RotationPolicy {
                max_bytes: 8,
                backups: 2,
            },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let file = RotatingFile::new(dir.path().join("t.json"), RotationPolicy::default());
        file.write_line("{\"a\":1}").unwrap();
        file.write_line("{\"b\":2}").unwrap();
        let contents = fs::read_to_string(dir.path().join("t.json")).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = TempDir::new().unwrap();
        let file = tiny(&dir);
        for i in 0..5 {
            file.write_line(&format!("line-number-{i}")).unwrap();
        }

        let live = fs::read_to_string(dir.path().join("worklink-otlp.json")).unwrap();
        assert_eq!(live, "line-number-4\n");
        let newest = fs::read_to_string(dir.path().join("worklink-otlp.json.1")).unwrap();
        assert_eq!(newest, "line-number-3\n");
        assert!(dir.path().join("worklink-otlp.json.2").exists());
        assert!(!dir.path().join("worklink-otlp.json.3").exists());
    }
}
