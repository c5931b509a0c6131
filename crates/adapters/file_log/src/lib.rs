//! # homectl-adapter-file-log
//!
//! Append-only activity log implementing the `ActivityLog` port.
//!
//! Each call appends one `[<timestamp>] <message>` line and flushes it
//! immediately. When the file cannot be opened the log degrades to a no-op:
//! the failure is reported once and every later record is dropped.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `homectl-app` and `homectl-domain`.

use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use homectl_app::ports::ActivityLog;
use homectl_domain::time::{Timestamp, format_ctime, now};

/// Activity log backed by a file opened in append mode.
pub struct FileActivityLog {
    path: PathBuf,
    file: Option<Mutex<File>>,
}

impl FileActivityLog {
    /// Open (or create) `path` for appending.
    ///
    /// Never fails: an unopenable path yields an inactive log.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(Mutex::new(file)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open activity log, records will be dropped");
                None
            }
        };
        Self { path, file }
    }

    /// Whether records are actually written.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_at(&self, at: Timestamp, message: &str) {
        let Some(file) = &self.file else {
            return;
        };
        let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
        let written = writeln!(file, "[{}] {message}", format_ctime(at)).and_then(|()| file.flush());
        if let Err(err) = written {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to append activity record");
        }
    }
}

impl ActivityLog for FileActivityLog {
    fn record(&self, message: &str) {
        self.write_at(now(), message);
    }
}
