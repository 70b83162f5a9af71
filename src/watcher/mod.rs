//! Live reload support for the pager.
//!
//! notify delivers events for the whole parent directory; the callback
//! forwards only those naming the watched file. A change is reported once
//! events have settled for the debounce period and the file's size or
//! modification time differs from the last reported state, so saves that
//! leave the file untouched do not trigger a reparse.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant, SystemTime};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Size and modification time of the watched file; `None` while missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    len: u64,
    modified: Option<SystemTime>,
}

impl FileStamp {
    fn read(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        Some(Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// Which paths in a notify event concern the watched file.
#[derive(Debug, Clone)]
struct EventFilter {
    dir: PathBuf,
    file_name: Option<OsString>,
}

impl EventFilter {
    fn new(target: &Path) -> Self {
        Self {
            dir: target
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            file_name: target.file_name().map(ToOwned::to_owned),
        }
    }

    /// Directory-level events count too; several backends report only those.
    fn matches(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| {
            path == &self.dir
                || self
                    .file_name
                    .as_deref()
                    .is_some_and(|name| path.file_name() == Some(name))
        })
    }
}

/// Watches one markup file and reports settled content changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    signals: Receiver<()>,
    path: PathBuf,
    debounce: Duration,
    last_signal: Option<Instant>,
    stamp: Option<FileStamp>,
}

impl FileWatcher {
    /// Start watching `path`.
    ///
    /// # Errors
    /// Returns an error if the platform watcher cannot be created or the
    /// parent directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        let path = path.as_ref();
        // OS events carry canonical paths.
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let filter = EventFilter::new(&path);
        let dir = filter.dir.clone();

        let (tx, signals) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if filter.matches(&event) => {
                let _ = tx.send(());
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "file watcher error"),
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %path.display(), "watching file");

        Ok(Self {
            _watcher: watcher,
            signals,
            stamp: FileStamp::read(&path),
            path,
            debounce,
            last_signal: None,
        })
    }

    /// True once events have settled and the file differs from the last report.
    pub fn take_change_ready(&mut self) -> bool {
        if self.signals.try_iter().count() > 0 {
            self.last_signal = Some(Instant::now());
        }
        let settled = self
            .last_signal
            .is_some_and(|at| at.elapsed() >= self.debounce);
        if !settled {
            return false;
        }
        self.last_signal = None;

        let stamp = FileStamp::read(&self.path);
        if stamp == self.stamp {
            crate::perf::log_event("watcher.unchanged", self.path.display().to_string());
            return false;
        }
        self.stamp = stamp;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::EventKind;
    use notify::event::EventAttributes;
    use tempfile::tempdir;

    fn event_for(path: PathBuf) -> Event {
        Event {
            kind: EventKind::Any,
            paths: vec![path],
            attrs: EventAttributes::new(),
        }
    }

    fn watched_file(contents: &str) -> (tempfile::TempDir, FileWatcher) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, contents).unwrap();
        let watcher = FileWatcher::new(&path, Duration::ZERO).unwrap();
        (dir, watcher)
    }

    #[test]
    fn test_filter_accepts_directory_and_file_events() {
        let dir = tempdir().unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        let filter = EventFilter::new(&canonical.join("notes.txt"));

        assert!(filter.matches(&event_for(canonical.clone())));
        assert!(filter.matches(&event_for(canonical.join("notes.txt"))));
        assert!(!filter.matches(&event_for(canonical.join("other.txt"))));
    }

    #[test]
    fn test_filter_for_bare_file_name_watches_current_dir() {
        let filter = EventFilter::new(Path::new("notes.txt"));
        assert_eq!(filter.dir, PathBuf::from("."));
    }

    #[test]
    fn test_settled_event_without_content_change_is_skipped() {
        let (_dir, mut watcher) = watched_file("*same*");
        watcher.last_signal = Some(Instant::now());
        assert!(!watcher.take_change_ready());
        assert!(watcher.last_signal.is_none());
    }

    #[test]
    fn test_settled_event_with_new_content_is_reported_once() {
        let (_dir, mut watcher) = watched_file("*short*");
        std::fs::write(&watcher.path, "**a longer line**").unwrap();

        watcher.last_signal = Some(Instant::now());
        assert!(watcher.take_change_ready());
        watcher.last_signal = Some(Instant::now());
        assert!(!watcher.take_change_ready(), "same state reported twice");
    }

    #[test]
    fn test_deleted_file_counts_as_change() {
        let (_dir, mut watcher) = watched_file("text");
        std::fs::remove_file(&watcher.path).unwrap();
        watcher.last_signal = Some(Instant::now());
        assert!(watcher.take_change_ready());
    }

    #[test]
    fn test_real_file_modification_detected() {
        let dir = tempdir().unwrap();
        let path = dir.path().canonicalize().unwrap().join("watched.txt");
        std::fs::write(&path, "**before**").unwrap();

        let mut watcher = FileWatcher::new(&path, Duration::from_millis(50)).unwrap();
        // Some backends need a moment before the watch is live.
        std::thread::sleep(Duration::from_millis(500));
        std::fs::write(&path, "***after the edit***").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut detected = false;
        while Instant::now() < deadline {
            if watcher.take_change_ready() {
                detected = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        assert!(detected, "change should be reported within 5 seconds");
    }
}
