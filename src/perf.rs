//! Timing scopes and the pager event log, both carried on `tracing`.
//!
//! Scope timings go to the [`PERF_TARGET`] target, which the stderr filter
//! only lets through with `--perf`. Pager events go to [`EVENT_TARGET`],
//! which only the file layer from `--render-debug-log` records.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, Targets};
use tracing_subscriber::{Layer, Registry};

pub const PERF_TARGET: &str = "starmark::perf";
pub const EVENT_TARGET: &str = "starmark::event";

/// Measures the time until it is dropped.
#[derive(Debug)]
#[must_use = "a scope measures until it is dropped"]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(target: PERF_TARGET, "{}: {elapsed_ms:.2} ms", self.name);
    }
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Record a pager event such as a key message or a reload.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    tracing::trace!(target: EVENT_TARGET, "{name}: {}", detail.as_ref());
}

/// Filter for stderr logging: `RUST_LOG`, at least warnings, and scope
/// timings when `perf` is set.
pub fn stderr_filter(perf: bool) -> EnvFilter {
    let filter = EnvFilter::from_default_env().add_directive(Level::WARN.into());
    if !perf {
        return filter;
    }
    filter.add_directive(
        format!("{PERF_TARGET}=info")
            .parse()
            .expect("perf directive is valid"),
    )
}

/// A layer writing pager events to a new file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be created.
pub fn event_log_layer(path: &Path) -> std::io::Result<impl Layer<Registry> + Send + Sync> {
    let file = File::create(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .with_filter(Targets::new().with_target(EVENT_TARGET, Level::TRACE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_event_log_records_only_pager_events() {
        let log = NamedTempFile::new().unwrap();
        let subscriber = tracing_subscriber::registry().with(event_log_layer(log.path()).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            log_event("reload", "bytes=12");
            tracing::warn!("unrelated warning");
            drop(scope("print.parse"));
        });

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("reload: bytes=12"), "{content}");
        assert!(!content.contains("unrelated warning"));
        assert!(!content.contains("print.parse"));
    }

    #[test]
    fn test_stderr_filter_enables_timings_only_with_perf() {
        assert!(stderr_filter(true).to_string().contains(PERF_TARGET));
        assert!(!stderr_filter(false).to_string().contains(PERF_TARGET));
    }
}
