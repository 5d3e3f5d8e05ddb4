use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::PipelineError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about a workflow run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// The input dataset path as configured (possibly relative).
    pub input_path: PathBuf,
    /// The artifacts directory outputs are written under.
    pub artifacts_dir: PathBuf,
}

/// Minimal stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    /// Number of ingested rows (excluding the header).
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

/// Observer interface for workflow progress and outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts. Nothing is installed
/// process-wide; the workflow reports only to the observer it was configured with.
pub trait PipelineObserver: Send + Sync {
    /// Called for informational progress lines (working directory, resolved path,
    /// dataset shape, written paths).
    fn on_info(&self, _message: &str) {}

    /// Called when the workflow succeeds.
    fn on_success(&self, _ctx: &PipelineContext, _stats: DatasetStats) {}

    /// Called when the workflow fails.
    fn on_failure(&self, _ctx: &PipelineContext, _severity: PipelineSeverity, _error: &PipelineError) {}

    /// Called when a failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_info(&self, message: &str) {
        for o in &self.observers {
            o.on_info(message);
        }
    }

    fn on_success(&self, ctx: &PipelineContext, stats: DatasetStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs workflow events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_info(&self, message: &str) {
        eprintln!("[ingest][info] {message}");
    }

    fn on_success(&self, ctx: &PipelineContext, stats: DatasetStats) {
        eprintln!(
            "[ingest][ok] input={} artifacts={} rows={} columns={}",
            ctx.input_path.display(),
            ctx.artifacts_dir.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        eprintln!(
            "[ingest][{:?}] input={} err={}",
            severity,
            ctx.input_path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        eprintln!(
            "[ALERT][ingest][{:?}] input={} err={}",
            severity,
            ctx.input_path.display(),
            error
        );
    }
}

/// Appends workflow events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for FileObserver {
    fn on_info(&self, message: &str) {
        self.append_line(&format!("{} info {message}", unix_ts()));
    }

    fn on_success(&self, ctx: &PipelineContext, stats: DatasetStats) {
        self.append_line(&format!(
            "{} ok input={} artifacts={} rows={} columns={}",
            unix_ts(),
            ctx.input_path.display(),
            ctx.artifacts_dir.display(),
            stats.rows,
            stats.columns
        ));
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        self.append_line(&format!(
            "{} fail severity={:?} input={} err={}",
            unix_ts(),
            severity,
            ctx.input_path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: PipelineSeverity, error: &PipelineError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} input={} err={}",
            unix_ts(),
            severity,
            ctx.input_path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
