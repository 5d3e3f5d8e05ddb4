//! The ingestion workflow: resolve, load, persist raw, split, persist splits.
//!
//! Most callers should construct a [`DataIngestion`] from an [`IngestionConfig`] and
//! call [`DataIngestion::run`]. When an observer is configured, the run reports:
//!
//! - `on_info` for each progress step (working directory, resolved path, shape,
//!   written paths)
//! - `on_success` on success, with dataset shape stats
//! - `on_failure` on failure, with a computed severity
//! - `on_alert` on failure when the computed severity is >=
//!   [`IngestionConfig::alert_at_or_above`]

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{PipelineError, PipelineResult};
use crate::ingestion::csv::{read_csv_from_path, write_csv_to_path};
use crate::ingestion::observability::{
    DatasetStats, PipelineContext, PipelineObserver, PipelineSeverity,
};
use crate::split::{DEFAULT_SEED, DEFAULT_TEST_FRACTION, train_test_split};

/// Configuration for a [`DataIngestion`] run.
///
/// All paths are explicit [`PathBuf`] values built with portable joins; output
/// locations are fixed for the lifetime of the workflow instance.
#[derive(Clone)]
pub struct IngestionConfig {
    /// Path to the input CSV (absolute, or relative to the working directory).
    pub input_path: PathBuf,
    /// Directory the three output files are written under; created if missing.
    pub artifacts_dir: PathBuf,
    /// Destination of the unmodified raw copy.
    pub raw_data_path: PathBuf,
    /// Destination of the training subset.
    pub train_data_path: PathBuf,
    /// Destination of the test subset.
    pub test_data_path: PathBuf,
    /// Proportion of rows assigned to the test set (default 0.2).
    pub test_fraction: f64,
    /// Shuffle seed (default 42) for reproducible splits.
    pub seed: u64,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PipelineSeverity,
}

impl IngestionConfig {
    /// Create a config for `input_path`, deriving `data.csv`, `train.csv`, and
    /// `test.csv` locations under `artifacts_dir`.
    pub fn new(input_path: impl Into<PathBuf>, artifacts_dir: impl Into<PathBuf>) -> Self {
        let artifacts_dir = artifacts_dir.into();
        Self {
            input_path: input_path.into(),
            raw_data_path: artifacts_dir.join("data.csv"),
            train_data_path: artifacts_dir.join("train.csv"),
            test_data_path: artifacts_dir.join("test.csv"),
            artifacts_dir,
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SEED,
            observer: None,
            alert_at_or_above: PipelineSeverity::Critical,
        }
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        let input_path: PathBuf = ["notebook", "data", "StudentsPerformance.csv"]
            .iter()
            .collect();
        Self::new(input_path, "artifacts")
    }
}

impl fmt::Debug for IngestionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionConfig")
            .field("input_path", &self.input_path)
            .field("artifacts_dir", &self.artifacts_dir)
            .field("raw_data_path", &self.raw_data_path)
            .field("train_data_path", &self.train_data_path)
            .field("test_data_path", &self.test_data_path)
            .field("test_fraction", &self.test_fraction)
            .field("seed", &self.seed)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// The data-ingestion workflow.
///
/// # Examples
///
/// ```no_run
/// use dataset_ingestion::pipeline::{DataIngestion, IngestionConfig};
///
/// # fn main() -> Result<(), dataset_ingestion::PipelineError> {
/// let config = IngestionConfig::new("notebook/data/StudentsPerformance.csv", "artifacts");
/// let (train_path, test_path) = DataIngestion::new(config).run()?;
/// println!("train={} test={}", train_path.display(), test_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    /// Create a workflow from a config.
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    /// The workflow's configuration.
    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Run the workflow end to end and return `(train_path, test_path)`.
    ///
    /// Steps:
    ///
    /// 1. Resolve the input path to an absolute path; fail fast with
    ///    [`PipelineError::MissingInput`] if no file exists there.
    /// 2. Load the CSV into a [`crate::types::DataSet`].
    /// 3. Create the artifacts directory (idempotent).
    /// 4. Write the unmodified raw copy.
    /// 5. Split into train/test with the configured fraction and seed.
    /// 6. Write both subsets.
    ///
    /// Failures are reported once through the configured observer and returned
    /// unchanged. No partial-state cleanup: files written before the failure
    /// remain on disk, and a retry re-runs every step from scratch.
    pub fn run(&self) -> PipelineResult<(PathBuf, PathBuf)> {
        let ctx = PipelineContext {
            input_path: self.config.input_path.clone(),
            artifacts_dir: self.config.artifacts_dir.clone(),
        };

        let result = self.run_inner();

        if let Some(obs) = self.config.observer.as_ref() {
            match &result {
                Ok((_, stats)) => obs.on_success(&ctx, *stats),
                Err(e) => {
                    let sev = severity_for_error(e);
                    obs.on_failure(&ctx, sev, e);
                    if sev >= self.config.alert_at_or_above {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }

        result.map(|(paths, _)| paths)
    }

    fn run_inner(&self) -> PipelineResult<((PathBuf, PathBuf), DatasetStats)> {
        let cfg = &self.config;

        if let Ok(cwd) = std::env::current_dir() {
            self.info(&format!("current working directory: {}", cwd.display()));
        }

        let resolved = resolve_input(&cfg.input_path)?;
        self.info(&format!("dataset path resolved to: {}", resolved.display()));

        let dataset = read_csv_from_path(&resolved)?;
        let (rows, columns) = dataset.shape();
        self.info(&format!("dataset read with shape: ({rows}, {columns})"));

        fs::create_dir_all(&cfg.artifacts_dir)?;
        self.info(&format!(
            "artifacts directory ready: {}",
            cfg.artifacts_dir.display()
        ));

        write_csv_to_path(&dataset, &cfg.raw_data_path)?;
        self.info(&format!("raw data saved at: {}", cfg.raw_data_path.display()));

        let (train_set, test_set) = train_test_split(&dataset, cfg.test_fraction, cfg.seed)?;

        write_csv_to_path(&train_set, &cfg.train_data_path)?;
        write_csv_to_path(&test_set, &cfg.test_data_path)?;
        self.info(&format!(
            "train data saved at: {} ({} rows)",
            cfg.train_data_path.display(),
            train_set.row_count()
        ));
        self.info(&format!(
            "test data saved at: {} ({} rows)",
            cfg.test_data_path.display(),
            test_set.row_count()
        ));

        Ok((
            (cfg.train_data_path.clone(), cfg.test_data_path.clone()),
            DatasetStats { rows, columns },
        ))
    }

    fn info(&self, message: &str) {
        if let Some(obs) = self.config.observer.as_ref() {
            obs.on_info(message);
        }
    }
}

/// Resolve a configured input path to an absolute path and validate that a file
/// exists there. No read is attempted here, so a missing input produces no
/// filesystem side effects.
fn resolve_input(path: &Path) -> PipelineResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if !absolute.is_file() {
        return Err(PipelineError::MissingInput { path: absolute });
    }
    Ok(absolute)
}

fn severity_for_error(e: &PipelineError) -> PipelineSeverity {
    match e {
        PipelineError::Io(_) => PipelineSeverity::Critical,
        PipelineError::MissingInput { .. } => PipelineSeverity::Critical,
        PipelineError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => PipelineSeverity::Critical,
            _ => PipelineSeverity::Error,
        },
        PipelineError::InvalidTestFraction { .. } => PipelineSeverity::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_derives_output_paths_under_artifacts_dir() {
        let cfg = IngestionConfig::new("input.csv", "artifacts");
        assert_eq!(cfg.raw_data_path, Path::new("artifacts").join("data.csv"));
        assert_eq!(cfg.train_data_path, Path::new("artifacts").join("train.csv"));
        assert_eq!(cfg.test_data_path, Path::new("artifacts").join("test.csv"));
    }

    #[test]
    fn default_config_uses_portable_paths_and_fixed_split() {
        let cfg = IngestionConfig::default();
        let expected: PathBuf = ["notebook", "data", "StudentsPerformance.csv"]
            .iter()
            .collect();
        assert_eq!(cfg.input_path, expected);
        assert_eq!(cfg.test_fraction, 0.2);
        assert_eq!(cfg.seed, 42);
        assert!(cfg.observer.is_none());
    }

    #[test]
    fn missing_input_is_critical() {
        let err = PipelineError::MissingInput {
            path: PathBuf::from("nope.csv"),
        };
        assert_eq!(severity_for_error(&err), PipelineSeverity::Critical);

        let err = PipelineError::InvalidTestFraction { fraction: 2.0 };
        assert_eq!(severity_for_error(&err), PipelineSeverity::Error);
    }
}
