//! `dataset-ingestion` is a small library implementing the first stage of an ML
//! pipeline: load a CSV dataset, persist an unmodified raw copy, and write
//! reproducible train/test splits under an artifacts directory.
//!
//! The primary entrypoint is [`pipeline::DataIngestion::run`], configured via
//! [`pipeline::IngestionConfig`]. The workflow:
//!
//! 1. resolves the input path and fails fast if no file exists there
//! 2. loads the CSV into an in-memory [`types::DataSet`]
//! 3. creates the artifacts directory (idempotent)
//! 4. writes `data.csv` (raw copy), `train.csv`, and `test.csv`, each with a
//!    header row and no synthetic index column
//! 5. returns the train/test output paths
//!
//! The split is deterministic: rows are shuffled with a seeded RNG (default seed
//! 42) and partitioned 80/20 by default, so the same input always produces
//! byte-identical outputs.
//!
//! ## Quick example: run the workflow
//!
//! ```no_run
//! use dataset_ingestion::pipeline::{DataIngestion, IngestionConfig};
//!
//! # fn main() -> Result<(), dataset_ingestion::PipelineError> {
//! let config = IngestionConfig::new("notebook/data/StudentsPerformance.csv", "artifacts");
//! let (train_path, test_path) = DataIngestion::new(config).run()?;
//! println!("train={} test={}", train_path.display(), test_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging via observers
//!
//! Logging is an explicitly-configured observer rather than a process-wide
//! logger. Attach a [`ingestion::StdErrObserver`], a [`ingestion::FileObserver`],
//! or both through a [`ingestion::CompositeObserver`]:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dataset_ingestion::ingestion::StdErrObserver;
//! use dataset_ingestion::pipeline::{DataIngestion, IngestionConfig};
//!
//! # fn main() -> Result<(), dataset_ingestion::PipelineError> {
//! let config = IngestionConfig {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..IngestionConfig::new("input.csv", "artifacts")
//! };
//! let _paths = DataIngestion::new(config).run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Split only
//!
//! ```rust
//! use dataset_ingestion::split::train_test_split;
//! use dataset_ingestion::types::DataSet;
//!
//! let ds = DataSet::new(
//!     vec!["id".to_string(), "score".to_string()],
//!     (0..10).map(|i| vec![i.to_string(), "0".to_string()]).collect(),
//! );
//! let (train, test) = train_test_split(&ds, 0.2, 42).unwrap();
//! assert_eq!(train.row_count(), 8);
//! assert_eq!(test.row_count(), 2);
//! ```
//!
//! ## Error annotation
//!
//! [`error::LocatedError`] wraps any error with the file and line of the wrapping
//! call site, for logging at process boundaries:
//!
//! ```rust
//! use dataset_ingestion::error::LocatedError;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
//! let located = LocatedError::wrap(io);
//! assert!(located.to_string().contains("line ["));
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: the ingestion workflow and its configuration
//! - [`ingestion`]: CSV read/write and the observer-based logging surface
//! - [`split`]: deterministic train/test partitioning
//! - [`types`]: the in-memory dataset type
//! - [`error`]: error types used across the crate

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod split;
pub mod types;

pub use error::{LocatedError, PipelineError, PipelineResult};
