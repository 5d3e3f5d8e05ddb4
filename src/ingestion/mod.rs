//! CSV ingestion and persistence, plus the observer-based logging surface.
//!
//! - [`csv`]: reading a CSV into a [`crate::types::DataSet`] and writing one back
//! - [`observability`]: the [`PipelineObserver`] trait and stderr/file/composite
//!   implementations used by [`crate::pipeline::DataIngestion`]

pub mod csv;
pub mod observability;

pub use observability::{
    CompositeObserver, DatasetStats, FileObserver, PipelineContext, PipelineObserver,
    PipelineSeverity, StdErrObserver,
};
