use std::sync::Arc;

use dataset_ingestion::error::LocatedError;
use dataset_ingestion::ingestion::StdErrObserver;
use dataset_ingestion::pipeline::{DataIngestion, IngestionConfig};

fn main() -> Result<(), LocatedError> {
    let config = IngestionConfig {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };

    // The observer logs each step and the failure itself; the error is then
    // re-raised out of main, annotated with this call site.
    let pipeline = DataIngestion::new(config);
    let (train_path, test_path) = pipeline.run().map_err(LocatedError::wrap)?;

    println!(
        "data ingestion completed: train={} test={}",
        train_path.display(),
        test_path.display()
    );
    Ok(())
}
