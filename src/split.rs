//! Deterministic train/test partitioning of a [`DataSet`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{PipelineError, PipelineResult};
use crate::types::DataSet;

/// Default test-set proportion (20%).
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Default shuffle seed.
pub const DEFAULT_SEED: u64 = 42;

/// Shuffle the dataset's rows with a seeded RNG and split them into
/// `(train, test)` datasets.
///
/// - `test_fraction` must be strictly between 0 and 1; the test set gets
///   `ceil(rows * test_fraction)` rows and the train set the remainder.
/// - The same input and seed always produce the same partition (Fisher-Yates
///   shuffle over a [`StdRng`] seeded with `seed`).
/// - Row order within each subset follows the shuffle, not the original order.
/// - Both outputs carry the original header row; an empty dataset yields two
///   empty datasets.
pub fn train_test_split(
    dataset: &DataSet,
    test_fraction: f64,
    seed: u64,
) -> PipelineResult<(DataSet, DataSet)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(PipelineError::InvalidTestFraction {
            fraction: test_fraction,
        });
    }

    let mut rows = dataset.rows.clone();
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let total = rows.len();
    let test_len = ((total as f64) * test_fraction).ceil() as usize;
    let test_len = test_len.min(total);

    // split_off(n) leaves [0, n) in place and returns [n, total).
    let test_rows = rows.split_off(total - test_len);

    Ok((
        DataSet::new(dataset.headers.clone(), rows),
        DataSet::new(dataset.headers.clone(), test_rows),
    ))
}
