mod classifier;
mod classify;
mod tally;

pub use classifier::{LineClassifier, Source};
pub use classify::{BlockPolicy, Category, ScanState, classify};
pub use tally::{COLUMNS, ClassificationTally, Report};

#[cfg(test)]
mod test_fixtures;
