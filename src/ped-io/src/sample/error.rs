use thiserror::Error;

use genotype::{GenotypeError, ParseAffectationError};

/// Row-level failures, raised without any knowledge of the file or row they stem from.
/// See `PedError` for their file-level counterpart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    #[error("Invalid number of columns: {0}")]
    ColumnCount(usize),

    #[error(transparent)]
    Affectation(#[from] ParseAffectationError),

    #[error("Non-integer encoded genotype: '{0}'")]
    AlleleToken(String),

    #[error("Invalid genotype #{variant}")]
    Encoding{variant: usize, #[source] source: GenotypeError},
}
