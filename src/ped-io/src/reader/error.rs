use std::path::PathBuf;

use thiserror::Error;

use crate::SampleError;

/// Broad category of a `PedError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedErrorKind {
    /// Input file is missing or unreadable.
    Path,
    /// A row does not match the column layout fixed by the first row.
    Shape,
    /// An allele pair lies outside of {1,2}x{1,2} and is not the '0 0' missing pair.
    Encoding,
    /// A numeric field is not an integer.
    Parse,
}

#[derive(Error, Debug)]
pub enum PedError {
    #[error("{} does not exist", path.display())]
    MissingFile{path: PathBuf},

    #[error("Failed to open {}", path.display())]
    OpenFile{path: PathBuf, #[source] source: std::io::Error},

    #[error("Encountered IO error when reading row {row} of {}", path.display())]
    ReadLine{path: PathBuf, row: usize, #[source] source: std::io::Error},

    #[error("{} is empty", path.display())]
    EmptyFile{path: PathBuf},

    #[error("{} has an incorrect number of columns in row {row}: {fields}", path.display())]
    ColumnCount{path: PathBuf, row: usize, fields: usize},

    #[error("{} has a non-integer affectation status in row {row}: '{value}'", path.display())]
    Affectation{path: PathBuf, row: usize, value: String},

    #[error("{} has a non-integer encoded genotype in row {row}: '{value}'", path.display())]
    AlleleToken{path: PathBuf, row: usize, value: String},

    #[error("{} has an improper genotype encoding at genotype #{variant}: {a1} {a2} in row {row}", path.display())]
    Encoding{path: PathBuf, row: usize, variant: usize, a1: i64, a2: i64},
}

impl PedError {
    #[must_use]
    pub fn kind(&self) -> PedErrorKind {
        match self {
            Self::MissingFile{..} | Self::OpenFile{..} | Self::ReadLine{..} => PedErrorKind::Path,
            Self::EmptyFile{..}   | Self::ColumnCount{..}                   => PedErrorKind::Shape,
            Self::Encoding{..}                                              => PedErrorKind::Encoding,
            Self::Affectation{..} | Self::AlleleToken{..}                   => PedErrorKind::Parse,
        }
    }

    /// 1-based row at which this error was raised, if it is tied to a given row.
    #[must_use]
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::ReadLine{row, ..}
            | Self::ColumnCount{row, ..}
            | Self::Affectation{row, ..}
            | Self::AlleleToken{row, ..}
            | Self::Encoding{row, ..} => Some(*row),
            _                         => None,
        }
    }

    /// Attach file and row information to a row-level `SampleError`.
    pub(crate) fn from_sample(err: SampleError, path: PathBuf, row: usize) -> Self {
        use genotype::GenotypeError::{InvalidAllelePair, InvalidValue};
        match err {
            SampleError::ColumnCount(fields)  => Self::ColumnCount{path, row, fields},
            SampleError::Affectation(source)  => Self::Affectation{path, row, value: source.0},
            SampleError::AlleleToken(value)   => Self::AlleleToken{path, row, value},
            SampleError::Encoding{variant, source} => {
                let (a1, a2) = match source {
                    InvalidAllelePair(a1, a2) => (a1, a2),
                    InvalidValue(value)       => (i64::from(value), i64::from(value)),
                };
                Self::Encoding{path, row, variant, a1, a2}
            },
        }
    }
}
