mod error;
pub use error::GenotypeError;

use std::fmt::{self, Display, Formatter};

/// Numeric value standing for a missing call, once genotypes are handed out as a plain `i8` matrix.
pub const MISSING_CALL: i8 = -1;

/// Zygosity of a sample at a given bi-allelic variant. The discriminant is the alternate allele count.
///
/// Missing calls are not a variant of this enum: they are carried around as `Option<GenotypeCall>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenotypeCall {
    HomRef = 0,
    Het    = 1,
    HomAlt = 2,
}

impl GenotypeCall {
    pub const ALL: [GenotypeCall; 3] = [Self::HomRef, Self::Het, Self::HomAlt];

    /// Decode a pair of PED allele tokens (1: reference, 2: alternate, 0: missing).
    ///
    /// # Errors
    /// - `InvalidAllelePair` if any token lies outside of [1, 2], unless both are `0`.
    pub fn from_alleles(a1: i64, a2: i64) -> Result<Option<Self>, GenotypeError> {
        match (a1, a2) {
            (0, 0)           => Ok(None),
            (1, 1)           => Ok(Some(Self::HomRef)),
            (2, 2)           => Ok(Some(Self::HomAlt)),
            (1, 2) | (2, 1)  => Ok(Some(Self::Het)),
            _                => Err(GenotypeError::InvalidAllelePair(a1, a2)),
        }
    }

    /// Alternate allele count of this call.
    #[must_use]
    pub fn dosage(self) -> u8 {
        self as u8
    }

    /// Convert an optional call into its `i8` representation, using [`MISSING_CALL`] for `None`.
    #[must_use]
    pub fn to_sentinel(call: Option<Self>) -> i8 {
        call.map_or(MISSING_CALL, i8::from)
    }

    /// Inverse of `GenotypeCall::to_sentinel()`
    ///
    /// # Errors
    /// - `InvalidValue` if `value` is not one of {-1, 0, 1, 2}
    pub fn from_sentinel(value: i8) -> Result<Option<Self>, GenotypeError> {
        match value {
            MISSING_CALL => Ok(None),
            other        => Self::try_from(other).map(Some),
        }
    }
}

impl From<GenotypeCall> for i8 {
    fn from(call: GenotypeCall) -> Self {
        call as i8
    }
}

impl From<GenotypeCall> for f64 {
    fn from(call: GenotypeCall) -> Self {
        f64::from(call.dosage())
    }
}

impl TryFrom<i8> for GenotypeCall {
    type Error = GenotypeError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::HomRef),
            1 => Ok(Self::Het),
            2 => Ok(Self::HomAlt),
            _ => Err(GenotypeError::InvalidValue(value)),
        }
    }
}

impl Display for GenotypeCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HomRef => "0/0",
            Self::Het    => "0/1",
            Self::HomAlt => "1/1",
        };
        Display::fmt(repr, f)
    }
}
