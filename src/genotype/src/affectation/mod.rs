use std::{fmt::{self, Display, Formatter}, str::FromStr};

use thiserror::Error;

use crate::parse_integer;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Failed to parse affectation status '{0}' into an integer")]
pub struct ParseAffectationError(pub String);

/// Raw affectation status, as found within the sixth column of a PED file. (1: unaffected, 2: affected)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffectationStatus(pub i64);

impl AffectationStatus {
    /// Zero-based label of this status: `0` for controls, `1` for cases.
    /// Any other status (e.g. `0` or `-9` for 'unknown') is shifted by one as well.
    #[must_use]
    pub fn label(self) -> i64 {
        self.0.saturating_sub(1)
    }
}

impl FromStr for AffectationStatus {
    type Err = ParseAffectationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_integer(s)
            .map(Self)
            .ok_or_else(|| ParseAffectationError(s.to_string()))
    }
}

/// Case/control group of a sample label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affectation {
    Control,
    Case,
    Unknown(i64),
}

impl From<i64> for Affectation {
    fn from(label: i64) -> Self {
        match label {
            0     => Self::Control,
            1     => Self::Case,
            other => Self::Unknown(other),
        }
    }
}

impl Display for Affectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Control        => write!(f, "Controls"),
            Self::Case           => write!(f, "Cases"),
            Self::Unknown(label) => write!(f, "Unknown (label {label})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_to_label() -> Result<(), ParseAffectationError> {
        assert_eq!("1".parse::<AffectationStatus>()?.label(), 0);
        assert_eq!("2".parse::<AffectationStatus>()?.label(), 1);
        assert_eq!("-9".parse::<AffectationStatus>()?.label(), -10);
        assert_eq!(AffectationStatus(i64::MIN).label(), i64::MIN);
        assert_eq!("99999999999".parse::<AffectationStatus>()?.label(), 99_999_999_998);
        Ok(())
    }

    #[test]
    fn non_integer_status() {
        assert_eq!("X".parse::<AffectationStatus>(), Err(ParseAffectationError("X".to_string())));
        assert!("1.5".parse::<AffectationStatus>().is_err());
    }

    #[test]
    fn label_to_group() {
        assert_eq!(Affectation::from(0), Affectation::Control);
        assert_eq!(Affectation::from(1), Affectation::Case);
        assert_eq!(Affectation::from(-1), Affectation::Unknown(-1));
        assert_eq!(Affectation::Case.to_string(), "Cases");
    }
}
