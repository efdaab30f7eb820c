pub mod call;
pub use call::{GenotypeCall, GenotypeError, MISSING_CALL};

pub mod affectation;
pub use affectation::{Affectation, AffectationStatus, ParseAffectationError};

pub mod token;
pub use token::parse_integer;
