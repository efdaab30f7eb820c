use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GenotypeError {
    #[error("Improper genotype encoding: {0} {1}. Allele tokens must either be '0 0' (missing) or lie within [1, 2]")]
    InvalidAllelePair(i64, i64),

    #[error("Invalid genotype value: {0}. Expected one of {{-1, 0, 1, 2}}")]
    InvalidValue(i8),
}
