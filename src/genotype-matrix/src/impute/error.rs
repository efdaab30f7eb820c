use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImputationError {
    #[error(
        "Genotype #{variant} is missing for every sample: no most frequent value can be imputed. \
        Use '--missing-column drop' or '--missing-column hom-ref' to bypass this check"
    )]
    AllMissing{variant: usize},
}
