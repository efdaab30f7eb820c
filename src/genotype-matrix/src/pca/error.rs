use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PcaError {
    #[error(
        "Cannot compute {components} principal components from {samples} sample(s) and {variants} variant(s). \
        At least {components} samples and {components} variants are required"
    )]
    TooFewDimensions{samples: usize, variants: usize, components: usize},

    #[error("Eigendecomposition yielded non-finite principal component scores")]
    NonFinite,
}
