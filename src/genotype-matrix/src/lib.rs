//! Imputation and dimensionality reduction of decoded PED genotypes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use genotype::Affectation;
use located_error::LocatedError;
use log::info;
use ndarray::{Array1, Array2};
use ped_io::PedDataset;

pub mod impute;
pub use impute::{impute, ImputationError, ImputedGenotypes, MissingColumnPolicy};

pub mod pca;
pub use pca::{Pca, PcaError, PcaFit};

/// Number of principal components retained for case/control diagnostics.
pub const N_COMPONENTS: usize = 2;

/// Samples projected onto their first two principal components.
///
/// `labels` and the rows of `coordinates` remain index-aligned with the samples of the input file.
#[derive(Debug, Clone)]
pub struct Projection {
    pub source                  : PathBuf,
    pub labels                  : Array1<i64>,
    pub coordinates             : Array2<f64>,
    pub explained_variance      : Array1<f64>,
    pub explained_variance_ratio: Array1<f64>,
    pub dropped_variants        : Vec<usize>,
}

impl Projection {
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    /// (PC1, PC2) coordinates of every sample belonging to the requested group.
    #[must_use]
    pub fn points(&self, group: Affectation) -> Vec<(f64, f64)> {
        self.labels.iter()
            .zip(self.coordinates.rows())
            .filter(|(label, _)| Affectation::from(**label) == group)
            .map(|(_, row)| (row[0], row[1]))
            .collect()
    }

    /// Number of samples which are neither cases nor controls.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.labels.iter()
            .filter(|label| matches!(Affectation::from(**label), Affectation::Unknown(_)))
            .count()
    }
}

/// Impute missing calls, and project samples onto their first two principal components.
///
/// # Errors
/// - `ImputationError::AllMissing` if a variant is missing for every sample, and `policy` is `Fail`
/// - `PcaError` if the imputed matrix cannot be decomposed into two components.
pub fn reduce(dataset: PedDataset, policy: MissingColumnPolicy) -> Result<Projection> {
    info!("Imputing missing genotypes...");
    let PedDataset{source, labels, genotypes, ..} = dataset;
    let imputed = impute(genotypes, policy)
        .with_loc(|| format!("While imputing genotypes of {}", source.display()))?;

    info!("Computing the first {N_COMPONENTS} principal components of {} samples x {} variants...",
        imputed.n_samples(), imputed.n_variants()
    );
    let PcaFit{scores, explained_variance, explained_variance_ratio} = Pca::new(N_COMPONENTS)
        .fit_transform(imputed.to_f64().view())
        .with_loc(|| format!("While computing principal components of {}", source.display()))?;

    info!("Explained variance ratio: PC1: {:.4} | PC2: {:.4}", explained_variance_ratio[0], explained_variance_ratio[1]);
    Ok(Projection {
        source,
        labels,
        coordinates: scores,
        explained_variance,
        explained_variance_ratio,
        dropped_variants: imputed.dropped_variants().to_vec(),
    })
}
