use std::path::{Path, PathBuf};

use genotype::{GenotypeCall, GenotypeError};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Samples x variants matrix of genotype calls, where `None` marks a missing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGenotypes(Array2<Option<GenotypeCall>>);

impl RawGenotypes {
    #[must_use]
    pub fn new(calls: Array2<Option<GenotypeCall>>) -> Self {
        Self(calls)
    }

    /// Build a matrix from its `i8` representation, where `-1` marks a missing call.
    ///
    /// # Errors
    /// - `InvalidValue` if any entry lies outside of {-1, 0, 1, 2}
    pub fn from_i8(values: &Array2<i8>) -> Result<Self, GenotypeError> {
        let mut calls = Array2::from_elem(values.dim(), None);
        for (call, value) in calls.iter_mut().zip(values.iter()) {
            *call = GenotypeCall::from_sentinel(*value)?;
        }
        Ok(Self(calls))
    }

    /// Numeric representation of this matrix, with `-1` standing for missing calls.
    #[must_use]
    pub fn to_i8(&self) -> Array2<i8> {
        self.0.mapv(GenotypeCall::to_sentinel)
    }

    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.0.nrows()
    }

    #[must_use]
    pub fn n_variants(&self) -> usize {
        self.0.ncols()
    }

    #[must_use]
    pub fn calls(&self) -> ArrayView2<'_, Option<GenotypeCall>> {
        self.0.view()
    }

    /// Calls of every sample at the given variant column.
    #[must_use]
    pub fn variant(&self, index: usize) -> ArrayView1<'_, Option<GenotypeCall>> {
        self.0.index_axis(Axis(1), index)
    }

    /// Total number of missing calls.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|call| call.is_none()).count()
    }

    #[must_use]
    pub fn into_inner(self) -> Array2<Option<GenotypeCall>> {
        self.0
    }
}

/// Decoded contents of a PED file. Every field is index-aligned on samples, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedDataset {
    pub source    : PathBuf,
    pub sample_ids: Vec<(String, String)>,
    pub labels    : Array1<i64>,
    pub genotypes : RawGenotypes,
}

impl PedDataset {
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn n_variants(&self) -> usize {
        self.genotypes.n_variants()
    }

    /// Number of samples carrying label `1`
    #[must_use]
    pub fn cases(&self) -> usize {
        self.labels.iter().filter(|label| **label == 1).count()
    }

    /// Number of samples carrying label `0`
    #[must_use]
    pub fn controls(&self) -> usize {
        self.labels.iter().filter(|label| **label == 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genotype::GenotypeCall::*;
    use ndarray::array;

    #[test]
    fn i8_conversion() -> Result<(), GenotypeError> {
        let values = array![[0, 2], [1, -1]];
        let raw = RawGenotypes::from_i8(&values)?;
        assert_eq!(raw.calls(), array![[Some(HomRef), Some(HomAlt)], [Some(Het), None]]);
        assert_eq!(raw.to_i8(), values);
        assert_eq!(raw.missing_count(), 1);
        assert_eq!(raw.variant(1).to_vec(), vec![Some(HomAlt), None]);
        Ok(())
    }

    #[test]
    fn invalid_i8_value() {
        assert_eq!(RawGenotypes::from_i8(&array![[0, 3]]), Err(GenotypeError::InvalidValue(3)));
    }

    #[test]
    fn dataset_counts() {
        let dataset = PedDataset {
            source    : PathBuf::from("cohort.ped"),
            sample_ids: vec![("F1".into(), "I1".into()), ("F2".into(), "I2".into()), ("F3".into(), "I3".into())],
            labels    : array![1, 0, -1],
            genotypes : RawGenotypes::new(Array2::from_elem((3, 4), Some(Het))),
        };
        assert_eq!((dataset.n_samples(), dataset.n_variants()), (3, 4));
        assert_eq!((dataset.cases(), dataset.controls()), (1, 1));
        assert_eq!(dataset.source(), Path::new("cohort.ped"));
    }
}
