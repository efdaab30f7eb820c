mod error;
pub use error::ImputationError;

use genotype::GenotypeCall;
use log::{debug, warn};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use ped_io::RawGenotypes;

/// What to do with a variant column that does not carry a single observed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingColumnPolicy {
    /// Return an `ImputationError::AllMissing`
    #[default]
    Fail,
    /// Remove the column from the imputed matrix.
    Drop,
    /// Fill the column with homozygous reference calls.
    HomRef,
}

/// Samples x variants matrix of genotype calls, free of any missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImputedGenotypes {
    calls   : Array2<GenotypeCall>,
    dropped : Vec<usize>,
    imputed : usize,
}

impl ImputedGenotypes {
    #[must_use]
    pub fn calls(&self) -> ArrayView2<'_, GenotypeCall> {
        self.calls.view()
    }

    /// Alternate allele counts, as a floating point matrix.
    #[must_use]
    pub fn to_f64(&self) -> Array2<f64> {
        self.calls.mapv(f64::from)
    }

    /// 0-based indices of the raw variant columns that were removed (see `MissingColumnPolicy::Drop`)
    #[must_use]
    pub fn dropped_variants(&self) -> &[usize] {
        &self.dropped
    }

    /// Number of missing calls that were replaced.
    #[must_use]
    pub fn imputed_count(&self) -> usize {
        self.imputed
    }

    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.calls.nrows()
    }

    #[must_use]
    pub fn n_variants(&self) -> usize {
        self.calls.ncols()
    }
}

/// Most frequent observed call of a variant column. Ties are resolved in favor of the lowest
/// alternate allele count. Returns `None` if every call is missing.
#[must_use]
pub fn most_frequent_call(column: ArrayView1<'_, Option<GenotypeCall>>) -> Option<GenotypeCall> {
    let mut counts = [0usize; 3];
    for call in column.iter().flatten() {
        counts[call.dosage() as usize] += 1;
    }

    let mut mode = None;
    let mut best = 0;
    for call in GenotypeCall::ALL {
        let count = counts[call.dosage() as usize];
        if count > best {
            (mode, best) = (Some(call), count);
        }
    }
    mode
}

/// Replace every missing call with the most frequent observed call of its variant column.
///
/// # Errors
/// - `AllMissing` if a column carries no observed call and `policy` is `MissingColumnPolicy::Fail`.
///   Variant indices are 1-based.
pub fn impute(raw: RawGenotypes, policy: MissingColumnPolicy) -> Result<ImputedGenotypes, ImputationError> {
    let calls = raw.into_inner();

    let mut fills: Vec<(usize, GenotypeCall)> = Vec::with_capacity(calls.ncols());
    let mut dropped = Vec::new();
    for (j, column) in calls.axis_iter(Axis(1)).enumerate() {
        match (most_frequent_call(column), policy) {
            (Some(mode), _)                         => fills.push((j, mode)),
            (None, MissingColumnPolicy::Fail)       => return Err(ImputationError::AllMissing{variant: j + 1}),
            (None, MissingColumnPolicy::Drop)       => dropped.push(j),
            (None, MissingColumnPolicy::HomRef)     => {
                warn!("Genotype #{} is missing for every sample. Imputing homozygous reference calls.", j + 1);
                fills.push((j, GenotypeCall::HomRef));
            },
        }
    }

    if !dropped.is_empty() {
        warn!("Dropped {} genotype column(s) missing for every sample: {:?}", dropped.len(),
            dropped.iter().map(|j| j + 1).collect::<Vec<_>>()
        );
    }

    let imputed = calls.iter().filter(|call| call.is_none()).count()
        - dropped.len() * calls.nrows();

    let calls = Array2::from_shape_fn((calls.nrows(), fills.len()), |(i, k)| {
        let (j, fill) = fills[k];
        calls[[i, j]].unwrap_or(fill)
    });

    debug!("Imputed {imputed} missing genotype(s) across {} samples x {} variants", calls.nrows(), calls.ncols());
    Ok(ImputedGenotypes{calls, dropped, imputed})
}
