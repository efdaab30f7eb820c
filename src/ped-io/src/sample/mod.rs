mod error;
pub use error::SampleError;

use genotype::{parse_integer, AffectationStatus, GenotypeCall};
use itertools::Itertools;

/// A single parsed PED row.
///
/// Only the family and individual identifiers are retained from the metadata columns. Paternal,
/// maternal and sex fields are left uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub family_id    : String,
    pub individual_id: String,
    pub status       : AffectationStatus,
    pub genotypes    : Vec<Option<GenotypeCall>>,
}

impl Sample {
    /// Index of the affectation status column.
    pub const AFFECTATION_FIELD: usize = 5;
    /// Number of leading metadata columns, preceding allele tokens.
    pub const METADATA_FIELDS: usize = 6;
    /// A valid row carries at least one variant.
    pub const MIN_FIELDS: usize = Self::METADATA_FIELDS + 2;

    /// Parse a whitespace-split PED row, expected to carry exactly `n_variants` pairs of allele tokens.
    ///
    /// Checks are applied in the following order, and the first failure is returned:
    /// 1. column count
    /// 2. affectation status
    /// 3. every allele token is an integer (integers overflowing an `i64` are clamped, see [`parse_integer`])
    /// 4. every allele pair is a valid genotype encoding
    ///
    /// # Errors
    /// - `ColumnCount` if the row does not carry `6 + 2 * n_variants` fields.
    /// - `Affectation` if the affectation status is not an integer.
    /// - `AlleleToken` on the first non-integer allele token.
    /// - `Encoding` on the first invalid allele pair. Variant indices are 1-based.
    pub fn parse(fields: &[&str], n_variants: usize) -> Result<Self, SampleError> {
        let n_fields = fields.len();
        if n_fields < Self::MIN_FIELDS || n_fields - Self::METADATA_FIELDS != 2 * n_variants {
            return Err(SampleError::ColumnCount(n_fields))
        }

        let status: AffectationStatus = fields[Self::AFFECTATION_FIELD].parse()?;

        let alleles = fields[Self::METADATA_FIELDS..].iter()
            .map(|token| parse_integer(token).ok_or_else(|| SampleError::AlleleToken((*token).to_string())))
            .collect::<Result<Vec<i64>, _>>()?;

        let genotypes = alleles.into_iter()
            .tuples()
            .enumerate()
            .map(|(i, (a1, a2))| {
                GenotypeCall::from_alleles(a1, a2).map_err(|source| SampleError::Encoding{variant: i + 1, source})
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            family_id    : fields[0].to_string(),
            individual_id: fields[1].to_string(),
            status,
            genotypes
        })
    }

    /// Zero-based case/control label of this sample.
    #[must_use]
    pub fn label(&self) -> i64 {
        self.status.label()
    }
}
