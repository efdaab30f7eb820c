use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{debug, trace};
use ndarray::{Array1, Array2};

mod error;
pub use error::{PedError, PedErrorKind};

use crate::{PedDataset, RawGenotypes, Sample};

/// Line-by-line reader of a PED file.
///
/// The whole file is validated before anything is returned: decoding either yields a complete
/// `PedDataset`, or the first error encountered, in file order.
pub struct PedReader<'a> {
    source: Box<dyn BufRead + 'a>,
    path  : PathBuf,
}

impl<'a> PedReader<'a> {
    /// Open a new `PedReader` on the given file.
    ///
    /// # Errors
    /// - `MissingFile` if `path` does not point to an existing file.
    /// - `OpenFile` if the file cannot be opened (e.g. `PermissionDenied`)
    pub fn new(path: impl AsRef<Path>) -> Result<PedReader<'a>, PedError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(PedError::MissingFile{path})
        }
        match File::open(&path) {
            Ok(file)    => Ok(Self::from_reader(BufReader::new(file), path)),
            Err(source) => Err(PedError::OpenFile{path, source}),
        }
    }

    /// Wrap an arbitrary buffered source. `path` is only used to identify the source within errors.
    pub fn from_reader(source: impl BufRead + 'a, path: impl Into<PathBuf>) -> Self {
        Self{source: Box::new(source), path: path.into()}
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode every row of the file into a `PedDataset`.
    ///
    /// # Errors
    /// - `ReadLine` if a line cannot be read (IO error or invalid UTF-8).
    /// - `EmptyFile` if the file does not contain any row.
    /// - `ColumnCount` if the first row carries less than 8 or an odd number of fields, or if any
    ///   subsequent row does not carry the same number of allele tokens as the first one.
    /// - `Affectation`, `AlleleToken` if a numeric field fails to parse.
    /// - `Encoding` if an allele pair is not a valid genotype.
    pub fn decode(self) -> Result<PedDataset, PedError> {
        let Self{source, path} = self;
        debug!("Decoding PED file {}", path.display());

        let mut n_variants = None;
        let mut samples: Vec<Sample> = Vec::new();
        for (i, line) in source.lines().enumerate() {
            let row = i + 1;
            let line = line.map_err(|source| PedError::ReadLine{path: path.clone(), row, source})?;
            let fields: Vec<&str> = line.split_whitespace().collect();

            // ---- First row fixes the expected number of variants.
            let n_variants = match n_variants {
                Some(n) => n,
                None    => {
                    let n = Self::count_variants(&fields, &path)?;
                    n_variants = Some(n);
                    n
                }
            };

            let sample = Sample::parse(&fields, n_variants)
                .map_err(|err| PedError::from_sample(err, path.clone(), row))?;
            trace!("Row {row}: {} {} (label: {})", sample.family_id, sample.individual_id, sample.label());
            samples.push(sample);
        }

        let Some(n_variants) = n_variants else {
            return Err(PedError::EmptyFile{path})
        };

        let dataset = Self::assemble(path, samples, n_variants);
        debug!("Decoded {} samples x {} variants ({} cases, {} controls, {} missing calls)",
            dataset.n_samples(), dataset.n_variants(), dataset.cases(), dataset.controls(),
            dataset.genotypes.missing_count()
        );
        Ok(dataset)
    }

    /// Derive the number of variants from the fields of the first row.
    fn count_variants(fields: &[&str], path: &Path) -> Result<usize, PedError> {
        let n_fields = fields.len();
        if n_fields < Sample::MIN_FIELDS || n_fields % 2 != 0 {
            return Err(PedError::ColumnCount{path: path.to_path_buf(), row: 1, fields: n_fields})
        }
        Ok((n_fields - Sample::METADATA_FIELDS) / 2)
    }

    fn assemble(source: PathBuf, samples: Vec<Sample>, n_variants: usize) -> PedDataset {
        let labels = samples.iter().map(Sample::label).collect::<Array1<i64>>();
        let calls = Array2::from_shape_fn((samples.len(), n_variants), |(i, j)| samples[i].genotypes[j]);
        let sample_ids = samples.into_iter()
            .map(|sample| (sample.family_id, sample.individual_id))
            .collect();
        PedDataset{source, sample_ids, labels, genotypes: RawGenotypes::new(calls)}
    }
}

/// Open and decode a PED file in one go. See [`PedReader::decode()`]
///
/// # Errors
/// - Any `PedError`, see [`PedReader::new()`] and [`PedReader::decode()`]
pub fn decode_ped(path: impl AsRef<Path>) -> Result<PedDataset, PedError> {
    PedReader::new(path)?.decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use genotype::GenotypeCall::*;
    use ndarray::array;

    fn decode_str(contents: &'static str) -> Result<PedDataset, PedError> {
        PedReader::from_reader(contents.as_bytes(), "test.ped").decode()
    }

    #[test]
    fn decode_two_samples() -> Result<(), PedError> {
        let dataset = decode_str("F1 I1 0 0 1 2 1 1 2 2\nF2 I2 0 0 1 1 1 2 0 0\n")?;
        assert_eq!(dataset.labels, array![1, 0]);
        assert_eq!(dataset.genotypes.calls(), array![[Some(HomRef), Some(HomAlt)], [Some(Het), None]]);
        assert_eq!(dataset.genotypes.to_i8(), array![[0, 2], [1, -1]]);
        assert_eq!(dataset.sample_ids[1], ("F2".to_string(), "I2".to_string()));
        assert_eq!(dataset.source(), Path::new("test.ped"));
        Ok(())
    }

    #[test]
    fn missing_trailing_newline() -> Result<(), PedError> {
        let dataset = decode_str("F1 I1 0 0 1 2 1 1")?;
        assert_eq!((dataset.n_samples(), dataset.n_variants()), (1, 1));
        Ok(())
    }

    #[test]
    fn empty_file() {
        assert!(matches!(decode_str(""), Err(PedError::EmptyFile{..})));
    }

    #[test]
    fn first_row_too_short() {
        let err = decode_str("F1 I1 0 0 1 2\n").unwrap_err();
        assert!(matches!(err, PedError::ColumnCount{row: 1, fields: 6, ..}));
    }

    #[test]
    fn first_row_odd_field_count() {
        let err = decode_str("F1 I1 0 0 1 2 1 1 2\n").unwrap_err();
        assert!(matches!(err, PedError::ColumnCount{row: 1, fields: 9, ..}));
    }

    #[test]
    fn blank_line_is_a_short_row() {
        let err = decode_str("F1 I1 0 0 1 2 1 1\n\nF2 I2 0 0 1 1 1 2\n").unwrap_err();
        assert!(matches!(err, PedError::ColumnCount{row: 2, fields: 0, ..}));
    }

    #[test]
    fn invalid_utf8_is_a_path_error() {
        let bytes: &'static [u8] = b"F1 I1 0 0 1 2 1 1\nF2 I2 0 0 1 \xFF 1 2\n";
        let err = PedReader::from_reader(bytes, "test.ped").decode().unwrap_err();
        assert!(matches!(err, PedError::ReadLine{row: 2, ..}));
        assert_eq!(err.kind(), PedErrorKind::Path);
    }
}
