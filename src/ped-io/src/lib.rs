//! Decoding of PED genotype files into a labelled genotype matrix.
//!
//! Every row of a PED file is expected to follow the layout:
//! ```text
//! FamilyID IndividualID PaternalID MaternalID Sex Affectation A1_1 A2_1 A1_2 A2_2 ...
//! ```
//! The number of fields of the first row fixes the number of variants for the whole file.

mod reader;
pub use reader::{decode_ped, PedReader, PedError, PedErrorKind};

mod sample;
pub use sample::{Sample, SampleError};

mod dataset;
pub use dataset::{PedDataset, RawGenotypes};
