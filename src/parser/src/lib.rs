use std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    fs::File,
    path::{Path, PathBuf},
};

use located_error::*;

use clap::{ArgEnum, Parser};
use serde::{Deserialize, Serialize};
use log::debug;
use anyhow::Result;

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Default, Serialize, Deserialize)]
#[clap(name="ped-pca", author, version, about, long_about = None)]
/// ped-pca: Check the matching of cases and controls within a PED file.
///
/// Missing genotypes are imputed with their most frequent value, before projecting every sample
/// onto its first two principal components. Cases and controls are then drawn on a scatter plot.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,

    /// Input PED file.
    ///
    /// Whitespace-separated, one sample per row: 'FamilyID IndividualID PaternalID MaternalID Sex Affectation'
    /// followed by two allele tokens per variant. Alleles are encoded as 1 (reference), 2 (alternate) or 0 (missing).
    /// Affectation is encoded as 1 (control) or 2 (case).
    #[clap(parse(try_from_os_str=valid_input_file))]
    pub ped: Option<PathBuf>,

    /// Output scatter plot.
    ///
    /// Must carry an '.svg' extension. Defaults to '<PED>.svg'
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Behavior when a genotype column is missing for every sample.
    ///
    /// - fail: abort with an error.{n}
    /// - drop: remove the column before computing principal components.{n}
    /// - hom-ref: fill the column with homozygous reference genotypes.{n}
    #[clap(short, long, arg_enum, default_value("fail"))]
    pub missing_column: MissingColumn,

    /// Overwrite existing output files.
    #[clap(short='w', long)]
    pub overwrite: bool,

    /// Run ped-pca using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a ped-pca command using the exact same parameters
    /// and arguments. Every other argument is then ignored.
    #[clap(long)]
    pub from_yaml: Option<PathBuf>,
}

impl Cli {
    /// Serialize command line arguments within a `.yaml` file.
    ///
    /// # Behavior
    /// - File naming follows the convention '{current time}-ped-pca.yaml'. current time follows the format
    ///   `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written within `output_dir`.
    /// - Nothing is written if these arguments are themselves a `--from-yaml` replay.
    ///
    /// # Errors
    /// - `Serialize` if `serde_yaml` fails to parse `Self` to a string.
    /// - if the `.yaml` file cannot be written.
    pub fn serialize(&self, output_dir: &Path) -> Result<Option<PathBuf>> {
        if self.from_yaml.is_some() {
            return Ok(None)
        }

        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::Serialize)
            .loc("While serializing command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file = output_dir.join(format!("{current_time}-ped-pca.yaml"));
        std::fs::write(&output_file, serialized)
            .with_loc(|| format!("Unable to serialize arguments into {}", output_file.display()))?;
        Ok(Some(output_file))
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` does not exist, or does not carry read permissions
    /// - `Deserialize` if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let loc_msg = || format!("While deserializing command line arguments from {}", yaml.display());
        let file = File::open(yaml).with_loc(loc_msg)?;
        serde_yaml::from_reader(file)
            .map_err(|err| ParserError::Deserialize(yaml.display().to_string(), err))
            .with_loc(loc_msg)
    }

    /// Resolve `--from-yaml`: return the arguments that should actually be run.
    ///
    /// # Errors
    /// - if the `.yaml` file cannot be deserialized.
    /// - `NestedYaml` if the deserialized arguments request another replay.
    pub fn resolve(self) -> Result<Self> {
        let yaml = match &self.from_yaml {
            Some(yaml) => yaml.clone(),
            None       => return Ok(self),
        };

        let cli = Self::deserialize(&yaml)?;
        if cli.from_yaml.is_some() {
            return Err(ParserError::NestedYaml(yaml.display().to_string()))
                .loc("While parsing command line arguments")
        }
        Ok(cli)
    }

    /// Input PED file.
    ///
    /// # Errors
    /// - `MissingPedInput` if neither a PED file, nor a `--from-yaml` file was provided.
    pub fn ped(&self) -> Result<&Path> {
        self.ped.as_deref()
            .ok_or(ParserError::MissingPedInput)
            .loc("While parsing command line arguments")
    }

    /// Check if `pathbuf` may be written to.
    ///
    /// # Errors
    /// - `MissingFileEntity` or `InvalidFileEntity` if the parent directory of `pathbuf` does not exist.
    /// - `CannotOverwrite` if the file already exists and `--overwrite` was not requested.
    pub fn can_write_file(&self, pathbuf: &Path) -> Result<()> {
        if let Some(dir) = pathbuf.parent().filter(|dir| ! dir.as_os_str().is_empty()) {
            assert_filesystem_entity_is_valid(dir.as_os_str(), &FileEntity::Directory)
                .with_loc(|| format!("While checking the output directory of {}", pathbuf.display()))?;
        }
        if ! self.overwrite && pathbuf.exists() {
            return Err(ParserError::CannotOverwrite(pathbuf.display().to_string()))
                .loc("While parsing command line arguments")
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ArgEnum, Serialize, Deserialize)]
pub enum MissingColumn {
    #[default]
    Fail,
    Drop,
    HomRef,
}

impl Display for MissingColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail   => write!(f, "Fail on fully missing genotype columns"),
            Self::Drop   => write!(f, "Drop fully missing genotype columns"),
            Self::HomRef => write!(f, "Impute fully missing genotype columns as homozygous reference"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(&self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(*self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: &FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(*entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, &FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}
