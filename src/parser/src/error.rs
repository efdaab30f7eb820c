use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("{0} {1} does not exist")]
    MissingFileEntity(FileEntity, String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("No input PED file was provided. Either specify a <PED> file, or use --from-yaml")]
    MissingPedInput,

    #[error("{0} requests yet another --from-yaml replay. Refusing to follow it")]
    NestedYaml(String),

    #[error("Failed to serialize command line arguments")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to deserialize command line arguments from {0}")]
    Deserialize(String, #[source] serde_yaml::Error),

    #[error("{0} already exists. Use --overwrite to force.")]
    CannotOverwrite(String)
}
