use std::path::PathBuf;
use thiserror::Error;

use crate::core::RulesetError;
use crate::models::ConfigError;

/// Main error type for PseudoPy
///
/// The converter core itself is total over all text input and never fails;
/// errors only arise at the config and file I/O boundary around it.
#[derive(Error, Debug)]
pub enum PseudoPyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ruleset error: {0}")]
    Ruleset(#[from] RulesetError),

    #[error("Input file not found: {0}")]
    InputFileNotFound(PathBuf),

    #[error("Failed to write output file {0}: {1}")]
    OutputWrite(PathBuf, std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PseudoPyError>;
