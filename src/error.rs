use std::path::PathBuf;
use thiserror::Error;

/// Every fatal failure of a load.
///
/// Malformed environment or flag values are not errors: they fall through to
/// the next source. What remains here are schema mistakes, argument-parser
/// failures, and manifest problems, all of which leave the record untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Record has no fields to load")]
    EmptyRecord,

    #[error("Field name must not be empty (field #{index})")]
    InvalidFieldName { index: usize },

    #[error("Field '{field}' has unsupported kind '{kind}' (expected string, int, bool or float)")]
    UnsupportedKind { field: String, kind: String },

    #[error("Flag '--{flag}' for field '{field}' is already registered")]
    DuplicateFlag { flag: String, field: String },

    #[error("Environment variable '{env}' is derived by both '{first}' and '{second}'")]
    DuplicateEnv {
        env: String,
        first: String,
        second: String,
    },

    /// Includes help and version requests; call `exit()` on the inner error
    /// to print it the way clap does.
    #[cfg(feature = "clap")]
    #[error(transparent)]
    Arguments(#[from] clap::Error),

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid manifest entry '{field}': {reason}")]
    InvalidManifest { field: String, reason: String },
}
