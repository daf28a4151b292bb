use std::io;

use thiserror::Error;

/// Errors reported by `okhl`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", read_message(.path, .source))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid value '{value}' for {option}: expected a positive integer")]
    InvalidOption { option: &'static str, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_message(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
