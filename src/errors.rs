use std::path::PathBuf;

use thiserror::Error;

use crate::validate::{ MAX_LENGTH, MIN_LENGTH };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password length must be a whole number")]
    NotANumber,
    #[error("Should be min of {} Chars", MIN_LENGTH)]
    TooShort,
    #[error("Should be max of {} Chars", MAX_LENGTH)]
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Select at least one character class")]
    NoClassesSelected,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard available")]
    Unavailable,
    #[error("Could not copy to clipboard: {0}")]
    Copy(String),
}
