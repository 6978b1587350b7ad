//! Error types for dropmenu
//!
//! Uses `thiserror` for library errors. Widget operations themselves never
//! return these: unknown references and rejected transitions are reported as
//! `false`/`None`. Only the outer surfaces (option files, source documents,
//! query-by-name dispatch) are fallible.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dropmenu operations
pub type DropmenuResult<T> = Result<T, DropmenuError>;

/// Main error type for dropmenu operations
#[derive(Error, Debug)]
pub enum DropmenuError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Options or source file is not valid TOML
    #[error("invalid TOML in {file}: {message}")]
    Toml { file: PathBuf, message: String },

    /// Options or source file is not valid JSON
    #[error("invalid JSON in {file}: {message}")]
    Json { file: PathBuf, message: String },

    /// Source document does not describe exactly one markup root
    #[error("invalid source {file}: {reason}")]
    InvalidSource { file: PathBuf, reason: String },

    /// Query mode was given a command name that does not exist
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Query mode was given an internal or init-only command name
    #[error("command '{0}' cannot be called by name")]
    ReservedCommand(String),

    /// Query mode argument has the wrong shape
    #[error("invalid argument for '{command}': {reason}")]
    InvalidArgument { command: String, reason: String },

    /// No widget instance is registered under this id
    #[error("no dropdown instance '{0}'")]
    UnknownInstance(String),
}
