//! Configuration error types.

use std::path::PathBuf;

use crate::settings::{SettingKey, SettingKind};

/// Errors produced while reading or writing a node document.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// Failed to read the document from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the document to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A closing brace with no open node.
    #[error("unexpected '}}' on line {line}")]
    UnexpectedClose { line: usize },

    /// The document ended while a node was still open.
    #[error("node '{name}' opened on line {line} is never closed")]
    Unclosed { name: String, line: usize },
}

/// Errors that can occur when saving or mutating settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to remove the previous settings file.
    #[error("failed to remove old settings file: {0}")]
    RemoveError(#[source] std::io::Error),

    /// Failed to create the settings directory.
    #[error("failed to create settings directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// Failed to write the settings document.
    #[error("failed to write settings: {0}")]
    WriteError(#[source] NodeError),

    /// A value of the wrong kind was assigned to a setting.
    #[error("{key} expects a {expected} value, got {actual}")]
    KindMismatch {
        key: SettingKey,
        expected: SettingKind,
        actual: SettingKind,
    },
}
