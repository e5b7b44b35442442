//! Error types

use std::path::PathBuf;

use grid_engine::error::{DispatchError, GridError};

/// Console error type
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to start logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Unknown screen '{0}' (see `budget-console screens`)")]
    UnknownScreen(String),

    #[error("Unknown column '{column}' on screen '{screen}'")]
    UnknownColumn { screen: String, column: String },

    #[error("Unknown action '{0}' (expected view, edit, delete, approve or reject)")]
    UnknownAction(String),

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}

impl ConsoleError {
    /// Creates a new config parse error.
    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Creates a new unknown column error.
    pub fn unknown_column(screen: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            screen: screen.into(),
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
