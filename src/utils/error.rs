use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("library '{spec}' must be NAME:NID[,NID]")]
    MissingSeparator { spec: String },

    #[error("NID must be hex, got '{value}'")]
    InvalidNid { value: String },

    #[error("library {name} must not have more than two NIDs, got '{count}'")]
    TooManyNids { name: String, count: usize },

    #[error("library '{spec}' has an empty name")]
    EmptyLibraryName { spec: String },

    #[error("at least one library is required")]
    NoLibraries,

    #[error("failed to write '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments; nothing was generated.
    Usage,
    /// The generated text could not be written out.
    Filesystem,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::MissingSeparator { .. }
            | ExportError::InvalidNid { .. }
            | ExportError::TooManyNids { .. }
            | ExportError::EmptyLibraryName { .. }
            | ExportError::NoLibraries => ErrorCategory::Usage,
            ExportError::Filesystem { .. } | ExportError::Io(_) => ErrorCategory::Filesystem,
        }
    }

    /// Usage errors share clap's exit code so every bad invocation looks the same.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            ErrorCategory::Filesystem => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
