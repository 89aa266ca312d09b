/// Errors surfaced by the export pipeline, one variant per failure kind.
use std::path::PathBuf;

use thiserror::Error;

use crate::gitlab::GitLabError;

/// Everything that can stop an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// `--token` was absent or empty.
    #[error("Private token is not specified!")]
    MissingToken,

    /// `--project` was absent or empty.
    #[error("Project name is not specified!")]
    MissingProject,

    /// `--format` was not one of the known formats.
    #[error("Format specified badly: '{value}' (expected csv or env)")]
    InvalidFormat {
        /// The rejected value.
        value: String,
    },

    /// Fetching from GitLab failed.
    #[error(transparent)]
    GitLab(#[from] GitLabError),

    /// The output file could not be created or truncated.
    #[error("Error while creating output file {}: {source}", path.display())]
    CreateFile {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing, flushing or syncing the output file failed.
    #[error("Error while writing output file {}: {source}", path.display())]
    WriteFile {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ExportError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingToken | Self::MissingProject | Self::InvalidFormat { .. } => 2,
            Self::GitLab(gl) => match gl.status() {
                Some(401 | 403) => 3,
                Some(404) => 4,
                _ => 1,
            },
            Self::CreateFile { .. } | Self::WriteFile { .. } => 1,
        }
    }

    /// Whether the usage examples should accompany this error.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}
