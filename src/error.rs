//! Fatal errors.
//!
//! Anything that would leave the discovered graph incomplete, or
//! inconsistent with the stated configuration, ends the run with a
//! [`DocgraphError`]. Recoverable conditions are reported through
//! [`crate::diagnostics::WarningCollector`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort discovery.
#[derive(Debug, Error)]
pub enum DocgraphError {
    /// The resolver raised a hard failure for a file.
    #[error("Failed to resolve {}: {message}", path.display())]
    Resolve { path: PathBuf, message: String },

    /// Names on the include list were never discovered.
    #[error(
        "Did not find: [{}] in known modules: [{}]",
        missing.join(", "),
        discovered.join(", ")
    )]
    MissingIncludes {
        missing: Vec<String>,
        discovered: Vec<String>,
    },

    /// Options contradict the environment; raised before discovery starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error while walking a layout or managing temp files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocgraphError {
    /// Create a resolve error for `path`.
    pub fn resolve(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Resolve {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a missing-includes error; both lists are sorted for stable output.
    pub fn missing_includes(
        missing: impl IntoIterator<Item = String>,
        discovered: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut missing: Vec<_> = missing.into_iter().collect();
        let mut discovered: Vec<_> = discovered.into_iter().collect();
        missing.sort();
        discovered.sort();
        Self::MissingIncludes {
            missing,
            discovered,
        }
    }
}

pub type Result<T, E = DocgraphError> = std::result::Result<T, E>;
