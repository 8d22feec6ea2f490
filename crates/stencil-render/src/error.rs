//! Error types for template rendering.
//!
//! This module provides [`RenderError`], the single error type returned by every
//! rendering operation. Engine-specific errors are folded into it so callers never
//! see the underlying template engine's types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template path did not resolve to a readable file.
    ///
    /// Raised for missing files, directories, unreadable files and sources that
    /// are not valid UTF-8. `source` carries the underlying I/O error.
    #[error("template not found: {}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template syntax error, unknown method, undefined value in strict mode,
    /// or any other failure raised while evaluating the template.
    #[error("template error: {0}")]
    Template(String),

    /// Failure writing rendered output to a caller-supplied writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid renderer configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RenderError {
    /// Builds a [`RenderError::TemplateNotFound`] for `path`.
    pub fn not_found(path: impl AsRef<Path>, source: io::Error) -> Self {
        RenderError::TemplateNotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if this is a [`RenderError::TemplateNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderError::TemplateNotFound { .. })
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Config(err.to_string())
    }
}
