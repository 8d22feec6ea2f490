//! Template file resolution.
//!
//! [`TemplateLoader`] turns a template path into source text. Relative paths are
//! looked up in an ordered list of search directories, then in the working
//! directory; absolute paths are used as given.
//!
//! # Resolution
//!
//! For a relative path `partials/header.tpl` and search paths `[a, b]`, the
//! candidates are tried in this order:
//!
//! 1. `a/partials/header.tpl`
//! 2. `b/partials/header.tpl`
//! 3. `partials/header.tpl` (relative to the working directory)
//!
//! The first candidate that is a regular file wins. Paths are not normalized,
//! so `..` segments are resolved by the filesystem exactly as written.
//!
//! Every failure, whether nothing matched or the winning file could not be
//! read, is reported as [`RenderError::TemplateNotFound`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// A template's resolved location and source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    /// The file the source was read from.
    pub path: PathBuf,
    /// The template source.
    pub source: String,
}

/// Resolves template paths against an ordered list of search directories.
#[derive(Debug, Clone, Default)]
pub struct TemplateLoader {
    search_paths: Vec<PathBuf>,
}

impl TemplateLoader {
    /// Creates a loader with no search directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a search directory.
    ///
    /// Earlier directories take precedence over later ones.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if `dir` is not an existing directory.
    pub fn add_search_path(&mut self, dir: impl AsRef<Path>) -> Result<(), RenderError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RenderError::Config(format!(
                "template search path is not a directory: {}",
                dir.display()
            )));
        }
        self.search_paths.push(dir.to_path_buf());
        Ok(())
    }

    /// The registered search directories, in lookup order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Finds the file a template path refers to.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, RenderError> {
        let path = path.as_ref();

        for candidate in self.candidates(path) {
            tracing::trace!(candidate = %candidate.display(), "checking template candidate");
            if candidate.is_file() {
                tracing::debug!(
                    template = %path.display(),
                    resolved = %candidate.display(),
                    "resolved template"
                );
                return Ok(candidate);
            }
        }

        Err(RenderError::not_found(
            path,
            io::Error::new(io::ErrorKind::NotFound, "no such template file"),
        ))
    }

    /// Resolves a template path and reads its source.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedTemplate, RenderError> {
        let path = path.as_ref();
        let resolved = self.resolve(path)?;
        let source =
            fs::read_to_string(&resolved).map_err(|e| RenderError::not_found(path, e))?;
        Ok(LoadedTemplate {
            path: resolved,
            source,
        })
    }

    fn candidates(&self, path: &Path) -> Vec<PathBuf> {
        if path.is_absolute() {
            return vec![path.to_path_buf()];
        }
        self.search_paths
            .iter()
            .map(|dir| dir.join(path))
            .chain(std::iter::once(path.to_path_buf()))
            .collect()
    }
}
