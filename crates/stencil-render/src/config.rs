//! Renderer configuration.
//!
//! [`RenderConfig`] collects the knobs a [`Renderer`](crate::Renderer) is built
//! from. Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```yaml
//! search_paths:
//!   - ./templates
//!   - ./vendor/templates
//! engine: jinja
//! keep_trailing_newline: true
//! undefined: strict
//! auto_escape: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Which template engine a renderer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// [`MiniJinjaEngine`](crate::MiniJinjaEngine): full Jinja syntax.
    #[default]
    Jinja,
    /// [`SimpleEngine`](crate::SimpleEngine): `{name}` substitution only.
    Simple,
}

/// How the Jinja engine treats undefined values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedMode {
    /// Undefined values render as empty strings.
    #[default]
    Lenient,
    /// Printing or iterating an undefined value is a template error.
    Strict,
}

impl From<UndefinedMode> for minijinja::UndefinedBehavior {
    fn from(mode: UndefinedMode) -> Self {
        match mode {
            UndefinedMode::Lenient => minijinja::UndefinedBehavior::Lenient,
            UndefinedMode::Strict => minijinja::UndefinedBehavior::Strict,
        }
    }
}

/// Configuration for a [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directories searched, in order, for relative template paths.
    pub search_paths: Vec<PathBuf>,
    /// Template engine.
    pub engine: EngineKind,
    /// Keep the final newline of a template file in the output.
    pub keep_trailing_newline: bool,
    /// Undefined value handling for the Jinja engine.
    pub undefined: UndefinedMode,
    /// HTML-escape printed values in templates named `*.html`, `*.htm` or
    /// `*.xml`. Off by default: values print exactly as the context returns them.
    pub auto_escape: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            engine: EngineKind::default(),
            keep_trailing_newline: true,
            undefined: UndefinedMode::default(),
            auto_escape: false,
        }
    }
}

impl RenderConfig {
    /// Parses a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if the YAML is malformed or contains
    /// unknown enum values.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML configuration file.
    ///
    /// Relative `search_paths` are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if the file cannot be read or its
    /// contents fail to parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            RenderError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_yaml(&yaml)?;

        if let Some(base) = path.parent() {
            for dir in &mut config.search_paths {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }
        Ok(config)
    }
}
