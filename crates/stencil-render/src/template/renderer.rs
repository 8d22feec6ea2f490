//! File-based template rendering.
//!
//! This module provides [`Renderer`], which loads a template file, renders it
//! with a [`TemplateEngine`] against a context, and hands back the output, and
//! [`Template`], a one-shot handle for a single template path.
//!
//! # Output Capture
//!
//! Every render writes into a buffer owned by that render call. The buffer is
//! returned on success and dropped on failure, so a failed render leaves
//! nothing behind. [`Renderer::render_to`] only touches its writer once the
//! whole template has rendered.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stencil_render::{Renderer, StaticContext};
//!
//! let mut renderer = Renderer::new();
//! renderer.add_search_path("./templates")?;
//!
//! let context = Arc::new(StaticContext::new("/posts"));
//! let html = renderer.render("posts/index.tpl", &context)?;
//! ```

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::engine::{Globals, MiniJinjaEngine, TemplateEngine};
use super::loader::TemplateLoader;
use super::simple::SimpleEngine;
use crate::config::{EngineKind, RenderConfig};
use crate::context::{SharedContext, TemplateContext};
use crate::error::RenderError;

static DEFAULT_RENDERER: Lazy<Renderer> = Lazy::new(Renderer::new);

/// Renders template files against a context.
///
/// A renderer holds an engine, a [`TemplateLoader`] and a set of global values.
/// Templates are read from disk on every render; nothing is cached between
/// calls, so edits to a template show up on the next render.
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
    loader: TemplateLoader,
    globals: Globals,
}

impl Renderer {
    /// Creates a renderer with the default configuration and no search paths.
    ///
    /// Relative template paths resolve against the working directory.
    pub fn new() -> Self {
        Self {
            engine: Box::new(MiniJinjaEngine::new()),
            loader: TemplateLoader::new(),
            globals: Globals::new(),
        }
    }

    /// Creates a renderer from a [`RenderConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if a search path is not an existing
    /// directory.
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let engine: Box<dyn TemplateEngine> = match config.engine {
            EngineKind::Jinja => Box::new(MiniJinjaEngine::from_config(config)),
            EngineKind::Simple => Box::new(SimpleEngine::new()),
        };

        let mut loader = TemplateLoader::new();
        for dir in &config.search_paths {
            loader.add_search_path(dir)?;
        }

        tracing::debug!(
            engine = ?config.engine,
            search_paths = config.search_paths.len(),
            "created renderer"
        );

        Ok(Self {
            engine,
            loader,
            globals: Globals::new(),
        })
    }

    /// Replaces the template engine.
    pub fn with_engine(mut self, engine: Box<dyn TemplateEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Appends a directory to search for relative template paths.
    ///
    /// See [`TemplateLoader`] for the lookup order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if `dir` is not an existing directory.
    pub fn add_search_path(&mut self, dir: impl AsRef<Path>) -> Result<(), RenderError> {
        self.loader.add_search_path(dir)
    }

    /// Makes a value visible to every template under `name`.
    ///
    /// A global named `context` is shadowed by the render's context.
    pub fn add_global(&mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.globals.insert(name.into(), value.into());
    }

    /// The loader used to resolve template paths.
    pub fn loader(&self) -> &TemplateLoader {
        &self.loader
    }

    /// Renders the template file at `path` and returns its output.
    ///
    /// # Errors
    ///
    /// - [`RenderError::TemplateNotFound`] if `path` does not resolve to a
    ///   readable file.
    /// - [`RenderError::Template`] if the engine fails.
    pub fn render<C: TemplateContext>(
        &self,
        path: impl AsRef<Path>,
        context: &Arc<C>,
    ) -> Result<String, RenderError> {
        let shared: SharedContext = context.clone();
        self.render_shared(path, &shared)
    }

    /// Like [`render`](Self::render), for a context that is already type-erased.
    pub fn render_shared(
        &self,
        path: impl AsRef<Path>,
        context: &SharedContext,
    ) -> Result<String, RenderError> {
        let path = path.as_ref();
        let loaded = self.loader.load(path)?;
        let name = path.to_string_lossy();

        let output = self
            .engine
            .render(&name, &loaded.source, context, &self.globals)?;

        tracing::debug!(
            template = %loaded.path.display(),
            bytes = output.len(),
            "rendered template"
        );
        Ok(output)
    }

    /// Renders the template file at `path` into `out`.
    ///
    /// The template is rendered completely before anything is written, so on
    /// error `out` is left untouched.
    pub fn render_to<C: TemplateContext, W: Write + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        context: &Arc<C>,
        out: &mut W,
    ) -> Result<(), RenderError> {
        let output = self.render(path, context)?;
        out.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Renders template source that did not come from a file.
    ///
    /// `name` identifies the template in error messages.
    pub fn render_str<C: TemplateContext>(
        &self,
        name: &str,
        source: &str,
        context: &Arc<C>,
    ) -> Result<String, RenderError> {
        let shared: SharedContext = context.clone();
        self.engine.render(name, source, &shared, &self.globals)
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut globals: Vec<&str> = self.globals.keys().map(String::as_str).collect();
        globals.sort_unstable();

        f.debug_struct("Renderer")
            .field("loader", &self.loader)
            .field("globals", &globals)
            .finish_non_exhaustive()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A template file, identified by its path.
///
/// Creating a `Template` never touches the filesystem; a missing file is
/// reported when the template is rendered.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use stencil_render::{Template, StaticContext};
///
/// let context = Arc::new(StaticContext::new("/"));
/// let err = Template::new("no/such/template.tpl").render(&context).unwrap_err();
/// assert!(err.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: PathBuf,
}

impl Template {
    /// Creates a template handle for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this template was created with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders this template with the default renderer.
    ///
    /// The default renderer uses the Jinja engine with default settings and
    /// resolves relative paths against the working directory.
    pub fn render<C: TemplateContext>(&self, context: &Arc<C>) -> Result<String, RenderError> {
        self.render_with(&DEFAULT_RENDERER, context)
    }

    /// Renders this template with a specific renderer.
    pub fn render_with<C: TemplateContext>(
        &self,
        renderer: &Renderer,
        context: &Arc<C>,
    ) -> Result<String, RenderError> {
        renderer.render(&self.path, context)
    }

    /// Renders this template with the default renderer into `out`.
    ///
    /// Nothing is written to `out` unless rendering succeeds.
    pub fn render_to<C: TemplateContext, W: Write + ?Sized>(
        &self,
        context: &Arc<C>,
        out: &mut W,
    ) -> Result<(), RenderError> {
        DEFAULT_RENDERER.render_to(&self.path, context, out)
    }
}
