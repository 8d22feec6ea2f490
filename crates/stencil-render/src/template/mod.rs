//! Template loading and rendering.
//!
//! A render goes through three steps:
//!
//! 1. **Load**: [`TemplateLoader`] resolves the path against its search
//!    directories and reads the source. Any failure here is
//!    [`RenderError::TemplateNotFound`](crate::RenderError::TemplateNotFound).
//! 2. **Render**: a [`TemplateEngine`] evaluates the source with `context`
//!    bound to the caller's [`TemplateContext`](crate::TemplateContext).
//! 3. **Return**: the engine's output buffer becomes the return value.
//!
//! ## Which Engine?
//!
//! | Engine | Syntax | Use When |
//! |--------|--------|----------|
//! | [`MiniJinjaEngine`] | `{{ context.url() }}`, `{% if %}`, filters | Default; anything with logic |
//! | [`SimpleEngine`] | `{url}`, `{user.name}` | Plain substitution, no logic |
//!
//! ## Key Types
//!
//! - [`Template`]: a single template path, rendered with the default renderer
//! - [`Renderer`]: engine, search paths and globals, reused across renders
//! - [`TemplateLoader`]: path resolution against search directories

pub mod engine;
pub mod filters;
pub mod loader;
mod renderer;
mod simple;

pub use engine::{Globals, MiniJinjaEngine, TemplateEngine, CONTEXT_BINDING};
pub use loader::{LoadedTemplate, TemplateLoader};
pub use renderer::{Renderer, Template};
pub use simple::SimpleEngine;
