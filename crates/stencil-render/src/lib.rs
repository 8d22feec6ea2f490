//! # Stencil Render - File Templates Against a Typed Context
//!
//! `stencil-render` renders a template file against a context value and returns
//! the text it produced. Output never goes anywhere implicit: each render owns
//! its buffer, and the only ways out are the returned `String` or a writer the
//! caller passes in.
//!
//! ## Core Concepts
//!
//! - [`Template`]: a template file path, rendered on demand
//! - [`TemplateContext`]: the accessors a template may call through `context`
//! - [`Renderer`]: engine, search paths and global values for repeated rendering
//! - [`RenderError`]: one error type; missing files are
//!   [`RenderError::TemplateNotFound`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use stencil_render::{Template, TemplateContext};
//!
//! #[derive(Debug)]
//! struct Page {
//!     url: String,
//! }
//!
//! impl TemplateContext for Page {
//!     fn url(&self) -> String {
//!         self.url.clone()
//!     }
//! }
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("link.tpl");
//! std::fs::write(&path, r#"<a href="{{ context.url() }}">self</a>"#).unwrap();
//!
//! let page = Arc::new(Page { url: "/about".into() });
//! let html = Template::new(&path).render(&page).unwrap();
//! assert_eq!(html, r#"<a href="/about">self</a>"#);
//! ```
//!
//! ## Missing Templates
//!
//! A path that does not lead to a readable file fails at render time, never at
//! construction:
//!
//! ```rust
//! use std::sync::Arc;
//! use stencil_render::{StaticContext, Template};
//!
//! let template = Template::new("some/path/which/cant/possibly/exist/../or/so/i/hope");
//! let err = template.render(&Arc::new(StaticContext::new("/"))).unwrap_err();
//! assert!(err.is_not_found());
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use stencil_render::{RenderConfig, Renderer};
//!
//! let config = RenderConfig::from_yaml("engine: simple\nkeep_trailing_newline: false\n").unwrap();
//! let renderer = Renderer::from_config(&config).unwrap();
//! # let _ = renderer;
//! ```

pub mod config;
pub mod context;
mod error;
pub mod template;
#[cfg(test)]
mod testing;

pub use config::{EngineKind, RenderConfig, UndefinedMode};
pub use context::{join_url, SharedContext, StaticContext, TemplateContext};
pub use error::RenderError;
pub use template::{
    Globals, LoadedTemplate, MiniJinjaEngine, Renderer, SimpleEngine, Template, TemplateEngine,
    TemplateLoader, CONTEXT_BINDING,
};
