//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, which lets a
//! [`Renderer`](crate::Renderer) work with different template backends. The
//! default implementation is [`MiniJinjaEngine`].
//!
//! Engines receive template source that has already been loaded; they never
//! touch the filesystem. Every engine returns its output as an owned `String`
//! and writes nowhere else.

use std::collections::HashMap;
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, Value};

use crate::config::RenderConfig;
use crate::context::{ContextObject, SharedContext};
use crate::error::RenderError;

use super::filters::register_filters;

/// Values visible to every template a renderer renders, keyed by name.
pub type Globals = HashMap<String, serde_json::Value>;

/// The name templates use to reach their context.
pub const CONTEXT_BINDING: &str = "context";

/// A template engine that renders template source against a context.
///
/// Implementations bind `context` to the supplied [`SharedContext`] and make
/// `globals` visible by name. When a global is also called `context`, the
/// context wins.
pub trait TemplateEngine: Send + Sync {
    /// Renders `source` and returns everything it produced.
    ///
    /// `name` identifies the template in error messages.
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &SharedContext,
        globals: &Globals,
    ) -> Result<String, RenderError>;

    /// Whether this engine supports filters (`{{ value | filter }}`).
    fn supports_filters(&self) -> bool;

    /// Whether this engine supports control flow (`{% for %}`, `{% if %}`).
    fn supports_control_flow(&self) -> bool;
}

/// MiniJinja-based template engine.
///
/// This is the default engine, providing Jinja2-compatible syntax with loops,
/// conditionals, macros and the filters from [`register_filters`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use stencil_render::{MiniJinjaEngine, SharedContext, StaticContext, TemplateEngine};
///
/// let engine = MiniJinjaEngine::new();
/// let context: SharedContext = Arc::new(StaticContext::new("/admin"));
///
/// let output = engine
///     .render("nav", "<a href=\"{{ context.url() }}\">home</a>", &context, &Default::default())
///     .unwrap();
/// assert_eq!(output, "<a href=\"/admin\">home</a>");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an engine with default settings and the built-in filters.
    pub fn new() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    /// Creates an engine using the engine-related fields of `config`.
    ///
    /// Unless `config.auto_escape` is set, printed values are never escaped,
    /// whatever the template's file extension.
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(config.keep_trailing_newline);
        env.set_undefined_behavior(config.undefined.into());
        if !config.auto_escape {
            env.set_auto_escape_callback(|_| AutoEscape::None);
        }
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register custom filters, tests or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &SharedContext,
        globals: &Globals,
    ) -> Result<String, RenderError> {
        let mut vars: HashMap<&str, Value> = globals
            .iter()
            .map(|(key, value)| (key.as_str(), Value::from_serialize(value)))
            .collect();
        vars.insert(
            CONTEXT_BINDING,
            ContextObject::new(Arc::clone(context)).into_value(),
        );

        Ok(self.env.render_named_str(name, source, &vars)?)
    }

    fn supports_filters(&self) -> bool {
        true
    }

    fn supports_control_flow(&self) -> bool {
        true
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::template::SimpleEngine;
    use crate::testing::MockContext;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn literal_text_renders_unchanged(text in "[^{}]*") {
            let ctx: SharedContext = Arc::new(MockContext::new());
            let globals = Globals::new();

            let jinja = MiniJinjaEngine::new().render("t", &text, &ctx, &globals).unwrap();
            prop_assert_eq!(&jinja, &text);

            let simple = SimpleEngine::new().render("t", &text, &ctx, &globals).unwrap();
            prop_assert_eq!(&simple, &text);
        }
    }
}
