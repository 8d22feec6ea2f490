//! The context a template is rendered against.
//!
//! Templates reach the outside world through exactly one binding, `context`,
//! which refers to a value implementing [`TemplateContext`]. The trait lists the
//! accessors a template may call; nothing else about the caller is visible.
//!
//! # Template Surface
//!
//! | Template expression | Resolves to |
//! |---------------------|-------------|
//! | `context.url()` | [`TemplateContext::url`] |
//! | `context.url("a/b")` | [`TemplateContext::url_for`] |
//! | `context.title` | [`TemplateContext::get`] with `"title"` |
//!
//! # Live Values
//!
//! Contexts are shared as `Arc<C>`. The engine keeps a clone of the `Arc`, not
//! a snapshot of the context's data, so every accessor call made by the
//! template reaches the caller's instance. Contexts with interior mutability
//! therefore show whatever value they hold at the moment the template asks.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stencil_render::{Renderer, StaticContext};
//!
//! let context = Arc::new(StaticContext::new("/blog").with_value("title", "Posts"));
//! let renderer = Renderer::new();
//! let output = renderer
//!     .render_str("inline", r#"<a href="{{ context.url("new") }}">{{ context.title }}</a>"#, &context)
//!     .unwrap();
//! assert_eq!(output, r#"<a href="/blog/new">Posts</a>"#);
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

use minijinja::value::{from_args, Object, ObjectRepr, Value};
use minijinja::{Error, ErrorKind, State};
use serde::{Deserialize, Serialize};

/// Accessors a template may call on its `context` binding.
///
/// Only [`url`](Self::url) is required. The other methods have defaults, so a
/// context exposes exactly as much as it chooses to.
pub trait TemplateContext: Debug + Send + Sync + 'static {
    /// The URL of the component this template renders for.
    fn url(&self) -> String;

    /// The URL of a path relative to [`url`](Self::url).
    fn url_for(&self, path: &str) -> String {
        join_url(&self.url(), path)
    }

    /// A named value exposed to templates, if this context has one.
    fn get(&self, _name: &str) -> Option<serde_json::Value> {
        None
    }
}

/// A context shared with the engine for the duration of a render.
pub type SharedContext = Arc<dyn TemplateContext>;

/// Joins two URL parts with exactly one `/` between them.
///
/// An empty part leaves the other unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// A plain [`TemplateContext`] holding a base URL and a map of named values.
///
/// `StaticContext` deserializes from any serde format, so a context can be
/// kept next to the templates that use it:
///
/// ```rust
/// use stencil_render::StaticContext;
///
/// let context: StaticContext = serde_json::from_str(
///     r#"{"url": "/shop", "values": {"currency": "EUR"}}"#,
/// ).unwrap();
/// assert_eq!(context.base_url(), "/shop");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticContext {
    url: String,
    #[serde(default)]
    values: BTreeMap<String, serde_json::Value>,
}

impl StaticContext {
    /// Creates a context with the given base URL and no values.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            values: BTreeMap::new(),
        }
    }

    /// Adds a named value.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// The base URL returned by `url()`.
    pub fn base_url(&self) -> &str {
        &self.url
    }
}

impl TemplateContext for StaticContext {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn get(&self, name: &str) -> Option<serde_json::Value> {
        self.values.get(name).cloned()
    }
}

/// Exposes a [`SharedContext`] to MiniJinja as the `context` binding.
///
/// Attribute lookups go to [`TemplateContext::get`]; method calls are
/// dispatched by name. The wrapped `Arc` is cloned, never the context itself.
pub(crate) struct ContextObject {
    inner: SharedContext,
}

impl ContextObject {
    pub(crate) fn new(inner: SharedContext) -> Self {
        Self { inner }
    }

    pub(crate) fn into_value(self) -> Value {
        Value::from_object(self)
    }
}

impl Debug for ContextObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl Object for ContextObject {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = key.as_str()?;
        self.inner.get(name).map(|v| Value::from_serialize(&v))
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        match method {
            "url" => {
                let (path,): (Option<&str>,) = from_args(args)?;
                Ok(Value::from(match path {
                    Some(path) => self.inner.url_for(path),
                    None => self.inner.url(),
                }))
            }
            "get" => {
                let (name,): (&str,) = from_args(args)?;
                Ok(self
                    .inner
                    .get(name)
                    .map(|v| Value::from_serialize(&v))
                    .unwrap_or_else(|| Value::from(())))
            }
            _ => Err(Error::new(
                ErrorKind::UnknownMethod,
                format!("context has no method named {}", method),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockContext;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/blog", "new"), "/blog/new");
        assert_eq!(join_url("/blog/", "/new"), "/blog/new");
        assert_eq!(join_url("/blog", ""), "/blog");
        assert_eq!(join_url("", "new"), "new");
    }

    #[test]
    fn test_default_url_for() {
        let ctx = MockContext::with_url("http://example.org/app");
        assert_eq!(ctx.url_for("users/1"), "http://example.org/app/users/1");
    }

    #[test]
    fn test_default_get_is_none() {
        #[derive(Debug)]
        struct UrlOnly;

        impl TemplateContext for UrlOnly {
            fn url(&self) -> String {
                "/".into()
            }
        }

        assert_eq!(UrlOnly.get("anything"), None);
    }

    #[test]
    fn test_static_context_values() {
        let ctx = StaticContext::new("/shop")
            .with_value("currency", "EUR")
            .with_value("count", 3);
        assert_eq!(ctx.url(), "/shop");
        assert_eq!(ctx.get("currency"), Some(serde_json::json!("EUR")));
        assert_eq!(ctx.get("count"), Some(serde_json::json!(3)));
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn test_static_context_from_yaml() {
        let ctx: StaticContext = serde_yaml::from_str("url: /docs\nvalues:\n  lang: en\n").unwrap();
        assert_eq!(ctx.base_url(), "/docs");
        assert_eq!(ctx.get("lang"), Some(serde_json::json!("en")));
    }

    #[test]
    fn test_context_object_reads_live_instance() {
        let mock = Arc::new(MockContext::with_url("first"));
        let shared: SharedContext = mock.clone();
        let obj = Arc::new(ContextObject::new(shared));

        mock.set("name", "late");
        assert_eq!(
            obj.get_value(&Value::from("name")),
            Some(Value::from("late"))
        );
    }
}
