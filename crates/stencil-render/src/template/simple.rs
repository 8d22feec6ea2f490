//! Simple template engine using format-string style substitution.
//!
//! This module provides [`SimpleEngine`], a lightweight engine for templates
//! that only need to print context values. It has no loops, conditionals,
//! filters or method arguments.
//!
//! # Syntax
//!
//! - `{url}`: the context's [`url()`](crate::TemplateContext::url)
//! - `{name}`: the context's value for `name`, falling back to a global
//! - `{user.name}`: nested property access via dot notation
//! - `{items.0}`: array index access
//! - `{{` and `}}`: escaped braces (render as `{` and `}`)
//!
//! Unknown names are left in place, braces included, so a typo shows up in the
//! output instead of silently disappearing.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stencil_render::{SharedContext, SimpleEngine, StaticContext, TemplateEngine};
//!
//! let context: SharedContext =
//!     Arc::new(StaticContext::new("/feed").with_value("user", serde_json::json!({"name": "Ada"})));
//!
//! let output = SimpleEngine::new()
//!     .render("t", "Hi {user.name}, see {url}", &context, &Default::default())
//!     .unwrap();
//! assert_eq!(output, "Hi Ada, see /feed");
//! ```

use crate::context::SharedContext;
use crate::error::RenderError;

use super::engine::{Globals, TemplateEngine};

/// A lightweight template engine using `{name}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEngine;

impl SimpleEngine {
    /// Creates a new SimpleEngine.
    pub fn new() -> Self {
        Self
    }

    /// Resolves a dotted path in a JSON value.
    fn resolve_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
        let mut current = value;

        for part in path.split('.') {
            current = match current {
                serde_json::Value::Object(map) => map.get(part)?,
                serde_json::Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Formats a JSON value as a string for output.
    fn format_value(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => String::new(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => value.to_string(),
        }
    }

    /// Looks up a placeholder: `url` first, then the context, then globals.
    fn lookup(var_name: &str, context: &SharedContext, globals: &Globals) -> Option<String> {
        let (head, rest) = match var_name.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (var_name, None),
        };

        if head == "url" && rest.is_none() {
            return Some(context.url());
        }

        let root = context.get(head).or_else(|| globals.get(head).cloned())?;
        match rest {
            Some(rest) => Self::resolve_path(&root, rest).map(Self::format_value),
            None => Some(Self::format_value(&root)),
        }
    }
}

impl TemplateEngine for SimpleEngine {
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &SharedContext,
        globals: &Globals,
    ) -> Result<String, RenderError> {
        let mut result = String::with_capacity(source.len());
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '{' {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut var_name = String::new();
                let mut found_close = false;

                for inner_ch in chars.by_ref() {
                    if inner_ch == '}' {
                        found_close = true;
                        break;
                    }
                    var_name.push(inner_ch);
                }

                if !found_close {
                    return Err(RenderError::Template(format!(
                        "unclosed variable substitution in {}: {{{}",
                        name, var_name
                    )));
                }

                let var_name = var_name.trim();
                if var_name.is_empty() {
                    return Err(RenderError::Template(format!(
                        "empty variable name in {}",
                        name
                    )));
                }

                match Self::lookup(var_name, context, globals) {
                    Some(value) => result.push_str(&value),
                    None => {
                        result.push('{');
                        result.push_str(var_name);
                        result.push('}');
                    }
                }
            } else if ch == '}' {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                result.push('}');
            } else {
                result.push(ch);
            }
        }

        Ok(result)
    }

    fn supports_filters(&self) -> bool {
        false
    }

    fn supports_control_flow(&self) -> bool {
        false
    }
}
