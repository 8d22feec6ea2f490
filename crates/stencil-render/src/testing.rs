//! Test doubles shared by the unit tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::context::TemplateContext;

/// A context whose URL and values can be changed after it is shared.
#[derive(Debug, Default)]
pub struct MockContext {
    url_return_value: RwLock<String>,
    values: RwLock<HashMap<String, serde_json::Value>>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        let ctx = Self::new();
        ctx.set_url(url);
        ctx
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url_return_value.write().unwrap() = url.into();
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.write().unwrap().insert(name.into(), value.into());
    }
}

impl TemplateContext for MockContext {
    fn url(&self) -> String {
        self.url_return_value.read().unwrap().clone()
    }

    fn get(&self, name: &str) -> Option<serde_json::Value> {
        self.values.read().unwrap().get(name).cloned()
    }
}
