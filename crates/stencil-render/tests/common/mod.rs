use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use stencil_render::TemplateContext;

/// Path to a fixture under `tests/support`.
#[allow(dead_code)]
pub fn support(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/support")
        .join(name)
}

#[derive(Debug, Default)]
pub struct MockContext {
    pub url_return_value: Mutex<String>,
    pub values: Mutex<HashMap<String, serde_json::Value>>,
}

#[allow(dead_code)]
impl MockContext {
    pub fn set_url(&self, url: &str) {
        *self.url_return_value.lock().unwrap() = url.to_string();
    }

    pub fn set(&self, name: &str, value: impl Into<serde_json::Value>) {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.into());
    }
}

impl TemplateContext for MockContext {
    fn url(&self) -> String {
        self.url_return_value.lock().unwrap().clone()
    }

    fn get(&self, name: &str) -> Option<serde_json::Value> {
        self.values.lock().unwrap().get(name).cloned()
    }
}
