//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::context::join_url;

/// Registers the built-in filters on a MiniJinja environment.
///
/// - `nl`: appends a newline. `{{ "" | nl }}` emits a blank line.
/// - `url_join`: joins two URL parts with one `/`, as in
///   `{{ context.url() | url_join("edit") }}`.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("url_join", |base: String, path: String| -> String {
        join_url(&base, &path)
    });
}
