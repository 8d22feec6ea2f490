mod common;

use std::sync::Arc;

use common::{support, MockContext};
use stencil_render::{RenderConfig, RenderError, Renderer, Template};

#[test]
fn render_includes_file_and_returns_output() {
    let context = Arc::new(MockContext::default());
    let template = Template::new("tests/support/hello_world.tpl");
    let output = template.render(&context).unwrap();
    assert_eq!(output, "hello world");
}

#[test]
fn render_doesnt_output_directly() {
    let context = Arc::new(MockContext::default());
    let template = Template::new(support("hello_world.tpl"));

    let mut stream: Vec<u8> = b"existing|".to_vec();
    template.render_to(&context, &mut stream).unwrap();
    assert_eq!(String::from_utf8(stream).unwrap(), "existing|hello world");
}

#[test]
fn render_to_writes_nothing_when_template_fails_midway() {
    let context = Arc::new(MockContext::default());
    let mut stream: Vec<u8> = Vec::new();
    let err = Template::new(support("broken.tpl"))
        .render_to(&context, &mut stream)
        .unwrap_err();
    assert!(matches!(err, RenderError::Template(_)));
    assert!(stream.is_empty());
}

#[test]
fn render_binds_url() {
    let context = Arc::new(MockContext::default());
    context.set_url("lorem-ipsum");
    let template = Template::new(support("url.tpl"));
    assert_eq!(template.render(&context).unwrap(), "lorem-ipsum");
}

#[test]
fn render_html_named_template_prints_url_unescaped() {
    let context = Arc::new(MockContext::default());
    context.set_url("/search?a=1&b=<x>");
    let output = Template::new(support("url.html")).render(&context).unwrap();
    assert_eq!(output, "/search?a=1&b=<x>");
}

#[test]
fn render_resolves_against_live_context() {
    let context = Arc::new(MockContext::default());
    let template = Template::new(support("url.tpl"));

    context.set_url("before");
    assert_eq!(template.render(&context).unwrap(), "before");
    context.set_url("after");
    assert_eq!(template.render(&context).unwrap(), "after");
}

#[test]
fn render_throw_on_file_not_found() {
    let context = Arc::new(MockContext::default());
    let template = Template::new("some/path/which/cant/possibly/exist/../or/so/i/hope");
    match template.render(&context) {
        Err(RenderError::TemplateNotFound { path, .. }) => {
            assert_eq!(
                path.to_str(),
                Some("some/path/which/cant/possibly/exist/../or/so/i/hope")
            );
        }
        other => panic!("expected TemplateNotFound, got {:?}", other),
    }
}

#[test]
fn render_to_writes_nothing_when_file_missing() {
    let context = Arc::new(MockContext::default());
    let mut stream: Vec<u8> = Vec::new();
    let err = Template::new(support("missing.tpl"))
        .render_to(&context, &mut stream)
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(stream.is_empty());
}

#[test]
fn render_empty_template() {
    let context = Arc::new(MockContext::default());
    assert_eq!(Template::new(support("empty.tpl")).render(&context).unwrap(), "");
}

#[test]
fn render_directory_is_not_found() {
    let context = Arc::new(MockContext::default());
    let err = Template::new(support("partials")).render(&context).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn render_twice_gives_same_output() {
    let context = Arc::new(MockContext::default());
    context.set_url("/same");
    let template = Template::new(support("url.tpl"));
    let first = template.render(&context).unwrap();
    let second = template.render(&context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn renderer_with_search_path_and_context_values() {
    let mut renderer = Renderer::new();
    renderer.add_search_path(support("")).unwrap();

    let context = Arc::new(MockContext::default());
    context.set_url("/posts/7");
    context.set("title", "Seven");

    let output = renderer.render("link.tpl", &context).unwrap();
    assert_eq!(output, "<a href=\"/posts/7/edit\">Seven</a>\n");
    assert_eq!(renderer.render("partials/nested.tpl", &context).unwrap(), "nested");
}

#[test]
fn renderer_from_yaml_config_with_simple_engine() {
    let yaml = format!(
        "search_paths:\n  - {}\nengine: simple\n",
        support("").display()
    );
    let config = RenderConfig::from_yaml(&yaml).unwrap();
    let renderer = Renderer::from_config(&config).unwrap();

    let context = Arc::new(MockContext::default());
    context.set_url("/plain");
    assert_eq!(renderer.render("url.txt", &context).unwrap(), "/plain");
}

#[test]
fn renderer_without_trailing_newline() {
    let config = RenderConfig {
        keep_trailing_newline: false,
        ..RenderConfig::default()
    };
    let renderer = Renderer::from_config(&config).unwrap();

    let context = Arc::new(MockContext::default());
    context.set_url("/x");
    context.set("title", "X");
    let output = renderer.render(support("link.tpl"), &context).unwrap();
    assert_eq!(output, "<a href=\"/x/edit\">X</a>");
}
