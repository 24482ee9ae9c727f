//! Built-in docset templates and directory overrides.

use minijinja::{Environment, Value, context};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::error::DocsetError;
use crate::domain::Month;
use crate::infra::FsError;
use crate::markdown::escaped_html;

/// Default template for a rendered note. Field: `markdown_output`.
pub const DEFAULT_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; line-height: 1.5; max-width: 48em; margin: 1em auto; padding: 0 1em; }
        pre, code { font-family: ui-monospace, Menlo, monospace; }
        pre { background: #f6f8fa; padding: 0.75em; overflow-x: auto; }
        table { border-collapse: collapse; }
        th, td { border: 1px solid #d0d7de; padding: 0.25em 0.5em; }
        img { max-width: 100%; }
    </style>
</head>
<body>
<article>
{{ markdown_output }}
</article>
</body>
</html>
"##;

/// Default overview page. Field: `items` (months, newest first).
pub const DEFAULT_MAIN_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Notes</title>
</head>
<body>
    <h1>Notes</h1>
    {% for month in items %}
    <section class="month">
        <h2>{{ month.name | e }}</h2>
        <ul>
        {% for day in month.days %}
            <li><a href="{{ day.file_name | e }}">{{ day.name | e }}</a>{% if day.description %} <span class="description">{{ day.description | e }}</span>{% endif %}</li>
        {% endfor %}
        </ul>
    </section>
    {% endfor %}
</body>
</html>
"##;

/// Default navigation frame. Field: `months`.
pub const DEFAULT_TOC_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Contents</title>
</head>
<body>
    {% for month in months %}
    <h3>{{ month.name | e }}</h3>
    <ul>
    {% for day in month.days %}
        <li><a href="{{ day.file_name | e }}" target="content">{{ day.name | e }}</a></li>
    {% endfor %}
    </ul>
    {% endfor %}
</body>
</html>
"##;

/// Default frameset. Field: `current` (the page shown first).
pub const DEFAULT_FRAMESET_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Notes</title>
</head>
<frameset cols="20%,80%">
    <frame src="toc.html" name="toc">
    <frame src="{{ current | e }}" name="content">
</frameset>
</html>
"##;

/// Default docset manifest. Fields: `bundle_identifier`, `bundle_name`.
pub const DEFAULT_MANIFEST_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>{{ bundle_identifier | e }}</string>
    <key>CFBundleName</key>
    <string>{{ bundle_name | e }}</string>
    <key>DocSetPlatformFamily</key>
    <string>{{ bundle_identifier | e }}</string>
    <key>isDashDocset</key>
    <true/>
    <key>dashIndexFilePath</key>
    <string>index.html</string>
</dict>
</plist>
"##;

/// The templates a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Page,
    Main,
    Toc,
    Frameset,
    Manifest,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Page,
        TemplateKind::Main,
        TemplateKind::Toc,
        TemplateKind::Frameset,
        TemplateKind::Manifest,
    ];

    /// Template name inside the environment.
    ///
    /// Names carry no extension so minijinja never auto-escapes; templates
    /// escape inserted text with `| e` themselves (see `escape_filter`).
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Page => "page",
            TemplateKind::Main => "main",
            TemplateKind::Toc => "toc",
            TemplateKind::Frameset => "index",
            TemplateKind::Manifest => "plist",
        }
    }

    /// File name that overrides this template in a templates directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Page => "page.html",
            TemplateKind::Main => "main.html",
            TemplateKind::Toc => "toc.html",
            TemplateKind::Frameset => "index.html",
            TemplateKind::Manifest => "Info.plist",
        }
    }

    fn builtin(self) -> &'static str {
        match self {
            TemplateKind::Page => DEFAULT_PAGE_TEMPLATE,
            TemplateKind::Main => DEFAULT_MAIN_TEMPLATE,
            TemplateKind::Toc => DEFAULT_TOC_TEMPLATE,
            TemplateKind::Frameset => DEFAULT_FRAMESET_TEMPLATE,
            TemplateKind::Manifest => DEFAULT_MANIFEST_TEMPLATE,
        }
    }
}

/// Docset manifest values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub bundle_identifier: String,
    pub bundle_name: String,
}

/// Compiled templates for every [`TemplateKind`].
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Loads the built-in templates.
    pub fn builtin() -> Result<Self, DocsetError> {
        Self::load(None)
    }

    /// Loads the templates, preferring files found in `overrides`.
    ///
    /// Every template is compiled up front, so a broken override fails the
    /// render before the output tree is touched.
    pub fn load(overrides: Option<&Path>) -> Result<Self, DocsetError> {
        let mut env = Environment::new();
        env.add_filter("e", escape_filter);
        env.add_filter("escape", escape_filter);
        for kind in TemplateKind::ALL {
            let source = match overrides.map(|dir| dir.join(kind.file_name())) {
                Some(path) if path.is_file() => {
                    debug!(template = kind.name(), path = %path.display(), "using template override");
                    std::fs::read_to_string(&path).map_err(|e| FsError::from_io(&path, e))?
                }
                _ => kind.builtin().to_string(),
            };
            env.add_template_owned(kind.name(), source)
                .map_err(|e| DocsetError::template(kind.name(), e))?;
        }
        Ok(Self { env })
    }

    /// Wraps a rendered note body in the page template.
    pub fn render_page(&self, body: &str) -> Result<String, DocsetError> {
        self.render(TemplateKind::Page, context! { markdown_output => body })
    }

    /// Renders the overview page.
    pub fn render_main(&self, months: &[Month]) -> Result<String, DocsetError> {
        self.render(TemplateKind::Main, context! { items => months })
    }

    /// Renders the navigation frame.
    pub fn render_toc(&self, months: &[Month]) -> Result<String, DocsetError> {
        self.render(TemplateKind::Toc, context! { months => months })
    }

    /// Renders the frameset pointing at `current`.
    pub fn render_frameset(&self, current: &str) -> Result<String, DocsetError> {
        self.render(TemplateKind::Frameset, context! { current => current })
    }

    /// Renders `Info.plist`.
    pub fn render_manifest(&self, manifest: &Manifest) -> Result<String, DocsetError> {
        self.render(TemplateKind::Manifest, Value::from_serialize(manifest))
    }

    fn render(&self, kind: TemplateKind, ctx: Value) -> Result<String, DocsetError> {
        self.env
            .get_template(kind.name())
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(|e| DocsetError::template(kind.name(), e))
    }
}

/// The `e`/`escape` filter: escapes `&`, `<`, `>` and `"` only, so `/` in
/// link paths stays literal.
fn escape_filter(value: &Value) -> Value {
    if value.is_safe() {
        return value.clone();
    }
    let escaped = match value.as_str() {
        Some(text) => escaped_html(text),
        None => escaped_html(&value.to_string()),
    };
    Value::from_safe_string(escaped)
}
