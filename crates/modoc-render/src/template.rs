use std::path::Path;

use minijinja::syntax::SyntaxConfig;
use minijinja::value::ValueKind;
use minijinja::{Environment, Value, path_loader};
use serde::Serialize;

use crate::error::Result;
use crate::format::OutputLayout;
use crate::markup::html_ify;

/// Renders module pages from a template directory using a fixed output layout.
///
/// Templates use `@{ ... }@` for variables so that `{{ }}` stays available as
/// literal text in generated documents. Blocks keep the usual `{% ... %}`
/// delimiters and trailing newlines after block tags are trimmed.
pub struct PageRenderer {
	env: Environment<'static>,
	layout: OutputLayout,
}

impl PageRenderer {
	/// Load the layout's template from `template_dir` and register the helper filters.
	pub fn new(template_dir: &Path, layout: OutputLayout) -> Result<Self> {
		let mut env = Environment::new();
		env.set_loader(path_loader(template_dir.to_path_buf()));
		env.set_syntax(
			SyntaxConfig::builder()
				.variable_delimiters("@{", "}@")
				.build()?,
		);
		env.set_trim_blocks(true);

		let dialect = layout.dialect;
		env.add_filter("convert_symbols_to_format", move |value: Value| {
			dialect.translate(&value_text(&value))
		});
		env.add_filter("html_ify", |value: Value| html_ify(&value_text(&value)));
		env.add_filter("fmt", fmt);
		env.add_filter("xline", xline);
		env.add_function("xline", xline);

		// Surface a missing or unparsable template before any module is processed.
		env.get_template(layout.template)?;

		Ok(Self { env, layout })
	}

	/// Layout this renderer produces.
	pub fn layout(&self) -> &OutputLayout {
		&self.layout
	}

	/// Render one page with `context` bound as the template's top-level variables.
	pub fn render<S: Serialize>(&self, context: &S) -> Result<String> {
		let template = self.env.get_template(self.layout.template)?;
		Ok(template.render(Value::from_serialize(context))?)
	}
}

/// Flatten a template value into plain text; sequences are joined with spaces.
fn value_text(value: &Value) -> String {
	if value.is_undefined() || value.is_none() {
		return String::new();
	}
	if let Some(text) = value.as_str() {
		return text.to_string();
	}
	if value.kind() == ValueKind::Seq {
		if let Ok(items) = value.try_iter() {
			return items
				.map(|item| value_text(&item))
				.collect::<Vec<_>>()
				.join(" ");
		}
	}
	value.to_string()
}

/// Substitute `value` for the first `%s` in `pattern`.
fn fmt(value: Value, pattern: String) -> String {
	pattern.replacen("%s", &value_text(&value), 1)
}

/// A heading rule of `width` characters, `=` unless another is given.
fn xline(width: usize, ch: Option<String>) -> String {
	ch.as_deref().unwrap_or("=").repeat(width)
}
