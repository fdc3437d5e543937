use once_cell::sync::Lazy;
use regex::Regex;

static ITALIC: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"I\(([^)]+)\)").expect("valid italic pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"B\(([^)]+)\)").expect("valid bold pattern"));
static MODULE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"M\(([^)]+)\)").expect("valid module pattern"));
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"U\(([^)]+)\)").expect("valid url pattern"));
static CONST: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"C\(([^)]+)\)").expect("valid constant pattern"));

/// Target markup dialect for inline marker translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
	/// reStructuredText inline markup.
	StructuredText,
	/// HTML inline markup.
	Hypertext,
}

impl Dialect {
	/// Translate every inline marker in `text` into this dialect.
	pub fn translate(self, text: &str) -> String {
		match self {
			Self::StructuredText => rst_ify(text),
			Self::Hypertext => html_ify(text),
		}
	}
}

/// Convert markers like `I(this is in italics)` into reStructuredText.
pub fn rst_ify(text: &str) -> String {
	let text = ITALIC.replace_all(text, "*${1}*");
	let text = BOLD.replace_all(&text, "**${1}**");
	let text = MODULE.replace_all(&text, "`${1}`");
	let text = URL.replace_all(&text, "${1}");
	CONST.replace_all(&text, "`${1}`").into_owned()
}

/// Convert markers like `I(this is in italics)` into HTML.
///
/// The whole input is escaped first, so literal `<`, `>` and `&` never leak
/// into the tag structure produced by the substitutions.
pub fn html_ify(text: &str) -> String {
	let escaped = escape_html(text);
	let text = ITALIC.replace_all(&escaped, "<em>${1}</em>");
	let text = BOLD.replace_all(&text, "<b>${1}</b>");
	let text = MODULE.replace_all(&text, r#"<span class="module">${1}</span>"#);
	let text = URL.replace_all(&text, r#"<a href="${1}">${1}</a>"#);
	CONST.replace_all(&text, "<code>${1}</code>").into_owned()
}

/// Escape the characters HTML reserves for markup.
///
/// Quotes are left as they are; generated attributes only ever carry `U()` targets.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn rst_markers() {
		assert_eq!(rst_ify("I(foo)"), "*foo*");
		assert_eq!(rst_ify("B(foo)"), "**foo**");
		assert_eq!(rst_ify("M(foo)"), "`foo`");
		assert_eq!(rst_ify("U(http://example.com)"), "http://example.com");
		assert_eq!(rst_ify("C(foo)"), "`foo`");
	}

	#[test]
	fn html_markers() {
		assert_eq!(html_ify("I(foo)"), "<em>foo</em>");
		assert_eq!(html_ify("B(foo)"), "<b>foo</b>");
		assert_eq!(html_ify("M(foo)"), r#"<span class="module">foo</span>"#);
		assert_eq!(
			html_ify("U(http://example.com)"),
			r#"<a href="http://example.com">http://example.com</a>"#
		);
		assert_eq!(html_ify("C(foo)"), "<code>foo</code>");
	}

	#[test]
	fn plain_text_is_untouched() {
		let text = "set the state to present (default) or absent";
		assert_eq!(rst_ify(text), text);
		assert_eq!(html_ify(text), text);
	}

	#[test]
	fn html_escapes_before_substitution() {
		assert_eq!(html_ify("<I(x)>"), "&lt;<em>x</em>&gt;");
		assert_eq!(html_ify("a & b < c"), "a &amp; b &lt; c");
		assert_eq!(html_ify("C(a<b)"), "<code>a&lt;b</code>");
	}

	#[test]
	fn quotes_are_not_escaped() {
		assert_eq!(escape_html(r#"say "hi" & 'bye'"#), r#"say "hi" &amp; 'bye'"#);
	}

	#[test]
	fn capture_stops_at_first_closing_paren() {
		assert_eq!(rst_ify("I(a) and B(b)"), "*a* and **b**");
		assert_eq!(rst_ify("C(f(x))"), "`f(x`)");
	}

	#[test]
	fn malformed_markers_pass_through() {
		assert_eq!(rst_ify("I() and B(unterminated"), "I() and B(unterminated");
		assert_eq!(html_ify("I()"), "I()");
	}

	#[test]
	fn mixed_markers_in_one_line() {
		let text = "Use M(copy) with C(force=yes), see U(http://docs) for I(details).";
		assert_eq!(
			rst_ify(text),
			"Use `copy` with `force=yes`, see http://docs for *details*."
		);
		assert_eq!(Dialect::StructuredText.translate(text), rst_ify(text));
		assert_eq!(Dialect::Hypertext.translate(text), html_ify(text));
	}
}
