use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SourceError};

/// Opening line of a documentation assignment, e.g. `DOCUMENTATION = '''`.
static BLOCK_START: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r#"^(DOCUMENTATION|EXAMPLES)\s*=\s*[rRuU]?('''|""")(.*)$"#)
		.expect("valid block start pattern")
});

/// Top-level `version_added` scalar as written, before YAML number coercion.
static VERSION_ADDED: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r#"(?m)^version_added:[ \t]*["']?([^"'\s#]+)"#)
		.expect("valid version_added pattern")
});

/// Documentation embedded in a module source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DocBlocks {
	/// Parsed `DOCUMENTATION` mapping.
	pub doc: Map<String, Value>,
	/// Raw `EXAMPLES` text, if the module has any.
	pub examples: Option<String>,
}

/// Read the documentation blocks of the module at `path`.
///
/// Returns `Ok(None)` when the file carries no `DOCUMENTATION` assignment.
pub fn read_docstring(path: &Path) -> Result<Option<DocBlocks>> {
	let source = fs::read_to_string(path).map_err(|err| SourceError::io(path, err))?;
	let raw = scan_blocks(&source).map_err(|message| SourceError::InvalidDocumentation {
		path: path.to_path_buf(),
		message,
	})?;

	let Some(documentation) = raw.documentation else {
		debug!(path = %path.display(), "no DOCUMENTATION block");
		return Ok(None);
	};
	debug!(
		path = %path.display(),
		has_examples = raw.examples.is_some(),
		"found DOCUMENTATION block"
	);

	let doc = parse_documentation(&documentation).map_err(|message| {
		SourceError::InvalidDocumentation {
			path: path.to_path_buf(),
			message,
		}
	})?;

	Ok(Some(DocBlocks {
		doc,
		examples: raw.examples,
	}))
}

#[derive(Debug, Default, PartialEq)]
struct RawBlocks {
	documentation: Option<String>,
	examples: Option<String>,
}

fn scan_blocks(source: &str) -> std::result::Result<RawBlocks, String> {
	let mut blocks = RawBlocks::default();
	let mut lines = source.lines();

	while let Some(line) = lines.next() {
		let Some(caps) = BLOCK_START.captures(line) else {
			continue;
		};
		let name = &caps[1];
		let quote = &caps[2];
		let rest = &caps[3];

		let body = if let Some(end) = rest.find(quote) {
			rest[..end].to_string()
		} else {
			let mut body: Vec<&str> = Vec::new();
			if !rest.is_empty() {
				body.push(rest);
			}
			let mut closed = false;
			for line in lines.by_ref() {
				if let Some(end) = line.find(quote) {
					body.push(&line[..end]);
					closed = true;
					break;
				}
				body.push(line);
			}
			if !closed {
				return Err(format!("unterminated {name} block"));
			}
			body.join("\n")
		};

		match name {
			"DOCUMENTATION" => blocks.documentation = Some(body),
			_ => blocks.examples = Some(body),
		}
	}

	Ok(blocks)
}

fn parse_documentation(text: &str) -> std::result::Result<Map<String, Value>, String> {
	match serde_yaml::from_str::<Value>(text) {
		Ok(Value::Object(mut map)) => {
			keep_version_text(&mut map, text);
			Ok(map)
		}
		Ok(other) => Err(format!("expected a mapping, found {}", kind_name(&other))),
		Err(err) => Err(err.to_string()),
	}
}

/// YAML reads an unquoted `1.10` as the float `1.1`; put back the text the author wrote.
fn keep_version_text(map: &mut Map<String, Value>, text: &str) {
	if !matches!(map.get("version_added"), Some(Value::Number(_))) {
		return;
	}
	if let Some(caps) = VERSION_ADDED.captures(text) {
		map.insert("version_added".into(), Value::from(&caps[1]));
	}
}

fn kind_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "nothing",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "a list",
		Value::Object(_) => "a mapping",
	}
}
