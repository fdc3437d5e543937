use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::docstring::read_docstring;
use crate::error::{Result, SourceError};
use crate::exempt::ExemptRegistry;
use crate::version::VersionTag;

/// Sentinel `version_added` value for modules older than version tracking.
const HISTORICAL: &str = "historical";

/// Documentation fields of a module, as parsed from its `DOCUMENTATION` block
/// plus the derived fields added during extraction.
pub type StructuredDoc = Map<String, Value>;

/// A module whose documentation passed validation and is ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRecord {
	/// Module name, taken from the file name.
	pub module_name: String,
	/// Source file the documentation came from.
	pub file_path: PathBuf,
	/// Validated documentation, including derived fields.
	pub doc: StructuredDoc,
	/// Plain-text examples; empty when the module has none.
	pub examples: String,
}

/// Outcome of extracting one module.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
	/// Documentation was found and validated.
	Documented(ModuleRecord),
	/// The module is exempt and has no documentation; it gets no page.
	Skipped,
}

/// Inputs shared by every extraction in a run.
#[derive(Debug, Clone)]
pub struct ExtractContext {
	/// Version string of the documented tool, exposed as `tool_version`.
	pub tool_version: String,
	/// `version_added` values below this are dropped.
	pub notable: VersionTag,
	/// Date stamp exposed as `now_date`.
	pub now_date: String,
	/// Modules allowed to lack documentation.
	pub exempt: ExemptRegistry,
}

/// Extract, validate and enrich the documentation of `module` at `path`.
///
/// Fails when a non-exempt module has no documentation, when `version_added`
/// or `options` are missing, or when the version is not numeric.
pub fn extract_module(module: &str, path: &Path, ctx: &ExtractContext) -> Result<Extraction> {
	let Some(blocks) = read_docstring(path)? else {
		if ctx.exempt.contains(module) {
			debug!(module, "skipping exempt module without documentation");
			return Ok(Extraction::Skipped);
		}
		return Err(SourceError::MissingDocumentation {
			module: module.to_string(),
			path: path.to_path_buf(),
		});
	};

	let mut doc = blocks.doc;
	strip_version(module, &mut doc, &ctx.notable)?;
	let option_keys = option_keys(module, path, &doc)?;
	let examples = blocks.examples.unwrap_or_default();

	doc.insert("option_keys".into(), Value::from(option_keys));
	doc.entry("module").or_insert_with(|| Value::from(module));
	doc.insert("filename".into(), Value::from(path.display().to_string()));
	doc.insert("docuri".into(), Value::from(module.replace('_', "-")));
	doc.insert("now_date".into(), Value::from(ctx.now_date.as_str()));
	doc.insert("tool_version".into(), Value::from(ctx.tool_version.as_str()));
	doc.insert("plainexamples".into(), Value::from(examples.as_str()));

	Ok(Extraction::Documented(ModuleRecord {
		module_name: module.to_string(),
		file_path: path.to_path_buf(),
		doc,
		examples,
	}))
}

/// Validate `version_added` and drop it when it is not worth showing.
fn strip_version(module: &str, doc: &mut StructuredDoc, notable: &VersionTag) -> Result<()> {
	let value = match doc.get("version_added") {
		None | Some(Value::Null) => {
			return Err(SourceError::MissingVersionInfo {
				module: module.to_string(),
			});
		}
		Some(Value::String(text)) => text.clone(),
		Some(Value::Number(number)) => number.to_string(),
		Some(other) => {
			return Err(SourceError::InvalidVersion {
				module: module.to_string(),
				value: other.to_string(),
			});
		}
	};

	if value == HISTORICAL {
		doc.remove("version_added");
		return Ok(());
	}

	let version: VersionTag = value.parse().map_err(|_| SourceError::InvalidVersion {
		module: module.to_string(),
		value: value.clone(),
	})?;
	if !version.is_notable(notable) {
		debug!(module, %version, %notable, "dropping version_added below threshold");
		doc.remove("version_added");
	}
	Ok(())
}

/// Sorted names of every documented option.
fn option_keys(module: &str, path: &Path, doc: &StructuredDoc) -> Result<Vec<String>> {
	let mut keys: Vec<String> = match doc.get("options") {
		None => {
			return Err(SourceError::MissingOptions {
				module: module.to_string(),
			});
		}
		Some(Value::Null) => Vec::new(),
		Some(Value::Object(options)) => options.keys().cloned().collect(),
		Some(_) => {
			return Err(SourceError::InvalidDocumentation {
				path: path.to_path_buf(),
				message: "options must be a mapping".to_string(),
			});
		}
	};
	keys.sort();
	Ok(keys)
}
