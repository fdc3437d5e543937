//! Integration tests walking a module tree and extracting every module.
use std::fs;
use std::path::Path;

use modoc_source::{
	ExemptRegistry, ExtractContext, Extraction, SourceError, VersionTag, discover_modules,
	extract_module,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_module(root: &Path, category: &str, module: &str, body: &str) {
	let dir = root.join(category);
	fs::create_dir_all(&dir).unwrap();
	fs::write(dir.join(module), body).unwrap();
}

fn documented(version: &str, options: &[&str]) -> String {
	let mut doc = format!("DOCUMENTATION = '''\nversion_added: \"{version}\"\noptions:\n");
	for option in options {
		doc.push_str(&format!("  {option}:\n    description: the {option}\n"));
	}
	doc.push_str("'''\n");
	doc
}

fn context() -> ExtractContext {
	ExtractContext {
		tool_version: "1.3".to_string(),
		notable: VersionTag::DEFAULT_NOTABLE,
		now_date: "2013-08-15".to_string(),
		exempt: ExemptRegistry::new(),
	}
}

#[test]
fn extracts_every_discovered_module() {
	let temp_dir = TempDir::new().unwrap();
	let root = temp_dir.path();
	write_module(root, "net", "get_url", &documented("0.6", &["url", "dest"]));
	write_module(root, "net", "uri", &documented("1.1", &["url", "method", "body"]));
	write_module(root, "utilities", "async_wrapper", "#!/usr/bin/python\n");

	let index = discover_modules(root).unwrap();
	let mut rendered = Vec::new();
	let mut skipped = Vec::new();
	for modules in index.values() {
		for (name, path) in modules {
			match extract_module(name, path, &context()).unwrap() {
				Extraction::Documented(record) => rendered.push(record),
				Extraction::Skipped => skipped.push(name.clone()),
			}
		}
	}

	let names: Vec<&str> = rendered.iter().map(|r| r.module_name.as_str()).collect();
	assert_eq!(names, vec!["get_url", "uri"]);
	assert_eq!(skipped, vec!["async_wrapper".to_string()]);

	assert!(!rendered[0].doc.contains_key("version_added"));
	assert_eq!(rendered[1].doc["version_added"], "1.1");
	assert_eq!(
		rendered[1].doc["option_keys"],
		serde_json::json!(["body", "method", "url"])
	);
}

#[test]
fn undocumented_core_module_names_file_and_module() {
	let temp_dir = TempDir::new().unwrap();
	write_module(temp_dir.path(), "system", "service", "#!/usr/bin/python\n");

	let index = discover_modules(temp_dir.path()).unwrap();
	let path = &index["system"]["service"];
	let err = extract_module("service", path, &context()).unwrap_err();

	assert!(matches!(err, SourceError::MissingDocumentation { .. }));
	let message = err.to_string();
	assert!(message.contains("service"));
	assert!(message.contains(&path.display().to_string()));
}
