use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SourceError};

/// Category name -> (module name -> module file), both levels in name order.
pub type CategoryIndex = BTreeMap<String, BTreeMap<String, PathBuf>>;

/// Index the module files under `root`.
///
/// Only `root/<category>/<module>` regular files are considered. Files directly
/// under `root`, directories at the module level and anything nested deeper are
/// ignored, as are hidden entries. Categories without module files are omitted.
pub fn discover_modules(root: &Path) -> Result<CategoryIndex> {
	let root = std::path::absolute(root).map_err(|err| SourceError::io(root, err))?;
	let mut categories = CategoryIndex::new();

	for category_dir in visible_entries(&root)? {
		if !category_dir.is_dir() {
			continue;
		}
		let Some(category) = file_name(&category_dir) else {
			continue;
		};

		for module_path in visible_entries(&category_dir)? {
			if !module_path.is_file() {
				continue;
			}
			let Some(module) = file_name(&module_path) else {
				continue;
			};
			debug!(category = %category, module = %module, "discovered module");
			categories
				.entry(category.clone())
				.or_default()
				.insert(module, module_path);
		}
	}

	Ok(categories)
}

fn visible_entries(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut paths = Vec::new();
	for entry in fs::read_dir(dir).map_err(|err| SourceError::io(dir, err))? {
		let entry = entry.map_err(|err| SourceError::io(dir, err))?;
		if entry.file_name().to_string_lossy().starts_with('.') {
			continue;
		}
		paths.push(entry.path());
	}
	Ok(paths)
}

fn file_name(path: &Path) -> Option<String> {
	path.file_name()
		.map(|name| name.to_string_lossy().into_owned())
}
