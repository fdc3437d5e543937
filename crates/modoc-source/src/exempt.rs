use std::collections::BTreeSet;

/// Modules that are internal helpers and intentionally ship without documentation.
const DEFAULT_EXEMPT: &[&str] = &["async_wrapper", "accelerate", "async_status"];

/// Set of module names allowed to have no documentation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemptRegistry {
	modules: BTreeSet<String>,
}

impl Default for ExemptRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ExemptRegistry {
	/// Registry holding the built-in exempt modules.
	pub fn new() -> Self {
		Self {
			modules: DEFAULT_EXEMPT.iter().map(|name| name.to_string()).collect(),
		}
	}

	/// Registry with no exempt modules at all.
	pub fn empty() -> Self {
		Self {
			modules: BTreeSet::new(),
		}
	}

	/// Add more exempt module names.
	pub fn with_modules<I, S>(mut self, modules: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.modules.extend(modules.into_iter().map(Into::into));
		self
	}

	/// Whether `module` may lack documentation.
	pub fn contains(&self, module: &str) -> bool {
		self.modules.contains(module)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_and_extensions() {
		let registry = ExemptRegistry::new().with_modules(["legacy_shim"]);
		assert!(registry.contains("async_wrapper"));
		assert!(registry.contains("legacy_shim"));
		assert!(!registry.contains("ping"));
		assert!(!ExemptRegistry::empty().contains("async_status"));
	}
}
