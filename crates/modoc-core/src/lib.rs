//! Core library for modoc, turning module metadata into documentation pages.
//!
//! This crate provides the high-level [`Modoc`] API, which walks a module tree,
//! extracts and validates each module's embedded documentation, renders one page
//! per module, and writes a listing per category plus a global index. It is
//! UI-agnostic; the command line front end lives in `modoc-cli`.

/// Documentation skeleton for new modules.
pub mod boilerplate;
/// Error helpers for the core API.
pub mod error;
/// Destinations for generated documents.
pub mod output;

use std::fs;
use std::path::{Path, PathBuf};

pub use modoc_render::{DocFormat, OutputLayout, PageRenderer, RenderError};
pub use modoc_source::{
	CategoryIndex, ExemptRegistry, ExtractContext, Extraction, ModuleRecord, SourceError,
	VersionTag,
};
use tracing::{debug, info};

pub use crate::boilerplate::boilerplate;
pub use crate::error::{ModocError, Result};
pub use crate::output::Sink;

/// Modoc renders documentation for every module below a module directory.
///
/// Modules live at `<module_dir>/<category>/<module>`. Each module file embeds
/// a YAML `DOCUMENTATION` block and an optional `EXAMPLES` block. A run is
/// fail-fast: the first module with missing or malformed documentation aborts
/// the whole build.
#[derive(Debug, Clone)]
pub struct Modoc {
	/// Root of the category/module tree.
	module_dir: PathBuf,

	/// Directory holding the page templates.
	template_dir: PathBuf,

	/// Requested document format.
	format: DocFormat,

	/// Where documents go; standard output when unset.
	output_dir: Option<PathBuf>,

	/// Optional file listing every rendered module.
	includes_file: Option<PathBuf>,

	/// Version string exposed to templates as `tool_version`.
	tool_version: String,

	/// Threshold below which `version_added` is dropped.
	notable: VersionTag,

	/// Modules allowed to lack documentation.
	exempt: ExemptRegistry,

	/// Fixed date stamp; today's date when unset.
	now_date: Option<String>,
}

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
	/// Categories that received a listing, in output order.
	pub categories: Vec<String>,
	/// Modules that received a page, in output order.
	pub rendered: Vec<String>,
	/// Modules that were exempt or not module files.
	pub skipped: Vec<String>,
}

enum ModuleOutcome {
	Rendered,
	Skipped,
}

impl Modoc {
	/// Creates a build over `module_dir` using templates from `template_dir`.
	///
	/// Defaults: reStructuredText output to standard output, tool version
	/// `unknown`, notability threshold `1.0`, built-in exempt modules.
	pub fn new(module_dir: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
		Self {
			module_dir: module_dir.into(),
			template_dir: template_dir.into(),
			format: DocFormat::Rst,
			output_dir: None,
			includes_file: None,
			tool_version: "unknown".to_string(),
			notable: VersionTag::DEFAULT_NOTABLE,
			exempt: ExemptRegistry::new(),
			now_date: None,
		}
	}

	/// Selects the document format to produce.
	pub fn with_format(mut self, format: DocFormat) -> Self {
		self.format = format;
		self
	}

	/// Writes documents into `output_dir` instead of standard output.
	pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
		self.output_dir = output_dir;
		self
	}

	/// Records every rendered module in an includes file.
	pub fn with_includes_file(mut self, includes_file: Option<PathBuf>) -> Self {
		self.includes_file = includes_file;
		self
	}

	/// Sets the version string shown on generated pages.
	pub fn with_tool_version(mut self, tool_version: impl Into<String>) -> Self {
		self.tool_version = tool_version.into();
		self
	}

	/// Sets the version below which `version_added` annotations are dropped.
	pub fn with_notable_version(mut self, notable: VersionTag) -> Self {
		self.notable = notable;
		self
	}

	/// Replaces the registry of modules allowed to lack documentation.
	pub fn with_exempt(mut self, exempt: ExemptRegistry) -> Self {
		self.exempt = exempt;
		self
	}

	/// Pins the `now_date` stamp instead of using today's date.
	pub fn with_date(mut self, now_date: impl Into<String>) -> Self {
		self.now_date = Some(now_date.into());
		self
	}

	/// Check that the module and template directories exist.
	pub fn validate(&self) -> Result<()> {
		if !self.module_dir.is_dir() {
			return Err(ModocError::Configuration(format!(
				"module directory does not exist: {}",
				self.module_dir.display()
			)));
		}
		if !self.template_dir.is_dir() {
			return Err(ModocError::Configuration(format!(
				"template directory does not exist: {}",
				self.template_dir.display()
			)));
		}
		Ok(())
	}

	/// Discover the category tree without rendering anything.
	pub fn discover(&self) -> Result<CategoryIndex> {
		Ok(modoc_source::discover_modules(&self.module_dir)?)
	}

	/// Run the whole build: every module page, every category listing, the index,
	/// and the includes file when one was requested.
	pub fn run(&self) -> Result<BuildSummary> {
		let layout = self.format.layout()?;
		self.validate()?;
		let renderer = PageRenderer::new(&self.template_dir, layout)?;
		let sink = Sink::open(self.output_dir.as_deref())?;
		let ctx = self.extract_context();
		let categories = self.discover()?;

		let mut summary = BuildSummary::default();
		for (category, modules) in &categories {
			let listing = layout.category_filename(category);
			info!(
				category = %category,
				path = %sink.location(&listing).display(),
				"recording category"
			);

			let mut listed = Vec::new();
			for (module, path) in modules {
				match self.process_module(module, path, &renderer, &ctx, &sink)? {
					ModuleOutcome::Rendered => {
						listed.push(module.clone());
						summary.rendered.push(module.clone());
					}
					ModuleOutcome::Skipped => summary.skipped.push(module.clone()),
				}
			}

			sink.write(&listing, &layout.category_listing(category, &listed))?;
			summary.categories.push(category.clone());
		}

		sink.write(
			&layout.index_filename(),
			&layout.index_listing(&summary.categories),
		)?;

		if let Some(includes_file) = &self.includes_file {
			write_includes(includes_file, &layout, &summary.rendered)?;
		}

		Ok(summary)
	}

	fn process_module(
		&self,
		module: &str,
		path: &Path,
		renderer: &PageRenderer,
		ctx: &ExtractContext,
		sink: &Sink,
	) -> Result<ModuleOutcome> {
		// Files with an extension are helpers or data, not modules.
		if module.contains('.') {
			debug!(module, "ignoring file with extension");
			return Ok(ModuleOutcome::Skipped);
		}

		info!(module, "rendering");
		let record = match modoc_source::extract_module(module, path, ctx)? {
			Extraction::Documented(record) => record,
			Extraction::Skipped => return Ok(ModuleOutcome::Skipped),
		};

		let text = renderer.render(&record.doc)?;
		sink.write(&renderer.layout().page_filename(module), &text)?;
		Ok(ModuleOutcome::Rendered)
	}

	fn extract_context(&self) -> ExtractContext {
		let now_date = self
			.now_date
			.clone()
			.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
		ExtractContext {
			tool_version: self.tool_version.clone(),
			notable: self.notable,
			now_date,
			exempt: self.exempt.clone(),
		}
	}
}

fn write_includes(path: &Path, layout: &OutputLayout, modules: &[String]) -> Result<()> {
	let text: String = modules
		.iter()
		.map(|module| layout.include_line(module))
		.collect();
	fs::write(path, text).map_err(|source| ModocError::Io {
		path: path.to_path_buf(),
		source,
	})
}
