use std::fmt;
use std::str::FromStr;

use crate::error::{RenderError, Result};
use crate::markup::Dialect;

/// Document formats accepted on the command line.
///
/// Only [`DocFormat::Rst`] has a renderer; the others are recognised so they can
/// be rejected with a clear message before any module is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocFormat {
	/// HTML pages.
	Html,
	/// LaTeX sources.
	Latex,
	/// Man pages.
	Man,
	/// reStructuredText (default).
	Rst,
	/// JSON dumps.
	Json,
	/// Markdown pages.
	Markdown,
	/// JavaScript data.
	Js,
}

impl DocFormat {
	/// Every recognised format, in command-line order.
	pub const ALL: [Self; 7] = [
		Self::Html,
		Self::Latex,
		Self::Man,
		Self::Rst,
		Self::Json,
		Self::Markdown,
		Self::Js,
	];

	/// Lowercase name used on the command line and in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			Self::Html => "html",
			Self::Latex => "latex",
			Self::Man => "man",
			Self::Rst => "rst",
			Self::Json => "json",
			Self::Markdown => "markdown",
			Self::Js => "js",
		}
	}

	/// Resolve the output layout for this format, failing for formats without a renderer.
	pub fn layout(self) -> Result<OutputLayout> {
		match self {
			Self::Rst => Ok(OutputLayout {
				format: self,
				template: "rst.j2",
				extension: "rst",
				dialect: Dialect::StructuredText,
			}),
			other => Err(RenderError::UnsupportedFormat(other.name().to_string())),
		}
	}
}

impl fmt::Display for DocFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for DocFormat {
	type Err = RenderError;

	fn from_str(s: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|format| format.name() == s)
			.ok_or_else(|| RenderError::UnsupportedFormat(s.to_string()))
	}
}

/// File naming and listing conventions for one renderable format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
	/// Format this layout belongs to.
	pub format: DocFormat,
	/// Template file name, relative to the template directory.
	pub template: &'static str,
	/// Extension of every generated file.
	pub extension: &'static str,
	/// Inline markup dialect used by `convert_symbols_to_format`.
	pub dialect: Dialect,
}

impl OutputLayout {
	/// Reference slug for a module page, as used in listings.
	pub fn page_ref(&self, module: &str) -> String {
		format!("{module}_module")
	}

	/// File name of a module page.
	pub fn page_filename(&self, module: &str) -> String {
		format!("{}.{}", self.page_ref(module), self.extension)
	}

	/// Reference slug for a category listing.
	pub fn category_ref(&self, category: &str) -> String {
		format!("list_of_{category}_modules")
	}

	/// File name of a category listing.
	pub fn category_filename(&self, category: &str) -> String {
		format!("{}.{}", self.category_ref(category), self.extension)
	}

	/// File name of the top-level index.
	pub fn index_filename(&self) -> String {
		format!("modules_by_category.{}", self.extension)
	}

	/// Line written to the includes file for a rendered module.
	pub fn include_line(&self, module: &str) -> String {
		format!(".. include:: {}\n", self.page_filename(module))
	}

	/// Listing document for one category, linking each rendered module page.
	pub fn category_listing<S: AsRef<str>>(&self, category: &str, modules: &[S]) -> String {
		let header = format!("{} Modules", category_title(category));
		let entries: Vec<String> = modules
			.iter()
			.map(|module| self.page_ref(module.as_ref()))
			.collect();
		toctree(&header, '`', &entries)
	}

	/// Top-level index linking every category listing.
	pub fn index_listing<S: AsRef<str>>(&self, categories: &[S]) -> String {
		let entries: Vec<String> = categories
			.iter()
			.map(|category| self.category_ref(category.as_ref()))
			.collect();
		toctree("Module Index", '=', &entries)
	}
}

/// Human-facing title for a category directory name: `cloud_tools` -> `Cloud Tools`.
pub fn category_title(category: &str) -> String {
	category
		.split(|c: char| c == '_' || c.is_whitespace())
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

fn toctree(header: &str, underline: char, entries: &[String]) -> String {
	let mut output = String::new();
	output.push_str(header);
	output.push('\n');
	output.extend(std::iter::repeat_n(underline, header.chars().count()));
	output.push_str("\n\n");
	output.push_str(".. toctree::\n");
	output.push_str("   :maxdepth: 1\n");
	output.push('\n');
	for entry in entries {
		output.push_str("   ");
		output.push_str(entry);
		output.push('\n');
	}
	output
}
