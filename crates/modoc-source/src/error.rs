use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while discovering modules or extracting their metadata.
#[derive(Debug, Error)]
pub enum SourceError {
	/// A directory or file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Path being read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},
	/// The module has no documentation block and is not exempt.
	#[error("core module missing documentation: {}, {module}", .path.display())]
	MissingDocumentation {
		/// Module name.
		module: String,
		/// Source file.
		path: PathBuf,
	},
	/// The documentation block has no `version_added` field.
	#[error("missing version_added in: {module}")]
	MissingVersionInfo {
		/// Module name.
		module: String,
	},
	/// The documentation block has no `options` field.
	#[error("missing options in: {module}")]
	MissingOptions {
		/// Module name.
		module: String,
	},
	/// `version_added` is not a dotted numeric version.
	#[error("invalid version_added '{value}' in: {module}")]
	InvalidVersion {
		/// Module name.
		module: String,
		/// Offending value.
		value: String,
	},
	/// The documentation block is not a YAML mapping of the expected shape.
	#[error("malformed documentation in {}: {message}", .path.display())]
	InvalidDocumentation {
		/// Source file.
		path: PathBuf,
		/// What was wrong with it.
		message: String,
	},
}

impl SourceError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

/// Result type returned by module source helpers.
pub type Result<T> = std::result::Result<T, SourceError>;
