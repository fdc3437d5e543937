use std::fmt;
use std::io;
use std::path::PathBuf;

use modoc_render::RenderError;
use modoc_source::SourceError;

/// Aggregate errors produced by a documentation build.
#[derive(Debug)]
pub enum ModocError {
	/// Invalid or missing paths supplied by the caller.
	Configuration(String),
	/// Errors raised while discovering or extracting modules.
	Source(SourceError),
	/// Errors raised while preparing templates or rendering pages.
	Render(RenderError),
	/// Failed to write a generated document.
	Io {
		/// Destination being written.
		path: PathBuf,
		/// Underlying I/O failure.
		source: io::Error,
	},
}

impl fmt::Display for ModocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Configuration(message) => write!(f, "{message}"),
			Self::Source(err) => write!(f, "{err}"),
			Self::Render(err) => write!(f, "{err}"),
			Self::Io { path, source } => {
				write!(f, "failed to write {}: {source}", path.display())
			}
		}
	}
}

impl std::error::Error for ModocError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Configuration(_) => None,
			Self::Source(err) => Some(err),
			Self::Render(err) => Some(err),
			Self::Io { source, .. } => Some(source),
		}
	}
}

impl From<SourceError> for ModocError {
	fn from(err: SourceError) -> Self {
		Self::Source(err)
	}
}

impl From<RenderError> for ModocError {
	fn from(err: RenderError) -> Self {
		Self::Render(err)
	}
}

/// Result type returned by the modoc-core library.
pub type Result<T> = std::result::Result<T, ModocError>;
