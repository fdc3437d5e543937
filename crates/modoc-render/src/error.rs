use std::fmt;

use minijinja::Error as TemplateError;

/// Errors emitted while preparing templates or rendering pages.
#[derive(Debug)]
pub enum RenderError {
	/// The requested document format has no renderer.
	UnsupportedFormat(String),
	/// Template loading, syntax, or evaluation failure.
	Template(TemplateError),
}

impl fmt::Display for RenderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnsupportedFormat(name) => write!(f, "unknown module format type: {name}"),
			Self::Template(err) => write!(f, "template error: {err}"),
		}
	}
}

impl std::error::Error for RenderError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::UnsupportedFormat(_) => None,
			Self::Template(err) => Some(err),
		}
	}
}

impl From<TemplateError> for RenderError {
	fn from(err: TemplateError) -> Self {
		Self::Template(err)
	}
}

/// Result type returned by renderer helpers.
pub type Result<T> = std::result::Result<T, RenderError>;
