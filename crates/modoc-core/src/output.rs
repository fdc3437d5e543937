use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{ModocError, Result};

/// Destination for generated documents.
///
/// Every document is written as UTF-8, whether it lands in a file or on
/// standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
	/// Write each document to its own file inside this directory.
	Directory(PathBuf),
	/// Print each document to standard output.
	Stdout,
}

impl Sink {
	/// Open a sink for `output_dir`, creating the directory when needed.
	pub fn open(output_dir: Option<&Path>) -> Result<Self> {
		match output_dir {
			Some(dir) => {
				fs::create_dir_all(dir).map_err(|source| ModocError::Io {
					path: dir.to_path_buf(),
					source,
				})?;
				Ok(Self::Directory(dir.to_path_buf()))
			}
			None => Ok(Self::Stdout),
		}
	}

	/// Where a document called `name` ends up, for diagnostics.
	pub fn location(&self, name: &str) -> PathBuf {
		match self {
			Self::Directory(dir) => dir.join(name),
			Self::Stdout => PathBuf::from("<stdout>"),
		}
	}

	/// Write the document `name`, replacing any previous file of that name.
	pub fn write(&self, name: &str, text: &str) -> Result<()> {
		let io_error = |source| ModocError::Io {
			path: self.location(name),
			source,
		};
		match self {
			Self::Directory(dir) => fs::write(dir.join(name), text).map_err(io_error),
			Self::Stdout => {
				let mut out = io::stdout().lock();
				out.write_all(text.as_bytes()).map_err(io_error)?;
				if !text.ends_with('\n') {
					out.write_all(b"\n").map_err(io_error)?;
				}
				out.flush().map_err(io_error)
			}
		}
	}
}
