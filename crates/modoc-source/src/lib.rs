//! Module source handling: discovering module files, reading their embedded
//! documentation blocks, and validating the metadata before rendering.

/// Category tree discovery.
pub mod discover;
/// Scanning sources for `DOCUMENTATION` and `EXAMPLES` blocks.
pub mod docstring;
/// Errors produced while reading module sources.
pub mod error;
/// Modules allowed to ship without documentation.
pub mod exempt;
/// Metadata extraction, validation and derived fields.
pub mod extract;
/// `version_added` parsing and notability checks.
pub mod version;

pub use discover::{CategoryIndex, discover_modules};
pub use docstring::{DocBlocks, read_docstring};
pub use error::{Result, SourceError};
pub use exempt::ExemptRegistry;
pub use extract::{ExtractContext, Extraction, ModuleRecord, StructuredDoc, extract_module};
pub use version::VersionTag;
