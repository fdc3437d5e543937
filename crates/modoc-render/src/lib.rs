//! Rendering for module documentation: inline markup translation, output
//! layouts, and template-driven page rendering.

/// Domain-specific errors for the renderer.
pub mod error;
/// Supported document formats and their output file layouts.
pub mod format;
/// Inline markup translation (`I()`, `B()`, `M()`, `U()`, `C()`).
pub mod markup;
/// Template environment and page rendering.
pub mod template;

// Re-export public API
pub use error::{RenderError, Result};
pub use format::{DocFormat, OutputLayout, category_title};
pub use markup::{Dialect, escape_html, html_ify, rst_ify};
pub use template::PageRenderer;
