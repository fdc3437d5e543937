use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `major.minor` version, compared component-wise.
///
/// Only the first two dot-separated components of a version string are
/// significant: `1.2.3` parses as `1.2`, and a bare `2` as `2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTag {
	/// Major component.
	pub major: u64,
	/// Minor component.
	pub minor: u64,
}

/// The version string did not start with numeric components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version '{0}': expected MAJOR[.MINOR]")]
pub struct ParseVersionError(pub String);

impl VersionTag {
	/// Versions older than this are not worth calling out by default.
	pub const DEFAULT_NOTABLE: Self = Self::new(1, 0);

	/// Build a version from its components.
	pub const fn new(major: u64, minor: u64) -> Self {
		Self { major, minor }
	}

	/// Whether a module added in this version deserves an "added in" note.
	pub fn is_notable(&self, threshold: &VersionTag) -> bool {
		self >= threshold
	}
}

impl Default for VersionTag {
	fn default() -> Self {
		Self::DEFAULT_NOTABLE
	}
}

impl FromStr for VersionTag {
	type Err = ParseVersionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ParseVersionError(s.to_string());
		let mut parts = s.trim().split('.');
		let major = parts
			.next()
			.and_then(|part| part.parse().ok())
			.ok_or_else(invalid)?;
		let minor = match parts.next() {
			Some(part) => part.parse().map_err(|_| invalid())?,
			None => 0,
		};
		Ok(Self { major, minor })
	}
}

impl fmt::Display for VersionTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}
