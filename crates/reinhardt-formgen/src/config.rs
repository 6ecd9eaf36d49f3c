//! Form engine settings.

use crate::error::FormgenResult;
use serde::Deserialize;

/// Separator placed between rendered field fragments.
pub const DEFAULT_SEPARATOR: &str = "<br>";

/// Settings for a [`FormEngine`](crate::FormEngine).
///
/// # Examples
///
/// ```
/// use reinhardt_formgen::FormConfig;
///
/// let config = FormConfig::from_toml_str(r#"separator = "\n""#).unwrap();
/// assert_eq!(config.separator, "\n");
///
/// assert_eq!(FormConfig::default().separator, "<br>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	pub separator: String,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			separator: DEFAULT_SEPARATOR.to_string(),
		}
	}
}

impl FormConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	/// Parse settings from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> FormgenResult<Self> {
		Ok(toml::from_str(source)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FormgenError;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_uses_defaults() {
		assert_eq!(FormConfig::from_toml_str("").unwrap(), FormConfig::default());
	}

	#[rstest]
	fn test_with_separator() {
		let config = FormConfig::new().with_separator("<hr>");
		assert_eq!(config.separator, "<hr>");
	}

	#[rstest]
	fn test_invalid_document() {
		let err = FormConfig::from_toml_str("separator = 5").unwrap_err();
		assert!(matches!(err, FormgenError::Config(_)));
	}
}
