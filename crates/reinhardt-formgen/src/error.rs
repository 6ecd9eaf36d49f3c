//! Error types for form generation and binding.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Underlying parse failure of a numeric coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error(transparent)]
	Int(#[from] ParseIntError),
	#[error(transparent)]
	Float(#[from] ParseFloatError),
	/// Unsigned fields take bare digits only.
	#[error("sign prefix is not permitted in an unsigned value")]
	SignPrefix,
}

/// Errors produced while rendering or binding a form.
#[derive(Debug, Error)]
pub enum FormgenError {
	/// A field slated for rendering holds a value type outside the supported set.
	#[error("Field type '{type_name}' of field '{field}' is not available")]
	UnsupportedFieldType {
		/// Field key of the offending field.
		field: String,
		/// Rust type name of the offending field.
		type_name: String,
	},

	/// No renderer exists for the declared kind.
	#[error("no renderer for field kind '{kind}'")]
	RenderDispatch {
		/// The unrecognised kind.
		kind: String,
	},

	/// A submitted value could not be parsed into the numeric target field.
	#[error("cannot coerce value {value:?} for field '{field}': {source}")]
	Coercion {
		/// Field key the value was submitted under.
		field: String,
		/// The submitted value.
		value: String,
		#[source]
		source: ParseError,
	},

	/// An urlencoded request body could not be decoded.
	#[error("invalid form data: {0}")]
	InvalidFormData(#[from] serde_urlencoded::de::Error),

	/// A configuration document could not be parsed.
	#[error("invalid form configuration: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type alias for form operations.
pub type FormgenResult<T> = Result<T, FormgenError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unsupported_field_type_message() {
		let error = FormgenError::UnsupportedFieldType {
			field: "duration".to_string(),
			type_name: "Duration".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Field type 'Duration' of field 'duration' is not available"
		);
	}

	#[rstest]
	fn test_render_dispatch_message_names_kind() {
		let error = FormgenError::RenderDispatch {
			kind: "textarea".to_string(),
		};
		assert!(error.to_string().contains("textarea"));
	}

	#[rstest]
	fn test_coercion_error_keeps_source() {
		let source: ParseError = "abc".parse::<i64>().unwrap_err().into();
		let error = FormgenError::Coercion {
			field: "age".to_string(),
			value: "abc".to_string(),
			source,
		};
		assert!(std::error::Error::source(&error).is_some());
		assert!(error.to_string().starts_with("cannot coerce value \"abc\" for field 'age'"));
	}

	#[rstest]
	fn test_sign_prefix_message() {
		let error = FormgenError::Coercion {
			field: "age".to_string(),
			value: "+5".to_string(),
			source: ParseError::SignPrefix,
		};
		assert_eq!(
			error.to_string(),
			"cannot coerce value \"+5\" for field 'age': sign prefix is not permitted in an unsigned value"
		);
	}
}
