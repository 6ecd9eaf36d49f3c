//! Populating form structures from submitted values.
//!
//! Binding walks a structure's schema, looks up each field key in the
//! submitted [`FormData`] and writes a type-coerced value back into the
//! field. Only the first submitted value per key is used.
//!
//! Numeric coercion failures abort the bind. [`map_form`] keeps the writes
//! made before the failing field, while [`map_form_atomic`] stages every
//! coercion first and writes nothing unless all of them succeed.
//!
//! Boolean coercion of plain (non radio, non checkbox) fields never fails:
//! an unparsable value becomes `false`, unlike numeric fields.

use crate::error::{FormgenError, FormgenResult, ParseError};
use crate::field::{FieldKind, FieldModel};
use crate::form_data::{FormData, first_value};
use crate::schema::{FieldDescriptor, FormSchema, Schema};
use crate::value::{FieldValue, ValueKind};
use std::num::ParseIntError;

/// Checkbox value submitted by browsers for a checked box.
pub const CHECKBOX_ON: &str = "on";

/// Bind submitted values into `form`.
///
/// Fields already written before a failing field stay written.
///
/// # Examples
///
/// ```
/// use once_cell::sync::Lazy;
/// use reinhardt_formgen::{FieldMeta, FormData, FormSchema, Schema, map_form};
///
/// #[derive(Default)]
/// struct Search {
///     query: String,
///     page: u64,
/// }
///
/// static SCHEMA: Lazy<Schema<Search>> = Lazy::new(|| {
///     Schema::<Search>::builder("Search")
///         .field("query", FieldMeta::new("text", "q"), |s| &s.query, |s| &mut s.query)
///         .field("page", FieldMeta::new("hidden", "page"), |s| &s.page, |s| &mut s.page)
///         .build()
/// });
///
/// impl FormSchema for Search {
///     fn schema() -> &'static Schema<Self> {
///         &SCHEMA
///     }
/// }
///
/// let mut data = FormData::new();
/// data.insert("q".to_string(), vec!["rust".to_string()]);
/// data.insert("page".to_string(), vec!["".to_string()]);
///
/// let mut search = Search { page: 3, ..Search::default() };
/// map_form(&mut search, &data).unwrap();
/// assert_eq!(search.query, "rust");
/// assert_eq!(search.page, 0);
/// ```
pub fn map_form<T: FormSchema>(form: &mut T, data: &FormData) -> FormgenResult<()> {
	bind_schema(T::schema(), form, data)
}

/// Bind submitted values into `form`, writing nothing if any field fails.
pub fn map_form_atomic<T: FormSchema>(form: &mut T, data: &FormData) -> FormgenResult<()> {
	bind_schema_atomic(T::schema(), form, data)
}

/// Bind using an explicit schema.
pub fn bind_schema<T>(schema: &Schema<T>, form: &mut T, data: &FormData) -> FormgenResult<()> {
	let mut applied = 0_usize;

	for descriptor in schema.fields() {
		let Some(raw) = submitted_value(descriptor, data) else {
			continue;
		};
		let Some(slot) = descriptor.value_mut(form) else {
			continue;
		};

		FieldModel::new(descriptor.meta(), slot).set_value(raw)?;
		applied += 1;
	}

	tracing::debug!(form = schema.name(), applied, "bound form data");
	Ok(())
}

/// Bind using an explicit schema, staging all coercions before writing.
pub fn bind_schema_atomic<T>(
	schema: &Schema<T>,
	form: &mut T,
	data: &FormData,
) -> FormgenResult<()> {
	let mut staged = Vec::new();

	for (index, descriptor) in schema.fields().iter().enumerate() {
		let Some(raw) = submitted_value(descriptor, data) else {
			continue;
		};

		let kind = descriptor.value_kind();
		let model = FieldModel::new(descriptor.meta(), kind);
		if let Some(value) = coerce(&model, kind, raw)? {
			staged.push((index, value));
		}
	}

	let applied = staged.len();
	let fields = schema.fields();
	for (index, value) in staged {
		if let Some(slot) = fields[index].value_mut(form) {
			slot.assign(value);
		}
	}

	tracing::debug!(form = schema.name(), applied, "bound form data atomically");
	Ok(())
}

/// The first submitted value for a writable, included field.
fn submitted_value<'d, T>(descriptor: &FieldDescriptor<T>, data: &'d FormData) -> Option<&'d str> {
	if !descriptor.is_writable() {
		tracing::trace!(field = descriptor.name(), "skipping read-only field");
		return None;
	}

	let meta = descriptor.meta();
	if meta.is_excluded() {
		return None;
	}

	let raw = first_value(data, &meta.field_key);
	if raw.is_none() {
		tracing::trace!(field = %meta.field_key, "no submitted value");
	}
	raw
}

/// Coerce a submitted string into a value of the target kind.
///
/// Returns `Ok(None)` when the target kind cannot be bound.
pub fn coerce<V>(
	model: &FieldModel<'_, V>,
	target: ValueKind,
	raw: &str,
) -> FormgenResult<Option<FieldValue>> {
	let coercion_error = |source: ParseError| FormgenError::Coercion {
		field: model.field_key.to_string(),
		value: raw.to_string(),
		source,
	};

	let value = match target {
		ValueKind::Int { bits } => {
			let parsed = parse_signed(or_default(raw, "0"), bits)
				.map_err(|e| coercion_error(e.into()))?;
			FieldValue::Int(parsed)
		}
		ValueKind::Uint { bits } => {
			if raw.starts_with('+') {
				return Err(coercion_error(ParseError::SignPrefix));
			}
			let parsed = parse_unsigned(or_default(raw, "0"), bits)
				.map_err(|e| coercion_error(e.into()))?;
			FieldValue::Uint(parsed)
		}
		ValueKind::Float => {
			let parsed = or_default(raw, "0.0")
				.parse::<f64>()
				.map_err(|e| coercion_error(e.into()))?;
			FieldValue::Float(parsed)
		}
		ValueKind::Bool => FieldValue::Bool(coerce_bool(model, raw)),
		ValueKind::String => FieldValue::Str(raw.to_string()),
		ValueKind::Unsupported(type_name) => {
			tracing::trace!(field = model.field_key, type_name, "leaving unsupported field untouched");
			return Ok(None);
		}
	};

	Ok(Some(value))
}

fn coerce_bool<V>(model: &FieldModel<'_, V>, raw: &str) -> bool {
	if model.is_kind(FieldKind::Radio) {
		return raw == model.radio_option.value;
	}
	if model.is_kind(FieldKind::Checkbox) {
		return raw == CHECKBOX_ON;
	}

	match parse_bool(or_default(raw, "false")) {
		Some(value) => value,
		None => {
			// Unparsable booleans become false instead of failing the bind
			tracing::debug!(field = model.field_key, value = raw, "treating unparsable boolean as false");
			false
		}
	}
}

/// Parse at the field's width so out-of-range input fails like any other
/// malformed number.
fn parse_signed(raw: &str, bits: u32) -> Result<i64, ParseIntError> {
	match bits {
		8 => raw.parse::<i8>().map(i64::from),
		16 => raw.parse::<i16>().map(i64::from),
		32 => raw.parse::<i32>().map(i64::from),
		_ => raw.parse::<i64>(),
	}
}

fn parse_unsigned(raw: &str, bits: u32) -> Result<u64, ParseIntError> {
	match bits {
		8 => raw.parse::<u8>().map(u64::from),
		16 => raw.parse::<u16>().map(u64::from),
		32 => raw.parse::<u32>().map(u64::from),
		_ => raw.parse::<u64>(),
	}
}

fn or_default<'a>(raw: &'a str, default: &'a str) -> &'a str {
	if raw.is_empty() { default } else { raw }
}

/// Parse the permissive boolean spellings accepted from form submissions.
///
/// # Examples
///
/// ```
/// use reinhardt_formgen::bind::parse_bool;
///
/// assert_eq!(parse_bool("T"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
pub fn parse_bool(value: &str) -> Option<bool> {
	match value {
		"1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
		"0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
		_ => None,
	}
}
