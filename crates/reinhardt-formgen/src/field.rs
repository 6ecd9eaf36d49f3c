//! The canonical per-field model shared by rendering and binding.

use crate::codec::{RadioOption, SelectOption, parse_radio_option, parse_select_options};
use crate::error::{FormgenError, FormgenResult};
use crate::schema::FieldMeta;
use crate::value::{ValueMut, ValueRef};
use std::fmt;
use std::str::FromStr;

/// The renderer-selecting category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	Text,
	Password,
	Hidden,
	Button,
	Checkbox,
	Radio,
	Select,
}

impl FieldKind {
	pub const ALL: [FieldKind; 7] = [
		FieldKind::Text,
		FieldKind::Password,
		FieldKind::Hidden,
		FieldKind::Button,
		FieldKind::Checkbox,
		FieldKind::Radio,
		FieldKind::Select,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			FieldKind::Text => "text",
			FieldKind::Password => "password",
			FieldKind::Hidden => "hidden",
			FieldKind::Button => "button",
			FieldKind::Checkbox => "checkbox",
			FieldKind::Radio => "radio",
			FieldKind::Select => "select",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldKind {
	type Err = FormgenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| FormgenError::RenderDispatch {
				kind: s.to_string(),
			})
	}
}

/// One renderable field, built transiently per render or bind call.
///
/// `V` is the view of the live value: [`ValueRef`] when rendering,
/// [`ValueMut`] when binding.
#[derive(Debug)]
pub struct FieldModel<'a, V> {
	pub kind: &'a str,
	pub field_key: &'a str,
	pub label: &'a str,
	pub required: bool,
	pub use_default_value: bool,
	pub radio_option: RadioOption,
	pub select_options: Vec<SelectOption>,
	pub bound_value: V,
}

impl<'a, V> FieldModel<'a, V> {
	/// Build a model from field metadata, parsing the option encodings.
	///
	/// The kind is not validated here; an unknown kind surfaces when the
	/// model is rendered.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formgen::{FieldMeta, FieldModel, ValueRef};
	///
	/// let meta = FieldMeta::new("radio", "resident")
	///     .with_label("Resident")
	///     .with_radio("1;checked");
	/// let resident = false;
	///
	/// let model = FieldModel::new(&meta, ValueRef::Bool(resident));
	/// assert_eq!(model.radio_option.value, "1");
	/// assert!(model.radio_option.checked);
	/// assert!(model.select_options.is_empty());
	/// ```
	pub fn new(meta: &'a FieldMeta, bound_value: V) -> Self {
		Self {
			kind: &meta.kind,
			field_key: &meta.field_key,
			label: &meta.label,
			required: meta.required,
			use_default_value: meta.use_default,
			radio_option: parse_radio_option(&meta.radio),
			select_options: parse_select_options(&meta.select),
			bound_value,
		}
	}

	/// Resolve the declared kind.
	pub fn field_kind(&self) -> FormgenResult<FieldKind> {
		self.kind.parse()
	}

	pub(crate) fn is_kind(&self, kind: FieldKind) -> bool {
		self.kind == kind.as_str()
	}
}

impl FieldModel<'_, ValueRef<'_>> {
	/// Render this field to an HTML fragment.
	pub fn render(&self) -> FormgenResult<String> {
		crate::render::render_field(self)
	}
}

impl FieldModel<'_, ValueMut<'_>> {
	/// Coerce a submitted value and write it into the bound field.
	pub fn set_value(self, raw: &str) -> FormgenResult<()> {
		let target = self.bound_value.kind();
		if let Some(value) = crate::bind::coerce(&self, target, raw)? {
			self.bound_value.assign(value);
		}
		Ok(())
	}
}
