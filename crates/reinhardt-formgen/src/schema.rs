//! Field descriptor tables for form structures.
//!
//! A [`Schema`] lists the annotated fields of a structure in declaration
//! order. Each [`FieldDescriptor`] carries the field's metadata strings and a
//! typed accessor pair used to read the live value for rendering and to write
//! it back when binding. Schemas are built once per type and never mutated
//! afterwards; `#[derive(Form)]` generates the registration, or it can be
//! written by hand:
//!
//! ```
//! use once_cell::sync::Lazy;
//! use reinhardt_formgen::{FieldMeta, FormSchema, Schema};
//!
//! struct Login {
//!     username: String,
//!     remember: bool,
//! }
//!
//! static LOGIN_SCHEMA: Lazy<Schema<Login>> = Lazy::new(|| {
//!     Schema::<Login>::builder("Login")
//!         .field(
//!             "username",
//!             FieldMeta::new("text", "username").with_label("User").required(),
//!             |f| &f.username,
//!             |f| &mut f.username,
//!         )
//!         .field(
//!             "remember",
//!             FieldMeta::new("checkbox", "remember").with_label("Remember me"),
//!             |f| &f.remember,
//!             |f| &mut f.remember,
//!         )
//!         .build()
//! });
//!
//! impl FormSchema for Login {
//!     fn schema() -> &'static Schema<Self> {
//!         &LOGIN_SCHEMA
//!     }
//! }
//!
//! assert_eq!(Login::schema().len(), 2);
//! ```

use crate::value::{FormValue, ValueKind, ValueMut, ValueRef};
use std::fmt;

/// Metadata key selecting the renderer kind.
pub const TAG_TYPE: &str = "type";
/// Metadata key holding the submission key and HTML `name`.
pub const TAG_FIELD: &str = "field";
/// Metadata key holding the label text.
pub const TAG_NAME: &str = "name";
pub const TAG_REQUIRED: &str = "required";
pub const TAG_DEFAULT: &str = "default";
pub const TAG_RADIO: &str = "radio";
pub const TAG_SELECT: &str = "select";

/// A field key made only of this character (or empty) excludes the field.
pub const EXCLUDED_KEY: char = '-';

/// The metadata strings attached to one form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
	pub kind: String,
	pub field_key: String,
	pub label: String,
	pub required: bool,
	pub use_default: bool,
	pub radio: String,
	pub select: String,
}

impl FieldMeta {
	/// Create metadata for a field of the given kind and key.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formgen::FieldMeta;
	///
	/// let meta = FieldMeta::new("text", "email").with_label("E-mail").required();
	/// assert_eq!(meta.kind, "text");
	/// assert_eq!(meta.field_key, "email");
	/// assert!(meta.required);
	/// assert!(!meta.use_default);
	/// ```
	pub fn new(kind: impl Into<String>, field_key: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			field_key: field_key.into(),
			..Self::default()
		}
	}

	/// Build metadata from `(key, value)` annotation pairs.
	///
	/// `required` and `default` are only enabled by the literal value
	/// `"true"`. Unknown keys are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_formgen::FieldMeta;
	///
	/// let meta = FieldMeta::from_tags([
	///     ("field", "resident"),
	///     ("type", "radio"),
	///     ("radio", "1;checked"),
	///     ("required", "yes"),
	/// ]);
	/// assert_eq!(meta.radio, "1;checked");
	/// assert!(!meta.required);
	/// ```
	pub fn from_tags<'a, I>(tags: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut meta = Self::default();
		for (key, value) in tags {
			match key {
				TAG_TYPE => meta.kind = value.to_string(),
				TAG_FIELD => meta.field_key = value.to_string(),
				TAG_NAME => meta.label = value.to_string(),
				TAG_REQUIRED => meta.required = value == "true",
				TAG_DEFAULT => meta.use_default = value == "true",
				TAG_RADIO => meta.radio = value.to_string(),
				TAG_SELECT => meta.select = value.to_string(),
				_ => tracing::trace!(key, "ignoring unknown form annotation"),
			}
		}
		meta
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Emit the field's current value as the rendered default.
	pub fn with_default(mut self) -> Self {
		self.use_default = true;
		self
	}

	pub fn with_radio(mut self, encoding: impl Into<String>) -> Self {
		self.radio = encoding.into();
		self
	}

	pub fn with_select(mut self, encoding: impl Into<String>) -> Self {
		self.select = encoding.into();
		self
	}

	/// Returns true when the field key is empty or made only of `-`.
	pub fn is_excluded(&self) -> bool {
		self.field_key.trim_matches(EXCLUDED_KEY).is_empty()
	}
}

/// Typed access to one field of a form structure.
pub trait FieldAccessor<T>: Send + Sync {
	fn kind(&self) -> ValueKind;

	fn get<'a>(&self, form: &'a T) -> ValueRef<'a>;

	/// Writable view of the field, or `None` when the field is read-only.
	fn get_mut<'a>(&self, form: &'a mut T) -> Option<ValueMut<'a>>;

	fn is_writable(&self) -> bool;
}

struct TypedAccessor<T, V> {
	get: fn(&T) -> &V,
	set: Option<fn(&mut T) -> &mut V>,
}

impl<T, V: FormValue> FieldAccessor<T> for TypedAccessor<T, V> {
	fn kind(&self) -> ValueKind {
		V::KIND
	}

	fn get<'a>(&self, form: &'a T) -> ValueRef<'a> {
		(self.get)(form).value_ref()
	}

	fn get_mut<'a>(&self, form: &'a mut T) -> Option<ValueMut<'a>> {
		self.set.map(|set| set(form).value_mut())
	}

	fn is_writable(&self) -> bool {
		self.set.is_some()
	}
}

struct UnsupportedAccessor {
	type_name: &'static str,
}

impl<T> FieldAccessor<T> for UnsupportedAccessor {
	fn kind(&self) -> ValueKind {
		ValueKind::Unsupported(self.type_name)
	}

	fn get<'a>(&self, _form: &'a T) -> ValueRef<'a> {
		ValueRef::Unsupported(self.type_name)
	}

	fn get_mut<'a>(&self, _form: &'a mut T) -> Option<ValueMut<'a>> {
		Some(ValueMut::Unsupported(self.type_name))
	}

	fn is_writable(&self) -> bool {
		true
	}
}

/// One entry of a [`Schema`].
pub struct FieldDescriptor<T> {
	name: &'static str,
	meta: FieldMeta,
	accessor: Box<dyn FieldAccessor<T>>,
}

impl<T> FieldDescriptor<T> {
	pub fn new(name: &'static str, meta: FieldMeta, accessor: Box<dyn FieldAccessor<T>>) -> Self {
		Self {
			name,
			meta,
			accessor,
		}
	}

	/// Name of the structure member this entry describes.
	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn meta(&self) -> &FieldMeta {
		&self.meta
	}

	pub fn value_kind(&self) -> ValueKind {
		self.accessor.kind()
	}

	pub fn is_writable(&self) -> bool {
		self.accessor.is_writable()
	}

	pub fn value<'a>(&self, form: &'a T) -> ValueRef<'a> {
		self.accessor.get(form)
	}

	pub fn value_mut<'a>(&self, form: &'a mut T) -> Option<ValueMut<'a>> {
		self.accessor.get_mut(form)
	}
}

impl<T> fmt::Debug for FieldDescriptor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("name", &self.name)
			.field("meta", &self.meta)
			.field("kind", &self.value_kind())
			.field("writable", &self.is_writable())
			.finish()
	}
}

/// The field descriptor table of a form structure.
#[derive(Debug)]
pub struct Schema<T> {
	name: &'static str,
	fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> Schema<T> {
	pub fn builder(name: &'static str) -> SchemaBuilder<T> {
		SchemaBuilder {
			name,
			fields: Vec::new(),
		}
	}
}

impl<T> Schema<T> {
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Field descriptors in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor<T>] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
		self.fields.iter().find(|f| f.name == name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

/// Builder for [`Schema`].
pub struct SchemaBuilder<T> {
	name: &'static str,
	fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
	/// Add a readable and writable field.
	pub fn field<V: FormValue>(
		mut self,
		name: &'static str,
		meta: FieldMeta,
		get: fn(&T) -> &V,
		set: fn(&mut T) -> &mut V,
	) -> Self {
		let accessor = TypedAccessor {
			get,
			set: Some(set),
		};
		self.fields
			.push(FieldDescriptor::new(name, meta, Box::new(accessor)));
		self
	}

	/// Add a field that is rendered but never written by binding.
	pub fn read_only<V: FormValue>(
		mut self,
		name: &'static str,
		meta: FieldMeta,
		get: fn(&T) -> &V,
	) -> Self {
		let accessor: TypedAccessor<T, V> = TypedAccessor { get, set: None };
		self.fields
			.push(FieldDescriptor::new(name, meta, Box::new(accessor)));
		self
	}

	/// Add a field whose type cannot be rendered or bound.
	///
	/// Rendering a form with such a field fails unless the field is
	/// excluded; binding leaves it untouched.
	pub fn unsupported(mut self, name: &'static str, meta: FieldMeta, type_name: &'static str) -> Self {
		self.fields.push(FieldDescriptor::new(
			name,
			meta,
			Box::new(UnsupportedAccessor { type_name }),
		));
		self
	}

	pub fn build(self) -> Schema<T> {
		Schema {
			name: self.name,
			fields: self.fields,
		}
	}
}

/// Implemented by structures that describe an HTML form.
///
/// Usually derived with `#[derive(Form)]`.
pub trait FormSchema: Sized + 'static {
	fn schema() -> &'static Schema<Self>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Profile {
		name: String,
		age: i64,
		id: u64,
	}

	fn profile_schema() -> Schema<Profile> {
		Schema::<Profile>::builder("Profile")
			.field(
				"name",
				FieldMeta::new("text", "name"),
				|p| &p.name,
				|p| &mut p.name,
			)
			.read_only("id", FieldMeta::new("hidden", "id").with_default(), |p| &p.id)
			.field("age", FieldMeta::new("text", "age"), |p| &p.age, |p| &mut p.age)
			.unsupported("tags", FieldMeta::new("text", "tags"), "Vec<String>")
			.build()
	}

	#[rstest]
	fn test_schema_keeps_declaration_order() {
		let schema = profile_schema();
		let names: Vec<_> = schema.fields().iter().map(|f| f.name()).collect();
		assert_eq!(names, vec!["name", "id", "age", "tags"]);
		assert_eq!(schema.name(), "Profile");
	}

	#[rstest]
	fn test_descriptor_reads_live_value() {
		let schema = profile_schema();
		let profile = Profile {
			name: "alice".to_string(),
			age: 30,
			id: 7,
		};

		assert_eq!(schema.fields()[0].value(&profile), ValueRef::Str("alice"));
		assert_eq!(schema.fields()[1].value(&profile), ValueRef::Uint(7));
		assert_eq!(
			schema.fields()[3].value(&profile),
			ValueRef::Unsupported("Vec<String>")
		);
	}

	#[rstest]
	fn test_descriptor_writes_live_value() {
		let schema = profile_schema();
		let mut profile = Profile {
			name: String::new(),
			age: 0,
			id: 7,
		};

		let age = schema.field("age").unwrap();
		if let Some(ValueMut::Int(slot)) = age.value_mut(&mut profile) {
			assert!(slot.set(41));
		}
		assert_eq!(profile.age, 41);
	}

	#[rstest]
	fn test_read_only_field_has_no_setter() {
		let schema = profile_schema();
		let mut profile = Profile {
			name: String::new(),
			age: 0,
			id: 7,
		};

		let id = schema.field("id").unwrap();
		assert!(!id.is_writable());
		assert!(id.value_mut(&mut profile).is_none());
		assert_eq!(id.value_kind(), ValueKind::Uint { bits: 64 });
	}

	#[rstest]
	#[case("", true)]
	#[case("-", true)]
	#[case("--", true)]
	#[case("name", false)]
	#[case("-name", false)]
	#[case("-name-", false)]
	fn test_field_meta_is_excluded(#[case] key: &str, #[case] excluded: bool) {
		assert_eq!(FieldMeta::new("text", key).is_excluded(), excluded);
	}

	#[rstest]
	fn test_field_meta_from_tags() {
		let meta = FieldMeta::from_tags([
			("field", "gender"),
			("name", "Пол"),
			("type", "select"),
			("select", "Не указан=0;selected,М=1,Ж=2"),
			("default", "true"),
			("required", "True"),
			("unknown", "x"),
		]);

		assert_eq!(meta.field_key, "gender");
		assert_eq!(meta.label, "Пол");
		assert_eq!(meta.kind, "select");
		assert!(meta.use_default);
		assert!(!meta.required);
		assert!(meta.radio.is_empty());
	}
}
