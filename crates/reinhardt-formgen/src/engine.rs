//! Form generation and binding entry points.

use crate::bind::{bind_schema, bind_schema_atomic};
use crate::config::FormConfig;
use crate::error::{FormgenError, FormgenResult};
use crate::field::FieldModel;
use crate::form_data::FormData;
use crate::schema::{FormSchema, Schema};

/// Renders and binds form structures according to a [`FormConfig`].
#[derive(Debug, Clone, Default)]
pub struct FormEngine {
	config: FormConfig,
}

impl FormEngine {
	pub fn new(config: FormConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	/// Render every included field of `form` and join the fragments.
	pub fn generate<T: FormSchema>(&self, form: &T) -> FormgenResult<String> {
		self.generate_with_schema(T::schema(), form)
	}

	/// Render using an explicit schema.
	///
	/// Fails on the first field whose type is unsupported or whose kind has
	/// no renderer; no partial HTML is returned.
	pub fn generate_with_schema<T>(&self, schema: &Schema<T>, form: &T) -> FormgenResult<String> {
		let mut fragments = Vec::with_capacity(schema.len());

		for descriptor in schema.fields() {
			let meta = descriptor.meta();
			if meta.is_excluded() {
				continue;
			}

			let kind = descriptor.value_kind();
			if !kind.is_supported() {
				return Err(FormgenError::UnsupportedFieldType {
					field: meta.field_key.clone(),
					type_name: kind.to_string(),
				});
			}

			let model = FieldModel::new(meta, descriptor.value(form));
			fragments.push(model.render()?);
		}

		tracing::debug!(
			form = schema.name(),
			fields = fragments.len(),
			"generated form"
		);
		Ok(fragments.join(&self.config.separator))
	}

	/// Bind submitted values, keeping writes made before a failing field.
	pub fn bind<T: FormSchema>(&self, form: &mut T, data: &FormData) -> FormgenResult<()> {
		bind_schema(T::schema(), form, data)
	}

	/// Bind submitted values, writing nothing unless every field coerces.
	pub fn bind_atomic<T: FormSchema>(&self, form: &mut T, data: &FormData) -> FormgenResult<()> {
		bind_schema_atomic(T::schema(), form, data)
	}
}

/// Render `form` with the default configuration.
pub fn generate_form<T: FormSchema>(form: &T) -> FormgenResult<String> {
	FormEngine::default().generate(form)
}
