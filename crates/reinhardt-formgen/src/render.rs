//! HTML rendering of individual fields.
//!
//! Each [`FieldKind`] has exactly one rendering function. Attribute values and
//! label text are HTML-escaped; everything else is fixed markup.

use crate::error::FormgenResult;
use crate::field::{FieldKind, FieldModel};
use crate::value::ValueRef;

type RenderModel<'a, 'v> = FieldModel<'a, ValueRef<'v>>;

/// Render a field to its HTML fragment.
///
/// Fails with [`FormgenError::RenderDispatch`](crate::FormgenError::RenderDispatch)
/// when the declared kind has no renderer.
///
/// # Examples
///
/// ```
/// use reinhardt_formgen::{FieldMeta, FieldModel, ValueRef, render::render_field};
///
/// let meta = FieldMeta::new("hidden", "token").with_default();
/// let token = "a628228b".to_string();
///
/// let html = render_field(&FieldModel::new(&meta, ValueRef::Str(&token))).unwrap();
/// assert_eq!(html, r#"<input type="hidden" name="token" value="a628228b">"#);
/// ```
pub fn render_field(model: &RenderModel<'_, '_>) -> FormgenResult<String> {
	let kind = model.field_kind()?;
	tracing::trace!(field = model.field_key, kind = %kind, "rendering field");

	let html = match kind {
		FieldKind::Text | FieldKind::Password => render_input(model, kind),
		FieldKind::Hidden => render_hidden(model),
		FieldKind::Button => render_button(model),
		FieldKind::Checkbox => render_checkbox(model),
		FieldKind::Radio => render_radio(model),
		FieldKind::Select => render_select(model),
	};
	Ok(html)
}

fn value_attr(model: &RenderModel<'_, '_>) -> String {
	if model.use_default_value {
		format!(r#" value="{}""#, escape_html(&model.bound_value.to_string()))
	} else {
		String::new()
	}
}

fn flag(name: &str, enabled: bool) -> String {
	if enabled {
		format!(" {}", name)
	} else {
		String::new()
	}
}

fn render_label_for(model: &RenderModel<'_, '_>) -> String {
	format!(
		r#"<label for="{}">{}</label>"#,
		escape_html(model.field_key),
		escape_html(model.label)
	)
}

fn render_input(model: &RenderModel<'_, '_>, kind: FieldKind) -> String {
	format!(
		"{}\n    <input type=\"{}\" name=\"{}\"{}{}>",
		render_label_for(model),
		kind,
		escape_html(model.field_key),
		value_attr(model),
		flag("required", model.required)
	)
}

fn render_hidden(model: &RenderModel<'_, '_>) -> String {
	format!(
		r#"<input type="hidden" name="{}"{}>"#,
		escape_html(model.field_key),
		value_attr(model)
	)
}

fn render_button(model: &RenderModel<'_, '_>) -> String {
	format!(
		r#"<input type="button" name="{}" value="{}">"#,
		escape_html(model.field_key),
		escape_html(model.label)
	)
}

fn render_checkbox(model: &RenderModel<'_, '_>) -> String {
	let checked = model.use_default_value && model.bound_value.is_true();
	format!(
		"<label>\n        <input type=\"checkbox\" name=\"{}\"{}> {}\n    </label>",
		escape_html(model.field_key),
		flag("checked", checked),
		escape_html(model.label)
	)
}

fn render_radio(model: &RenderModel<'_, '_>) -> String {
	format!(
		"<label>\n        <input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}\n    </label>",
		escape_html(model.field_key),
		escape_html(&model.radio_option.value),
		flag("checked", model.radio_option.checked),
		escape_html(model.label)
	)
}

fn render_select(model: &RenderModel<'_, '_>) -> String {
	let mut html = format!(
		"{}\n    <select name=\"{}\">",
		render_label_for(model),
		escape_html(model.field_key)
	);

	for option in &model.select_options {
		html.push_str(&format!(
			"\n        <option value=\"{}\"{}>{}</option>",
			escape_html(&option.value),
			flag("selected", option.selected),
			escape_html(&option.label)
		));
	}

	html.push_str("\n    </select>");
	html
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
