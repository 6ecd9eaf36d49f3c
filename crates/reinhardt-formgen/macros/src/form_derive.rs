//! Implementation of `#[derive(Form)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitBool, LitStr, Result, Type};

use crate::crate_paths::get_reinhardt_formgen_crate;

const FIELD_KINDS: &[&str] = &[
	"text", "password", "hidden", "button", "checkbox", "radio", "select",
];

const BOUND_TYPES: &[&str] = &[
	"i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f64", "bool", "String",
];

/// Attribute values collected from every `#[form(...)]` on one field.
#[derive(Default)]
struct FormAttr {
	/// `(key, value)` pairs handed to `FieldMeta::from_tags`
	tags: Vec<(&'static str, String)>,
	kind: Option<LitStr>,
	field_key: Option<String>,
	readonly: bool,
}

impl FormAttr {
	fn push(&mut self, key: &'static str, value: String) {
		self.tags.retain(|(existing, _)| *existing != key);
		self.tags.push((key, value));
	}

	fn is_excluded(&self) -> bool {
		self.field_key
			.as_deref()
			.is_some_and(|key| key.trim_matches('-').is_empty())
	}
}

/// How a field's Rust type is exposed to the schema.
enum FieldType<'a> {
	Bound(&'a Type),
	Unsupported(String),
}

pub(crate) fn derive_form_impl(input: DeriveInput) -> Result<TokenStream> {
	let struct_name = &input.ident;

	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"Form cannot be derived for generic structs",
		));
	}

	let fields = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(fields) => &fields.named,
			_ => {
				return Err(syn::Error::new_spanned(
					struct_name,
					"Form can only be derived for structs with named fields",
				));
			}
		},
		_ => {
			return Err(syn::Error::new_spanned(
				struct_name,
				"Form can only be derived for structs",
			));
		}
	};

	let krate = get_reinhardt_formgen_crate();
	let mut entries = Vec::new();

	for field in fields {
		let Some(attr) = parse_form_attrs(&field.attrs)? else {
			continue;
		};
		let Some(ident) = field.ident.as_ref() else {
			continue;
		};

		if attr.kind.is_none() && !attr.is_excluded() {
			return Err(syn::Error::new_spanned(
				ident,
				"missing `type` in #[form(...)]; expected one of text, password, hidden, button, checkbox, radio, select",
			));
		}

		let meta = meta_tokens(&krate, &attr);
		entries.push(entry_tokens(ident, &field.ty, &meta, attr.readonly));
	}

	let name_str = struct_name.to_string();

	Ok(quote! {
		impl #krate::FormSchema for #struct_name {
			fn schema() -> &'static #krate::Schema<Self> {
				static SCHEMA: #krate::__private::OnceCell<#krate::Schema<#struct_name>> =
					#krate::__private::OnceCell::new();
				SCHEMA.get_or_init(|| {
					#krate::Schema::<#struct_name>::builder(#name_str)
						#(#entries)*
						.build()
				})
			}
		}
	})
}

/// Merge every `#[form(...)]` attribute on a field.
///
/// Returns `None` when the field carries none.
fn parse_form_attrs(attrs: &[syn::Attribute]) -> Result<Option<FormAttr>> {
	let mut result = None;

	for attr in attrs {
		if !attr.path().is_ident("form") {
			continue;
		}
		let parsed: &mut FormAttr = result.get_or_insert_with(FormAttr::default);

		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("type") {
				let lit: LitStr = meta.value()?.parse()?;
				let kind = lit.value();
				if !FIELD_KINDS.contains(&kind.as_str()) {
					return Err(syn::Error::new_spanned(
						&lit,
						format!(
							"unknown form field type `{}`; expected one of {}",
							kind,
							FIELD_KINDS.join(", ")
						),
					));
				}
				parsed.push("type", kind);
				parsed.kind = Some(lit);
			} else if meta.path.is_ident("field") {
				let key = meta.value()?.parse::<LitStr>()?.value();
				parsed.field_key = Some(key.clone());
				parsed.push("field", key);
			} else if meta.path.is_ident("name") {
				let label = meta.value()?.parse::<LitStr>()?.value();
				parsed.push("name", label);
			} else if meta.path.is_ident("radio") {
				let encoding = meta.value()?.parse::<LitStr>()?.value();
				parsed.push("radio", encoding);
			} else if meta.path.is_ident("select") {
				let encoding = meta.value()?.parse::<LitStr>()?.value();
				parsed.push("select", encoding);
			} else if meta.path.is_ident("required") {
				let flag = parse_flag(&meta)?;
				parsed.push("required", flag);
			} else if meta.path.is_ident("default") {
				let flag = parse_flag(&meta)?;
				parsed.push("default", flag);
			} else if meta.path.is_ident("readonly") {
				parsed.readonly = parse_flag(&meta)? == "true";
			} else {
				return Err(meta.error(
					"unknown form attribute; expected type, field, name, required, default, radio, select or readonly",
				));
			}
			Ok(())
		})?;
	}

	Ok(result)
}

/// A bare flag means `"true"`; `= "..."` and `= true` are accepted as well.
fn parse_flag(meta: &syn::meta::ParseNestedMeta) -> Result<String> {
	if !meta.input.peek(syn::Token![=]) {
		return Ok("true".to_string());
	}
	let value = meta.value()?;
	if value.peek(LitBool) {
		let lit: LitBool = value.parse()?;
		return Ok(lit.value.to_string());
	}
	let lit: LitStr = value.parse()?;
	Ok(lit.value())
}

fn meta_tokens(krate: &TokenStream, attr: &FormAttr) -> TokenStream {
	if attr.tags.is_empty() {
		return quote!(#krate::FieldMeta::default());
	}
	let pairs = attr.tags.iter().map(|(key, value)| quote!((#key, #value)));
	quote!(#krate::FieldMeta::from_tags([#(#pairs),*]))
}

fn entry_tokens(ident: &Ident, ty: &Type, meta: &TokenStream, readonly: bool) -> TokenStream {
	let name_str = ident.to_string();

	match classify(ty) {
		FieldType::Bound(ty) if readonly => quote! {
			.read_only::<#ty>(#name_str, #meta, |form| &form.#ident)
		},
		FieldType::Bound(ty) => quote! {
			.field::<#ty>(
				#name_str,
				#meta,
				|form| &form.#ident,
				|form| &mut form.#ident,
			)
		},
		FieldType::Unsupported(type_name) => quote! {
			.unsupported(#name_str, #meta, #type_name)
		},
	}
}

/// Classify by the last path segment so `std::string::String` is bound too.
fn classify(ty: &Type) -> FieldType<'_> {
	if let Type::Path(type_path) = ty
		&& type_path.qself.is_none()
		&& let Some(segment) = type_path.path.segments.last()
		&& segment.arguments.is_empty()
		&& BOUND_TYPES.contains(&segment.ident.to_string().as_str())
	{
		return FieldType::Bound(ty);
	}

	let type_name = quote!(#ty).to_string().replace(' ', "");
	FieldType::Unsupported(type_name)
}
