//! Procedural macros for reinhardt-formgen.
//!
//! This crate provides the `#[derive(Form)]` macro, which turns `#[form(...)]`
//! field annotations into a `FormSchema` implementation.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_paths;
mod form_derive;

/// Derives a `FormSchema` implementation for a struct.
///
/// Only fields carrying a `#[form(...)]` attribute become part of the form.
///
/// # Attributes
///
/// - `type = "..."` - Renderer kind: `text`, `password`, `hidden`, `button`,
///   `checkbox`, `radio` or `select`
/// - `field = "..."` - Submission key and HTML `name`; `"-"` excludes the field
/// - `name = "..."` - Label text
/// - `required` / `required = "true"` - Adds the `required` attribute
/// - `default` / `default = "true"` - Renders the current value as default
/// - `radio = "<value>[;checked]"` - Radio option
/// - `select = "<label>=<value>[;selected],..."` - Select options
/// - `readonly` - Rendered, but never written when binding
///
/// Fields of the signed and unsigned integer types up to 64 bits (including
/// `isize` and `usize`), `f64`, `bool` and `String` are bound. Any
/// other field type is recorded as unsupported: rendering such a form fails
/// and binding leaves the field untouched.
///
/// # Example
///
/// ```ignore
/// use reinhardt_formgen::Form;
///
/// #[derive(Form)]
/// pub struct Signup {
///     #[form(field = "name", name = "User name", type = "text", required)]
///     pub username: String,
///
///     #[form(field = "agree", name = "I agree", type = "checkbox", default)]
///     pub agree: bool,
/// }
/// ```
///
/// This generates:
///
/// ```ignore
/// impl reinhardt_formgen::FormSchema for Signup {
///     fn schema() -> &'static reinhardt_formgen::Schema<Self> {
///         static SCHEMA: OnceCell<Schema<Signup>> = OnceCell::new();
///         SCHEMA.get_or_init(|| {
///             Schema::<Signup>::builder("Signup")
///                 .field::<String>(
///                     "username",
///                     FieldMeta::from_tags([("field", "name"), ("name", "User name"), ("type", "text"), ("required", "true")]),
///                     |form| &form.username,
///                     |form| &mut form.username,
///                 )
///                 .field::<bool>(/* ... */)
///                 .build()
///         })
///     }
/// }
/// ```
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	form_derive::derive_form_impl(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
