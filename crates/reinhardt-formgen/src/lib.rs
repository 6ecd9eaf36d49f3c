//! Annotation-driven HTML form generation and binding for Reinhardt.
//!
//! A form is an ordinary structure whose fields carry form annotations. From
//! those annotations this crate can:
//!
//! - **Render** the structure to an HTML fragment, one fragment per field
//!   joined by `<br>`
//! - **Bind** submitted values back into an instance, coercing each string
//!   into the field's type
//!
//! # Quick Start
//!
//! ```ignore
//! use reinhardt_formgen::prelude::*;
//!
//! #[derive(Form, Default)]
//! pub struct Signup {
//!     #[form(field = "name", name = "User name", type = "text", required)]
//!     pub username: String,
//!
//!     #[form(field = "resident", name = "Resident", type = "radio", radio = "1;checked")]
//!     pub resident: bool,
//!
//!     #[form(field = "gender", name = "Gender", type = "select", select = "Unknown=0;selected,M=1,F=2")]
//!     pub gender: String,
//!
//!     #[form(field = "age", name = "Age", type = "text", default)]
//!     pub age: i64,
//! }
//!
//! let html = generate_form(&Signup::default())?;
//!
//! let data = parse_urlencoded("name=alice&resident=1&gender=2&age=30")?;
//! let mut signup = Signup::default();
//! map_form(&mut signup, &data)?;
//! ```
//!
//! # Annotation vocabulary
//!
//! | key | effect |
//! |---|---|
//! | `type` | renderer kind: `text`, `password`, `hidden`, `button`, `checkbox`, `radio`, `select` |
//! | `field` | submission key and HTML `name`; `"-"` or empty excludes the field |
//! | `name` | label text |
//! | `required` | adds the `required` attribute (text and password) |
//! | `default` | renders the current value as the field's default |
//! | `radio` | radio option, `"<value>[;checked]"` |
//! | `select` | option list, `"<label>=<value>[;selected],..."` or bare values |
//!
//! # Features
//!
//! - `macros` - `#[derive(Form)]` support (enabled by default)

pub mod bind;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod form_data;
pub mod prelude;
pub mod render;
pub mod schema;
pub mod value;

pub use bind::{map_form, map_form_atomic};
pub use codec::{RadioOption, SelectOption};
pub use config::FormConfig;
pub use engine::{FormEngine, generate_form};
pub use error::{FormgenError, FormgenResult, ParseError};
pub use field::{FieldKind, FieldModel};
pub use form_data::{FormData, parse_urlencoded};
pub use schema::{FieldAccessor, FieldDescriptor, FieldMeta, FormSchema, Schema, SchemaBuilder};
pub use value::{FieldValue, FormValue, ValueKind, ValueMut, ValueRef};

#[cfg(feature = "macros")]
pub use reinhardt_formgen_macros::Form;

#[doc(hidden)]
pub mod __private {
	pub use once_cell::sync::OnceCell;
}
