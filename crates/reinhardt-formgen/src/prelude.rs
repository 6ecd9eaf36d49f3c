//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use reinhardt_formgen::prelude::*;
//! ```

pub use crate::bind::{map_form, map_form_atomic};
pub use crate::config::FormConfig;
pub use crate::engine::{FormEngine, generate_form};
pub use crate::error::{FormgenError, FormgenResult};
pub use crate::form_data::{FormData, parse_urlencoded};
pub use crate::schema::{FieldMeta, FormSchema, Schema};

#[cfg(feature = "macros")]
pub use reinhardt_formgen_macros::Form;
