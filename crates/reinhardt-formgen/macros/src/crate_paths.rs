//! Crate path resolution using proc_macro_crate.

use proc_macro2::{Span, TokenStream};
use quote::quote;

/// Resolves the path to the reinhardt_formgen crate.
///
/// A renamed dependency is honoured; everything else, including use from
/// the crate's own tests, falls back to `::reinhardt_formgen`.
pub(crate) fn get_reinhardt_formgen_crate() -> TokenStream {
	use proc_macro_crate::{FoundCrate, crate_name};

	match crate_name("reinhardt-formgen") {
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, Span::call_site());
			quote!(::#ident)
		}
		_ => quote!(::reinhardt_formgen),
	}
}
