//! Parsers for the compact radio and select option encodings.
//!
//! A radio option is written as `"<value>"` or `"<value>;checked"`.
//! A select list is a comma separated sequence of `"<label>=<value>"` pairs
//! (or bare values), where the value side may carry a `;selected` suffix:
//!
//! ```
//! use reinhardt_formgen::codec::parse_select_options;
//!
//! let options = parse_select_options("None=0;selected,M=1,F=2");
//! assert_eq!(options.len(), 3);
//! assert!(options[0].selected);
//! assert_eq!(options[2].label, "F");
//! ```

const CHECKED: &str = "checked";
const SELECTED: &str = "selected";

/// A single radio button option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioOption {
	pub value: String,
	pub checked: bool,
}

/// A single `<option>` entry of a select field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
	pub selected: bool,
}

impl SelectOption {
	/// Create an option whose label differs from its value.
	pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			selected,
		}
	}
}

/// Parse a radio option encoding.
///
/// # Examples
///
/// ```
/// use reinhardt_formgen::codec::{RadioOption, parse_radio_option};
///
/// assert_eq!(parse_radio_option(""), RadioOption::default());
/// assert!(parse_radio_option("1;checked").checked);
/// assert!(!parse_radio_option("2").checked);
/// ```
pub fn parse_radio_option(tag: &str) -> RadioOption {
	if tag.is_empty() {
		return RadioOption::default();
	}

	let mut segments = tag.split(';');
	let value = segments.next().unwrap_or_default();
	RadioOption {
		value: value.to_string(),
		checked: segments.next() == Some(CHECKED),
	}
}

/// Parse a single select option encoding.
///
/// The `;selected` suffix is only honoured on the value side of a
/// `label=value` pair; a bare value is taken verbatim as both value and label.
///
/// # Examples
///
/// ```
/// use reinhardt_formgen::codec::parse_select_option;
///
/// let option = parse_select_option("Unknown=0;selected");
/// assert_eq!(option.label, "Unknown");
/// assert_eq!(option.value, "0");
/// assert!(option.selected);
///
/// let bare = parse_select_option("red");
/// assert_eq!(bare.label, "red");
/// assert_eq!(bare.value, "red");
/// ```
pub fn parse_select_option(tag: &str) -> SelectOption {
	if tag.is_empty() {
		return SelectOption::default();
	}

	let mut parts = tag.split('=');
	let label = parts.next().unwrap_or_default();
	let Some(value_side) = parts.next() else {
		return SelectOption::new(tag, tag, false);
	};

	match value_side.split_once(';') {
		Some((value, suffix)) => {
			// Only the segment right after the first ';' counts
			let flag = suffix.split(';').next().unwrap_or_default();
			SelectOption::new(value, label, flag == SELECTED)
		}
		None => SelectOption::new(value_side, label, false),
	}
}

/// Parse a comma separated list of select option encodings, keeping order.
pub fn parse_select_options(tag: &str) -> Vec<SelectOption> {
	if tag.is_empty() {
		return Vec::new();
	}

	tag.split(',').map(parse_select_option).collect()
}
