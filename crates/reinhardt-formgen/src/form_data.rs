//! Submitted form values.

use crate::error::FormgenResult;
use std::collections::HashMap;

/// Submitted values keyed by field key, in submission order per key.
pub type FormData = HashMap<String, Vec<String>>;

/// The first submitted value for `key`, if any.
pub fn first_value<'a>(data: &'a FormData, key: &str) -> Option<&'a str> {
	data.get(key)
		.and_then(|values| values.first())
		.map(String::as_str)
}

/// Decode an `application/x-www-form-urlencoded` body.
///
/// Repeated keys keep every value in submission order.
///
/// # Examples
///
/// ```
/// use reinhardt_formgen::form_data::parse_urlencoded;
///
/// let data = parse_urlencoded("name=J%C3%BCrgen+M&agree=on&name=other").unwrap();
/// assert_eq!(data["name"], vec!["Jürgen M".to_string(), "other".to_string()]);
/// assert_eq!(data["agree"], vec!["on".to_string()]);
/// ```
pub fn parse_urlencoded(body: &str) -> FormgenResult<FormData> {
	let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body)?;

	let mut data = FormData::new();
	for (key, value) in pairs {
		data.entry(key).or_default().push(value);
	}
	Ok(data)
}
