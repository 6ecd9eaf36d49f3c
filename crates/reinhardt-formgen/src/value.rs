//! Value kinds and borrowed views of live form fields.
//!
//! A form structure exposes each annotated field through a [`ValueRef`] for
//! rendering and a [`ValueMut`] for binding. Only the closed set of kinds in
//! [`ValueKind`] can be rendered or bound; any other field type is recorded
//! as [`ValueKind::Unsupported`].

use std::fmt;

/// The kind of value stored in a form field.
///
/// Integer kinds carry the bit width of the backing type, which bounds the
/// values a submission may bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	Bool,
	Int { bits: u32 },
	Uint { bits: u32 },
	Float,
	String,
	/// A field type outside the supported set, with its type name.
	Unsupported(&'static str),
}

impl ValueKind {
	/// Returns true for every kind except [`ValueKind::Unsupported`].
	pub fn is_supported(&self) -> bool {
		!matches!(self, ValueKind::Unsupported(_))
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValueKind::Bool => f.write_str("bool"),
			ValueKind::Int { bits } => write!(f, "i{}", bits),
			ValueKind::Uint { bits } => write!(f, "u{}", bits),
			ValueKind::Float => f.write_str("f64"),
			ValueKind::String => f.write_str("String"),
			ValueKind::Unsupported(name) => f.write_str(name),
		}
	}
}

/// Read-only view of a live field.
///
/// Integers of every width are widened to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
	Bool(bool),
	Int(i64),
	Uint(u64),
	Float(f64),
	Str(&'a str),
	Unsupported(&'static str),
}

impl ValueRef<'_> {
	pub fn kind(&self) -> ValueKind {
		match self {
			ValueRef::Bool(_) => ValueKind::Bool,
			ValueRef::Int(_) => ValueKind::Int { bits: i64::BITS },
			ValueRef::Uint(_) => ValueKind::Uint { bits: u64::BITS },
			ValueRef::Float(_) => ValueKind::Float,
			ValueRef::Str(_) => ValueKind::String,
			ValueRef::Unsupported(name) => ValueKind::Unsupported(*name),
		}
	}

	/// The boolean value, or false for every non-boolean field.
	pub fn is_true(&self) -> bool {
		matches!(self, ValueRef::Bool(true))
	}
}

impl fmt::Display for ValueRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValueRef::Bool(v) => write!(f, "{}", v),
			ValueRef::Int(v) => write!(f, "{}", v),
			ValueRef::Uint(v) => write!(f, "{}", v),
			ValueRef::Float(v) => f.write_str(&format_float(*v)),
			ValueRef::Str(v) => f.write_str(v),
			ValueRef::Unsupported(_) => Ok(()),
		}
	}
}

/// Writable view of a live field.
#[derive(Debug)]
pub enum ValueMut<'a> {
	Bool(&'a mut bool),
	Int(&'a mut dyn SignedSlot),
	Uint(&'a mut dyn UnsignedSlot),
	Float(&'a mut f64),
	Str(&'a mut String),
	Unsupported(&'static str),
}

impl ValueMut<'_> {
	pub fn kind(&self) -> ValueKind {
		match self {
			ValueMut::Bool(_) => ValueKind::Bool,
			ValueMut::Int(slot) => ValueKind::Int { bits: slot.bits() },
			ValueMut::Uint(slot) => ValueKind::Uint { bits: slot.bits() },
			ValueMut::Float(_) => ValueKind::Float,
			ValueMut::Str(_) => ValueKind::String,
			ValueMut::Unsupported(name) => ValueKind::Unsupported(*name),
		}
	}

	/// Write a coerced value into the field.
	///
	/// Returns false when the value does not match the field's kind or does
	/// not fit its width, in which case the field is left untouched.
	pub fn assign(self, value: FieldValue) -> bool {
		match (self, value) {
			(ValueMut::Bool(slot), FieldValue::Bool(v)) => *slot = v,
			(ValueMut::Int(slot), FieldValue::Int(v)) => return slot.set(v),
			(ValueMut::Uint(slot), FieldValue::Uint(v)) => return slot.set(v),
			(ValueMut::Float(slot), FieldValue::Float(v)) => *slot = v,
			(ValueMut::Str(slot), FieldValue::Str(v)) => *slot = v,
			_ => return false,
		}
		true
	}
}

/// An owned, coerced field value waiting to be written back.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	Bool(bool),
	Int(i64),
	Uint(u64),
	Float(f64),
	Str(String),
}

/// Storage of a signed integer field of any width.
pub trait SignedSlot: fmt::Debug {
	fn bits(&self) -> u32;

	/// Store `value`, returning false when it does not fit.
	fn set(&mut self, value: i64) -> bool;
}

/// Storage of an unsigned integer field of any width.
pub trait UnsignedSlot: fmt::Debug {
	fn bits(&self) -> u32;

	/// Store `value`, returning false when it does not fit.
	fn set(&mut self, value: u64) -> bool;
}

/// Types that can back a bindable form field.
pub trait FormValue: 'static {
	const KIND: ValueKind;

	fn value_ref(&self) -> ValueRef<'_>;

	fn value_mut(&mut self) -> ValueMut<'_>;
}

macro_rules! impl_form_value {
	($ty:ty, $kind:ident, $variant:ident, |$this:ident| $read:expr) => {
		impl FormValue for $ty {
			const KIND: ValueKind = ValueKind::$kind;

			fn value_ref(&self) -> ValueRef<'_> {
				let $this = self;
				ValueRef::$variant($read)
			}

			fn value_mut(&mut self) -> ValueMut<'_> {
				ValueMut::$variant(self)
			}
		}
	};
}

macro_rules! impl_integer_value {
	($slot:ident, $kind:ident, $wide:ty, $($ty:ty),+) => {$(
		impl $slot for $ty {
			fn bits(&self) -> u32 {
				<$ty>::BITS
			}

			fn set(&mut self, value: $wide) -> bool {
				<$ty>::try_from(value).map(|v| *self = v).is_ok()
			}
		}

		impl FormValue for $ty {
			const KIND: ValueKind = ValueKind::$kind { bits: <$ty>::BITS };

			fn value_ref(&self) -> ValueRef<'_> {
				ValueRef::$kind(*self as $wide)
			}

			fn value_mut(&mut self) -> ValueMut<'_> {
				ValueMut::$kind(self)
			}
		}
	)+};
}

impl_form_value!(bool, Bool, Bool, |v| *v);
impl_form_value!(f64, Float, Float, |v| *v);
impl_form_value!(String, String, Str, |v| v.as_str());
impl_integer_value!(SignedSlot, Int, i64, i8, i16, i32, i64, isize);
impl_integer_value!(UnsignedSlot, Uint, u64, u8, u16, u32, u64, usize);

/// Format a float the way default values are printed into rendered fields.
///
/// Shortest round-trip digits, switching to exponent notation (`1e+06`,
/// `1.5e-05`) when the decimal exponent is below -4 or at least 6.
pub fn format_float(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_string();
	}
	if value.is_infinite() {
		let inf = if value > 0.0 { "+Inf" } else { "-Inf" };
		return inf.to_string();
	}
	if value == 0.0 {
		let zero = if value.is_sign_negative() { "-0" } else { "0" };
		return zero.to_string();
	}

	let scientific = format!("{:e}", value);
	let (mantissa, exponent) = match scientific.split_once('e') {
		Some((m, e)) => (m, e.parse::<i32>().unwrap_or_default()),
		None => return value.to_string(),
	};

	if (-4..6).contains(&exponent) {
		return value.to_string();
	}

	let sign = if exponent < 0 { '-' } else { '+' };
	format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, "0")]
	#[case(1.5, "1.5")]
	#[case(-2.25, "-2.25")]
	#[case(100000.0, "100000")]
	#[case(1e6, "1e+06")]
	#[case(1234567.0, "1.234567e+06")]
	#[case(0.0001, "0.0001")]
	#[case(0.000015, "1.5e-05")]
	#[case(1e21, "1e+21")]
	#[case(1e100, "1e+100")]
	#[case(f64::INFINITY, "+Inf")]
	#[case(f64::NEG_INFINITY, "-Inf")]
	fn test_format_float(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_float(value), expected);
	}

	#[rstest]
	fn test_format_float_nan() {
		assert_eq!(format_float(f64::NAN), "NaN");
	}

	#[rstest]
	fn test_value_ref_display() {
		assert_eq!(ValueRef::Int(-20).to_string(), "-20");
		assert_eq!(ValueRef::Uint(20).to_string(), "20");
		assert_eq!(ValueRef::Bool(true).to_string(), "true");
		assert_eq!(ValueRef::Str("token").to_string(), "token");
		assert_eq!(ValueRef::Float(2.5).to_string(), "2.5");
		assert_eq!(ValueRef::Unsupported("Duration").to_string(), "");
	}

	#[rstest]
	fn test_value_ref_is_true() {
		assert!(ValueRef::Bool(true).is_true());
		assert!(!ValueRef::Bool(false).is_true());
		assert!(!ValueRef::Str("true").is_true());
	}

	#[rstest]
	fn test_assign_matching_kind() {
		let mut age = 0_i64;
		assert!(age.value_mut().assign(FieldValue::Int(32)));
		assert_eq!(age, 32);

		let mut name = String::new();
		assert!(name.value_mut().assign(FieldValue::Str("alice".to_string())));
		assert_eq!(name, "alice");
	}

	#[rstest]
	fn test_assign_mismatched_kind_is_ignored() {
		let mut flag = true;
		assert!(!flag.value_mut().assign(FieldValue::Int(0)));
		assert!(flag);
	}

	#[rstest]
	fn test_narrow_integers_widen_on_read() {
		assert_eq!((-7_i8).value_ref(), ValueRef::Int(-7));
		assert_eq!(40_000_u16.value_ref(), ValueRef::Uint(40_000));
		assert_eq!(32_usize.value_ref(), ValueRef::Uint(32));
		assert_eq!((-5_isize).value_ref(), ValueRef::Int(-5));
	}

	#[rstest]
	fn test_assign_narrow_integer_checks_range() {
		let mut count = 0_i32;
		assert!(count.value_mut().assign(FieldValue::Int(-5)));
		assert_eq!(count, -5);
		assert!(!count.value_mut().assign(FieldValue::Int(i64::from(i32::MAX) + 1)));
		assert_eq!(count, -5);

		let mut level = 0_u8;
		assert!(!level.value_mut().assign(FieldValue::Uint(256)));
		assert!(level.value_mut().assign(FieldValue::Uint(255)));
		assert_eq!(level, 255);
	}

	#[rstest]
	#[case(0_i8.value_mut().kind(), ValueKind::Int { bits: 8 })]
	#[case(0_i32.value_mut().kind(), ValueKind::Int { bits: 32 })]
	#[case(0_u16.value_mut().kind(), ValueKind::Uint { bits: 16 })]
	#[case(0_usize.value_mut().kind(), ValueKind::Uint { bits: usize::BITS })]
	fn test_integer_kind_carries_width(#[case] kind: ValueKind, #[case] expected: ValueKind) {
		assert_eq!(kind, expected);
	}

	#[rstest]
	fn test_kinds() {
		assert_eq!(<u64 as FormValue>::KIND, ValueKind::Uint { bits: 64 });
		assert_eq!(<i16 as FormValue>::KIND.to_string(), "i16");
		assert_eq!(1.0_f64.value_ref().kind(), ValueKind::Float);
		assert!(!ValueKind::Unsupported("Vec<String>").is_supported());
		assert_eq!(ValueKind::Unsupported("Duration").to_string(), "Duration");
	}
}
