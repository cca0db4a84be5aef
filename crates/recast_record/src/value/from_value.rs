use crate::value::Value;

/// Construction of a concrete `Self` from an erased field value.
///
/// This is the read-side counterpart of [`Value::try_assign`]: typed getters
/// such as [`access::get_field`] and [`access::convert_to_scalar`] use it to
/// raise a `&dyn Value` into the caller's expected type, downcasting first
/// and coercing through [`Scalar`] when the types differ.
///
/// # Examples
///
/// ```
/// use recast_record::{FromValue, Value};
///
/// let v: &dyn Value = &String::from("42");
/// assert_eq!(i32::from_value(v), Some(42));
/// assert_eq!(bool::from_value(v), None);
/// ```
///
/// [`Scalar`]: crate::Scalar
/// [`access::get_field`]: crate::access::get_field
/// [`access::convert_to_scalar`]: crate::access::convert_to_scalar
pub trait FromValue: Sized {
    /// Constructs a `Self` from the given value, or `None` if the value
    /// cannot be represented as one.
    fn from_value(value: &dyn Value) -> Option<Self>;
}
