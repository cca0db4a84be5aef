use core::fmt;

use crate::value::{AssignError, Value};

// -----------------------------------------------------------------------------
// Scalar

/// The coercion intermediate for non-record values.
///
/// Every scalar-representable [`Value`] can lower itself into a `Scalar`
/// ([`Value::to_scalar`]) and accept one back ([`Value::try_assign`]); all
/// cross-type conversions are defined once, here, instead of pairwise
/// between concrete types.
///
/// Conversions are conservative: numeric casts succeed only when the target
/// can hold the exact value, text parses with the standard `FromStr` forms,
/// and anything involving [`Scalar::Null`] fails (null is only assignable to
/// nullable slots).
///
/// # Examples
///
/// ```
/// use recast_record::Scalar;
///
/// assert_eq!(Scalar::Str("42".into()).to_i64(), Some(42));
/// assert_eq!(Scalar::Float(1.5).to_i64(), None);
/// assert_eq!(Scalar::Int(0).to_bool(), Some(false));
/// assert_eq!(Scalar::Bool(true).to_text(), Some("true".into()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// An absent value.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Whether this is [`Scalar::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Converts to `i64`, if the value is exactly representable.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(*b as i64),
            Scalar::Int(i) => Some(*i),
            Scalar::UInt(u) => i64::try_from(*u).ok(),
            // The upper bound must be exclusive: `i64::MAX as f64` rounds up
            // to 2^63, one past the true maximum.
            Scalar::Float(f) => {
                (f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < 9_223_372_036_854_775_808.0)
                    .then_some(*f as i64)
            }
            Scalar::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Converts to `u64`, if the value is exactly representable.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(*b as u64),
            Scalar::Int(i) => u64::try_from(*i).ok(),
            Scalar::UInt(u) => Some(*u),
            // Exclusive bound, as in to_i64: `u64::MAX as f64` rounds up to 2^64.
            Scalar::Float(f) => {
                (f.fract() == 0.0 && *f >= 0.0 && *f < 18_446_744_073_709_551_616.0)
                    .then_some(*f as u64)
            }
            Scalar::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Converts to `f64`.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(*b as u8 as f64),
            Scalar::Int(i) => Some(*i as f64),
            Scalar::UInt(u) => Some(*u as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Converts to `bool`: numbers by zero/non-zero, text by the usual
    /// `"true"`/`"false"`/`"1"`/`"0"` forms.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(*b),
            Scalar::Int(i) => Some(*i != 0),
            Scalar::UInt(u) => Some(*u != 0),
            Scalar::Float(f) => Some(*f != 0.0),
            Scalar::Str(s) => match s.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
        }
    }

    /// Converts to text. Everything but null has a text form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Int(i) => Some(i.to_string()),
            Scalar::UInt(u) => Some(u.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Str(s) => Some(s.clone()),
        }
    }

    /// Cross-variant equality: numeric variants compare by value, so
    /// `Int(1)`, `UInt(1)` and `Float(1.0)` are all equal.
    pub fn scalar_eq(&self, other: &Scalar) -> bool {
        use Scalar::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Int(a), UInt(b)) | (UInt(b), Int(a)) => u64::try_from(*a) == Ok(*b),
            (Float(a), Float(b)) => a == b,
            (Float(f), Int(i)) | (Int(i), Float(f)) => *f == *i as f64,
            (Float(f), UInt(u)) | (UInt(u), Float(f)) => *f == *u as f64,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => fmt::Display::fmt(b, f),
            Scalar::Int(i) => fmt::Display::fmt(i, f),
            Scalar::UInt(u) => fmt::Display::fmt(u, f),
            Scalar::Float(x) => fmt::Display::fmt(x, f),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl Value for Scalar {
    #[inline]
    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(self.clone())
    }

    fn value_eq(&self, other: &dyn Value) -> bool {
        match other.to_scalar() {
            Some(other) => self.scalar_eq(&other),
            None => false,
        }
    }

    #[inline]
    fn to_scalar(&self) -> Option<Scalar> {
        Some(self.clone())
    }

    fn try_assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
        match value.to_scalar() {
            Some(scalar) => {
                *self = scalar;
                Ok(())
            }
            None => Err(AssignError::MismatchedTypes {
                from: value.type_name(),
                to: self.type_name(),
            }),
        }
    }

    #[inline]
    fn assign_null(&mut self) -> bool {
        *self = Scalar::Null;
        true
    }

    #[inline]
    fn set_to_zero(&mut self) {
        *self = Scalar::Null;
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_null()
    }

    #[inline]
    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Null

/// The absent value.
///
/// `Null` is what [`access::clear_fields`] writes: nullable slots accept it
/// and become `None`, everything else rejects it and stays unchanged.
///
/// [`access::clear_fields`]: crate::access::clear_fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Null;

impl Value for Null {
    #[inline]
    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(Null)
    }

    #[inline]
    fn value_eq(&self, other: &dyn Value) -> bool {
        matches!(other.to_scalar(), Some(Scalar::Null))
    }

    #[inline]
    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::Null)
    }

    fn try_assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
        match value.to_scalar() {
            Some(Scalar::Null) => Ok(()),
            _ => Err(AssignError::NotCoercible {
                from: value.type_name(),
                to: self.type_name(),
            }),
        }
    }

    #[inline]
    fn assign_null(&mut self) -> bool {
        true
    }

    #[inline]
    fn set_to_zero(&mut self) {}

    #[inline]
    fn is_zero(&self) -> bool {
        true
    }

    #[inline]
    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Null")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercions_are_exact() {
        assert_eq!(Scalar::Float(3.0).to_i64(), Some(3));
        assert_eq!(Scalar::Float(3.5).to_i64(), None);
        assert_eq!(Scalar::Int(-1).to_u64(), None);
        assert_eq!(Scalar::UInt(u64::MAX).to_i64(), None);
        assert_eq!(Scalar::Str("  7 ".into()).to_u64(), Some(7));
        assert_eq!(Scalar::Str("seven".into()).to_i64(), None);
    }

    #[test]
    fn float_conversions_reject_out_of_range_whole_numbers() {
        // 2^63 and 2^64 are one past the respective maxima; a saturating
        // cast would silently return MAX instead.
        assert_eq!(Scalar::Float(9_223_372_036_854_775_808.0).to_i64(), None);
        assert_eq!(Scalar::Float(18_446_744_073_709_551_616.0).to_u64(), None);
        assert_eq!(
            Scalar::Float(-9_223_372_036_854_775_808.0).to_i64(),
            Some(i64::MIN)
        );
        assert_eq!(Scalar::Float(f64::INFINITY).to_i64(), None);
        assert_eq!(Scalar::Float(f64::NAN).to_u64(), None);
    }

    #[test]
    fn cross_variant_equality() {
        assert!(Scalar::Int(1).scalar_eq(&Scalar::UInt(1)));
        assert!(Scalar::Int(2).scalar_eq(&Scalar::Float(2.0)));
        assert!(!Scalar::Int(2).scalar_eq(&Scalar::Float(2.5)));
        assert!(!Scalar::Str("1".into()).scalar_eq(&Scalar::Int(1)));
        assert!(Scalar::Null.scalar_eq(&Scalar::Null));
    }

    #[test]
    fn null_only_assigns_to_nullable() {
        let mut n = Null;
        assert!(n.assign_null());

        let mut s = Scalar::Int(3);
        assert!(s.assign_null());
        assert!(s.is_null());
    }
}
