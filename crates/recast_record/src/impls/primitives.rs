use core::fmt;

use crate::value::{AssignError, FromValue, Scalar, Value};

/// Implements [`Value`] and [`FromValue`] for a scalar-representable type.
///
/// `$zero` is the type's zero value, `$to` lowers a reference into a
/// [`Scalar`], and `$from` raises a scalar back (conservatively; see the
/// conversion rules on [`Scalar`]).
macro_rules! impl_scalar_value {
    ($ty:ty, $zero:expr, |$this:ident| $to:expr, |$scalar:ident| $from:expr) => {
        impl Value for $ty {
            #[inline]
            fn clone_value(&self) -> Box<dyn Value> {
                Box::new(self.clone())
            }

            fn value_eq(&self, other: &dyn Value) -> bool {
                if let Some(other) = other.downcast_ref::<Self>() {
                    return self == other;
                }
                match (Value::to_scalar(self), other.to_scalar()) {
                    (Some(a), Some(b)) => a.scalar_eq(&b),
                    _ => false,
                }
            }

            #[inline]
            fn to_scalar(&self) -> Option<Scalar> {
                let $this = self;
                Some($to)
            }

            fn try_assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
                if let Some(value) = value.downcast_ref::<Self>() {
                    self.clone_from(value);
                    return Ok(());
                }
                match <Self as FromValue>::from_value(value) {
                    Some(coerced) => {
                        *self = coerced;
                        Ok(())
                    }
                    None if value.to_scalar().is_some() => Err(AssignError::NotCoercible {
                        from: value.type_name(),
                        to: Value::type_name(self),
                    }),
                    None => Err(AssignError::MismatchedTypes {
                        from: value.type_name(),
                        to: Value::type_name(self),
                    }),
                }
            }

            #[inline]
            fn set_to_zero(&mut self) {
                *self = $zero;
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == $zero
            }

            #[inline]
            fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl FromValue for $ty {
            fn from_value(value: &dyn Value) -> Option<Self> {
                if let Some(value) = value.downcast_ref::<Self>() {
                    return Some(value.clone());
                }
                let $scalar = value.to_scalar()?;
                $from
            }
        }
    };
}

macro_rules! impl_signed_value {
    ($($ty:ty),*) => {
        $(impl_scalar_value!(
            $ty, 0,
            |this| Scalar::Int(*this as i64),
            |scalar| scalar.to_i64().and_then(|i| <$ty>::try_from(i).ok())
        );)*
    };
}

macro_rules! impl_unsigned_value {
    ($($ty:ty),*) => {
        $(impl_scalar_value!(
            $ty, 0,
            |this| Scalar::UInt(*this as u64),
            |scalar| scalar.to_u64().and_then(|u| <$ty>::try_from(u).ok())
        );)*
    };
}

impl_signed_value!(i8, i16, i32, i64, isize);
impl_unsigned_value!(u8, u16, u32, u64, usize);

impl_scalar_value!(
    f32, 0.0,
    |this| Scalar::Float(*this as f64),
    |scalar| {
        // A finite double past f32 range narrows to infinity; treat that as
        // out of range rather than storing it.
        let wide = scalar.to_f64()?;
        let narrowed = wide as f32;
        (narrowed.is_finite() || !wide.is_finite()).then_some(narrowed)
    }
);
impl_scalar_value!(
    f64, 0.0,
    |this| Scalar::Float(*this),
    |scalar| scalar.to_f64()
);

impl_scalar_value!(
    bool, false,
    |this| Scalar::Bool(*this),
    |scalar| scalar.to_bool()
);

impl_scalar_value!(
    String, String::new(),
    |this| Scalar::Str(this.clone()),
    |scalar| scalar.to_text()
);

impl_scalar_value!(
    char, '\0',
    |this| Scalar::Str(this.to_string()),
    |scalar| {
        let text = scalar.to_text()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_coerces_between_scalar_types() {
        let mut slot = 0_i32;
        assert!(slot.try_assign(&7_u8).is_ok());
        assert_eq!(slot, 7);

        assert!(slot.try_assign(&String::from("19")).is_ok());
        assert_eq!(slot, 19);

        let err = slot.try_assign(&String::from("nineteen")).unwrap_err();
        assert!(matches!(err, AssignError::NotCoercible { .. }));
        assert_eq!(slot, 19);
    }

    #[test]
    fn from_value_prefers_exact_type() {
        let v: &dyn Value = &3.5_f64;
        assert_eq!(f64::from_value(v), Some(3.5));
        assert_eq!(i64::from_value(v), None);
        assert_eq!(String::from_value(v), Some("3.5".to_string()));
    }

    #[test]
    fn narrowing_to_f32_rejects_out_of_range_doubles() {
        assert_eq!(f32::from_value(&1.5_f64), Some(1.5));
        assert_eq!(f32::from_value(&1e300_f64), None);

        let mut slot = 2.0_f32;
        assert!(slot.try_assign(&1e300_f64).is_err());
        assert_eq!(slot, 2.0);
    }

    #[test]
    fn zero_values() {
        assert!(0_u64.is_zero());
        assert!(String::new().is_zero());
        assert!(!'x'.is_zero());

        let mut s = String::from("hello");
        s.set_to_zero();
        assert!(s.is_empty());
    }
}
