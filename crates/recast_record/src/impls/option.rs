use core::fmt;

use crate::value::{AssignError, FromValue, Scalar, Value};

/// Nullable slots.
///
/// `Option<T>` is the one field shape that accepts [`Null`]: clearing it
/// yields `None`, and any value coercible into `T` assigns as `Some`.
/// Its zero value is `None`.
///
/// [`Null`]: crate::Null
impl<T> Value for Option<T>
where
    T: Value + FromValue + Clone + serde_core::Serialize,
{
    #[inline]
    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(self.clone())
    }

    fn value_eq(&self, other: &dyn Value) -> bool {
        if let Some(other) = other.downcast_ref::<Self>() {
            return match (self, other) {
                (Some(a), Some(b)) => a.value_eq(b),
                (None, None) => true,
                _ => false,
            };
        }
        match (Value::to_scalar(self), other.to_scalar()) {
            (Some(a), Some(b)) => a.scalar_eq(&b),
            _ => false,
        }
    }

    fn to_scalar(&self) -> Option<Scalar> {
        match self {
            Some(inner) => inner.to_scalar(),
            None => Some(Scalar::Null),
        }
    }

    fn try_assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            self.clone_from(value);
            return Ok(());
        }
        if matches!(value.to_scalar(), Some(Scalar::Null)) {
            *self = None;
            return Ok(());
        }
        match T::from_value(value) {
            Some(inner) => {
                *self = Some(inner);
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
    fn assign_null(&mut self) -> bool {
        *self = None;
        true
    }

    #[inline]
    fn set_to_zero(&mut self) {
        *self = None;
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(inner) => {
                f.write_str("Some(")?;
                inner.value_debug(f)?;
                f.write_str(")")
            }
            None => f.write_str("None"),
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: Value + FromValue + Clone + serde_core::Serialize,
{
    fn from_value(value: &dyn Value) -> Option<Self> {
        if let Some(value) = value.downcast_ref::<Self>() {
            return Some(value.clone());
        }
        if matches!(value.to_scalar(), Some(Scalar::Null)) {
            return Some(None);
        }
        T::from_value(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Null;

    #[test]
    fn null_clears_option() {
        let mut slot = Some(5_i32);
        assert!(slot.try_assign(&Null).is_ok());
        assert_eq!(slot, None);
    }

    #[test]
    fn coerces_into_inner_type() {
        let mut slot: Option<u32> = None;
        assert!(slot.try_assign(&String::from("12")).is_ok());
        assert_eq!(slot, Some(12));

        assert!(slot.try_assign(&(-1_i32)).is_err());
        assert_eq!(slot, Some(12));
    }

    #[test]
    fn some_compares_through_scalars() {
        let a: &dyn Value = &Some(3_i64);
        assert!(a.value_eq(&3_u8));
        assert!(!a.value_eq(&Null));
    }
}
