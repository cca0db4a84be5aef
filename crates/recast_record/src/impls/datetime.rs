use core::fmt;

use chrono::{DateTime, Utc};

use crate::value::{AssignError, FromValue, Scalar, Value};

/// Date/time fields.
///
/// The scalar form is an RFC 3339 string; integers assign as Unix seconds.
/// The zero value is the Unix epoch.
impl Value for DateTime<Utc> {
    #[inline]
    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(*self)
    }

    fn value_eq(&self, other: &dyn Value) -> bool {
        if let Some(other) = other.downcast_ref::<Self>() {
            return self == other;
        }
        match other.to_scalar() {
            Some(Scalar::Str(s)) => DateTime::parse_from_rfc3339(&s)
                .map(|parsed| parsed.with_timezone(&Utc) == *self)
                .unwrap_or(false),
            _ => false,
        }
    }

    #[inline]
    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::Str(self.to_rfc3339()))
    }

    fn try_assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            *self = *value;
            return Ok(());
        }
        match Self::from_value(value) {
            Some(parsed) => {
                *self = parsed;
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
        *self = Self::default();
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &dyn Value) -> Option<Self> {
        if let Some(value) = value.downcast_ref::<Self>() {
            return Some(*value);
        }
        match value.to_scalar()? {
            Scalar::Str(s) => DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc)),
            Scalar::Int(secs) => DateTime::from_timestamp(secs, 0),
            Scalar::UInt(secs) => DateTime::from_timestamp(i64::try_from(secs).ok()?, 0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_round_trip() {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let scalar = Value::to_scalar(&ts).unwrap();
        assert_eq!(DateTime::<Utc>::from_value(&scalar), Some(ts));
    }

    #[test]
    fn assigns_from_unix_seconds() {
        let mut slot = DateTime::<Utc>::default();
        assert!(slot.is_zero());
        assert!(slot.try_assign(&1_700_000_000_i64).is_ok());
        assert_eq!(slot.timestamp(), 1_700_000_000);
    }
}
