use core::fmt;

use serde_core::ser::{Serialize, SerializeMap, Serializer};

// -----------------------------------------------------------------------------
// Outcome

/// The uniform result envelope for higher-level operations: a success flag,
/// an optional payload, accumulated error messages, and an optional total
/// count for paged results.
///
/// The fields are private so the envelope's invariants hold by
/// construction: a successful outcome carries no errors, and a failed one
/// carries no payload.
///
/// # Examples
///
/// ```
/// use recast_record::Outcome;
///
/// let ok = Outcome::ok_with_count(vec![1, 2, 3], 40);
/// assert!(ok.is_success());
/// assert_eq!(ok.total_count(), Some(40));
///
/// let failed: Outcome<Vec<i32>> = Outcome::fail("backend unavailable");
/// assert!(!failed.is_success());
/// assert!(failed.payload().is_none());
/// assert_eq!(failed.errors(), ["backend unavailable"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    success: bool,
    payload: Option<T>,
    errors: Vec<String>,
    total_count: Option<u64>,
}

impl<T> Outcome<T> {
    /// Creates a successful outcome carrying `payload`.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            errors: Vec::new(),
            total_count: None,
        }
    }

    /// Creates a successful outcome with a total count, for payloads that
    /// are one page of a larger result.
    pub fn ok_with_count(payload: T, total_count: u64) -> Self {
        Self {
            total_count: Some(total_count),
            ..Self::ok(payload)
        }
    }

    /// Creates a failed outcome with a single error message.
    pub fn fail(error: impl Into<String>) -> Self {
        Self::fail_all(vec![error.into()])
    }

    /// Creates a failed outcome with the given error messages.
    pub fn fail_all(errors: Vec<String>) -> Self {
        Self {
            success: false,
            payload: None,
            errors,
            total_count: None,
        }
    }

    /// Whether the operation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the payload, if any.
    #[inline]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Consumes the outcome, returning the payload if any.
    #[inline]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Returns the accumulated error messages. Empty on success.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the total count, if one was recorded.
    #[inline]
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Maps the payload, preserving the success flag, errors, and count.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            success: self.success,
            payload: self.payload.map(f),
            errors: self.errors,
            total_count: self.total_count,
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(error) => Self::fail(error.to_string()),
        }
    }
}

/// Serializes as a map, omitting the absent payload and count.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 2 + usize::from(self.payload.is_some()) + usize::from(self.total_count.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("success", &self.success)?;
        if let Some(payload) = &self.payload {
            map.serialize_entry("payload", payload)?;
        }
        map.serialize_entry("errors", &self.errors)?;
        if let Some(total_count) = self.total_count {
            map.serialize_entry("total_count", &total_count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_no_errors() {
        let outcome = Outcome::ok(7);
        assert!(outcome.is_success());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.into_payload(), Some(7));
    }

    #[test]
    fn failure_carries_no_payload() {
        let outcome: Outcome<i32> = Outcome::fail_all(vec!["a".into(), "b".into()]);
        assert!(!outcome.is_success());
        assert_eq!(outcome.payload(), None);
        assert_eq!(outcome.errors().len(), 2);
    }

    #[test]
    fn from_result_maps_the_error_message() {
        let outcome: Outcome<i32> = Err::<i32, _>("boom").into();
        assert_eq!(outcome.errors(), ["boom"]);

        let outcome: Outcome<i32> = Ok::<_, String>(3).into();
        assert_eq!(outcome.payload(), Some(&3));
    }

    #[test]
    fn map_preserves_the_envelope() {
        let outcome = Outcome::ok_with_count(2, 10).map(|n| n * 2);
        assert_eq!(outcome.payload(), Some(&4));
        assert_eq!(outcome.total_count(), Some(10));
    }
}
