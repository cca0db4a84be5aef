use serde_core::ser::{Serialize, SerializeMap, Serializer};

use crate::record::{FieldMap, Record};
use crate::value::{Null, Scalar};

/// Serializes any `&dyn Record` as a map of field name to value, in
/// declaration order.
///
/// # Examples
///
/// ```
/// use recast_record::derive::Record;
/// use recast_record::serde::RecordSerializer;
///
/// #[derive(Record, Default)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let user = User { name: "Ada".into(), age: 36 };
/// let json = serde_json::to_string(&RecordSerializer(&user)).unwrap();
/// assert_eq!(json, r#"{"name":"Ada","age":36}"#);
/// ```
pub struct RecordSerializer<'a>(pub &'a dyn Record);

impl Serialize for RecordSerializer<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.field_len()))?;
        for (name, value) in self.0.iter_fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for FieldMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Scalars serialize untagged: the bare value, with `Null` as the format's
/// null.
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::UInt(u) => serializer.serialize_u64(*u),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Null {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}
