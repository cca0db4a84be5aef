use thiserror::Error;

use crate::value::AssignError;

/// The error produced when a dynamic field access cannot be carried out.
///
/// The plain operations ([`get_field`], [`set_field`], ...) swallow this into
/// zero values and `false`; the `try_*` variants surface it so callers and
/// tests can tell the failure causes apart.
///
/// [`get_field`]: crate::access::get_field
/// [`set_field`]: crate::access::set_field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The record's type declares no field with the requested name.
    #[error("`{type_name}` has no field `{name}`")]
    UnknownField {
        type_name: &'static str,
        name: String,
    },
    /// The field exists but is marked read-only.
    #[error("field `{name}` is read-only")]
    NotWritable { name: String },
    /// The field exists and is writable, but the value cannot be converted
    /// into the field's type.
    #[error(transparent)]
    Incompatible(#[from] AssignError),
}
