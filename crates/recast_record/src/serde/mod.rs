//! Serde integration.
//!
//! Records serialize as maps of field name to value, through
//! [`RecordSerializer`] (for any `&dyn Record`) or directly through a
//! [`FieldMap`] snapshot. Deserialization is untyped by design: a
//! self-describing format decodes into a [`FieldMap`] of [`Scalar`] entries,
//! and [`access::from_mapping`] then coerces that mapping into a typed
//! record.
//!
//! [`FieldMap`]: crate::FieldMap
//! [`Scalar`]: crate::Scalar
//! [`access::from_mapping`]: crate::access::from_mapping

mod de;
mod ser;

pub use ser::RecordSerializer;
