//! [`Value`] and [`FromValue`] implementations for the types usable as
//! record fields: the primitive scalars, `String`, `char`, `Option<T>`,
//! and (with the `chrono` feature) `DateTime<Utc>`.
//!
//! [`Value`]: crate::Value
//! [`FromValue`]: crate::FromValue

mod option;
mod primitives;

#[cfg(feature = "chrono")]
mod datetime;
