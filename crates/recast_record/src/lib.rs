#![doc = include_str!("../README.md")]

// Usually we use `crate` inside the crate itself and `recast_record` in doc
// tests; `extern self` lets the derive output refer to `recast_record` from
// both places.
extern crate self as recast_record;

// -----------------------------------------------------------------------------
// Modules

mod outcome;
mod record;
mod value;

pub mod access;
pub mod impls;
pub mod info;
pub mod registry;
pub mod serde;

pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-level exports

pub use info::{Described, FieldInfo, RecordInfo};
pub use outcome::Outcome;
pub use record::{FieldIter, FieldMap, Record};
pub use recast_record_derive as derive;
pub use value::{AssignError, FromValue, Null, Scalar, Value};
