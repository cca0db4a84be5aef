#![doc = include_str!("../README.md")]

pub use recast_record as record;

/// The most common imports, including the derive macro.
pub mod prelude {
    pub use recast_record::access::{
        changed_fields, clear_fields, convert_to, convert_to_scalar, copy_all_fields, copy_fields,
        fields_equal, from_mapping, get_field, has_field, reset_fields, set_field, to_mapping,
    };
    pub use recast_record::derive::Record;
    pub use recast_record::{Described, FieldMap, FromValue, Outcome, Record, Scalar, Value};
}
