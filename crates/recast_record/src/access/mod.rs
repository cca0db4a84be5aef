//! The dynamic accessor operations: field get/set by name, record <->
//! mapping conversion, selective and whole-record copying, and field
//! diffing.
//!
//! Every operation here is a pure function of its arguments plus the
//! accessor tables generated by `#[derive(Record)]`. The plain operations
//! are best-effort by contract: unknown names, read-only fields, and failed
//! coercions degrade to zero values or `false` and emit a `trace!` event,
//! never a panic or a propagated error. The `try_*` variants return
//! [`AccessError`] instead for callers that need the cause.

mod error;

pub use error::AccessError;

use tracing::trace;

use crate::record::{FieldMap, Record};
use crate::registry::RecordRegistry;
use crate::value::{AssignError, FromValue, Value};

// -----------------------------------------------------------------------------
// Field get/set

/// Reads the field named `name` as a `T`, falling back to `T`'s zero value.
///
/// The fallback fires on an unknown name and on a failed conversion alike,
/// so a caller cannot distinguish "absent" from "holds zero" here; use
/// [`has_field`] or [`try_get_field`] when that distinction matters.
///
/// # Examples
///
/// ```
/// use recast_record::{access::get_field, derive::Record};
///
/// #[derive(Record, Default)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let user = User { name: "Ada".into(), age: 36 };
///
/// assert_eq!(get_field::<u32>(&user, "age"), 36);
/// assert_eq!(get_field::<String>(&user, "age"), "36"); // coerced
/// assert_eq!(get_field::<u32>(&user, "missing"), 0); // zero fallback
/// ```
pub fn get_field<T: FromValue + Default>(record: &dyn Record, name: &str) -> T {
    match try_get_field(record, name) {
        Ok(value) => value,
        Err(error) => {
            trace!(name, %error, "field read fell back to the zero value");
            T::default()
        }
    }
}

/// Reads the field named `name` as a `T`, reporting why a read fails.
pub fn try_get_field<T: FromValue>(record: &dyn Record, name: &str) -> Result<T, AccessError> {
    let value = record.field(name).ok_or_else(|| AccessError::UnknownField {
        type_name: record.info().type_name(),
        name: name.to_owned(),
    })?;
    T::from_value(value).ok_or_else(|| conversion_error::<T>(value).into())
}

/// Whether the record's type declares a field named `name`.
#[inline]
pub fn has_field(record: &dyn Record, name: &str) -> bool {
    record.info().field(name).is_some()
}

/// Writes `value` into the field named `name`, coercing if needed.
///
/// Returns `false` (leaving the record unchanged) on an unknown name, a
/// read-only field, or a failed conversion.
///
/// # Examples
///
/// ```
/// use recast_record::{access::set_field, derive::Record};
///
/// #[derive(Record, Default)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let mut user = User::default();
///
/// assert!(set_field(&mut user, "age", &36_u32));
/// assert!(set_field(&mut user, "age", &String::from("37"))); // coerced
/// assert!(!set_field(&mut user, "age", &String::from("n/a")));
/// assert_eq!(user.age, 37);
/// ```
pub fn set_field(record: &mut dyn Record, name: &str, value: &dyn Value) -> bool {
    match try_set_field(record, name, value) {
        Ok(()) => true,
        Err(error) => {
            trace!(name, %error, "field write skipped");
            false
        }
    }
}

/// Writes `value` into the field named `name`, reporting why a write fails.
///
/// The write is atomic: on any error the record is unchanged.
pub fn try_set_field(
    record: &mut dyn Record,
    name: &str,
    value: &dyn Value,
) -> Result<(), AccessError> {
    let info = record.info();
    let field = info.field(name).ok_or_else(|| AccessError::UnknownField {
        type_name: info.type_name(),
        name: name.to_owned(),
    })?;
    if !field.writable() {
        return Err(AccessError::NotWritable {
            name: name.to_owned(),
        });
    }
    // The writable check above makes this lookup infallible for derived
    // records; guard anyway for hand-written impls.
    let slot = record.field_mut(name).ok_or_else(|| AccessError::NotWritable {
        name: name.to_owned(),
    })?;
    slot.try_assign(value)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Mapping conversion

/// Snapshots every readable field of `record` into a [`FieldMap`], in
/// declaration order. Values are deep-cloned.
pub fn to_mapping(record: &dyn Record) -> FieldMap {
    let mut mapping = FieldMap::with_capacity(record.field_len());
    mapping.set_target_info(record.info());
    for (name, value) in record.iter_fields() {
        mapping.insert_boxed(name.to_owned(), value.clone_value());
    }
    mapping
}

/// Builds a `T` from a mapping: a zero-initialized instance, then one
/// best-effort [`set_field`] per entry in mapping order.
///
/// Entries with no matching writable field and values that fail to convert
/// are skipped; the corresponding fields keep their zero values.
///
/// # Examples
///
/// ```
/// use recast_record::access::{from_mapping, to_mapping};
/// use recast_record::derive::Record;
///
/// #[derive(Record, Default, PartialEq, Debug)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// let point = Point { x: 1.0, y: 2.0 };
/// let rebuilt: Point = from_mapping(&to_mapping(&point));
/// assert_eq!(rebuilt, point);
/// ```
pub fn from_mapping<T: Record + Default>(mapping: &FieldMap) -> T {
    let mut target = T::default();
    apply_mapping(&mut target, mapping);
    target
}

/// Dynamic-target counterpart of [`from_mapping`]: the target type is
/// resolved by name through `registry`. Returns `None` when no registered
/// type matches `type_name`, which is the one unrecoverable construction
/// failure.
pub fn from_mapping_dyn(
    registry: &RecordRegistry,
    type_name: &str,
    mapping: &FieldMap,
) -> Option<Box<dyn Record>> {
    let Some(mut record) = registry.create(type_name) else {
        trace!(type_name, "no registered record type; construction failed");
        return None;
    };
    apply_mapping(record.as_mut(), mapping);
    Some(record)
}

fn apply_mapping(record: &mut dyn Record, mapping: &FieldMap) {
    for (name, value) in mapping.iter() {
        // set_field traces its own misses.
        set_field(record, name, value);
    }
}

// -----------------------------------------------------------------------------
// Record conversion

/// Converts a record into a `T` by best-effort field copying.
///
/// When `source` already is a `T` it is returned as-is, without copying.
/// Otherwise the source is snapshotted with [`to_mapping`] and rebuilt with
/// [`from_mapping`]; fields the two types do not share keep their zero
/// values in the result.
///
/// # Examples
///
/// ```
/// use recast_record::access::convert_to;
/// use recast_record::derive::Record;
///
/// #[derive(Record, Default)]
/// struct Employee {
///     name: String,
///     department: String,
/// }
///
/// #[derive(Record, Default)]
/// struct Contact {
///     name: String,
///     phone: String,
/// }
///
/// let source: Box<dyn recast_record::Record> = Box::new(Employee {
///     name: "Ada".into(),
///     department: "Research".into(),
/// });
///
/// let contact: Contact = convert_to(source);
/// assert_eq!(contact.name, "Ada");
/// assert_eq!(contact.phone, ""); // no counterpart, zero value
/// ```
pub fn convert_to<T: Record + Default>(source: Box<dyn Record>) -> T {
    match source.take::<T>() {
        Ok(same) => same,
        Err(source) => from_mapping(&to_mapping(source.as_ref())),
    }
}

/// Dynamic-target counterpart of [`convert_to`], resolving the target type
/// by name through `registry`.
pub fn convert_to_dyn(
    registry: &RecordRegistry,
    type_name: &str,
    source: &dyn Record,
) -> Option<Box<dyn Record>> {
    from_mapping_dyn(registry, type_name, &to_mapping(source))
}

/// Coerces an optional erased value into a `T`, falling back to `T`'s zero
/// value on absence or failed conversion.
///
/// # Examples
///
/// ```
/// use recast_record::access::convert_to_scalar;
/// use recast_record::Value;
///
/// let value: &dyn Value = &String::from("42");
/// assert_eq!(convert_to_scalar::<i64>(Some(value)), 42);
/// assert_eq!(convert_to_scalar::<i64>(None), 0);
/// ```
pub fn convert_to_scalar<T: FromValue + Default>(source: Option<&dyn Value>) -> T {
    let Some(value) = source else {
        return T::default();
    };
    match T::from_value(value) {
        Some(converted) => converted,
        None => {
            let error = conversion_error::<T>(value);
            trace!(%error, "scalar conversion fell back to the zero value");
            T::default()
        }
    }
}

// -----------------------------------------------------------------------------
// Field copying

/// Copies the named fields of `source` into a fresh zero-initialized `T`.
///
/// Returns `None` when `names` is empty. Per-field failures (name missing on
/// either side, read-only target, failed conversion) are swallowed and leave
/// the target field at its zero value.
pub fn copy_fields<T: Record + Default>(source: &dyn Record, names: &[&str]) -> Option<T> {
    if names.is_empty() {
        return None;
    }
    let mut target = T::default();
    for &name in names {
        match source.field(name) {
            Some(value) => {
                set_field(&mut target, name, value);
            }
            None => trace!(name, "source has no such field; copy skipped"),
        }
    }
    Some(target)
}

/// Copies every readable field of `source` into a fresh `T`, by name.
pub fn copy_all_fields<T: Record + Default>(source: &dyn Record) -> Option<T> {
    copy_fields(source, &source.info().readable_names())
}

/// Sets each named field to "absent", where the field's type supports it.
///
/// Only nullable fields (`Option<T>`) have an absent state; other fields
/// are left unchanged.
pub fn clear_fields(record: &mut dyn Record, names: &[&str]) {
    for &name in names {
        match record.field_mut(name) {
            Some(slot) => {
                if !slot.assign_null() {
                    trace!(name, "field is not nullable; clear skipped");
                }
            }
            None => trace!(name, "unknown or read-only field; clear skipped"),
        }
    }
}

/// Sets each named writable field back to its type's zero value.
pub fn reset_fields(record: &mut dyn Record, names: &[&str]) {
    for &name in names {
        match record.field_mut(name) {
            Some(slot) => slot.set_to_zero(),
            None => trace!(name, "unknown or read-only field; reset skipped"),
        }
    }
}

// -----------------------------------------------------------------------------
// Field diffing

/// Whether records `a` and `b` agree on every field in `names`.
///
/// Vacuously true for empty `names`. A field missing on both sides counts
/// as equal; missing on one side counts as equal only when the present
/// value is its type's zero value, matching [`get_field`]'s zero fallback.
pub fn fields_equal(a: &dyn Record, b: &dyn Record, names: &[&str]) -> bool {
    names
        .iter()
        .all(|&name| field_eq(a.field(name), b.field(name)))
}

/// Returns the subset of `names` on which `original` and `current`
/// disagree, preserving the order of `names`.
///
/// # Examples
///
/// ```
/// use recast_record::access::changed_fields;
/// use recast_record::derive::Record;
///
/// #[derive(Record, Default)]
/// struct User {
///     name: String,
///     email: String,
/// }
///
/// let before = User { name: "Ada".into(), email: "ada@x.com".into() };
/// let after = User { name: "Ada".into(), email: "ada2@x.com".into() };
///
/// assert_eq!(changed_fields(&before, &after, &["name", "email"]), vec!["email"]);
/// assert!(changed_fields(&before, &before, &["name", "email"]).is_empty());
/// ```
pub fn changed_fields<'n>(
    original: &dyn Record,
    current: &dyn Record,
    names: &[&'n str],
) -> Vec<&'n str> {
    names
        .iter()
        .copied()
        .filter(|name| !field_eq(original.field(name), current.field(name)))
        .collect()
}

fn field_eq(a: Option<&dyn Value>, b: Option<&dyn Value>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.value_eq(b),
        (Some(present), None) | (None, Some(present)) => present.is_zero(),
        (None, None) => true,
    }
}

fn conversion_error<T>(value: &dyn Value) -> AssignError {
    if value.to_scalar().is_some() {
        AssignError::NotCoercible {
            from: value.type_name(),
            to: core::any::type_name::<T>(),
        }
    } else {
        AssignError::MismatchedTypes {
            from: value.type_name(),
            to: core::any::type_name::<T>(),
        }
    }
}
