use core::any::{Any, TypeId};

use hashbrown::HashMap;

use crate::record::Record;
use crate::value::Value;

// -----------------------------------------------------------------------------
// FieldInfo

/// Compile-time information for a single named record field.
///
/// # Examples
///
/// ```
/// use recast_record::{derive::Record, Described};
///
/// #[derive(Record, Default)]
/// struct Account {
///     #[record(readonly)]
///     id: u64,
///     owner: String,
/// }
///
/// let info = Account::record_info();
/// let id = info.field("id").unwrap();
///
/// assert!(id.type_is::<u64>());
/// assert!(id.readable() && !id.writable());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    ty_id: TypeId,
    name: &'static str,
    type_name: &'static str,
    readable: bool,
    writable: bool,
}

impl FieldInfo {
    /// Creates a read-write [`FieldInfo`] for field `name` of type `T`.
    pub fn new<T: Value>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_name: core::any::type_name::<T>(),
            readable: true,
            writable: true,
        }
    }

    /// Creates a read-only [`FieldInfo`] for field `name` of type `T`.
    ///
    /// Write operations skip read-only fields; see
    /// [`access::set_field`](crate::access::set_field).
    pub fn readonly<T: Value>(name: &'static str) -> Self {
        Self {
            writable: false,
            ..Self::new::<T>(name)
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the field's declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the type name of the field's declared type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the field's declared type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Whether the field can be read.
    #[inline]
    pub const fn readable(&self) -> bool {
        self.readable
    }

    /// Whether the field can be written.
    #[inline]
    pub const fn writable(&self) -> bool {
        self.writable
    }
}

// -----------------------------------------------------------------------------
// RecordInfo

/// Compile-time information for a record type: its name and the descriptors
/// of its fields, in declaration order.
///
/// Produced once per type by `#[derive(Record)]` and resolved lazily into a
/// `'static` cell; see [`Described::record_info`].
///
/// # Examples
///
/// ```
/// use recast_record::{derive::Record, Described};
///
/// #[derive(Record, Default)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// let info = Point::record_info();
///
/// assert_eq!(info.type_name(), "Point");
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("y"), Some(1));
/// ```
#[derive(Debug)]
pub struct RecordInfo {
    ty_id: TypeId,
    type_name: &'static str,
    type_path: &'static str,
    fields: Box<[FieldInfo]>,
    field_indices: HashMap<&'static str, usize>,
}

impl RecordInfo {
    /// Creates a new [`RecordInfo`] for record type `T`.
    ///
    /// The field order is fixed and follows the input order.
    pub fn new<T: Record>(
        type_name: &'static str,
        type_path: &'static str,
        fields: Vec<FieldInfo>,
    ) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty_id: TypeId::of::<T>(),
            type_name,
            type_path,
            fields: fields.into_boxed_slice(),
            field_indices,
        }
    }

    /// Returns the `TypeId` of the record type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the record type's short name (the type identifier).
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the record type's full module path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the [`FieldInfo`] for the given field `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index of the field with the given `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the names of all readable fields, in declaration order.
    pub fn readable_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.readable())
            .map(FieldInfo::name)
            .collect()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

// -----------------------------------------------------------------------------
// Described

/// Static access to a record type's [`RecordInfo`].
///
/// Implemented by `#[derive(Record)]`; the info is built on first access and
/// cached in a `'static` cell. Use [`Record::info`] when only a trait object
/// is at hand.
///
/// [`Record::info`]: crate::Record::info
pub trait Described: Record {
    /// Returns the [`RecordInfo`] describing `Self`.
    fn record_info() -> &'static RecordInfo;
}
