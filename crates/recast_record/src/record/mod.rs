mod field_map;

pub use field_map::FieldMap;

use core::any::{Any, TypeId};
use core::fmt;

use crate::info::RecordInfo;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Record

/// A struct whose named fields can be read and written dynamically.
///
/// Implement via `#[derive(Record)]`: the derive generates the match-arm
/// accessor table mapping field names to field references, plus the static
/// [`RecordInfo`] behind [`Described`].
///
/// Name lookups resolve against the declared fields only. `field` returns
/// `None` for unknown names, `field_mut` additionally returns `None` for
/// fields marked `#[record(readonly)]`.
///
/// # Examples
///
/// ```
/// use recast_record::{derive::Record, Record as _, Value};
///
/// #[derive(Record, Default)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let mut user = User { name: "Ada".into(), age: 36 };
///
/// assert_eq!(user.field("age").unwrap().downcast_ref::<u32>(), Some(&36));
/// user.field_mut("age").unwrap().try_assign(&37_u32).unwrap();
/// assert_eq!(user.age, 37);
/// ```
///
/// [`Described`]: crate::Described
pub trait Record: Any + Send + Sync {
    /// Returns the [`RecordInfo`] describing this record's type.
    fn info(&self) -> &'static RecordInfo;

    /// Returns a reference to the field named `name`, or `None` if the
    /// record has no readable field with that name.
    fn field(&self, name: &str) -> Option<&dyn Value>;

    /// Returns a mutable reference to the field named `name`, or `None` if
    /// the record has no writable field with that name.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value>;

    /// Returns a reference to the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Value>;

    /// Returns the name of the field at declaration index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of declared fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    fn iter_fields(&self) -> FieldIter<'_>;

    /// Returns the [`TypeId`] of the concrete record type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

impl dyn Record {
    /// Returns `true` if the underlying record is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the record to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the record to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the record to type `T`, unboxing and consuming the trait
    /// object. Returns `Err(self)` if the underlying record is not a `T`.
    pub fn take<T: Any>(self: Box<dyn Record>) -> Result<T, Box<dyn Record>> {
        if self.is::<T>() {
            let this: Box<dyn Any> = self;
            match this.downcast::<T>() {
                Ok(record) => Ok(*record),
                // `is` checked the erased type id already.
                Err(_) => unreachable!(),
            }
        } else {
            Err(self)
        }
    }

    /// Reads the field named `name` as a `T` reference.
    ///
    /// Shorthand for `field(name)` followed by a downcast.
    #[inline]
    pub fn field_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref()
    }

    /// Mutable counterpart of [`field_as`](Self::field_as).
    #[inline]
    pub fn field_mut_as<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name)?.downcast_mut()
    }
}

impl fmt::Debug for dyn Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct(self.info().type_name());
        for (name, value) in self.iter_fields() {
            dbg.field(name, &value);
        }
        dbg.finish()
    }
}

// -----------------------------------------------------------------------------
// FieldIter

/// An iterator over a record's `(name, value)` pairs in declaration order.
pub struct FieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> FieldIter<'a> {
    /// Creates a new [`FieldIter`] over the given record.
    #[inline]
    pub fn new(record: &'a dyn Record) -> Self {
        Self { record, index: 0 }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'a str, &'a dyn Value);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.record.name_at(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}
