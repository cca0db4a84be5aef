mod from_value;
mod scalar;

pub use from_value::FromValue;
pub use scalar::{Null, Scalar};

use core::any::{Any, TypeId};
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// AssignError

/// The error returned by [`Value::try_assign`] when a value cannot be
/// written into a field slot.
///
/// The public accessor contract swallows this into a `false`/zero result;
/// the error exists so the two failure causes stay distinguishable to
/// callers of the `try_*` operations and to tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The incoming value has a different type and no scalar representation
    /// to coerce through.
    #[error("cannot assign `{from}` to `{to}`")]
    MismatchedTypes {
        from: &'static str,
        to: &'static str,
    },
    /// Both sides have scalar representations, but the conversion is not
    /// possible (out of range, unparsable text, null into a non-nullable
    /// slot, ...).
    #[error("cannot coerce `{from}` into `{to}`")]
    NotCoercible {
        from: &'static str,
        to: &'static str,
    },
}

// -----------------------------------------------------------------------------
// Value

/// A type-erased field value.
///
/// `dyn Value` is the currency of the whole toolkit: reading a field yields
/// `&dyn Value`, writing a field consumes one, and [`FieldMap`] snapshots
/// store boxed ones. Every type usable as a record field implements this
/// trait; implementations for the primitive scalars, `String`, `Option<T>`
/// and (with the `chrono` feature) `DateTime<Utc>` live in [`impls`].
///
/// # Coercion
///
/// Cross-type traffic routes through [`Scalar`]: [`to_scalar`] lowers a value
/// into the scalar intermediate and [`try_assign`] raises one back into a
/// concrete slot. A `String` holding `"42"` can therefore be assigned to an
/// `i32` field, and vice versa.
///
/// # Examples
///
/// ```
/// use recast_record::Value;
///
/// let x: &dyn Value = &42_i32;
/// assert_eq!(x.downcast_ref::<i32>(), Some(&42));
/// assert!(!x.is_zero());
///
/// let mut slot = 0_u16;
/// slot.try_assign(x).unwrap();
/// assert_eq!(slot, 42);
/// ```
///
/// [`FieldMap`]: crate::FieldMap
/// [`impls`]: crate::impls
/// [`to_scalar`]: Value::to_scalar
/// [`try_assign`]: Value::try_assign
pub trait Value: Any + Send + Sync + erased_serde::Serialize {
    /// Casts this value to `&dyn Value`.
    #[inline(always)]
    fn as_value(&self) -> &dyn Value
    where
        Self: Sized,
    {
        self
    }

    /// Casts this value to a boxed `dyn Value`.
    #[inline(always)]
    fn into_boxed_value(self) -> Box<dyn Value>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// `Box<dyn Value>::type_id` returns the id of the container; this
    /// method always answers for the erased value instead.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the type name of the underlying type, for diagnostics.
    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Clones the value behind the erasure.
    fn clone_value(&self) -> Box<dyn Value>;

    /// Deep value equality.
    ///
    /// Same-type values compare with `PartialEq`; differently-typed values
    /// compare through their scalar representations (so `1_i32` equals
    /// `1_u64`), and values with no common representation are unequal.
    fn value_eq(&self, other: &dyn Value) -> bool;

    /// Lowers this value into the scalar coercion intermediate.
    ///
    /// Returns `None` for types with no scalar representation.
    fn to_scalar(&self) -> Option<Scalar>;

    /// Writes `value` into `self`, coercing if the types differ.
    ///
    /// The assignment is atomic: on error `self` is unchanged.
    fn try_assign(&mut self, value: &dyn Value) -> Result<(), AssignError>;

    /// Sets this value to "absent".
    ///
    /// Only nullable slots (`Option<T>`) accept this; everything else
    /// returns `false` and stays unchanged.
    #[inline]
    fn assign_null(&mut self) -> bool {
        false
    }

    /// Sets this value to its type's zero value (`0`, `""`, `false`,
    /// the default date, `None`, ...).
    fn set_to_zero(&mut self);

    /// Whether this value currently holds its type's zero value.
    ///
    /// Because missed reads also report the zero value, "absent" and "holds
    /// zero" are indistinguishable through [`access::get_field`]; this
    /// predicate is what merges the two in field comparisons.
    ///
    /// [`access::get_field`]: crate::access::get_field
    fn is_zero(&self) -> bool;

    /// Debug formatter for the erased value.
    fn value_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl dyn Value {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use recast_record::Value;
    /// let x: &dyn Value = &10_i32;
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait
    /// object. Returns `Err(self)` if the underlying value is not a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use recast_record::Value;
    /// let x: Box<dyn Value> = Box::new(10_i32);
    /// assert_eq!(x.take::<i32>().ok(), Some(10));
    /// ```
    pub fn take<T: Any>(self: Box<dyn Value>) -> Result<T, Box<dyn Value>> {
        if self.is::<T>() {
            let this: Box<dyn Any> = self;
            match this.downcast::<T>() {
                Ok(value) => Ok(*value),
                // `is` checked the erased type id already.
                Err(_) => unreachable!(),
            }
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for dyn Value {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value_debug(f)
    }
}

impl serde_core::Serialize for dyn Value {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        erased_serde::serialize(self, serializer)
    }
}
