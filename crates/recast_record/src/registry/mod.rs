//! A runtime catalog of record types, for the operations that resolve a
//! target type by name instead of by a generic parameter.
//!
//! Registration is explicit ([`RecordRegistry::register`]) or, with the
//! `auto_register` feature, gathered from `#[derive(Record)]` submissions
//! via [`RecordRegistry::with_auto_registered`].

use core::any::TypeId;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use crate::info::{Described, RecordInfo};
use crate::record::Record;

// -----------------------------------------------------------------------------
// RecordMeta

/// What the registry knows about one record type: its [`RecordInfo`] and a
/// constructor for a zero-initialized boxed instance.
#[derive(Clone)]
pub struct RecordMeta {
    info: &'static RecordInfo,
    default_fn: fn() -> Box<dyn Record>,
}

impl RecordMeta {
    /// Creates the [`RecordMeta`] for record type `T`.
    pub fn of<T: Described + Default>() -> Self {
        Self {
            info: T::record_info(),
            default_fn: || Box::new(T::default()),
        }
    }

    /// Returns the type's [`RecordInfo`].
    #[inline]
    pub fn info(&self) -> &'static RecordInfo {
        self.info
    }

    /// Constructs a zero-initialized boxed instance of the type.
    #[inline]
    pub fn default_value(&self) -> Box<dyn Record> {
        (self.default_fn)()
    }
}

impl core::fmt::Debug for RecordMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecordMeta")
            .field("type_path", &self.info.type_path())
            .finish_non_exhaustive()
    }
}

/// Types that can hand the registry their [`RecordMeta`].
///
/// Implemented by `#[derive(Record)]` for types that also implement
/// `Default`.
pub trait GetRecordMeta: Described {
    /// Returns the [`RecordMeta`] for `Self`.
    fn record_meta() -> RecordMeta;
}

// -----------------------------------------------------------------------------
// RecordRegistry

/// Maps `TypeId`s, short type names, and full type paths to [`RecordMeta`].
///
/// Short names can collide across modules; a name registered by two
/// different types becomes ambiguous and resolves to `None` until looked up
/// by full path instead.
///
/// # Examples
///
/// ```
/// use recast_record::derive::Record;
/// use recast_record::registry::RecordRegistry;
///
/// #[derive(Record, Default)]
/// struct Ticket {
///     id: u64,
///     title: String,
/// }
///
/// let mut registry = RecordRegistry::new();
/// registry.register::<Ticket>();
///
/// let meta = registry.get_with_name("Ticket").unwrap();
/// assert_eq!(meta.info().field_len(), 2);
/// assert!(registry.create("Ticket").is_some());
/// ```
#[derive(Default)]
pub struct RecordRegistry {
    metas: HashMap<TypeId, RecordMeta>,
    by_name: HashMap<&'static str, TypeId>,
    by_path: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl RecordRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with every `#[derive(Record)]` type
    /// compiled into the binary.
    #[cfg(feature = "auto_register")]
    pub fn with_auto_registered() -> Self {
        let mut registry = Self::new();
        for entry in inventory::iter::<AutoRegisterFn> {
            (entry.0)(&mut registry);
        }
        registry
    }

    /// Registers record type `T`. Registering the same type twice is a
    /// no-op.
    pub fn register<T: GetRecordMeta>(&mut self) {
        self.register_meta(T::record_meta());
    }

    /// Registers a record type from its prebuilt [`RecordMeta`].
    pub fn register_meta(&mut self, meta: RecordMeta) {
        let info = meta.info();
        let ty_id = info.ty_id();
        if self.metas.insert(ty_id, meta).is_some() {
            return;
        }
        self.by_path.insert(info.type_path(), ty_id);

        let name = info.type_name();
        if self.ambiguous_names.contains(name) {
            return;
        }
        match self.by_name.get(name) {
            Some(&existing) if existing != ty_id => {
                trace!(name, "short type name became ambiguous");
                self.by_name.remove(name);
                self.ambiguous_names.insert(name);
            }
            Some(_) => {}
            None => {
                self.by_name.insert(name, ty_id);
            }
        }
    }

    /// Returns the meta registered for the given `TypeId`.
    #[inline]
    pub fn get(&self, ty_id: TypeId) -> Option<&RecordMeta> {
        self.metas.get(&ty_id)
    }

    /// Resolves a record type by its short name.
    ///
    /// Returns `None` for unregistered and for ambiguous names.
    pub fn get_with_name(&self, name: &str) -> Option<&RecordMeta> {
        if self.ambiguous_names.contains(name) {
            trace!(name, "ambiguous short type name; use the full path");
            return None;
        }
        self.metas.get(self.by_name.get(name)?)
    }

    /// Resolves a record type by its full module path.
    #[inline]
    pub fn get_with_path(&self, path: &str) -> Option<&RecordMeta> {
        self.metas.get(self.by_path.get(path)?)
    }

    /// Constructs a zero-initialized instance of the type registered under
    /// `type_name` (short name first, full path as fallback).
    pub fn create(&self, type_name: &str) -> Option<Box<dyn Record>> {
        self.get_with_name(type_name)
            .or_else(|| self.get_with_path(type_name))
            .map(RecordMeta::default_value)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.metas.len()
    }

    /// Whether no types are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    /// Returns an iterator over all registered metas, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordMeta> {
        self.metas.values()
    }
}

// -----------------------------------------------------------------------------
// Auto registration

/// An `inventory`-submitted hook that registers one record type.
///
/// `#[derive(Record)]` submits one of these per type when the derive's
/// `auto_register` feature is on.
#[cfg(feature = "auto_register")]
pub struct AutoRegisterFn(pub fn(&mut RecordRegistry));

#[cfg(feature = "auto_register")]
inventory::collect!(AutoRegisterFn);
