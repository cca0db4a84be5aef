use core::fmt;
use std::borrow::Cow;

use hashbrown::HashMap;

use crate::info::RecordInfo;
use crate::value::Value;

/// An ordered, name-indexed snapshot of field values.
///
/// `FieldMap` is the mapping half of the record/mapping conversions: it is
/// what [`access::to_mapping`] produces and what [`access::from_mapping`]
/// consumes. Entries keep their insertion order, and inserting under an
/// existing name replaces the value in place.
///
/// # Examples
///
/// ```
/// use recast_record::FieldMap;
///
/// let mut mapping = FieldMap::new();
/// mapping.insert("name", String::from("Ada"));
/// mapping.insert("age", 36_u32);
/// mapping.insert("age", 37_u32);
///
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping.get("age").unwrap().downcast_ref::<u32>(), Some(&37));
/// ```
///
/// [`access::to_mapping`]: crate::access::to_mapping
/// [`access::from_mapping`]: crate::access::from_mapping
#[derive(Default)]
pub struct FieldMap {
    target: Option<&'static RecordInfo>,
    names: Vec<Cow<'static, str>>,
    values: Vec<Box<dyn Value>>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl FieldMap {
    /// Creates an empty [`FieldMap`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty [`FieldMap`] with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            target: None,
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// Records which type this mapping was captured from.
    ///
    /// Purely informational; conversions match by field name, never by the
    /// recorded target.
    #[inline]
    pub fn set_target_info(&mut self, info: &'static RecordInfo) {
        self.target = Some(info);
    }

    /// Returns the recorded source type info, if any.
    #[inline]
    pub fn target_info(&self) -> Option<&'static RecordInfo> {
        self.target
    }

    /// Inserts a value under `name`, replacing any existing entry in place.
    #[inline]
    pub fn insert<T: Value>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    /// Boxed counterpart of [`insert`](Self::insert).
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Value>) {
        let name = name.into();
        match self.indices.get(&name) {
            Some(&index) => self.values[index] = value,
            None => {
                self.indices.insert(name.clone(), self.names.len());
                self.names.push(name);
                self.values.push(value);
            }
        }
    }

    /// Returns the value stored under `name`, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&dyn Value> {
        self.indices.get(name).map(|&index| &*self.values[index])
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Value> {
        match self.indices.get(name) {
            Some(&index) => Some(&mut *self.values[index]),
            None => None,
        }
    }

    /// Returns the value at insertion index `index`, if present.
    #[inline]
    pub fn get_at(&self, index: usize) -> Option<&dyn Value> {
        self.values.get(index).map(|value| &**value)
    }

    /// Returns the name at insertion index `index`, if present.
    #[inline]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(Cow::as_ref)
    }

    /// Returns the insertion index of `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Whether an entry named `name` exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &dyn Value)> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(name, value)| (name.as_ref(), &**value))
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Value>)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (N, Box<dyn Value>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert_boxed(name, value);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (Cow<'static, str>, Box<dyn Value>);
    type IntoIter =
        core::iter::Zip<std::vec::IntoIter<Cow<'static, str>>, std::vec::IntoIter<Box<dyn Value>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter().zip(self.values)
    }
}

impl fmt::Debug for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.iter() {
            map.entry(&name, &value);
        }
        map.finish()
    }
}
