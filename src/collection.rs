//! Strictly-typed, insertion-ordered collections
//!
//! Both flavors validate their whole input eagerly at construction and are
//! immutable afterwards, so a constructed collection is homogeneous for its
//! entire lifetime. A missing key is an [`Option::None`], never an error.
//!
//! Duplicate-key policy: [`TypedMap::keyed`] lets a later element overwrite
//! an earlier one with the same key, while [`TypedSet::from_elements`]
//! rejects the duplicate with [`ErrorKind::DuplicateKey`].

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result, Span};

/// Capability contract for elements that derive their own storage key
pub trait Keyed {
    /// Key under which the element is stored
    fn key(&self) -> String;
}

/// A named key selector for element types whose key capability is only
/// known at runtime
#[derive(Clone, Copy, Debug)]
pub struct KeySelector<T> {
    accessor: &'static str,
    select: fn(&T) -> Option<String>,
}

impl<T> KeySelector<T> {
    pub const fn new(accessor: &'static str, select: fn(&T) -> Option<String>) -> Self {
        Self { accessor, select }
    }

    /// Name of the accessor this selector stands for
    pub const fn accessor(&self) -> &'static str {
        self.accessor
    }

    /// Derive the key for an element, if the element supports the accessor
    pub fn select(&self, element: &T) -> Option<String> {
        (self.select)(element)
    }
}

/// Insertion-ordered map of homogeneous elements
#[derive(Clone, Debug, PartialEq)]
pub struct TypedMap<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for TypedMap<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> TypedMap<T> {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys each element by its position in the input sequence
    pub fn indexed(elements: impl IntoIterator<Item = T>) -> Self {
        let entries = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element))
            .collect();
        Self { entries }
    }

    /// Validates a heterogeneous sequence eagerly: every item must project
    /// into `T` via `cast`, whose error value names the actual type. The
    /// first failure aborts construction with the offending index. Entries
    /// are keyed positionally.
    pub fn validated<U, F>(
        items: impl IntoIterator<Item = U>,
        expected: &str,
        cast: F,
    ) -> Result<Self>
    where
        F: Fn(U) -> std::result::Result<T, String>,
    {
        let mut entries = IndexMap::new();
        for (index, item) in items.into_iter().enumerate() {
            let element = cast(item).map_err(|actual| {
                Error::new(
                    ErrorKind::TypeMismatch {
                        index,
                        expected: expected.to_string(),
                        actual,
                    },
                    Span::empty(),
                )
            })?;
            entries.insert(index.to_string(), element);
        }
        Ok(Self { entries })
    }

    /// Derives keys with the named selector; an element the selector cannot
    /// be applied to fails the whole construction.
    pub fn with_selector(
        elements: impl IntoIterator<Item = T>,
        selector: &KeySelector<T>,
    ) -> Result<Self> {
        let mut entries = IndexMap::new();
        for element in elements {
            let Some(key) = selector.select(&element) else {
                return Err(Error::new(
                    ErrorKind::MissingCapability {
                        accessor: selector.accessor().to_string(),
                    },
                    Span::empty(),
                ));
            };
            entries.insert(key, element);
        }
        Ok(Self { entries })
    }

    /// Returns the element stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (key, element) pairs in insertion order; restartable
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates elements in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: Keyed> TypedMap<T> {
    /// Derives keys via [`Keyed`]; a later element with a duplicate key
    /// overwrites the earlier one.
    pub fn keyed(elements: impl IntoIterator<Item = T>) -> Self {
        let mut entries = IndexMap::new();
        for element in elements {
            entries.insert(element.key(), element);
        }
        Self { entries }
    }
}

impl<'a, T> IntoIterator for &'a TypedMap<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Insertion-ordered set keyed by each element's derived key
///
/// Unlike the map flavor, a duplicate derived key is rejected at
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedSet<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for TypedSet<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> TypedSet<T> {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the element stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates (key, element) pairs in insertion order; restartable
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates elements in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: Keyed> TypedSet<T> {
    /// Builds a set from elements; every derived key must be unique
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut entries = IndexMap::new();
        for element in elements {
            let key = element.key();
            if entries.contains_key(&key) {
                return Err(Error::new(ErrorKind::DuplicateKey { key }, Span::empty()));
            }
            entries.insert(key, element);
        }
        Ok(Self { entries })
    }

    /// Validates a heterogeneous sequence eagerly, then applies the set's
    /// unique-key constraint to the projected elements
    pub fn validated<U, F>(
        items: impl IntoIterator<Item = U>,
        expected: &str,
        cast: F,
    ) -> Result<Self>
    where
        F: Fn(U) -> std::result::Result<T, String>,
    {
        let mut elements = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            let element = cast(item).map_err(|actual| {
                Error::new(
                    ErrorKind::TypeMismatch {
                        index,
                        expected: expected.to_string(),
                        actual,
                    },
                    Span::empty(),
                )
            })?;
            elements.push(element);
        }
        Self::from_elements(elements)
    }
}

impl<'a, T> IntoIterator for &'a TypedSet<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
