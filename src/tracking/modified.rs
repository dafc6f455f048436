// src/tracking/modified.rs

use super::CopyMode;
use std::collections::BTreeSet;

/// The per-entity record of which scalar fields and which collections have
/// been touched since the last baseline.
///
/// Always compares equal, so entity equality is value equality.
#[derive(Debug, Clone, Default)]
pub struct ModifiedData {
    scalars: BTreeSet<&'static str>,
    collections: BTreeSet<&'static str>,
}

impl PartialEq for ModifiedData {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for ModifiedData {}

impl ModifiedData {
    pub fn mark_scalar(&mut self, field: &'static str) {
        self.scalars.insert(field);
    }

    pub fn mark_collection(&mut self, collection: &'static str) {
        self.collections.insert(collection);
    }

    pub fn is_scalar_modified(&self, field: &str) -> bool {
        self.scalars.contains(field)
    }

    pub fn is_collection_modified(&self, collection: &str) -> bool {
        self.collections.contains(collection)
    }

    /// True when neither a scalar nor a collection has been touched.
    /// Nested value objects are not consulted here, see `Tracked::is_modified`.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.collections.is_empty()
    }

    pub fn scalars(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scalars.iter().copied()
    }

    pub fn collections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.collections.iter().copied()
    }

    pub fn clear(&mut self) {
        self.scalars.clear();
        self.collections.clear();
    }

    pub(crate) fn should_copy_scalar(&self, mode: CopyMode, field: &str) -> bool {
        match mode {
            CopyMode::Full => true,
            CopyMode::ModifiedOnly => self.is_scalar_modified(field),
        }
    }

    pub(crate) fn should_copy_collection(&self, mode: CopyMode, collection: &str) -> bool {
        match mode {
            CopyMode::Full => true,
            CopyMode::ModifiedOnly => self.is_collection_modified(collection),
        }
    }
}
