//! Field-level change tracking.
//!
//! Every tracked entity owns a [`ModifiedData`] set that its setters and
//! collection mutators update directly. Nested value objects own their own
//! set, and a parent folds their state into [`Tracked::is_modified`].

mod modified;

pub use modified::ModifiedData;

/// How [`copy`] moves values from a source entity onto a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Every scalar and collection, unconditionally.
    Full,
    /// Only what the source's modified set names.
    ModifiedOnly,
}

pub trait Tracked {
    fn modified_data(&self) -> &ModifiedData;

    /// True when this entity or any nested tracked value object has changes.
    fn is_modified(&self) -> bool {
        !self.modified_data().is_empty()
    }

    /// Establishes a new baseline on this entity and everything nested in it.
    fn clear_all_modified(&mut self);

    /// Marks every scalar, nested reference and collection as modified,
    /// recursively, whatever its current value.
    fn mark_all_modified(&mut self);

    /// Copies values from `source` onto `self`. Assignments go through the
    /// setters, so `self` only records the fields whose value actually changed.
    fn copy_from(&mut self, source: &Self, mode: CopyMode);
}

pub fn copy<T: Tracked>(source: &T, destination: &mut T, mode: CopyMode) {
    destination.copy_from(source, mode);
}

/// Copies an optional nested value object. Returns true when the
/// destination reference itself was created or dropped, which the caller
/// records as a scalar change on the parent.
pub(crate) fn copy_nested<T>(
    destination: &mut Option<T>,
    source: Option<&T>,
    source_reference_touched: bool,
    mode: CopyMode,
) -> bool
where
    T: Tracked + Default,
{
    match source {
        None => {
            let should_drop = mode == CopyMode::Full || source_reference_touched;
            if should_drop && destination.is_some() {
                *destination = None;
                return true;
            }
            false
        }
        Some(source) => {
            if mode == CopyMode::ModifiedOnly
                && !source_reference_touched
                && !source.is_modified()
            {
                return false;
            }

            match destination {
                Some(existing) => {
                    existing.copy_from(source, mode);
                    false
                }
                None => {
                    // Nothing on the destination side to preserve.
                    let mut created = T::default();
                    created.copy_from(source, CopyMode::Full);
                    *destination = Some(created);
                    true
                }
            }
        }
    }
}

/// Generates a getter and a change-recording setter for each scalar field,
/// plus a `copy_scalars` helper used by `Tracked::copy_from`.
/// The owner must have a `modified: ModifiedData` field.
macro_rules! tracked_scalars {
    ($owner:ident { $($field:ident => $setter:ident: $ty:ty),+ $(,)? }) => {
        impl $owner {
            $(
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }

                pub fn $setter(&mut self, value: $ty) {
                    if self.$field != value {
                        self.$field = value;
                        self.modified.mark_scalar(stringify!($field));
                    }
                }
            )+

            pub(crate) fn mark_scalars(&mut self) {
                $(self.modified.mark_scalar(stringify!($field));)+
            }

            #[allow(dead_code)]
            pub(crate) fn copy_scalars(
                &mut self,
                source: &Self,
                mode: $crate::tracking::CopyMode,
            ) {
                $(
                    if source.modified.should_copy_scalar(mode, stringify!($field)) {
                        self.$setter(source.$field.clone());
                    }
                )+
            }
        }
    };
}

/// Generates the membership mutators for a tracked collection. Each one
/// performs the change and records it in a single step. The `_mut` accessor
/// hands out a slice: elements can be edited, membership cannot, so it
/// never marks the collection.
macro_rules! tracked_collection {
    (
        $owner:ident, $field:ident: $item:ty,
        mut $field_mut:ident,
        add $add:ident,
        remove $remove:ident,
        replace $replace:ident $(,)?
    ) => {
        impl $owner {
            pub fn $field(&self) -> &[$item] {
                &self.$field
            }

            pub fn $field_mut(&mut self) -> &mut [$item] {
                &mut self.$field
            }

            pub fn $add(&mut self, item: $item) {
                self.$field.push(item);
                self.modified.mark_collection(stringify!($field));
            }

            pub fn $remove(&mut self, index: usize) -> Option<$item> {
                if index >= self.$field.len() {
                    return None;
                }
                let removed = self.$field.remove(index);
                self.modified.mark_collection(stringify!($field));
                Some(removed)
            }

            pub fn $replace(&mut self, items: Vec<$item>) {
                if self.$field != items {
                    self.$field = items;
                    self.modified.mark_collection(stringify!($field));
                }
            }
        }
    };
}

/// Generates accessors for optional nested value objects. Replacing or
/// dropping the reference is recorded on the owner under the field name;
/// edits made through the `_mut` accessor are recorded by the child.
macro_rules! tracked_nested {
    ($owner:ident { $($field:ident, $field_mut:ident => $setter:ident: $ty:ty),+ $(,)? }) => {
        impl $owner {
            $(
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $field_mut(&mut self) -> Option<&mut $ty> {
                    self.$field.as_mut()
                }

                pub fn $setter(&mut self, value: Option<$ty>) {
                    if self.$field != value {
                        self.$field = value;
                        self.modified.mark_scalar(stringify!($field));
                    }
                }
            )+

            pub(crate) fn copy_nested_values(
                &mut self,
                source: &Self,
                mode: $crate::tracking::CopyMode,
            ) {
                $(
                    if $crate::tracking::copy_nested(
                        &mut self.$field,
                        source.$field.as_ref(),
                        source.modified.is_scalar_modified(stringify!($field)),
                        mode,
                    ) {
                        self.modified.mark_scalar(stringify!($field));
                    }
                )+
            }

            pub(crate) fn mark_nested(&mut self) {
                $(
                    self.modified.mark_scalar(stringify!($field));
                    if let Some(nested) = self.$field.as_mut() {
                        $crate::tracking::Tracked::mark_all_modified(nested);
                    }
                )+
            }

            pub(crate) fn nested_modified(&self) -> bool {
                false
                    $(|| self
                        .$field
                        .as_ref()
                        .is_some_and($crate::tracking::Tracked::is_modified))+
            }

            pub(crate) fn clear_nested_modified(&mut self) {
                $(
                    if let Some(nested) = self.$field.as_mut() {
                        $crate::tracking::Tracked::clear_all_modified(nested);
                    }
                )+
            }
        }
    };
}

pub(crate) use tracked_collection;
pub(crate) use tracked_nested;
pub(crate) use tracked_scalars;
