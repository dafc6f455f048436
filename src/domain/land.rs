// src/domain/land.rs

use crate::tracking::{tracked_collection, tracked_scalars, CopyMode, ModifiedData, Tracked};
use rust_decimal::Decimal;
use serde::Serialize;

/// A measured quantity, e.g. `80 square` or `20 meter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOfMeasure {
    pub value: Decimal,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Depth {
    pub value: UnitOfMeasure,
    /// "left", "right" or "rear" in the feed.
    pub side: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LandDetails {
    #[serde(skip)]
    modified: ModifiedData,

    area: Option<UnitOfMeasure>,
    frontage: Option<UnitOfMeasure>,
    cross_over: Option<String>,
    depths: Vec<Depth>,
}

tracked_scalars!(LandDetails {
    area => set_area: Option<UnitOfMeasure>,
    frontage => set_frontage: Option<UnitOfMeasure>,
    cross_over => set_cross_over: Option<String>,
});

tracked_collection!(LandDetails, depths: Depth, mut depths_mut, add add_depth, remove remove_depth, replace replace_depths);

impl Tracked for LandDetails {
    fn modified_data(&self) -> &ModifiedData {
        &self.modified
    }

    fn clear_all_modified(&mut self) {
        self.modified.clear();
    }

    fn mark_all_modified(&mut self) {
        self.mark_scalars();
        self.modified.mark_collection("depths");
    }

    fn copy_from(&mut self, source: &Self, mode: CopyMode) {
        self.copy_scalars(source, mode);
        if source.modified.should_copy_collection(mode, "depths") {
            self.replace_depths(source.depths.clone());
        }
    }
}

/// Estate a land listing belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LandEstate {
    #[serde(skip)]
    modified: ModifiedData,

    name: Option<String>,
    stage: Option<String>,
}

tracked_scalars!(LandEstate {
    name => set_name: Option<String>,
    stage => set_stage: Option<String>,
});

impl Tracked for LandEstate {
    fn modified_data(&self) -> &ModifiedData {
        &self.modified
    }

    fn clear_all_modified(&mut self) {
        self.modified.clear();
    }

    fn mark_all_modified(&mut self) {
        self.mark_scalars();
    }

    fn copy_from(&mut self, source: &Self, mode: CopyMode) {
        self.copy_scalars(source, mode);
    }
}
