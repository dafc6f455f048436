// src/domain/features.rs

use crate::tracking::{
    tracked_collection, tracked_nested, tracked_scalars, CopyMode, ModifiedData, Tracked,
};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CarParking {
    #[serde(skip)]
    modified: ModifiedData,

    garages: Option<u8>,
    carports: Option<u8>,
    open_spaces: Option<u8>,
}

tracked_scalars!(CarParking {
    garages => set_garages: Option<u8>,
    carports => set_carports: Option<u8>,
    open_spaces => set_open_spaces: Option<u8>,
});

impl Tracked for CarParking {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Features {
    #[serde(skip)]
    modified: ModifiedData,

    bedrooms: Option<u8>,
    bathrooms: Option<u8>,
    toilets: Option<u8>,
    ensuites: Option<u8>,
    living_areas: Option<u8>,
    /// Explicit car-space count when the feed gives one, else the garage count.
    car_spaces: Option<u8>,
    car_parking: Option<CarParking>,
    /// Sorted, de-duplicated feature names ("airConditioning", "pool", ...).
    tags: Vec<String>,
}

tracked_scalars!(Features {
    bedrooms => set_bedrooms: Option<u8>,
    bathrooms => set_bathrooms: Option<u8>,
    toilets => set_toilets: Option<u8>,
    ensuites => set_ensuites: Option<u8>,
    living_areas => set_living_areas: Option<u8>,
    car_spaces => set_car_spaces: Option<u8>,
});

tracked_nested!(Features {
    car_parking, car_parking_mut => set_car_parking: CarParking,
});

tracked_collection!(Features, tags: String, mut tags_mut, add add_tag, remove remove_tag, replace replace_tags);

impl Features {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Tracked for Features {
    fn modified_data(&self) -> &ModifiedData {
        &self.modified
    }

    fn is_modified(&self) -> bool {
        !self.modified.is_empty() || self.nested_modified()
    }

    fn clear_all_modified(&mut self) {
        self.modified.clear();
        self.clear_nested_modified();
    }

    fn mark_all_modified(&mut self) {
        self.mark_scalars();
        self.mark_nested();
        self.modified.mark_collection("tags");
    }

    fn copy_from(&mut self, source: &Self, mode: CopyMode) {
        self.copy_scalars(source, mode);
        self.copy_nested_values(source, mode);
        if source.modified.should_copy_collection(mode, "tags") {
            self.replace_tags(source.tags.clone());
        }
    }
}
