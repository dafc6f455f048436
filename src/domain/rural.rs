// src/domain/rural.rs

use super::land::UnitOfMeasure;
use crate::tracking::{tracked_scalars, CopyMode, ModifiedData, Tracked};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuralFeatures {
    #[serde(skip)]
    modified: ModifiedData,

    fencing: Option<String>,
    annual_rainfall: Option<String>,
    soil_types: Option<String>,
    improvements: Option<String>,
    irrigation: Option<String>,
    council_rates: Option<String>,
    carrying_capacity: Option<String>,
    services: Option<String>,
}

tracked_scalars!(RuralFeatures {
    fencing => set_fencing: Option<String>,
    annual_rainfall => set_annual_rainfall: Option<String>,
    soil_types => set_soil_types: Option<String>,
    improvements => set_improvements: Option<String>,
    irrigation => set_irrigation: Option<String>,
    council_rates => set_council_rates: Option<String>,
    carrying_capacity => set_carrying_capacity: Option<String>,
    services => set_services: Option<String>,
});

impl Tracked for RuralFeatures {
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
pub struct BuildingDetails {
    #[serde(skip)]
    modified: ModifiedData,

    area: Option<UnitOfMeasure>,
    energy_rating: Option<Decimal>,
}

tracked_scalars!(BuildingDetails {
    area => set_area: Option<UnitOfMeasure>,
    energy_rating => set_energy_rating: Option<Decimal>,
});

impl Tracked for BuildingDetails {
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
