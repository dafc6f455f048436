// src/domain/address.rs

use crate::tracking::{tracked_scalars, CopyMode, ModifiedData, Tracked};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Address {
    #[serde(skip)]
    modified: ModifiedData,

    /// Composed from lot number, sub number and street number, e.g. "LOT 32 2/39".
    street_number: Option<String>,
    street: Option<String>,
    suburb: Option<String>,
    municipality: Option<String>,
    state: Option<String>,
    /// "AU" or "NZ".
    country_code: Option<String>,
    postcode: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    is_street_displayed: bool,
}

tracked_scalars!(Address {
    street_number => set_street_number: Option<String>,
    street => set_street: Option<String>,
    suburb => set_suburb: Option<String>,
    municipality => set_municipality: Option<String>,
    state => set_state: Option<String>,
    country_code => set_country_code: Option<String>,
    postcode => set_postcode: Option<String>,
    latitude => set_latitude: Option<f64>,
    longitude => set_longitude: Option<f64>,
    is_street_displayed => set_is_street_displayed: bool,
});

impl Tracked for Address {
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
