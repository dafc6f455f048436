// src/domain/pricing.rs

use crate::tracking::{tracked_scalars, CopyMode, ModifiedData, Tracked};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalePricing {
    #[serde(skip)]
    modified: ModifiedData,

    sale_price: Option<Decimal>,
    sale_price_text: Option<String>,
    is_under_offer: bool,
    sold_price: Option<Decimal>,
    sold_price_text: Option<String>,
    sold_on: Option<NaiveDateTime>,
}

tracked_scalars!(SalePricing {
    sale_price => set_sale_price: Option<Decimal>,
    sale_price_text => set_sale_price_text: Option<String>,
    is_under_offer => set_is_under_offer: bool,
    sold_price => set_sold_price: Option<Decimal>,
    sold_price_text => set_sold_price_text: Option<String>,
    sold_on => set_sold_on: Option<NaiveDateTime>,
});

impl SalePricing {
    /// Copies only the sold price, its text and the sale date, each one
    /// only when `source` has it marked as modified.
    pub fn copy_sold_details_from(&mut self, source: &SalePricing) {
        if source.modified.is_scalar_modified("sold_price") {
            self.set_sold_price(source.sold_price);
        }
        if source.modified.is_scalar_modified("sold_price_text") {
            self.set_sold_price_text(source.sold_price_text.clone());
        }
        if source.modified.is_scalar_modified("sold_on") {
            self.set_sold_on(source.sold_on);
        }
    }

    pub fn has_sold_details(&self) -> bool {
        self.sold_price.is_some() || self.sold_on.is_some()
    }
}

impl Tracked for SalePricing {
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentFrequency {
    #[default]
    Unknown,
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Yearly,
}

impl PaymentFrequency {
    pub fn from_feed(period: &str) -> Self {
        match period.trim().to_ascii_lowercase().as_str() {
            "week" | "weekly" | "pw" => PaymentFrequency::Weekly,
            "fortnight" | "fortnightly" => PaymentFrequency::Fortnightly,
            "month" | "monthly" | "pcm" => PaymentFrequency::Monthly,
            "quarter" | "quarterly" => PaymentFrequency::Quarterly,
            "year" | "yearly" | "annual" | "annually" => PaymentFrequency::Yearly,
            _ => PaymentFrequency::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RentalPricing {
    #[serde(skip)]
    modified: ModifiedData,

    rental_price: Option<Decimal>,
    rental_price_text: Option<String>,
    payment_frequency: PaymentFrequency,
    bond: Option<Decimal>,
}

tracked_scalars!(RentalPricing {
    rental_price => set_rental_price: Option<Decimal>,
    rental_price_text => set_rental_price_text: Option<String>,
    payment_frequency => set_payment_frequency: PaymentFrequency,
    bond => set_bond: Option<Decimal>,
});

impl Tracked for RentalPricing {
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
