// src/domain/status.rs

use serde::Serialize;
use std::fmt;

/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum StatusType {
    #[default]
    Unknown,
    /// "current" in the feed.
    Available,
    Sold,
    Leased,
    Withdrawn,
    OffMarket,
    /// "deleted" in the feed. The record is kept and marked, never erased.
    Removed,
}

impl StatusType {
    /// Maps the feed's `status` attribute. `None` means the value is not one
    /// the dialect defines.
    pub fn from_feed(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "current" | "available" => Some(StatusType::Available),
            "sold" => Some(StatusType::Sold),
            "leased" => Some(StatusType::Leased),
            "withdrawn" => Some(StatusType::Withdrawn),
            "offmarket" | "off-market" | "off_market" => Some(StatusType::OffMarket),
            "deleted" | "removed" => Some(StatusType::Removed),
            _ => None,
        }
    }

    /// Whether a listing of `kind` may hold this status at all.
    pub fn is_valid_for(self, kind: ListingKind) -> bool {
        match self {
            StatusType::Leased => kind == ListingKind::Rental,
            StatusType::Sold => kind.is_sale_bearing(),
            _ => true,
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusType::Unknown => "Unknown",
            StatusType::Available => "Available",
            StatusType::Sold => "Sold",
            StatusType::Leased => "Leased",
            StatusType::Withdrawn => "Withdrawn",
            StatusType::OffMarket => "OffMarket",
            StatusType::Removed => "Removed",
        };
        f.write_str(name)
    }
}

/// The concrete listing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListingKind {
    Residential,
    Rental,
    Land,
    Rural,
}

impl ListingKind {
    /// Sale-bearing variants carry `SalePricing` and can be sold.
    pub fn is_sale_bearing(self) -> bool {
        !matches!(self, ListingKind::Rental)
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListingKind::Residential => "Residential",
            ListingKind::Rental => "Rental",
            ListingKind::Land => "Land",
            ListingKind::Rural => "Rural",
        };
        f.write_str(name)
    }
}

/// Residential and rental building type, from the feed's `category@name`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    #[default]
    Unknown,
    AcreageSemiRural,
    Alpine,
    Apartment,
    BlockOfUnits,
    DuplexSemiDetached,
    Flat,
    House,
    Retirement,
    ServicedApartment,
    Studio,
    Terrace,
    Townhouse,
    Unit,
    Villa,
    Warehouse,
    Other,
}

impl PropertyType {
    /// Lenient match: case and punctuation are ignored ("Duplex/Semi-detached").
    pub fn from_feed(value: &str) -> Self {
        let key: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "acreagesemirural" | "acreage" => PropertyType::AcreageSemiRural,
            "alpine" => PropertyType::Alpine,
            "apartment" => PropertyType::Apartment,
            "blockofunits" => PropertyType::BlockOfUnits,
            "duplexsemidetached" | "duplex" | "semidetached" => PropertyType::DuplexSemiDetached,
            "flat" => PropertyType::Flat,
            "house" => PropertyType::House,
            "retire" | "retirement" => PropertyType::Retirement,
            "servicedapartment" => PropertyType::ServicedApartment,
            "studio" => PropertyType::Studio,
            "terrace" => PropertyType::Terrace,
            "townhouse" => PropertyType::Townhouse,
            "unit" => PropertyType::Unit,
            "villa" => PropertyType::Villa,
            "warehouse" => PropertyType::Warehouse,
            "other" => PropertyType::Other,
            _ => PropertyType::Unknown,
        }
    }
}
