// src/domain/listing.rs

use super::address::Address;
use super::agent::ListingAgent;
use super::features::Features;
use super::land::{LandDetails, LandEstate};
use super::media::{Inspection, Media};
use super::pricing::{RentalPricing, SalePricing};
use super::rural::{BuildingDetails, RuralFeatures};
use super::status::{ListingKind, PropertyType, StatusType};
use crate::tracking::{
    tracked_collection, tracked_nested, tracked_scalars, CopyMode, ModifiedData, Tracked,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

// listing
//  ├── id / agency_id / status_type
//  ├── created_on / updated_on
//  ├── title / description
//  ├── address ─────────── Address
//  ├── features ────────── Features ── CarParking
//  ├── land_details ────── LandDetails ── [Depth]
//  ├── agents, images, floor_plans, videos, inspections, links
//  └── variant
//       ├── Residential: property_type, auction_on, pricing (SalePricing)
//       ├── Rental:      property_type, available_on, pricing (RentalPricing)
//       ├── Land:        category_type, auction_on, pricing, estate
//       └── Rural:       category_type, pricing, rural_features, building_details

/// Tracked field names the merge protocol refers to directly.
pub mod fields {
    pub const STATUS_TYPE: &str = "status_type";
    pub const UPDATED_ON: &str = "updated_on";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Residential {
    #[serde(skip)]
    modified: ModifiedData,

    property_type: PropertyType,
    auction_on: Option<NaiveDateTime>,
    pricing: Option<SalePricing>,
}

tracked_scalars!(Residential {
    property_type => set_property_type: PropertyType,
    auction_on => set_auction_on: Option<NaiveDateTime>,
});

tracked_nested!(Residential {
    pricing, pricing_mut => set_pricing: SalePricing,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rental {
    #[serde(skip)]
    modified: ModifiedData,

    property_type: PropertyType,
    available_on: Option<NaiveDateTime>,
    pricing: Option<RentalPricing>,
}

tracked_scalars!(Rental {
    property_type => set_property_type: PropertyType,
    available_on => set_available_on: Option<NaiveDateTime>,
});

tracked_nested!(Rental {
    pricing, pricing_mut => set_pricing: RentalPricing,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Land {
    #[serde(skip)]
    modified: ModifiedData,

    category_type: Option<String>,
    auction_on: Option<NaiveDateTime>,
    pricing: Option<SalePricing>,
    estate: Option<LandEstate>,
}

tracked_scalars!(Land {
    category_type => set_category_type: Option<String>,
    auction_on => set_auction_on: Option<NaiveDateTime>,
});

tracked_nested!(Land {
    pricing, pricing_mut => set_pricing: SalePricing,
    estate, estate_mut => set_estate: LandEstate,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rural {
    #[serde(skip)]
    modified: ModifiedData,

    category_type: Option<String>,
    pricing: Option<SalePricing>,
    rural_features: Option<RuralFeatures>,
    building_details: Option<BuildingDetails>,
}

tracked_scalars!(Rural {
    category_type => set_category_type: Option<String>,
});

tracked_nested!(Rural {
    pricing, pricing_mut => set_pricing: SalePricing,
    rural_features, rural_features_mut => set_rural_features: RuralFeatures,
    building_details, building_details_mut => set_building_details: BuildingDetails,
});

macro_rules! impl_variant_tracked {
    ($($variant:ident),+) => {
        $(
            impl Tracked for $variant {
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
                }

                fn copy_from(&mut self, source: &Self, mode: CopyMode) {
                    self.copy_scalars(source, mode);
                    self.copy_nested_values(source, mode);
                }
            }
        )+
    };
}

impl_variant_tracked!(Residential, Rental, Land, Rural);

/// The type-specific part of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ListingVariant {
    Residential(Residential),
    Rental(Rental),
    Land(Land),
    Rural(Rural),
}

impl ListingVariant {
    pub fn new(kind: ListingKind) -> Self {
        match kind {
            ListingKind::Residential => ListingVariant::Residential(Residential::default()),
            ListingKind::Rental => ListingVariant::Rental(Rental::default()),
            ListingKind::Land => ListingVariant::Land(Land::default()),
            ListingKind::Rural => ListingVariant::Rural(Rural::default()),
        }
    }

    pub fn kind(&self) -> ListingKind {
        match self {
            ListingVariant::Residential(_) => ListingKind::Residential,
            ListingVariant::Rental(_) => ListingKind::Rental,
            ListingVariant::Land(_) => ListingKind::Land,
            ListingVariant::Rural(_) => ListingKind::Rural,
        }
    }

    pub fn sale_pricing(&self) -> Option<&SalePricing> {
        match self {
            ListingVariant::Residential(v) => v.pricing(),
            ListingVariant::Land(v) => v.pricing(),
            ListingVariant::Rural(v) => v.pricing(),
            ListingVariant::Rental(_) => None,
        }
    }

    pub fn sale_pricing_mut(&mut self) -> Option<&mut SalePricing> {
        match self {
            ListingVariant::Residential(v) => v.pricing_mut(),
            ListingVariant::Land(v) => v.pricing_mut(),
            ListingVariant::Rural(v) => v.pricing_mut(),
            ListingVariant::Rental(_) => None,
        }
    }

    /// Sale pricing, created empty when missing. `None` for rentals.
    pub fn ensure_sale_pricing(&mut self) -> Option<&mut SalePricing> {
        let missing = self.sale_pricing().is_none();
        match self {
            ListingVariant::Residential(v) if missing => v.set_pricing(Some(SalePricing::default())),
            ListingVariant::Land(v) if missing => v.set_pricing(Some(SalePricing::default())),
            ListingVariant::Rural(v) if missing => v.set_pricing(Some(SalePricing::default())),
            _ => {}
        }
        self.sale_pricing_mut()
    }

    pub fn auction_on(&self) -> Option<NaiveDateTime> {
        match self {
            ListingVariant::Residential(v) => *v.auction_on(),
            ListingVariant::Land(v) => *v.auction_on(),
            _ => None,
        }
    }
}

impl Tracked for ListingVariant {
    fn modified_data(&self) -> &ModifiedData {
        match self {
            ListingVariant::Residential(v) => v.modified_data(),
            ListingVariant::Rental(v) => v.modified_data(),
            ListingVariant::Land(v) => v.modified_data(),
            ListingVariant::Rural(v) => v.modified_data(),
        }
    }

    fn is_modified(&self) -> bool {
        match self {
            ListingVariant::Residential(v) => v.is_modified(),
            ListingVariant::Rental(v) => v.is_modified(),
            ListingVariant::Land(v) => v.is_modified(),
            ListingVariant::Rural(v) => v.is_modified(),
        }
    }

    fn clear_all_modified(&mut self) {
        match self {
            ListingVariant::Residential(v) => v.clear_all_modified(),
            ListingVariant::Rental(v) => v.clear_all_modified(),
            ListingVariant::Land(v) => v.clear_all_modified(),
            ListingVariant::Rural(v) => v.clear_all_modified(),
        }
    }

    fn mark_all_modified(&mut self) {
        match self {
            ListingVariant::Residential(v) => v.mark_all_modified(),
            ListingVariant::Rental(v) => v.mark_all_modified(),
            ListingVariant::Land(v) => v.mark_all_modified(),
            ListingVariant::Rural(v) => v.mark_all_modified(),
        }
    }

    /// Variants of different kinds cannot be merged field by field; the
    /// destination is replaced wholesale instead.
    fn copy_from(&mut self, source: &Self, mode: CopyMode) {
        match (self, source) {
            (ListingVariant::Residential(d), ListingVariant::Residential(s)) => d.copy_from(s, mode),
            (ListingVariant::Rental(d), ListingVariant::Rental(s)) => d.copy_from(s, mode),
            (ListingVariant::Land(d), ListingVariant::Land(s)) => d.copy_from(s, mode),
            (ListingVariant::Rural(d), ListingVariant::Rural(s)) => d.copy_from(s, mode),
            (destination, source) => {
                *destination = ListingVariant::new(source.kind());
                destination.copy_from(source, CopyMode::Full);
            }
        }
    }
}

const COLLECTIONS: [&str; 6] = ["agents", "images", "floor_plans", "videos", "inspections", "links"];

/// The listing aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(skip)]
    modified: ModifiedData,

    id: String,
    agency_id: String,
    status_type: StatusType,
    created_on: Option<NaiveDateTime>,
    updated_on: Option<NaiveDateTime>,
    title: Option<String>,
    description: Option<String>,

    address: Option<Address>,
    features: Option<Features>,
    land_details: Option<LandDetails>,

    agents: Vec<ListingAgent>,
    images: Vec<Media>,
    floor_plans: Vec<Media>,
    videos: Vec<Media>,
    inspections: Vec<Inspection>,
    links: Vec<String>,

    variant: ListingVariant,
}

tracked_scalars!(Listing {
    id => set_id: String,
    agency_id => set_agency_id: String,
    status_type => set_status_type: StatusType,
    created_on => set_created_on: Option<NaiveDateTime>,
    updated_on => set_updated_on: Option<NaiveDateTime>,
    title => set_title: Option<String>,
    description => set_description: Option<String>,
});

tracked_nested!(Listing {
    address, address_mut => set_address: Address,
    features, features_mut => set_features: Features,
    land_details, land_details_mut => set_land_details: LandDetails,
});

tracked_collection!(Listing, agents: ListingAgent, mut agents_mut, add add_agent, remove remove_agent, replace replace_agents);
tracked_collection!(Listing, images: Media, mut images_mut, add add_image, remove remove_image, replace replace_images);
tracked_collection!(Listing, floor_plans: Media, mut floor_plans_mut, add add_floor_plan, remove remove_floor_plan, replace replace_floor_plans);
tracked_collection!(Listing, videos: Media, mut videos_mut, add add_video, remove remove_video, replace replace_videos);
tracked_collection!(Listing, inspections: Inspection, mut inspections_mut, add add_inspection, remove remove_inspection, replace replace_inspections);
tracked_collection!(Listing, links: String, mut links_mut, add add_link, remove remove_link, replace replace_links);

impl Listing {
    /// A blank listing of the given kind with an empty modified set.
    pub fn new(kind: ListingKind) -> Self {
        Self {
            modified: ModifiedData::default(),
            id: String::new(),
            agency_id: String::new(),
            status_type: StatusType::Unknown,
            created_on: None,
            updated_on: None,
            title: None,
            description: None,
            address: None,
            features: None,
            land_details: None,
            agents: Vec::new(),
            images: Vec::new(),
            floor_plans: Vec::new(),
            videos: Vec::new(),
            inspections: Vec::new(),
            links: Vec::new(),
            variant: ListingVariant::new(kind),
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.variant.kind()
    }

    pub fn variant(&self) -> &ListingVariant {
        &self.variant
    }

    pub fn variant_mut(&mut self) -> &mut ListingVariant {
        &mut self.variant
    }

    pub fn sale_pricing(&self) -> Option<&SalePricing> {
        self.variant.sale_pricing()
    }

    pub fn summary(&self) -> ListingSummary {
        ListingSummary {
            kind: self.kind(),
            agency_id: self.agency_id.clone(),
            id: self.id.clone(),
            status_type: self.status_type,
        }
    }
}

impl Tracked for Listing {
    fn modified_data(&self) -> &ModifiedData {
        &self.modified
    }

    fn is_modified(&self) -> bool {
        !self.modified.is_empty() || self.nested_modified() || self.variant.is_modified()
    }

    fn clear_all_modified(&mut self) {
        self.modified.clear();
        self.clear_nested_modified();
        self.variant.clear_all_modified();
    }

    fn mark_all_modified(&mut self) {
        self.mark_scalars();
        self.mark_nested();
        for collection in COLLECTIONS {
            self.modified.mark_collection(collection);
        }
        self.variant.mark_all_modified();
    }

    fn copy_from(&mut self, source: &Self, mode: CopyMode) {
        self.copy_scalars(source, mode);
        self.copy_nested_values(source, mode);

        let copies = |name: &str| source.modified.should_copy_collection(mode, name);
        if copies("agents") {
            self.replace_agents(source.agents.clone());
        }
        if copies("images") {
            self.replace_images(source.images.clone());
        }
        if copies("floor_plans") {
            self.replace_floor_plans(source.floor_plans.clone());
        }
        if copies("videos") {
            self.replace_videos(source.videos.clone());
        }
        if copies("inspections") {
            self.replace_inspections(source.inspections.clone());
        }
        if copies("links") {
            self.replace_links(source.links.clone());
        }

        let kind_changed = self.variant.kind() != source.variant.kind();
        self.variant.copy_from(&source.variant, mode);
        if kind_changed {
            self.modified.mark_scalar("variant");
        }
    }
}

/// Identity and status of a listing, used in error messages and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub kind: ListingKind,
    pub agency_id: String,
    pub id: String,
    pub status_type: StatusType,
}

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} listing '{}' of agency '{}' (status {})",
            self.kind, self.id, self.agency_id, self.status_type
        )
    }
}
