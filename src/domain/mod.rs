pub mod address;
pub mod agent;
pub mod features;
pub mod land;
pub mod listing;
pub mod media;
pub mod pricing;
pub mod rural;
pub mod status;
pub mod validation;

pub use address::Address;
pub use agent::{Communication, CommunicationType, ListingAgent};
pub use features::{CarParking, Features};
pub use land::{Depth, LandDetails, LandEstate, UnitOfMeasure};
pub use listing::{Land, Listing, ListingSummary, ListingVariant, Rental, Residential, Rural};
pub use media::{Inspection, Media};
pub use pricing::{PaymentFrequency, RentalPricing, SalePricing};
pub use rural::{BuildingDetails, RuralFeatures};
pub use status::{ListingKind, PropertyType, StatusType};
pub use validation::{BasicValidator, ListingValidator, ValidationError};
