// src/domain/validation.rs

use super::listing::Listing;
use super::status::StatusType;
use serde::Serialize;

/// A single validation failure, addressed by a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Accepts a fully populated listing and returns every problem found.
pub trait ListingValidator {
    fn validate(&self, listing: &Listing) -> Vec<ValidationError>;
}

/// Checks the data-model invariants only. Richer rule sets plug in through
/// [`ListingValidator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicValidator;

impl ListingValidator for BasicValidator {
    fn validate(&self, listing: &Listing) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let kind = listing.kind();

        if let Some(address) = listing.address() {
            if address.street_number().is_some() && address.street().is_none() {
                errors.push(ValidationError::new(
                    "address.street",
                    "A street is required when a street number is given.",
                ));
            }
        }

        let status = *listing.status_type();
        if !status.is_valid_for(kind) {
            let message = match status {
                StatusType::Leased => "Only rental listings can be leased.",
                _ => "Only sale listings can be sold.",
            };
            errors.push(ValidationError::new("status_type", message));
        }

        errors
    }
}
