// src/merge/rules.rs

use crate::domain::{ListingKind, StatusType};
use crate::errors::TransitionReason;

/// A set of listing fields a merge may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    /// Everything the incoming listing reports as modified.
    All,
    Status,
    /// `updated_on` only. `created_on` is not a real feed value.
    Timestamps,
    /// Sold price, sold price text and sold date.
    SoldDetails,
}

use FieldGroup::{All, SoldDetails, Status, Timestamps};

const FULL_UPDATE: &[FieldGroup] = &[All];
const SALE_COMPLETED: &[FieldGroup] = &[Status, Timestamps, SoldDetails];
const RETIRED: &[FieldGroup] = &[Status, Timestamps];

/// The transition table: which field groups an incoming listing of `kind`
/// with status `incoming` may overwrite on the stored one.
pub fn permitted_groups(
    kind: ListingKind,
    incoming: StatusType,
) -> Result<&'static [FieldGroup], TransitionReason> {
    match (kind, incoming) {
        (_, StatusType::Unknown) => Err(TransitionReason::UnhandledStatus),
        (_, StatusType::Available) => Ok(FULL_UPDATE),

        (ListingKind::Rental, StatusType::Sold) => Err(TransitionReason::StatusNotAllowed),
        (_, StatusType::Sold) => Ok(SALE_COMPLETED),

        (ListingKind::Rental, StatusType::Leased) => Ok(RETIRED),
        (_, StatusType::Leased) => Err(TransitionReason::StatusNotAllowed),

        (_, StatusType::Withdrawn | StatusType::OffMarket | StatusType::Removed) => Ok(RETIRED),
    }
}
