//! Status-gated merge of freshly parsed listings into stored ones.

mod rules;

pub use rules::{permitted_groups, FieldGroup};

use crate::domain::listing::fields;
use crate::domain::Listing;
use crate::errors::{TransitionError, TransitionReason};
use crate::tracking::{CopyMode, Tracked};
use tracing::{debug, info};

fn refusal(existing: &Listing, incoming: &Listing, reason: TransitionReason) -> TransitionError {
    TransitionError {
        existing: existing.summary(),
        incoming: incoming.summary(),
        reason,
    }
}

/// Merges `incoming` into `existing` in place.
///
/// `existing`'s baseline is reset first, so afterwards its modified state
/// holds exactly what this merge changed. Only fields that are both allowed
/// for the incoming status and modified on `incoming` are copied. Copied
/// collections and nested objects are deep copies.
pub fn merge(existing: &mut Listing, incoming: &Listing) -> Result<(), TransitionError> {
    if existing.kind() != incoming.kind() {
        return Err(refusal(existing, incoming, TransitionReason::KindMismatch));
    }

    let groups = permitted_groups(incoming.kind(), *incoming.status_type())
        .map_err(|reason| refusal(existing, incoming, reason))?;

    existing.clear_all_modified();
    for group in groups {
        apply(existing, incoming, *group);
    }

    let changed = existing.modified_data().scalars().count()
        + existing.modified_data().collections().count();
    debug!(
        scalars = ?existing.modified_data().scalars().collect::<Vec<_>>(),
        collections = ?existing.modified_data().collections().collect::<Vec<_>>(),
        "Merge result"
    );
    info!(
        listing = %existing.summary(),
        incoming_status = %incoming.status_type(),
        ?groups,
        changed,
        nested_changes = existing.is_modified() && changed == 0,
        "Merged listing"
    );

    Ok(())
}

fn apply(existing: &mut Listing, incoming: &Listing, group: FieldGroup) {
    let incoming_modified = incoming.modified_data();

    match group {
        FieldGroup::All => existing.copy_from(incoming, CopyMode::ModifiedOnly),
        FieldGroup::Status => {
            if incoming_modified.is_scalar_modified(fields::STATUS_TYPE) {
                existing.set_status_type(*incoming.status_type());
            }
        }
        FieldGroup::Timestamps => {
            if incoming_modified.is_scalar_modified(fields::UPDATED_ON) {
                existing.set_updated_on(*incoming.updated_on());
            }
        }
        FieldGroup::SoldDetails => {
            let Some(source) = incoming.sale_pricing() else {
                return;
            };
            if !source.has_sold_details() || !source.is_modified() {
                return;
            }
            if let Some(destination) = existing.variant_mut().ensure_sale_pricing() {
                destination.copy_sold_details_from(source);
            }
        }
    }
}
