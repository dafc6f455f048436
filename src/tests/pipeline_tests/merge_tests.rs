use crate::domain::StatusType;
use crate::errors::TransitionReason;
use crate::merge::merge;
use crate::tests::utils::{
    parse_single, stored, RESIDENTIAL_CURRENT, RESIDENTIAL_LEASED, RESIDENTIAL_SOLD,
};
use crate::tracking::Tracked;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

#[test]
fn merging_an_unchanged_reparse_changes_nothing() {
    let mut existing = stored(RESIDENTIAL_CURRENT);
    let incoming = parse_single(RESIDENTIAL_CURRENT);

    merge(&mut existing, &incoming).unwrap();

    assert!(!existing.is_modified());
    assert_eq!(existing, stored(RESIDENTIAL_CURRENT));
}

#[test]
fn values_dropped_from_the_feed_are_cleared() {
    let mut existing = stored(RESIDENTIAL_CURRENT);
    let trimmed = RESIDENTIAL_CURRENT
        .replace("<headline>A</headline>", "")
        .replace(r#"<videoLink href="http://www.youtube.com/watch?v=00001"/>"#, "")
        .replace(r#"<auction date="2009-02-04-18:30:00"/>"#, "")
        .replace("<inspection>21-Dec-2009 11:00am to 1:00pm</inspection>", "")
        .replace("<inspection>22-Dec-2009 2:00pm to 3:30pm</inspection>", "");
    let incoming = parse_single(&trimmed);

    merge(&mut existing, &incoming).unwrap();

    assert_eq!(*existing.title(), None);
    assert!(existing.inspections().is_empty());
    assert!(existing.videos().is_empty());
    assert_eq!(existing.variant().auction_on(), None);

    // still present in the feed, so kept
    assert_eq!(existing.images().len(), 2);
    assert_eq!(existing.links().len(), 1);

    let modified = existing.modified_data();
    assert_eq!(modified.scalars().collect::<Vec<_>>(), vec!["title"]);
    assert_eq!(
        modified.collections().collect::<Vec<_>>(),
        vec!["inspections", "videos"]
    );
    assert!(existing
        .variant()
        .modified_data()
        .is_scalar_modified("auction_on"));
}

#[test]
fn sold_keeps_descriptive_fields() {
    let mut existing = stored(RESIDENTIAL_CURRENT);
    let incoming = parse_single(RESIDENTIAL_SOLD);

    merge(&mut existing, &incoming).unwrap();

    assert_eq!(existing.title().as_deref(), Some("A"));
    assert_eq!(existing.images().len(), 2);
    assert_eq!(*existing.status_type(), StatusType::Sold);

    let sold_on = NaiveDate::from_ymd_opt(2009, 1, 10)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();
    assert_eq!(*existing.updated_on(), Some(sold_on));

    let pricing = existing.sale_pricing().unwrap();
    assert_eq!(*pricing.sold_price(), Some(Decimal::from(580_000)));
    assert_eq!(pricing.sold_price_text().as_deref(), Some("$580,000"));
    assert_eq!(*pricing.sold_on(), Some(sold_on));
    assert_eq!(
        pricing.sale_price_text().as_deref(),
        Some("Between $400,000 and $600,000")
    );

    let scalars: Vec<_> = existing.modified_data().scalars().collect();
    assert_eq!(scalars, vec!["status_type", "updated_on"]);
    assert!(existing.modified_data().collections().next().is_none());
}

#[test]
fn sold_merge_is_idempotent() {
    let mut existing = stored(RESIDENTIAL_CURRENT);
    let incoming = parse_single(RESIDENTIAL_SOLD);

    merge(&mut existing, &incoming).unwrap();
    merge(&mut existing, &incoming).unwrap();

    assert!(!existing.is_modified());
}

#[test]
fn leased_residential_is_rejected() {
    let mut existing = stored(RESIDENTIAL_CURRENT);
    let incoming = parse_single(RESIDENTIAL_LEASED);

    let err = merge(&mut existing, &incoming).unwrap_err();

    assert_eq!(err.reason, TransitionReason::StatusNotAllowed);
    assert_eq!(err.existing.id, "00001");
    assert_eq!(err.incoming.id, "00001");

    let message = err.to_string();
    assert!(message.contains("'00001'"));
    assert!(message.contains("(status Available)"));
    assert!(message.contains("(status Leased)"));

    // nothing was touched
    assert_eq!(existing.title().as_deref(), Some("A"));
    assert!(!existing.is_modified());
}

#[test]
fn merged_collections_are_deep_copies() {
    let mut existing = stored(RESIDENTIAL_SOLD);
    let mut incoming = parse_single(RESIDENTIAL_CURRENT);

    merge(&mut existing, &incoming).unwrap();
    assert_eq!(existing.images()[0].url, "http://www.example.com/m.jpg");
    assert!(existing.modified_data().is_collection_modified("images"));

    incoming.images_mut()[0].url = "http://www.example.com/changed.jpg".into();
    assert_eq!(existing.images()[0].url, "http://www.example.com/m.jpg");

    if let Some(address) = incoming.address_mut() {
        address.set_street(Some("Other Street".into()));
    }
    assert_eq!(
        existing.address().unwrap().street().as_deref(),
        Some("Main Road")
    );
}
