use crate::domain::{
    BasicValidator, CommunicationType, ListingKind, ListingValidator, ListingVariant, StatusType,
};
use crate::errors::FeedError;
use crate::feed::FeedParser;
use crate::tests::utils::{
    parse_feed, parse_single, stored, MIXED_BATCH, RESIDENTIAL_CURRENT, RESIDENTIAL_LEASED,
};
use crate::tracking::Tracked;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

#[test]
fn parsing_twice_gives_equal_listings() {
    assert_eq!(stored(RESIDENTIAL_CURRENT), stored(RESIDENTIAL_CURRENT));
}

#[test]
fn parsed_listing_reads_as_modified_until_cleared() {
    let mut listing = parse_single(RESIDENTIAL_CURRENT);
    assert!(listing.is_modified());

    listing.clear_all_modified();
    assert!(!listing.is_modified());
}

#[test]
fn full_residential_fragment() {
    let listing = parse_single(RESIDENTIAL_CURRENT);

    assert_eq!(listing.kind(), ListingKind::Residential);
    assert_eq!(listing.id(), "00001");
    assert_eq!(listing.agency_id(), "XNWXNW");
    assert_eq!(*listing.status_type(), StatusType::Available);
    assert_eq!(listing.title().as_deref(), Some("A"));

    let address = listing.address().unwrap();
    assert_eq!(address.street_number().as_deref(), Some("LOT 32 2/39"));
    assert_eq!(address.street().as_deref(), Some("Main Road"));
    assert_eq!(address.country_code().as_deref(), Some("AU"));

    let agent = &listing.agents()[0];
    assert_eq!(agent.order, 1);
    let kinds: Vec<_> = agent
        .communications
        .iter()
        .map(|c| c.communication_type)
        .collect();
    assert_eq!(
        kinds,
        vec![
            CommunicationType::Landline,
            CommunicationType::Mobile,
            CommunicationType::Email
        ]
    );

    let images: Vec<_> = listing.images().iter().map(|i| i.order).collect();
    assert_eq!(images, vec![1, 2]);
    assert_eq!(listing.floor_plans().len(), 1);
    assert_eq!(listing.videos().len(), 1);
    assert_eq!(listing.inspections().len(), 2);
    assert_eq!(listing.links().len(), 1);

    let features = listing.features().unwrap();
    assert_eq!(
        features.tags(),
        &["airConditioning", "alarmSystem", "disabled access", "pool", "shed"].map(String::from)
    );
    assert_eq!(listing.land_details().unwrap().depths().len(), 1);

    let pricing = listing.sale_pricing().unwrap();
    assert_eq!(*pricing.sale_price(), Some(Decimal::from(500_000)));
    assert_eq!(
        pricing.sale_price_text().as_deref(),
        Some("Between $400,000 and $600,000")
    );
    assert!(listing.variant().auction_on().is_some());
}

#[test]
fn one_bad_fragment_does_not_stop_the_batch() {
    let outcome = parse_feed(MIXED_BATCH);

    assert_eq!(outcome.listings.len(), 6);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.unrecognized.len(), 1);

    let error = &outcome.errors[0];
    assert!(error.source_xml.starts_with("<residential"));
    assert!(error.source_xml.contains("<uniqueID>BAD-1</uniqueID>"));
    assert!(error.source_xml.ends_with("</residential>"));
    assert!(error.message.contains("five hundred thousand"));

    assert!(outcome.unrecognized[0].contains("COM-1"));

    let mut ids: Vec<_> = outcome
        .listings
        .iter()
        .map(|parsed| parsed.listing.id().as_str())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["LAND-1", "RENT-1", "RENT-2", "RES-1", "RES-2", "RURAL-1"]);
}

#[test]
fn each_listing_keeps_its_source_fragment() {
    let outcome = parse_feed(MIXED_BATCH);

    for parsed in &outcome.listings {
        let marker = format!("<uniqueID>{}</uniqueID>", parsed.listing.id());
        assert!(parsed.source_xml.contains(&marker));
        assert!(MIXED_BATCH.contains(&parsed.source_xml));
    }
}

#[test]
fn hidden_land_price_has_no_text() {
    let outcome = parse_feed(MIXED_BATCH);
    let land = outcome
        .listings
        .iter()
        .find(|parsed| parsed.listing.kind() == ListingKind::Land)
        .map(|parsed| &parsed.listing)
        .unwrap();

    let pricing = land.sale_pricing().unwrap();
    assert_eq!(*pricing.sale_price(), Some(Decimal::from(150_000)));
    assert_eq!(*pricing.sale_price_text(), None);

    let ListingVariant::Land(variant) = land.variant() else {
        panic!("expected a land variant");
    };
    assert_eq!(variant.estate().unwrap().stage().as_deref(), Some("5"));
}

#[test]
fn unknown_root_is_a_structural_error() {
    let err = FeedParser::new()
        .parse("<listings><residential/></listings>", false)
        .unwrap_err();
    assert_eq!(err, FeedError::UnrecognizedRoot("listings".into()));
}

#[test]
fn illegal_character_aborts_unless_sanitized() {
    let dirty = RESIDENTIAL_CURRENT.replace("<headline>A</headline>", "<headline>A\u{B}</headline>");

    let err = FeedParser::new().parse(&dirty, false).unwrap_err();
    assert!(matches!(err, FeedError::InvalidCharacter { code: 0xB, .. }));

    let outcome = FeedParser::new().parse(&dirty, true).unwrap();
    assert_eq!(outcome.listings.len(), 1);
    assert_eq!(outcome.listings[0].listing.title().as_deref(), Some("A"));
}

#[test]
fn json_output_has_no_tracker_state() {
    let listing = parse_single(RESIDENTIAL_CURRENT);
    let json = serde_json::to_value(&listing).unwrap();

    assert_eq!(json["id"], "00001");
    assert!(json.get("modified").is_none());
    assert!(json["address"].get("modified").is_none());
    assert!(json["features"].get("modified").is_none());
    assert!(json["variant"]["Residential"].get("modified").is_none());
    assert!(json["variant"]["Residential"]["pricing"].get("modified").is_none());
}

#[test]
fn validator_flags_a_leased_residential() {
    let listing = parse_single(RESIDENTIAL_LEASED);
    let errors = BasicValidator.validate(&listing);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "status_type");
}
