use crate::domain::Listing;
use crate::feed::{FeedParser, ParseOutcome};
use crate::tracking::Tracked;

pub const RESIDENTIAL_CURRENT: &str = include_str!("../../fixtures/residential_current.xml");
pub const RESIDENTIAL_SOLD: &str = include_str!("../../fixtures/residential_sold.xml");
pub const RESIDENTIAL_LEASED: &str = include_str!("../../fixtures/residential_leased.xml");
pub const MIXED_BATCH: &str = include_str!("../../fixtures/mixed_batch.xml");

pub fn parse_feed(xml: &str) -> ParseOutcome {
    FeedParser::new()
        .parse(xml, false)
        .unwrap_or_else(|e| panic!("Feed failed to parse: {e}"))
}

/// The only listing in a feed, exactly as the parser produced it.
pub fn parse_single(xml: &str) -> Listing {
    let mut outcome = parse_feed(xml);
    assert!(outcome.errors.is_empty(), "unexpected errors: {:?}", outcome.errors);
    assert_eq!(outcome.listings.len(), 1);
    outcome.listings.remove(0).listing
}

/// A listing as it would come back from storage: baseline cleared.
pub fn stored(xml: &str) -> Listing {
    let mut listing = parse_single(xml);
    listing.clear_all_modified();
    listing
}
