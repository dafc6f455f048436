mod coerce;
mod extract;
mod models;
mod parser;
mod reader;

pub use extract::extract_listing;
pub use parser::{CategoryType, FeedParser, FragmentError, ParseOutcome, ParsedListing, ParserConfig};
pub use reader::{CONTAINER_TAG, LISTING_TAGS};
