pub mod config;
pub mod domain;
pub mod errors;
pub mod feed;
pub mod merge;
pub mod tracking;

#[cfg(test)]
mod tests;

pub use config::IngestConfig;
pub use domain::{Listing, ListingKind, StatusType};
pub use errors::{AppError, ConfigError, FeedError, FieldError, TransitionError, TransitionReason};
pub use feed::{FeedParser, ParseOutcome, ParserConfig};
pub use merge::merge;
pub use tracking::{copy, CopyMode, Tracked};
