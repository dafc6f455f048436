// src/feed/parser.rs

use super::extract::extract_listing;
use super::reader::{check_characters, split_fragments, Fragment};
use crate::domain::{Listing, ListingKind};
use crate::errors::FeedError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

/// The feed's classification of a fragment, from its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryType {
    Sale,
    Rent,
    Land,
    Rural,
    Unhandled,
}

impl CategoryType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "residential" => CategoryType::Sale,
            "rental" => CategoryType::Rent,
            "land" => CategoryType::Land,
            "rural" => CategoryType::Rural,
            _ => CategoryType::Unhandled,
        }
    }

    pub fn listing_kind(self) -> Option<ListingKind> {
        match self {
            CategoryType::Sale => Some(ListingKind::Residential),
            CategoryType::Rent => Some(ListingKind::Rental),
            CategoryType::Land => Some(ListingKind::Land),
            CategoryType::Rural => Some(ListingKind::Rural),
            CategoryType::Unhandled => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Size of a dedicated worker pool. `None` uses rayon's global pool.
    pub worker_threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedListing {
    pub listing: Listing,
    pub source_xml: String,
}

/// A fragment that was recognized but could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentError {
    pub message: String,
    pub source_xml: String,
}

/// Result of one `parse` call. The order of `listings` and `errors` is not
/// tied to document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub listings: Vec<ParsedListing>,
    pub errors: Vec<FragmentError>,
    pub unrecognized: Vec<String>,
}

enum FragmentResult {
    Parsed(ParsedListing),
    Failed(FragmentError),
    Unrecognized(String),
}

fn process(fragment: Fragment) -> FragmentResult {
    let Some(kind) = CategoryType::from_tag(&fragment.tag).listing_kind() else {
        debug!(tag = %fragment.tag, "Unrecognized listing fragment");
        return FragmentResult::Unrecognized(fragment.xml);
    };

    match extract_listing(kind, &fragment.xml) {
        Ok(listing) => FragmentResult::Parsed(ParsedListing {
            listing,
            source_xml: fragment.xml,
        }),
        Err(e) => {
            warn!(tag = %fragment.tag, error = %e, "Failed to extract listing fragment");
            FragmentResult::Failed(FragmentError {
                message: e.to_string(),
                source_xml: fragment.xml,
            })
        }
    }
}

pub struct FeedParser {
    pool: Option<ThreadPool>,
}

impl FeedParser {
    pub fn new() -> Self {
        Self { pool: None }
    }

    pub fn with_config(config: &ParserConfig) -> Result<Self, FeedError> {
        let pool = match config.worker_threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("feed-parser-{i}"))
                    .build()
                    .map_err(|e| FeedError::WorkerPool(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    /// Parses a whole feed document.
    ///
    /// Character checks and root resolution finish before any fragment is
    /// extracted; their failures abort the call. Failures inside a fragment
    /// are reported in [`ParseOutcome::errors`] and never stop the batch.
    pub fn parse(&self, xml: &str, sanitize_invalid_chars: bool) -> Result<ParseOutcome, FeedError> {
        let checked = check_characters(xml, sanitize_invalid_chars)?;
        let fragments = split_fragments(&checked)?;
        info!(fragments = fragments.len(), "Parsing feed");

        let extract_all = || {
            fragments
                .into_par_iter()
                .map(process)
                .collect::<Vec<FragmentResult>>()
        };
        let results = match &self.pool {
            Some(pool) => pool.install(extract_all),
            None => extract_all(),
        };

        let mut outcome = ParseOutcome::default();
        for result in results {
            match result {
                FragmentResult::Parsed(parsed) => outcome.listings.push(parsed),
                FragmentResult::Failed(error) => outcome.errors.push(error),
                FragmentResult::Unrecognized(xml) => outcome.unrecognized.push(xml),
            }
        }

        info!(
            listings = outcome.listings.len(),
            errors = outcome.errors.len(),
            unrecognized = outcome.unrecognized.len(),
            "Parsed feed"
        );
        Ok(outcome)
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}
