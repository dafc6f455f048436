use listing_feed::domain::{BasicValidator, ListingKind, ListingValidator, StatusType, ValidationError};
use listing_feed::feed::FragmentError;
use listing_feed::{AppError, FeedParser, IngestConfig};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Serialize)]
struct ListingReport<'a> {
    kind: ListingKind,
    id: &'a str,
    agency_id: &'a str,
    status: StatusType,
    validation_errors: Vec<ValidationError>,
}

#[derive(Serialize)]
struct FeedReport<'a> {
    listings: Vec<ListingReport<'a>>,
    errors: &'a [FragmentError],
    unrecognized: usize,
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), AppError> {
    let config = IngestConfig::from_env()?;
    init_logging(&config.log_filter);

    let path = std::env::args().nth(1).ok_or(AppError::Usage)?;
    let xml = std::fs::read_to_string(&path).map_err(|source| AppError::Io {
        path: path.clone(),
        source,
    })?;

    let parser = FeedParser::with_config(&config.parser_config())?;
    let outcome = parser.parse(&xml, config.sanitize_invalid_chars)?;

    let validator = BasicValidator;
    let listings = outcome
        .listings
        .iter()
        .map(|parsed| {
            let listing = &parsed.listing;
            ListingReport {
                kind: listing.kind(),
                id: listing.id(),
                agency_id: listing.agency_id(),
                status: *listing.status_type(),
                validation_errors: validator.validate(listing),
            }
        })
        .collect();

    let report = FeedReport {
        listings,
        errors: &outcome.errors,
        unrecognized: outcome.unrecognized.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!(path = %path, "Feed processed");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        tracing::error!(error = %e, "Feed ingest failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
