// src/domain/media.rs

use chrono::NaiveDateTime;
use serde::Serialize;

/// An image, floor plan or video. Plain data: editing one of these never
/// marks the collection that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub url: String,
    /// 1-based display order.
    pub order: u32,
    pub created_on: Option<NaiveDateTime>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Inspection {
    pub opens_on: NaiveDateTime,
    pub closes_on: NaiveDateTime,
}
