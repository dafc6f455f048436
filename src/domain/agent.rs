// src/domain/agent.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommunicationType {
    Email,
    Landline,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Communication {
    pub communication_type: CommunicationType,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingAgent {
    pub name: Option<String>,
    /// 1..N, contiguous.
    pub order: u32,
    pub communications: Vec<Communication>,
}

impl ListingAgent {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.communications.is_empty()
    }
}
