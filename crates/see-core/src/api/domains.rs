use serde::{Deserialize, Serialize};

use super::Envelope;

/// Payload of the per-vertical domain listing endpoints. Order is the
/// server's and is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainListData {
    pub domains: Vec<String>,
}

pub type DomainListResponse = Envelope<DomainListData>;
