use serde::{Deserialize, Serialize};

/// Wrapper carried by every successful S.EE response.
///
/// `code` and `message` are passed through verbatim; the client never
/// branches on them for 2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub data: T,
}

/// Body shape of a non-2xx response. Every field is optional so a partial
/// or foreign error payload still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub data: Option<String>,
}
