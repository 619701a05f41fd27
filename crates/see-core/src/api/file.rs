use serde::{Deserialize, Serialize};

use super::Envelope;

/// A file staged for upload. Sent as multipart form data under the `file`
/// field; any size or type policy is server-side.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUploadData {
    pub url: String,
    pub file_id: String,
    pub filename: String,
    pub hash: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Landing page of the uploaded file.
    pub page: String,
    /// Deletion endpoint path handed back by the server.
    pub delete: String,
}

pub type FileUploadResponse = Envelope<FileUploadData>;

/// `GET /api/v1/file/delete/{hash}` answers outside the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDeleteResponse {
    pub success: bool,
    pub code: i64,
    pub message: String,
}
