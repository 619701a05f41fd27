//! One file per use case, following the structure of the surfaces that
//! call them: each struct owns its ports and exposes a single `execute`.

mod delete_file;
mod refresh_domains;
mod share_text;
mod shorten_url;
mod upload_files;
mod verify_token;

pub use delete_file::DeleteFile;
pub use refresh_domains::RefreshDomains;
pub use share_text::{ShareText, ShareTextInput};
pub use shorten_url::{ShortenInput, ShortenUrl};
pub use upload_files::{UploadFiles, UploadReport, UploadStatus};
pub use verify_token::VerifyToken;

/// Domain used when neither the caller nor the stored default names one.
pub const FALLBACK_DOMAIN: &str = "s.ee";

/// Result of a successful shorten or text-share action.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareOutcome {
    pub short_url: String,
    pub slug: String,
    /// The domain the request actually went out with.
    pub domain: String,
}
