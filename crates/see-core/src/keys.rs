//! Persisted key space shared by every surface.
//!
//! Each key lives in one of two scopes (see `ports::StorageScope`): synced
//! keys are small values that follow the account across devices, local keys
//! stay on the device that wrote them.

// Synced scope
pub const API_KEY: &str = "see_api_key";
pub const URL_DOMAINS: &str = "see_url_domains";
pub const DEFAULT_URL_DOMAIN: &str = "see_default_url_domain";
pub const TEXT_DOMAINS: &str = "see_text_domains";
pub const DEFAULT_TEXT_DOMAIN: &str = "see_default_text_domain";
pub const FILE_DOMAINS: &str = "see_file_domains";
pub const AUTO_COPY: &str = "see_auto_copy";
pub const THEME: &str = "see_theme";

// Local scope
pub const URL_HISTORY: &str = "see_url_history";
pub const TEXT_HISTORY: &str = "see_text_history";
pub const FILE_HISTORY: &str = "see_file_history";
pub const DRAFT_TEXT_CONTENT: &str = "see_draft_text_content";
pub const DRAFT_TEXT_TITLE: &str = "see_draft_text_title";
pub const DRAFT_CUSTOM_URL: &str = "see_draft_custom_url";
pub const PENDING_QR: &str = "see_pending_qr";
pub const PENDING_QR_TIMESTAMP: &str = "see_pending_qr_timestamp";

/// Synced keys tied to the signed-in account. Removed by clear-all;
/// auto-copy and theme are device preferences and survive.
pub const ACCOUNT_KEYS: &[&str] = &[
    API_KEY,
    URL_DOMAINS,
    DEFAULT_URL_DOMAIN,
    TEXT_DOMAINS,
    DEFAULT_TEXT_DOMAIN,
    FILE_DOMAINS,
];

/// The three history collections, all in the local scope.
pub const HISTORY_KEYS: &[&str] = &[URL_HISTORY, TEXT_HISTORY, FILE_HISTORY];
