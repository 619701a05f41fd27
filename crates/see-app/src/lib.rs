//! # see-app
//!
//! Application use cases for the S.EE share client. They tie the HTTP
//! client to the persistence ports and own the bookkeeping rules around
//! each remote action: history recording, default-domain updates, and
//! draft clearing happen here, never inside the SDK.

pub mod drafts;
pub mod handoff;
pub mod history;
pub mod settings;
pub mod usecases;

pub use drafts::{DraftField, DraftStore};
pub use handoff::{PendingQr, PENDING_QR_FRESHNESS_MS};
pub use history::HistoryStore;
pub use settings::SettingsService;
