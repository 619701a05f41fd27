//! # see-core
//!
//! Core domain models and ports for the S.EE share client.
//!
//! This crate holds the wire types of the S.EE API, the persisted key
//! space, the history model, and the ports the rest of the workspace is
//! built against. No I/O happens here.

pub mod api;
pub mod history;
pub mod ids;
pub mod keys;
pub mod ports;
pub mod settings;
pub mod vertical;

// Re-export commonly used types at the crate root
pub use history::{HistoryItem, Page, HISTORY_PAGE_SIZE};
pub use ids::HistoryId;
pub use settings::Theme;
pub use vertical::Vertical;
