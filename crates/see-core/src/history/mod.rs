//! History collections: unbounded, insertion-ordered (newest first) lists
//! of past successful actions, one per resource vertical.

mod item;
mod page;

pub use item::{
    FileHistoryItem, HistoryItem, HistoryVariant, NewFileUpload, NewTextShare, NewUrlShare,
    TextHistoryItem, UrlHistoryItem,
};
pub use page::{paginate, Page, HISTORY_PAGE_SIZE};
