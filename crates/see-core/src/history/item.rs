use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::TextType;
use crate::ids::HistoryId;
use crate::keys;

/// One history item variant. The three variants share an id/timestamp
/// envelope and differ only in their payload fields, so every collection
/// operation is written once against this trait.
pub trait HistoryVariant:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Local-scope key of the collection this variant lives in.
    const STORAGE_KEY: &'static str;

    /// Payload of a freshly recorded item, before id and timestamp are
    /// stamped on.
    type New: Send;

    fn assemble(id: HistoryId, created_at: i64, new: Self::New) -> Self;

    fn id(&self) -> &HistoryId;

    fn created_at(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlHistoryItem {
    pub id: HistoryId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub original_url: String,
    pub short_url: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUrlShare {
    pub original_url: String,
    pub short_url: String,
    pub domain: String,
    pub slug: Option<String>,
}

impl HistoryVariant for UrlHistoryItem {
    const STORAGE_KEY: &'static str = keys::URL_HISTORY;

    type New = NewUrlShare;

    fn assemble(id: HistoryId, created_at: i64, new: NewUrlShare) -> Self {
        Self {
            id,
            created_at,
            original_url: new.original_url,
            short_url: new.short_url,
            domain: new.domain,
            slug: new.slug,
        }
    }

    fn id(&self) -> &HistoryId {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextHistoryItem {
    pub id: HistoryId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub title: String,
    pub short_url: String,
    pub domain: String,
    pub text_type: TextType,
}

#[derive(Debug, Clone)]
pub struct NewTextShare {
    pub title: String,
    pub short_url: String,
    pub domain: String,
    pub text_type: TextType,
}

impl HistoryVariant for TextHistoryItem {
    const STORAGE_KEY: &'static str = keys::TEXT_HISTORY;

    type New = NewTextShare;

    fn assemble(id: HistoryId, created_at: i64, new: NewTextShare) -> Self {
        Self {
            id,
            created_at,
            title: new.title,
            short_url: new.short_url,
            domain: new.domain,
            text_type: new.text_type,
        }
    }

    fn id(&self) -> &HistoryId {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHistoryItem {
    pub id: HistoryId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub filename: String,
    pub url: String,
    pub page_url: String,
    pub size: u64,
    pub delete_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewFileUpload {
    pub filename: String,
    pub url: String,
    pub page_url: String,
    pub size: u64,
    pub delete_hash: String,
}

impl HistoryVariant for FileHistoryItem {
    const STORAGE_KEY: &'static str = keys::FILE_HISTORY;

    type New = NewFileUpload;

    fn assemble(id: HistoryId, created_at: i64, new: NewFileUpload) -> Self {
        Self {
            id,
            created_at,
            filename: new.filename,
            url: new.url,
            page_url: new.page_url,
            size: new.size,
            delete_hash: new.delete_hash,
        }
    }

    fn id(&self) -> &HistoryId {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// Tagged union over the three variants. Collection operations stay
/// generic; this exists for rendering boundaries that show mixed history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryItem {
    Url(UrlHistoryItem),
    Text(TextHistoryItem),
    File(FileHistoryItem),
}

impl HistoryItem {
    pub fn id(&self) -> &HistoryId {
        match self {
            HistoryItem::Url(item) => &item.id,
            HistoryItem::Text(item) => &item.id,
            HistoryItem::File(item) => &item.id,
        }
    }

    pub fn created_at(&self) -> i64 {
        match self {
            HistoryItem::Url(item) => item.created_at,
            HistoryItem::Text(item) => item.created_at,
            HistoryItem::File(item) => item.created_at,
        }
    }

    /// The link a surface would copy or open for this item.
    pub fn share_link(&self) -> &str {
        match self {
            HistoryItem::Url(item) => &item.short_url,
            HistoryItem::Text(item) => &item.short_url,
            HistoryItem::File(item) => &item.page_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_items_keep_the_persisted_field_names() {
        let item = UrlHistoryItem {
            id: HistoryId::from("id-1"),
            created_at: 1_700_000_000_000,
            original_url: "https://example.com".into(),
            short_url: "https://s.ee/abc".into(),
            domain: "s.ee".into(),
            slug: Some("abc".into()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(json["originalUrl"], "https://example.com");
        assert_eq!(json["shortUrl"], "https://s.ee/abc");
    }

    #[test]
    fn file_items_round_trip() {
        let item = FileHistoryItem {
            id: HistoryId::new(),
            created_at: 42,
            filename: "shot.png".into(),
            url: "https://s.ee/f/shot.png".into(),
            page_url: "https://s.ee/p/shot".into(),
            size: 1024,
            delete_hash: "h1".into(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"deleteHash\":\"h1\""));
        assert!(json.contains("\"pageUrl\""));
        let back: FileHistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn text_type_is_stored_as_snake_case() {
        let item = TextHistoryItem {
            id: HistoryId::new(),
            created_at: 0,
            title: "note".into(),
            short_url: "https://s.ee/t".into(),
            domain: "s.ee".into(),
            text_type: TextType::SourceCode,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["textType"], "source_code");
    }
}
