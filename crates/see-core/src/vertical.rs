use crate::keys;

/// One of the three sharing capabilities. Each vertical has its own
/// endpoint family, cached domain list, and history collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Url,
    Text,
    File,
}

impl Vertical {
    /// Synced key caching this vertical's domain list.
    pub fn domains_key(self) -> &'static str {
        match self {
            Vertical::Url => keys::URL_DOMAINS,
            Vertical::Text => keys::TEXT_DOMAINS,
            Vertical::File => keys::FILE_DOMAINS,
        }
    }

    /// Synced key holding this vertical's default domain. File uploads
    /// carry no default-domain slot in the persisted layout.
    pub fn default_domain_key(self) -> Option<&'static str> {
        match self {
            Vertical::Url => Some(keys::DEFAULT_URL_DOMAIN),
            Vertical::Text => Some(keys::DEFAULT_TEXT_DOMAIN),
            Vertical::File => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vertical::Url => "url",
            Vertical::Text => "text",
            Vertical::File => "file",
        }
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
