/// A page as found in the dump, before any cleaning.
///
/// Built by [super::WikiDump] while reading a `<page>` element and handed downstream
/// only if it passes the structural inclusion test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
    title: String,
    raw_text: String,
    id: Option<String>,
    timestamp: Option<String>,
}

impl RawArticle {
    pub fn new(
        title: String,
        raw_text: String,
        id: Option<String>,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            title,
            raw_text,
            id,
            timestamp,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Untouched wiki markup of the latest revision.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Page identifier (never a revision identifier).
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}
