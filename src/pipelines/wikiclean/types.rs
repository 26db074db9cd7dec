use serde::{Deserialize, Serialize};

/// Metadata attached to each cleaned article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    title: String,
    /// length of the original markup, in chars
    char_count: usize,
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<String>>,
}

impl Metadata {
    pub fn new(
        title: String,
        char_count: usize,
        source: String,
        page_id: Option<String>,
        timestamp: Option<String>,
        categories: Option<Vec<String>>,
    ) -> Self {
        Self {
            title,
            char_count,
            source,
            page_id,
            timestamp,
            categories,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }
}

/// Final output unit: one line of the JSONL corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedArticle {
    text: String,
    meta: Metadata,
}

impl NormalizedArticle {
    pub fn new(text: String, meta: Metadata) -> Self {
        Self { text, meta }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::{Metadata, NormalizedArticle};

    #[test]
    fn absent_fields_are_not_serialized() {
        let meta = Metadata::new("长江".to_string(), 300, "src".to_string(), None, None, None);
        let article = NormalizedArticle::new("文本".to_string(), meta);
        let json = serde_json::to_string(&article).unwrap();
        assert_eq!(
            json,
            r#"{"text":"文本","meta":{"title":"长江","char_count":300,"source":"src"}}"#
        );
    }

    #[test]
    fn full_record() {
        let meta = Metadata::new(
            "长江".to_string(),
            300,
            "src".to_string(),
            Some("42".to_string()),
            Some("2025-02-01T00:00:00Z".to_string()),
            Some(vec!["河流".to_string()]),
        );
        let article = NormalizedArticle::new("文本".to_string(), meta);
        let json = serde_json::to_string(&article).unwrap();
        assert_eq!(
            json,
            r#"{"text":"文本","meta":{"title":"长江","char_count":300,"source":"src","page_id":"42","timestamp":"2025-02-01T00:00:00Z","categories":["河流"]}}"#
        );

        let back: NormalizedArticle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
