//! Programmatic ruling construction for tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter behind default reference numbers, so every TestRuling in a
/// process gets a distinct reference unless one is set explicitly.
static NEXT_REFERENCE: AtomicU64 = AtomicU64::new(1);

/// Builder for one ruling record in a test dataset.
///
/// Defaults: a unique generated reference number, a fixed date, generic
/// content, and no tags.
#[derive(Debug, Clone)]
pub struct TestRuling {
    reference: String,
    date: String,
    summary: String,
    content: String,
    tags: Vec<String>,
}

impl TestRuling {
    /// Creates a test ruling with the given summary and default fields.
    pub fn new(summary: &str) -> Self {
        let n = NEXT_REFERENCE.fetch_add(1, Ordering::Relaxed);
        Self {
            reference: format!("測試字第{:07}號", n),
            date: "112年01月17日".to_string(),
            summary: summary.to_string(),
            content: format!("{} 之完整內容。", summary),
            tags: Vec::new(),
        }
    }

    /// Sets an explicit reference number.
    pub fn reference(mut self, reference: &str) -> Self {
        self.reference = reference.to_string();
        self
    }

    /// Sets the date string.
    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Sets the full text content.
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Adds one tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Returns the reference number.
    pub fn get_reference(&self) -> &str {
        &self.reference
    }

    /// Returns the summary.
    pub fn get_summary(&self) -> &str {
        &self.summary
    }

    /// Renders the ruling as one JSON object in the canonical schema.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::json!({
            "reference": self.reference,
            "date": self.date,
            "summary": self.summary,
            "content": self.content,
        });
        if !self.tags.is_empty() {
            object["tags"] = serde_json::Value::String(self.tags.join(","));
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Phase 1: TestRuling Defaults
    // ===========================================

    #[test]
    fn test_ruling_has_unique_default_references() {
        let a = TestRuling::new("First");
        let b = TestRuling::new("Second");
        assert_ne!(a.get_reference(), b.get_reference());
    }

    #[test]
    fn test_ruling_json_has_required_fields() {
        let ruling = TestRuling::new("Summary Text");
        let json = ruling.to_json();
        assert!(json["reference"].is_string());
        assert!(json["date"].is_string());
        assert_eq!(json["summary"], "Summary Text");
        assert!(json["content"].is_string());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn test_ruling_tags_join_with_commas() {
        let ruling = TestRuling::new("Tagged").tag("電動車").tag("撒水設備");
        let json = ruling.to_json();
        assert_eq!(json["tags"], "電動車,撒水設備");
    }
}
