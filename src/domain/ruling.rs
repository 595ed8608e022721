//! Ruling struct representing one interpretation document in the dataset.

use crate::domain::{DocRef, Tag, join_tags, split_tags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of error that occurred when constructing a ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseRulingErrorKind {
    EmptyDate,
    EmptySummary,
    EmptyContent,
}

/// Error returned when constructing an invalid ruling.
#[derive(Debug, Clone)]
pub struct ParseRulingError {
    kind: ParseRulingErrorKind,
}

impl fmt::Display for ParseRulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseRulingErrorKind::EmptyDate => {
                write!(f, "invalid ruling: date cannot be empty")
            }
            ParseRulingErrorKind::EmptySummary => {
                write!(f, "invalid ruling: summary cannot be empty")
            }
            ParseRulingErrorKind::EmptyContent => {
                write!(f, "invalid ruling: content cannot be empty")
            }
        }
    }
}

impl std::error::Error for ParseRulingError {}

/// One fire-safety regulation interpretation ruling.
///
/// Rulings are immutable once loaded; the dataset is read-only for the
/// lifetime of the process. This struct is the canonical record schema; the
/// JSON field names of the original dataset (`發文字號`, `日期`, `主旨摘要`,
/// `完整內容`, `分類標籤`) are accepted as aliases during deserialization.
///
/// # Required Fields
/// - `reference`: issuing reference number, the ruling's identity
/// - `date`: issue date as written in the source document (opaque string)
/// - `summary`: subject summary shown in listings
/// - `content`: full text shown in the detail view
///
/// # Optional Fields
/// - `tags`: category tags, parsed from the dataset's comma-separated form
///
/// # Examples
///
/// ```
/// use firelex::domain::{DocRef, Ruling};
///
/// let reference = DocRef::new("消署預字第1100031277號").unwrap();
/// let ruling = Ruling::new(reference, "110年08月03日", "充電車位設備疑義", "……").unwrap();
/// assert_eq!(ruling.summary(), "充電車位設備疑義");
/// ```
#[derive(Clone, PartialEq)]
pub struct Ruling {
    reference: DocRef,
    date: String,
    summary: String,
    content: String,
    tags: Vec<Tag>,
}

impl Ruling {
    /// Creates a new Ruling with required fields only.
    ///
    /// # Errors
    ///
    /// Returns `ParseRulingError` if the date, summary or content is empty
    /// or whitespace-only.
    pub fn new(
        reference: DocRef,
        date: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ParseRulingError> {
        Self::builder(reference, date, summary, content).build()
    }

    /// Creates a builder for constructing a Ruling with optional fields.
    pub fn builder(
        reference: DocRef,
        date: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
    ) -> RulingBuilder {
        RulingBuilder {
            reference,
            date: date.into(),
            summary: summary.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    /// Returns the ruling's reference number.
    pub fn reference(&self) -> &DocRef {
        &self.reference
    }

    /// Returns the issue date string.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the subject summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the full text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the category tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns true if the ruling carries the given tag.
    ///
    /// Matching is case-sensitive exact token equality. A ruling without
    /// tags never matches.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for Ruling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.summary, self.reference)
    }
}

impl fmt::Debug for Ruling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ruling")
            .field("reference", &self.reference)
            .field("date", &self.date)
            .field("summary", &self.summary)
            .field("content", &self.content)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Builder for constructing a Ruling with optional fields.
pub struct RulingBuilder {
    reference: DocRef,
    date: String,
    summary: String,
    content: String,
    tags: Vec<Tag>,
}

impl RulingBuilder {
    /// Sets the ruling's tags.
    ///
    /// Duplicates are removed (first occurrence kept).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = deduplicate_tags(tags);
        self
    }

    /// Builds the Ruling.
    ///
    /// # Errors
    ///
    /// Returns `ParseRulingError` if the date, summary or content is empty
    /// or whitespace-only.
    pub fn build(self) -> Result<Ruling, ParseRulingError> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ParseRulingError {
                kind: ParseRulingErrorKind::EmptyDate,
            });
        }

        let summary = self.summary.trim();
        if summary.is_empty() {
            return Err(ParseRulingError {
                kind: ParseRulingErrorKind::EmptySummary,
            });
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(ParseRulingError {
                kind: ParseRulingErrorKind::EmptyContent,
            });
        }

        Ok(Ruling {
            reference: self.reference,
            date: date.to_string(),
            summary: summary.to_string(),
            content: content.to_string(),
            tags: self.tags,
        })
    }
}

/// Removes duplicate tags (exact token equality).
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

impl Serialize for Ruling {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("reference", &self.reference)?;
        map.serialize_entry("date", &self.date)?;
        map.serialize_entry("summary", &self.summary)?;
        map.serialize_entry("content", &self.content)?;

        // Tags round-trip through the dataset's comma-separated form.
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &join_tags(&self.tags))?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Ruling {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RulingHelper {
            #[serde(alias = "發文字號")]
            reference: DocRef,
            #[serde(alias = "日期")]
            date: String,
            #[serde(alias = "主旨摘要")]
            summary: String,
            #[serde(alias = "完整內容")]
            content: String,
            #[serde(default, alias = "分類標籤")]
            tags: Option<String>,
        }

        let helper = RulingHelper::deserialize(deserializer)?;
        let tags = split_tags(helper.tags.as_deref().unwrap_or(""));

        Ruling::builder(helper.reference, helper.date, helper.summary, helper.content)
            .tags(tags)
            .build()
            .map_err(serde::de::Error::custom)
    }
}
