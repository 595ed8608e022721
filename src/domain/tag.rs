//! Category tag type for classifying rulings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category tag attached to a ruling.
///
/// Tags are flat labels drawn from the dataset's comma-separated tag field.
/// They are compared **case-sensitively**: a tag token must match exactly to
/// pass a tag filter. Tokens are mostly CJK labels (e.g. `撒水設備`), where
/// case folding has no meaning anyway.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - Must not contain a comma (commas separate tokens in the dataset)
///
/// # Examples
///
/// ```
/// use firelex::domain::Tag;
///
/// let tag = Tag::new("電動車").unwrap();
/// assert_eq!(tag.as_str(), "電動車");
///
/// // Exact token equality only
/// let a = Tag::new("Draft").unwrap();
/// let b = Tag::new("draft").unwrap();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// Surrounding whitespace is trimmed; the token is otherwise kept as-is.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if:
    /// - The tag is empty or whitespace-only
    /// - The tag contains a comma
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if trimmed.contains(',') {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags must not contain commas",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Splits a comma-separated tag string into tokens.
///
/// Empty and whitespace-only segments are skipped, so an absent or empty tag
/// field yields no tags rather than an error.
pub fn split_tags(s: &str) -> Vec<Tag> {
    s.split(',').filter_map(|token| Tag::new(token).ok()).collect()
}

/// Joins tags back into the dataset's comma-separated form.
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter().map(Tag::as_str).collect::<Vec<_>>().join(",")
}
