//! Reference-number type identifying a ruling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The issuing reference number (發文字號) of a ruling.
///
/// Reference numbers are the identity of a ruling: they serve as the display
/// key, a lookup key for the detail view, and one of the fields the search
/// runs over. They are opaque strings in whatever form the issuing agency
/// wrote them (e.g. `消署預字第1100031277號`); no structure is assumed beyond
/// being non-empty.
///
/// # Examples
///
/// ```
/// use firelex::domain::DocRef;
///
/// let reference = DocRef::new("消署預字第1100031277號").unwrap();
/// assert_eq!(reference.as_str(), "消署預字第1100031277號");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DocRef(String);

/// Error returned when parsing an invalid reference number.
#[derive(Debug, Clone)]
pub struct ParseDocRefError(String);

impl fmt::Display for ParseDocRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseDocRefError {}

impl DocRef {
    /// Creates a new DocRef from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseDocRefError` if the string is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseDocRefError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseDocRefError(
                "reference number cannot be empty".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the reference number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the reference number starts with the given prefix.
    ///
    /// Used by the detail view to resolve partially-typed references.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocRef(\"{}\")", self.0)
    }
}

impl FromStr for DocRef {
    type Err = ParseDocRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for DocRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
