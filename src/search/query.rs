//! Query state and result types for the record filter.

use crate::domain::{Ruling, Tag};

/// Default similarity tolerance: permits moderate misspelling without
/// flooding results with unrelated records.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// The category-tag half of the query state.
///
/// `All` is the "all categories" sentinel: it passes every ruling through
/// unchanged. `Tag` keeps only rulings carrying that exact token.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TagFilter {
    /// All categories; no filtering.
    #[default]
    All,
    /// Keep only rulings tagged with this exact token.
    Tag(Tag),
}

impl TagFilter {
    /// Returns true if the ruling passes this filter.
    ///
    /// A ruling without tags never passes a `Tag` filter.
    pub fn matches(&self, ruling: &Ruling) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => ruling.has_tag(tag),
        }
    }
}

/// The query state driving one filter run: free-text term plus tag filter.
///
/// Both halves default to "match everything" (empty text, all categories),
/// mirroring the initial state of the search surface.
#[derive(Debug, Clone, Default)]
pub struct Query {
    text: String,
    tag: TagFilter,
}

impl Query {
    /// Creates a query with the given free-text term and no tag filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: TagFilter::All,
        }
    }

    /// Restricts the query to rulings carrying the given tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = TagFilter::Tag(tag);
        self
    }

    /// Returns the free-text term.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tag filter.
    pub fn tag(&self) -> &TagFilter {
        &self.tag
    }
}

/// How the free-text term is matched against record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Approximate similarity scoring, relevance-ordered (primary mode).
    Fuzzy,
    /// Case-insensitive substring matching in dataset order (legacy mode).
    Exact,
}

/// Tuning knobs for the fuzzy matcher.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Matching policy.
    pub mode: MatchMode,
    /// Tolerance for approximate matches: 0.0 accepts only exact similarity,
    /// 1.0 accepts anything.
    pub threshold: f64,
    /// When true, a match scores against the best-matching window of each
    /// field, so its position within the field does not affect the score.
    /// When false, the whole field is compared against the query.
    pub ignore_location: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Fuzzy,
            threshold: DEFAULT_THRESHOLD,
            ignore_location: true,
        }
    }
}

/// One matching ruling with its relevance score.
///
/// Matches borrow from the dataset slice they were produced from: the
/// filtered result is always a subset, by identity, of the dataset.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    ruling: &'a Ruling,
    score: f64,
}

impl<'a> Match<'a> {
    pub(crate) fn new(ruling: &'a Ruling, score: f64) -> Self {
        Self { ruling, score }
    }

    /// Returns the matched ruling.
    pub fn ruling(&self) -> &'a Ruling {
        self.ruling
    }

    /// Returns the relevance score in 0.0–1.0 (higher is more relevant).
    ///
    /// Empty-query and exact-mode matches score a uniform 1.0.
    pub fn score(&self) -> f64 {
        self.score
    }
}
