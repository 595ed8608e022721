//! Matching engine behind the record filter.

use rapidfuzz::fuzz;
use std::cmp::Ordering;

use crate::domain::{Ruling, join_tags};
use crate::search::query::{Match, MatchMode, Query, SearchOptions, TagFilter};

/// Filters the dataset against a query, returning matches in result order.
///
/// The function is total and pure: it never fails, holds no state, and is
/// recomputed from scratch on every call. An empty free-text term matches the
/// whole dataset in original order; the tag filter then narrows the result
/// without reordering it. No result cap is applied.
pub fn search<'a>(rulings: &'a [Ruling], query: &Query, options: &SearchOptions) -> Vec<Match<'a>> {
    let mut matches = match_text(rulings, query.text(), options);

    if let TagFilter::Tag(_) = query.tag() {
        matches.retain(|m| query.tag().matches(m.ruling()));
    }

    matches
}

/// Runs the free-text half of the filter.
fn match_text<'a>(rulings: &'a [Ruling], text: &str, options: &SearchOptions) -> Vec<Match<'a>> {
    if text.is_empty() {
        return rulings.iter().map(|r| Match::new(r, 1.0)).collect();
    }

    match options.mode {
        MatchMode::Fuzzy => match_fuzzy(rulings, text, options),
        MatchMode::Exact => match_exact(rulings, text),
    }
}

/// Approximate matching: score every ruling, cut below the similarity floor,
/// order by descending score. The sort is stable, so ties keep dataset order.
fn match_fuzzy<'a>(rulings: &'a [Ruling], text: &str, options: &SearchOptions) -> Vec<Match<'a>> {
    let query_lower = text.to_lowercase();
    // threshold 0.0 = accept exact similarity only, 1.0 = accept anything
    let floor = 1.0 - options.threshold.clamp(0.0, 1.0);

    let mut matches: Vec<Match<'a>> = rulings
        .iter()
        .filter_map(|ruling| {
            let score = score_ruling(ruling, &query_lower, options.ignore_location);
            (score >= floor).then(|| Match::new(ruling, score))
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    matches
}

/// Scores one ruling as the best similarity across its match fields.
fn score_ruling(ruling: &Ruling, query_lower: &str, ignore_location: bool) -> f64 {
    let tag_field = join_tags(ruling.tags());
    let fields = [
        ruling.reference().as_str(),
        ruling.summary(),
        ruling.content(),
        tag_field.as_str(),
        ruling.date(),
    ];

    fields
        .iter()
        .map(|field| similarity(query_lower, &field.to_lowercase(), ignore_location))
        .fold(0.0, f64::max)
}

/// Similarity of the query against one field, normalized to 0.0–1.0.
fn similarity(query_lower: &str, field_lower: &str, ignore_location: bool) -> f64 {
    if ignore_location {
        fuzz::partial_ratio(query_lower.chars(), field_lower.chars()) / 100.0
    } else {
        fuzz::ratio(query_lower.chars(), field_lower.chars()) / 100.0
    }
}

/// Legacy substring matching: lowercased query against summary and content,
/// raw query against the reference number. Dataset order, uniform score.
fn match_exact<'a>(rulings: &'a [Ruling], text: &str) -> Vec<Match<'a>> {
    let needle = text.to_lowercase();

    rulings
        .iter()
        .filter(|ruling| {
            ruling.summary().to_lowercase().contains(&needle)
                || ruling.content().to_lowercase().contains(&needle)
                || ruling.reference().as_str().contains(text)
        })
        .map(|ruling| Match::new(ruling, 1.0))
        .collect()
}
