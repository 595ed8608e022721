//! Ruling resolution utilities.

use crate::dataset::Dataset;
use crate::domain::Ruling;

/// Result of resolving a reference-number identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one ruling matched.
    Unique(&'a Ruling),
    /// Multiple rulings matched (ambiguous prefix).
    Ambiguous(Vec<&'a Ruling>),
    /// No rulings matched.
    NotFound,
}

/// Prints detailed information about ambiguous rulings to help distinguish them.
pub(crate) fn print_ambiguous_rulings(identifier: &str, rulings: &[&Ruling]) {
    eprintln!(
        "Ambiguous: '{}' matches {} rulings:",
        identifier,
        rulings.len()
    );
    for ruling in rulings {
        eprintln!("  {} - {}", ruling.reference(), ruling.summary());

        if !ruling.tags().is_empty() {
            let tags: Vec<_> = ruling.tags().iter().map(|t| t.as_str()).collect();
            eprintln!("      tags: {}", tags.join(", "));
        }
    }
    eprintln!();
    eprintln!("Use a longer reference prefix to specify which ruling you mean.");
}

/// Resolves a reference-number identifier to a unique ruling.
///
/// Resolution order:
/// 1. Exact reference match
/// 2. Reference prefix match
///
/// Returns `Unique` if exactly one ruling matches, `Ambiguous` if a prefix
/// matches several, or `NotFound` if none match.
pub fn resolve_ruling<'a>(dataset: &'a Dataset, identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();

    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    // Exact matches are the most precise; return immediately.
    if let Some(ruling) = dataset.find_by_reference(identifier) {
        return ResolveResult::Unique(ruling);
    }

    let candidates = dataset.find_by_reference_prefix(identifier);
    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates[0]),
        _ => ResolveResult::Ambiguous(candidates),
    }
}
