//! Search command handler.

use anyhow::Result;
use std::path::Path;

use super::{load_dataset, parse_tag_arg, resolve_threshold, truncate_str};
use crate::cli::SearchArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, SearchListing};
use crate::search::{Match, MatchMode, Query, SearchOptions, search};

pub fn handle_search(
    args: &SearchArgs,
    data_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    // Validate knobs before touching the dataset.
    let threshold = resolve_threshold(config, args.threshold)?;
    let tag = parse_tag_arg(args.tag.as_deref())?;

    let dataset = load_dataset(data_path, verbose)?;

    let mut query = Query::new(args.query.as_str());
    if let Some(tag) = tag {
        query = query.with_tag(tag);
    }

    let options = SearchOptions {
        mode: if args.exact {
            MatchMode::Exact
        } else {
            MatchMode::Fuzzy
        },
        threshold,
        ignore_location: !args.whole_field,
    };

    let matches = search(dataset.rulings(), &query, &options);
    format_search_output(&matches, args.format)?;

    Ok(())
}

/// Format and print search results (already in result order).
fn format_search_output(matches: &[Match<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No matching rulings found.");
            } else {
                for m in matches {
                    let ruling = m.ruling();
                    println!(
                        "{}  {}  (score: {:.2})",
                        ruling.reference(),
                        ruling.date(),
                        m.score()
                    );
                    println!("  {}", truncate_str(ruling.summary(), 70));
                    if !ruling.tags().is_empty() {
                        let tags: Vec<_> = ruling.tags().iter().map(|t| t.as_str()).collect();
                        println!("  tags: {}", tags.join(", "));
                    }
                }
                println!();
                println!("{} result(s)", matches.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<SearchListing> = matches
                .iter()
                .map(|m| SearchListing {
                    reference: m.ruling().reference().to_string(),
                    date: m.ruling().date().to_string(),
                    summary: m.ruling().summary().to_string(),
                    score: m.score(),
                    tags: m
                        .ruling()
                        .tags()
                        .iter()
                        .map(|t| t.as_str().to_string())
                        .collect(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
