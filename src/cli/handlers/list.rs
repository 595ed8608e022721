//! List command handler.

use anyhow::Result;
use std::path::Path;

use super::{load_dataset, parse_tag_arg, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat, RulingListing};
use crate::search::{Match, Query, SearchOptions, search};

pub fn handle_list(args: &ListArgs, data_path: Option<&Path>, verbose: bool) -> Result<()> {
    let tag = parse_tag_arg(args.tag.as_deref())?;
    let dataset = load_dataset(data_path, verbose)?;

    // Listing is the empty-query path of the filter: the full dataset in
    // original order, narrowed by the tag filter if one was given.
    let mut query = Query::default();
    if let Some(tag) = tag {
        query = query.with_tag(tag);
    }

    let matches = search(dataset.rulings(), &query, &SearchOptions::default());
    format_list_output(&matches, args.format)?;

    Ok(())
}

/// Format and print the ruling listing.
fn format_list_output(matches: &[Match<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No rulings found.");
            } else {
                for m in matches {
                    let ruling = m.ruling();
                    println!(
                        "{}  {}  {}",
                        ruling.reference(),
                        ruling.date(),
                        truncate_str(ruling.summary(), 50)
                    );
                }

                println!();
                println!("{} ruling(s)", matches.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<RulingListing> = matches
                .iter()
                .map(|m| RulingListing {
                    reference: m.ruling().reference().to_string(),
                    date: m.ruling().date().to_string(),
                    summary: m.ruling().summary().to_string(),
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
