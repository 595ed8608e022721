//! Tags command handler.

use anyhow::Result;
use std::path::Path;

use super::load_dataset;
use crate::cli::TagsArgs;
use crate::cli::output::{Output, OutputFormat, TagListing};

pub fn handle_tags(args: &TagsArgs, data_path: Option<&Path>, verbose: bool) -> Result<()> {
    let dataset = load_dataset(data_path, verbose)?;
    let tags = dataset.tags();

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for t in &tags {
                    if args.counts {
                        println!("{} ({})", t.tag(), t.count());
                    } else {
                        println!("{}", t.tag());
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|t| TagListing {
                    name: t.tag().to_string(),
                    count: if args.counts { Some(t.count()) } else { None },
                })
                .collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
