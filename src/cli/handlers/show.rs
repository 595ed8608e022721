//! Show command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::load_dataset;
use super::resolve::{ResolveResult, print_ambiguous_rulings, resolve_ruling};
use crate::cli::ShowArgs;

pub fn handle_show(args: &ShowArgs, data_path: Option<&Path>, verbose: bool) -> Result<()> {
    let dataset = load_dataset(data_path, verbose)?;

    match resolve_ruling(&dataset, &args.reference) {
        ResolveResult::Unique(ruling) => {
            println!("# {}", ruling.summary());
            println!();

            println!("Reference: {}  Date: {}", ruling.reference(), ruling.date());

            if !ruling.tags().is_empty() {
                let tags: Vec<_> = ruling.tags().iter().map(|t| t.as_str()).collect();
                println!("Tags: {}", tags.join(", "));
            }

            println!();
            println!("{}", ruling.content());

            Ok(())
        }
        ResolveResult::Ambiguous(rulings) => {
            print_ambiguous_rulings(&args.reference, &rulings);
            bail!("ambiguous reference number");
        }
        ResolveResult::NotFound => {
            bail!("ruling not found: '{}'", args.reference);
        }
    }
}
