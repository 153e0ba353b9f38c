//! List the cuisine index

use super::load_data;
use anyhow::Result;
use dinefind_cli::output::{format_count, Status};
use dinefind_search::Searcher;
use owo_colors::OwoColorize;

/// Print every cuisine by its lookup name, in source order
pub async fn run(searcher: &Searcher) -> Result<()> {
    let context = load_data(searcher, false).await?;
    let index = context.index();

    Status::header(&format!("Cuisines ({})", format_count(index.len(), "entry", "entries")));
    let width = index.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
    for (name, id) in index.iter() {
        println!("  {:<width$}  {}", name, id.dimmed(), width = width);
    }

    Ok(())
}
