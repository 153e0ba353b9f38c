//! Single search command

use super::{load_data, outcome_of};
use crate::SearchArgs;
use anyhow::Result;
use dinefind_cli::output::{format_count, print_results, Status};
use dinefind_search::SearchRequest;
use dinefind_telemetry::{record_search, SearchOutcome};
use std::time::Instant;

/// Run one search and print the results
pub async fn run(searcher: &dinefind_search::Searcher, args: SearchArgs) -> Result<()> {
    let started = Instant::now();

    let request = match build_request(&args) {
        Ok(request) => request,
        Err(e) => {
            record_search(SearchOutcome::Invalid, started.elapsed());
            return Err(e.into());
        }
    };
    tracing::debug!(?request, "Parsed search request");

    let context = match load_data(searcher, args.json).await {
        Ok(context) => context,
        Err(e) => {
            record_search(outcome_of(&e), started.elapsed());
            return Err(e.into());
        }
    };

    let results = match searcher.search(&request).await {
        Ok(results) => results,
        Err(e) => {
            record_search(outcome_of(&e), started.elapsed());
            return Err(e.into());
        }
    };
    record_search(SearchOutcome::Found(results.len()), started.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if !results.is_empty() {
        Status::success(&format!(
            "Found {}",
            format_count(results.len(), "restaurant", "restaurants")
        ));
    }
    print_results(&results, context.cuisines());
    Ok(())
}

fn build_request(args: &SearchArgs) -> dinefind_search::Result<SearchRequest> {
    if let Some(raw) = &args.request {
        return SearchRequest::from_json(raw);
    }

    Ok(SearchRequest {
        restaurant_name: args.name.clone(),
        customer_rating: args.rating.clone(),
        distance: args.distance.clone(),
        price: args.price.clone(),
        cuisine: args.cuisine.clone(),
    })
}
