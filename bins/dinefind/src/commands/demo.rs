//! Example searches

use super::{load_data, outcome_of};
use anyhow::Result;
use dinefind_cli::output::{print_results, Status};
use dinefind_search::{DataContext, Searcher};
use dinefind_telemetry::{metrics, record_search, SearchOutcome};
use serde_json::{json, Value};
use std::time::Instant;

fn examples() -> Vec<(&'static str, Value)> {
    vec![
        ("Search by cuisine", json!({ "cuisine": "cHi " })),
        ("Search by partial restaurant name", json!({ "restaurantName": "del " })),
        ("Search by full restaurant name", json!({ "restaurantName": "Deliciouszilla " })),
        ("Search by customer rating", json!({ "customerRating": "3" })),
        ("Search by distance", json!({ "distance": "1" })),
        ("Search by price", json!({ "price": "10" })),
        (
            "Search by name and short distance",
            json!({ "restaurantName": "del", "distance": "1" }),
        ),
        (
            "Search by name and long distance",
            json!({ "restaurantName": "del", "distance": "10" }),
        ),
        (
            "Search with all properties",
            json!({
                "restaurantName": "Del",
                "distance": "10",
                "price": "20",
                "cuisine": "Chinese",
            }),
        ),
        ("No matches", json!({ "restaurantName": "McDonalds" })),
        ("Invalid input", json!({ "restaurantName": 3 })),
    ]
}

/// Run every example, reporting failures without stopping
pub async fn run(searcher: &Searcher, verbose: bool) -> Result<()> {
    if let Err(e) = load_data(searcher, false).await {
        Status::error(&e.to_string());
    }

    let mut failures = 0usize;
    for (title, request) in examples() {
        Status::header(title);
        println!("{}", request);

        let started = Instant::now();
        match searcher.search_value(&request).await {
            Ok(results) => {
                record_search(SearchOutcome::Found(results.len()), started.elapsed());
                let cuisines = searcher
                    .context()
                    .await
                    .map(DataContext::cuisines)
                    .unwrap_or_default();
                print_results(&results, cuisines);
            }
            Err(e) => {
                record_search(outcome_of(&e), started.elapsed());
                Status::error(&e.to_string());
                failures += 1;
            }
        }
    }

    println!();
    if failures == 0 {
        Status::success("All examples ran");
    } else {
        Status::warning(&format!("{} of {} examples failed", failures, examples().len()));
    }

    if verbose {
        println!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    Ok(())
}
