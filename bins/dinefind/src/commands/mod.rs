//! Command implementations

pub mod convert;
pub mod cuisines;
pub mod demo;
pub mod search;

use dinefind_cli::output::format_count;
use dinefind_cli::progress;
use dinefind_search::{DataContext, SearchError, Searcher};
use dinefind_telemetry::{names, SearchOutcome, Timer};

/// Bookkeeping outcome for a failed search
pub fn outcome_of(err: &SearchError) -> SearchOutcome {
    match err {
        SearchError::Validation(_) => SearchOutcome::Invalid,
        SearchError::Load(_) => SearchOutcome::LoadFailed,
    }
}

/// Get the searcher's data, timing the first load.
///
/// A spinner is drawn while loading unless `quiet` is set.
pub async fn load_data(searcher: &Searcher, quiet: bool) -> dinefind_search::Result<&DataContext> {
    if searcher.is_loaded() {
        return searcher.context().await;
    }

    let timer = Timer::start(names::LOAD_MS);
    if quiet {
        let context = searcher.context().await;
        timer.stop();
        return context;
    }

    let pb = progress::spinner("Loading restaurant data...");
    match searcher.context().await {
        Ok(context) => {
            timer.stop();
            progress::finish_success(
                &pb,
                &format!(
                    "Loaded {} and {}",
                    format_count(context.restaurants().len(), "restaurant", "restaurants"),
                    format_count(context.cuisines().len(), "cuisine", "cuisines")
                ),
            );
            Ok(context)
        }
        Err(e) => {
            timer.stop();
            progress::finish_error(&pb, "Could not load restaurant data");
            Err(e)
        }
    }
}
