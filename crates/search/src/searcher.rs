//! Search orchestration.
//!
//! A [`Searcher`] owns a [`DataSource`] and the [`DataContext`] built from it.
//! The context is created on the first search and shared by every later one.
//! Concurrent first searches wait on the same load. A failed load leaves the
//! searcher empty so the next search tries again.

use crate::cuisine::CuisineIndex;
use crate::error::{Result, SearchError};
use crate::filter;
use crate::rank::{self, TOP_N};
use crate::request::SearchRequest;
use dinefind_core::dataset::{DataSource, Dataset};
use dinefind_core::records::{Cuisine, Restaurant};
use dinefind_core::{Error, ErrorCode};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Loaded records plus the cuisine index derived from them. Read-only.
#[derive(Debug, Clone)]
pub struct DataContext {
    dataset: Dataset,
    index: CuisineIndex,
}

impl DataContext {
    pub fn new(dataset: Dataset) -> Self {
        let index = CuisineIndex::build(&dataset.cuisines);
        Self { dataset, index }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.dataset.restaurants
    }

    pub fn cuisines(&self) -> &[Cuisine] {
        &self.dataset.cuisines
    }

    pub fn index(&self) -> &CuisineIndex {
        &self.index
    }

    /// Filter, guard and rank.
    ///
    /// If the filters leave every restaurant in place (including when the
    /// request has no filters at all) the result is empty.
    pub fn search(&self, request: &SearchRequest) -> Vec<Restaurant> {
        let all = self.restaurants();
        let filtered = filter::apply(all, &self.index, request);

        if filtered.len() == all.len() {
            tracing::debug!(total = all.len(), "Request did not narrow the collection");
            return Vec::new();
        }

        rank::top(filtered, TOP_N).into_iter().cloned().collect()
    }
}

/// Runs searches against lazily loaded data.
pub struct Searcher {
    source: Arc<dyn DataSource>,
    context: OnceCell<DataContext>,
}

impl Searcher {
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self::from_arc(Arc::new(source))
    }

    pub fn from_arc(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            context: OnceCell::new(),
        }
    }

    /// Whether data has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.context.initialized()
    }

    /// The loaded data, loading it on first use.
    pub async fn context(&self) -> Result<&DataContext> {
        self.context
            .get_or_try_init(|| async {
                let source = Arc::clone(&self.source);
                tracing::info!(source = %source.describe(), "Loading restaurant data");

                let dataset = tokio::task::spawn_blocking(move || source.load())
                    .await
                    .map_err(|e| Error::new(ErrorCode::Internal, format!("Data load task failed: {}", e)))??;

                Ok::<_, SearchError>(DataContext::new(dataset))
            })
            .await
    }

    /// Search with a typed request.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Restaurant>> {
        let context = self.context().await?;
        let results = context.search(request);

        tracing::debug!(results = results.len(), "Search finished");
        Ok(results)
    }

    /// Validate an untyped request, then search.
    ///
    /// Nothing is loaded when validation fails.
    pub async fn search_value(&self, request: &Value) -> Result<Vec<Restaurant>> {
        let request = SearchRequest::from_value(request)?;
        self.search(&request).await
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
