//! Aggregation across both museum providers.
//!
//! The engine owns the only real orchestration in the system: per page it
//! queries both providers concurrently, joins the pair, and keeps pulling
//! further pages until the caller's result threshold is met or both
//! providers come up empty on the same page index. Neither upstream reports
//! a reliable total count, so an empty combined page is the exhaustion
//! signal.

use std::sync::Arc;

use crate::models::{AggregatedResult, Artwork, SearchCriteria};
use crate::normalize::normalize;
use crate::providers::{Provider, ProviderError, RawRecord};

/// Errors surfaced by the aggregation engine
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// A provider rejected our credential; never merged with partial data
    #[error("provider authorization failed: {0}")]
    Unauthorized(String),

    /// Anything unexpected during orchestration
    #[error("aggregation failed: {0}")]
    Internal(String),
}

/// Fans search and detail requests out to both providers and merges the results
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    harvard: Arc<dyn Provider>,
    vam: Arc<dyn Provider>,
}

impl AggregationEngine {
    /// Create an engine over the two provider adapters
    pub fn new(harvard: Arc<dyn Provider>, vam: Arc<dyn Provider>) -> Self {
        Self { harvard, vam }
    }

    /// Search both providers, paginating until `min_results` artworks have
    /// accumulated or both providers are exhausted.
    ///
    /// Within one page iteration the two provider calls run concurrently and
    /// both outcomes are observed before the next page is decided. Harvard
    /// records precede V&A records within each fetched page, and Harvard
    /// records without an image are dropped.
    pub async fn search_artworks(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<AggregatedResult, AggregationError> {
        let mut accumulated: Vec<RawRecord> = Vec::new();
        let mut current_page = criteria.page.max(1);
        let mut has_next_page = true;

        while accumulated.len() < criteria.min_results {
            let (harvard, vam) = tokio::join!(
                self.harvard.search(criteria, current_page),
                self.vam.search(criteria, current_page),
            );

            let mut new_records = absorb(self.harvard.as_ref(), harvard)?;
            new_records.retain(RawRecord::has_image);
            new_records.extend(absorb(self.vam.as_ref(), vam)?);

            if new_records.is_empty() {
                // Both providers dry on the same page index: a valid terminal
                // state, not an error.
                has_next_page = false;
                break;
            }

            accumulated.extend(new_records);
            current_page += 1;
        }

        accumulated.truncate(criteria.min_results);
        let artworks: Vec<Artwork> = accumulated.iter().map(normalize).collect();

        tracing::debug!(
            artworks = artworks.len(),
            has_next_page,
            "aggregated search complete"
        );
        Ok(AggregatedResult {
            artworks,
            has_next_page,
        })
    }

    /// Look up a single artwork, dispatching by the id naming convention:
    /// identifiers beginning with `O` belong to the V&A, all others to
    /// Harvard. `Ok(None)` is the explicit not-found outcome.
    pub async fn get_artwork_detail(&self, id: &str) -> Result<Option<Artwork>, AggregationError> {
        let provider = if matches!(id.chars().next(), Some('O' | 'o')) {
            &self.vam
        } else {
            &self.harvard
        };

        match provider.fetch_by_id(id).await {
            Ok(Some(record)) => Ok(Some(normalize(&record))),
            Ok(None) => Ok(None),
            Err(err) if err.is_fatal() => Err(AggregationError::Unauthorized(format!(
                "{}: {}",
                provider.name(),
                err
            ))),
            Err(err) => {
                tracing::warn!(
                    provider = provider.kind().id(),
                    error = %err,
                    "detail lookup degraded to not found"
                );
                Ok(None)
            }
        }
    }
}

/// Absorb one provider's page outcome: unauthorized aborts the whole
/// aggregation, every other error becomes an empty record set for that
/// provider only.
fn absorb(
    provider: &dyn Provider,
    result: Result<Vec<RawRecord>, ProviderError>,
) -> Result<Vec<RawRecord>, AggregationError> {
    match result {
        Ok(records) => Ok(records),
        Err(err) if err.is_fatal() => Err(AggregationError::Unauthorized(format!(
            "{}: {}",
            provider.name(),
            err
        ))),
        Err(err) => {
            tracing::warn!(
                provider = provider.kind().id(),
                error = %err,
                "provider search degraded to empty result"
            );
            Ok(Vec::new())
        }
    }
}
