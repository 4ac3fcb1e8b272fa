//! Integration tests for the aggregation engine.
//!
//! These drive the engine through scripted providers and verify the
//! pagination loop, the partial-failure rules, and normalization totality.

use std::sync::Arc;

use musea::engine::{AggregationEngine, AggregationError};
use musea::models::{
    SearchCriteria, DEFAULT_CREDIT_LINE, DEFAULT_DATE, DEFAULT_DESCRIPTION, DEFAULT_DIMENSIONS,
    DEFAULT_LOCATION, DEFAULT_MEDIUM, DEFAULT_PROVENANCE, DEFAULT_TITLE, PLACEHOLDER_IMAGE_URL,
};
use musea::providers::mock::{harvard_record, vam_record, MockProvider};
use musea::providers::{HarvardRecord, ProviderError, RawRecord};

fn engine(
    harvard: MockProvider,
    vam: MockProvider,
) -> (AggregationEngine, Arc<MockProvider>, Arc<MockProvider>) {
    let harvard = Arc::new(harvard);
    let vam = Arc::new(vam);
    (
        AggregationEngine::new(harvard.clone(), vam.clone()),
        harvard,
        vam,
    )
}

#[tokio::test]
async fn threshold_met_on_first_page() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok(vec![
        harvard_record(1, true),
        harvard_record(2, true),
        harvard_record(3, true),
    ]));
    let vam = MockProvider::vam();
    vam.push_page(Ok(vec![vam_record("O1"), vam_record("O2")]));

    let (engine, harvard, vam) = engine(harvard, vam);
    let criteria = SearchCriteria::new("vase").min_results(5);
    let result = engine.search_artworks(&criteria).await.unwrap();

    assert_eq!(result.artworks.len(), 5);
    // The loop exited on the threshold, not on exhaustion.
    assert!(result.has_next_page);

    // Harvard records precede V&A records within the page.
    let ids: Vec<&str> = result.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "O1", "O2"]);

    assert_eq!(harvard.search_calls(), 1);
    assert_eq!(vam.search_calls(), 1);
}

#[tokio::test]
async fn both_providers_empty_on_first_page() {
    let (engine, harvard, vam) = engine(MockProvider::harvard(), MockProvider::vam());
    let result = engine
        .search_artworks(&SearchCriteria::default())
        .await
        .unwrap();

    assert!(result.artworks.is_empty());
    assert!(!result.has_next_page);
    assert_eq!(harvard.search_calls(), 1);
    assert_eq!(vam.search_calls(), 1);
}

#[tokio::test]
async fn pagination_accumulates_until_threshold() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok(vec![harvard_record(1, true), harvard_record(2, true)]));
    harvard.push_page(Ok(vec![harvard_record(3, true), harvard_record(4, true)]));
    let vam = MockProvider::vam();
    vam.push_page(Ok(vec![vam_record("O1")]));
    vam.push_page(Ok(vec![vam_record("O2")]));

    let (engine, harvard, vam) = engine(harvard, vam);
    let criteria = SearchCriteria::default().min_results(5);
    let result = engine.search_artworks(&criteria).await.unwrap();

    assert_eq!(result.artworks.len(), 5);
    assert!(result.has_next_page);
    assert_eq!(harvard.search_calls(), 2);
    assert_eq!(vam.search_calls(), 2);

    // A-then-B within each page iteration, pages in fetch order.
    let ids: Vec<&str> = result.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "O1", "3", "4"]);
}

#[tokio::test]
async fn exhaustion_before_threshold_clears_next_page() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok(vec![harvard_record(1, true)]));
    let vam = MockProvider::vam();
    vam.push_page(Ok(vec![vam_record("O1")]));
    // Second page: both queues are empty, so both providers come up dry.

    let (engine, _, _) = engine(harvard, vam);
    let result = engine
        .search_artworks(&SearchCriteria::default())
        .await
        .unwrap();

    assert_eq!(result.artworks.len(), 2);
    assert!(!result.has_next_page);
}

#[tokio::test]
async fn result_is_sliced_to_threshold() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok((1..=8).map(|id| harvard_record(id, true)).collect()));
    let vam = MockProvider::vam();
    vam.push_page(Ok(vec![vam_record("O1"), vam_record("O2")]));

    let (engine, _, _) = engine(harvard, vam);
    let criteria = SearchCriteria::default().min_results(6);
    let result = engine.search_artworks(&criteria).await.unwrap();

    assert_eq!(result.artworks.len(), 6);
    assert!(result.has_next_page);
}

#[tokio::test]
async fn unauthorized_aborts_without_further_calls() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok(vec![harvard_record(1, true)]));
    harvard.push_page(Ok(vec![harvard_record(2, true)]));
    let vam = MockProvider::vam();
    vam.push_page(Err(ProviderError::Unauthorized("bad key".to_string())));

    let (engine, harvard, vam) = engine(harvard, vam);
    let err = engine
        .search_artworks(&SearchCriteria::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AggregationError::Unauthorized(_)));
    // The abort happens after the first joined page; no second page is fetched.
    assert_eq!(harvard.search_calls(), 1);
    assert_eq!(vam.search_calls(), 1);
}

#[tokio::test]
async fn degraded_provider_does_not_block_the_other() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Err(ProviderError::Network("connection refused".to_string())));
    let vam = MockProvider::vam();
    vam.push_page(Ok(vec![vam_record("O1"), vam_record("O2")]));

    let (engine, _, _) = engine(harvard, vam);
    let criteria = SearchCriteria::default().min_results(2);
    let result = engine.search_artworks(&criteria).await.unwrap();

    let ids: Vec<&str> = result.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["O1", "O2"]);
    assert!(result.has_next_page);
}

#[tokio::test]
async fn imageless_harvard_records_are_dropped() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok(vec![
        harvard_record(1, false),
        harvard_record(2, true),
        harvard_record(3, false),
    ]));
    let vam = MockProvider::vam();
    vam.push_page(Ok(vec![vam_record("O1")]));

    let (engine, _, _) = engine(harvard, vam);
    let result = engine
        .search_artworks(&SearchCriteria::default())
        .await
        .unwrap();

    let ids: Vec<&str> = result.artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "O1"]);
}

#[tokio::test]
async fn all_records_imageless_counts_as_empty_page() {
    let harvard = MockProvider::harvard();
    harvard.push_page(Ok(vec![harvard_record(1, false), harvard_record(2, false)]));
    let vam = MockProvider::vam();

    let (engine, _, _) = engine(harvard, vam);
    let result = engine
        .search_artworks(&SearchCriteria::default())
        .await
        .unwrap();

    assert!(result.artworks.is_empty());
    assert!(!result.has_next_page);
}

#[tokio::test]
async fn zero_threshold_returns_without_provider_calls() {
    let (engine, harvard, vam) = engine(MockProvider::harvard(), MockProvider::vam());
    let criteria = SearchCriteria::default().min_results(0);
    let result = engine.search_artworks(&criteria).await.unwrap();

    assert!(result.artworks.is_empty());
    assert!(result.has_next_page);
    assert_eq!(harvard.search_calls(), 0);
    assert_eq!(vam.search_calls(), 0);
}

#[tokio::test]
async fn detail_routes_vam_ids_by_prefix() {
    let harvard = MockProvider::harvard();
    let vam = MockProvider::vam();
    vam.set_detail(Ok(Some(vam_record("O12345"))));

    let (engine, harvard, vam) = engine(harvard, vam);
    let artwork = engine.get_artwork_detail("O12345").await.unwrap().unwrap();

    assert_eq!(artwork.id, "O12345");
    // No production date on the record renders the documented default.
    assert_eq!(artwork.date, DEFAULT_DATE);
    assert_eq!(vam.detail_calls(), 1);
    assert_eq!(harvard.detail_calls(), 0);
}

#[tokio::test]
async fn detail_routes_other_ids_to_harvard() {
    let harvard = MockProvider::harvard();
    harvard.set_detail(Ok(Some(harvard_record(1234, true))));
    let vam = MockProvider::vam();

    let (engine, harvard, vam) = engine(harvard, vam);
    let artwork = engine.get_artwork_detail("1234").await.unwrap().unwrap();

    assert_eq!(artwork.id, "1234");
    assert_eq!(harvard.detail_calls(), 1);
    assert_eq!(vam.detail_calls(), 0);
}

#[tokio::test]
async fn detail_lowercase_prefix_also_routes_to_vam() {
    let vam = MockProvider::vam();
    vam.set_detail(Ok(Some(vam_record("o777"))));

    let (engine, _, vam) = engine(MockProvider::harvard(), vam);
    let artwork = engine.get_artwork_detail("o777").await.unwrap().unwrap();

    assert_eq!(artwork.id, "o777");
    assert_eq!(vam.detail_calls(), 1);
}

#[tokio::test]
async fn detail_not_found_is_none() {
    let (engine, _, _) = engine(MockProvider::harvard(), MockProvider::vam());
    assert!(engine.get_artwork_detail("99999").await.unwrap().is_none());
}

#[tokio::test]
async fn detail_network_failure_degrades_to_none() {
    let harvard = MockProvider::harvard();
    harvard.set_detail(Err(ProviderError::Network("timed out".to_string())));

    let (engine, _, _) = engine(harvard, MockProvider::vam());
    assert!(engine.get_artwork_detail("1234").await.unwrap().is_none());
}

#[tokio::test]
async fn detail_unauthorized_propagates() {
    let harvard = MockProvider::harvard();
    harvard.set_detail(Err(ProviderError::Unauthorized("bad key".to_string())));

    let (engine, _, _) = engine(harvard, MockProvider::vam());
    let err = engine.get_artwork_detail("1234").await.unwrap_err();

    assert!(matches!(err, AggregationError::Unauthorized(_)));
}

#[tokio::test]
async fn detail_is_idempotent() {
    let harvard = MockProvider::harvard();
    harvard.set_detail(Ok(Some(harvard_record(1234, true))));

    let (engine, _, _) = engine(harvard, MockProvider::vam());
    let first = engine.get_artwork_detail("1234").await.unwrap();
    let second = engine.get_artwork_detail("1234").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn normalization_is_total_for_sparse_records() {
    let harvard = MockProvider::harvard();
    harvard.set_detail(Ok(Some(RawRecord::Harvard(HarvardRecord {
        objectid: Some(1234),
        ..Default::default()
    }))));

    let (engine, _, _) = engine(harvard, MockProvider::vam());
    let artwork = engine.get_artwork_detail("1234").await.unwrap().unwrap();

    assert_eq!(artwork.image, PLACEHOLDER_IMAGE_URL);
    assert_eq!(artwork.title, DEFAULT_TITLE);
    assert_eq!(artwork.date, DEFAULT_DATE);
    assert_eq!(artwork.medium, DEFAULT_MEDIUM);
    assert_eq!(artwork.dimensions, DEFAULT_DIMENSIONS);
    assert_eq!(artwork.description, DEFAULT_DESCRIPTION);
    assert_eq!(artwork.provenance, DEFAULT_PROVENANCE);
    assert_eq!(artwork.location, DEFAULT_LOCATION);
    assert_eq!(artwork.credit_line, DEFAULT_CREDIT_LINE);
}
