//! Scripted provider for testing the aggregation engine.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{ProviderKind, SearchCriteria};
use crate::providers::{
    HarvardImage, HarvardRecord, Provider, ProviderError, RawRecord, VamRecord,
};

/// A mock provider that returns scripted responses.
///
/// Search responses are a queue consumed one page per call; once the queue is
/// exhausted every further page is empty, which is how a real provider looks
/// past its last page.
#[derive(Debug)]
pub struct MockProvider {
    kind: ProviderKind,
    search_pages: Mutex<VecDeque<Result<Vec<RawRecord>, ProviderError>>>,
    detail: Mutex<Option<Result<Option<RawRecord>, ProviderError>>>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl MockProvider {
    /// Create a new mock for the given provider slot
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            search_pages: Mutex::new(VecDeque::new()),
            detail: Mutex::new(None),
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    /// Mock standing in for the Harvard adapter
    pub fn harvard() -> Self {
        Self::new(ProviderKind::Harvard)
    }

    /// Mock standing in for the V&A adapter
    pub fn vam() -> Self {
        Self::new(ProviderKind::Vam)
    }

    /// Queue the outcome of the next unscripted search page
    pub fn push_page(&self, page: Result<Vec<RawRecord>, ProviderError>) {
        self.search_pages.lock().unwrap().push_back(page);
    }

    /// Set the outcome returned by every detail lookup
    pub fn set_detail(&self, result: Result<Option<RawRecord>, ProviderError>) {
        *self.detail.lock().unwrap() = Some(result);
    }

    /// Number of search calls observed
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of detail calls observed
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn search(
        &self,
        _criteria: &SearchCriteria,
        _page: u32,
    ) -> Result<Vec<RawRecord>, ProviderError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_by_id(&self, _id: &str) -> Result<Option<RawRecord>, ProviderError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.detail.lock().unwrap().clone().unwrap_or(Ok(None))
    }
}

/// Build a Harvard-shaped record for tests
pub fn harvard_record(id: i64, with_image: bool) -> RawRecord {
    let images = if with_image {
        vec![HarvardImage {
            baseimageurl: Some(format!("https://ids.lib.harvard.edu/{id}")),
        }]
    } else {
        Vec::new()
    };

    RawRecord::Harvard(HarvardRecord {
        objectid: Some(id),
        title: Some(format!("Harvard object {id}")),
        primaryimageurl: with_image.then(|| format!("https://ids.lib.harvard.edu/{id}")),
        images,
        ..Default::default()
    })
}

/// Build a V&A-shaped record for tests
pub fn vam_record(system_number: &str) -> RawRecord {
    RawRecord::Vam(VamRecord {
        system_number: Some(system_number.to_string()),
        primary_title: Some(format!("V&A object {system_number}")),
        ..Default::default()
    })
}
