//! Provider adapters for the upstream museum collection APIs.
//!
//! Each adapter translates provider-agnostic [`SearchCriteria`] into its
//! API's native query parameters and returns provider-shaped [`RawRecord`]s.
//! Upstream faults are classified here, at the adapter boundary: a 401 is the
//! only fatal outcome, a 404 is an empty result, and everything else is a
//! recoverable error the aggregation engine degrades to an empty record set.

mod harvard;
mod vam;

pub mod mock;

pub use harvard::{
    HarvardGallery, HarvardImage, HarvardPlace, HarvardProvider, HarvardRecord, HarvardTitle,
};
pub use mock::MockProvider;
pub use vam::{
    DimensionValue, VamDateText, VamDimension, VamGalleryLocation, VamImages, VamLocationText,
    VamProductionDate, VamProvider, VamRecord, VamTitle,
};

use async_trait::async_trait;

use crate::models::{ProviderKind, SearchCriteria};

/// Fixed page size requested from every provider.
pub const PAGE_SIZE: u32 = 10;

/// Interface implemented by each museum collection adapter.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Which provider this adapter talks to
    fn kind(&self) -> ProviderKind;

    /// Human-readable provider name
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Fetch one page of search results
    async fn search(
        &self,
        criteria: &SearchCriteria,
        page: u32,
    ) -> Result<Vec<RawRecord>, ProviderError>;

    /// Fetch a single record by its provider-native id.
    ///
    /// A provider-reported 404 is a valid empty outcome, returned as
    /// `Ok(None)` rather than an error.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<RawRecord>, ProviderError>;
}

/// A provider-shaped record, kept raw until normalization
#[derive(Debug, Clone)]
pub enum RawRecord {
    Harvard(HarvardRecord),
    Vam(VamRecord),
}

impl RawRecord {
    /// Which provider produced this record
    pub fn provider(&self) -> ProviderKind {
        match self {
            RawRecord::Harvard(_) => ProviderKind::Harvard,
            RawRecord::Vam(_) => ProviderKind::Vam,
        }
    }

    /// Provider-native identifier, when the record carries one
    pub fn record_id(&self) -> Option<String> {
        match self {
            RawRecord::Harvard(record) => {
                record.objectid.or(record.id).map(|id| id.to_string())
            }
            RawRecord::Vam(record) => record.system_number.clone(),
        }
    }

    /// Whether the record carries at least one image reference
    pub fn has_image(&self) -> bool {
        match self {
            RawRecord::Harvard(record) => !record.images.is_empty(),
            RawRecord::Vam(record) => record.iiif_base().is_some(),
        }
    }
}

/// Errors classified at the adapter boundary
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// Invalid or missing provider credential; fatal to the whole aggregation
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Provider reports no such resource
    #[error("resource not found")]
    NotFound,

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-2xx response
    #[error("API error: {0}")]
    Api(String),

    /// Malformed response body
    #[error("parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Whether this error must abort the whole aggregation
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProviderError::Unauthorized(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(format!("JSON: {}", err))
    }
}

/// Classify a non-2xx status for the given provider
pub(crate) fn classify_status(provider: &str, status: reqwest::StatusCode) -> ProviderError {
    match status.as_u16() {
        401 => ProviderError::Unauthorized(format!("invalid or missing {provider} API key")),
        404 => ProviderError::NotFound,
        _ => ProviderError::Api(format!("{provider} returned status {status}")),
    }
}
