//! Harvard Art Museums adapter.

use async_trait::async_trait;
use serde::Deserialize;

use crate::http::HttpClient;
use crate::models::{Facet, ProviderKind, SearchCriteria};
use crate::providers::{classify_status, Provider, ProviderError, RawRecord, PAGE_SIZE};

/// Sort key used when the caller supplies no sort option.
const DEFAULT_SORT: &str = "accessionyear";

/// Harvard Art Museums adapter
///
/// Uses the Harvard Art Museums REST API. Requests are authenticated with an
/// API key passed as a query parameter.
#[derive(Debug, Clone)]
pub struct HarvardProvider {
    client: HttpClient,
    base_url: String,
    api_key: String,
}

impl HarvardProvider {
    /// Create a new adapter against the given API base URL
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Translate criteria into the API's native query parameters
    fn search_params(&self, criteria: &SearchCriteria, page: u32) -> Vec<(&'static str, String)> {
        let sort = criteria
            .sort
            .mapping()
            .and_then(|m| m.harvard.clone())
            .unwrap_or_else(|| DEFAULT_SORT.to_string());

        let mut params = vec![
            ("page", page.to_string()),
            ("size", PAGE_SIZE.to_string()),
            ("sort", sort),
            ("sortorder", criteria.sort_order.as_param().to_string()),
            ("apikey", self.api_key.clone()),
        ];

        if let Some(query) = &criteria.query {
            params.push(("q", query.clone()));
        }
        if let Facet::Mapped(mapping) = &criteria.classification {
            params.push(("classification", mapping.harvard_id.clone()));
        }
        if let Facet::Mapped(mapping) = &criteria.technique {
            params.push(("technique", mapping.harvard_id.clone()));
        }

        params
    }
}

#[async_trait]
impl Provider for HarvardProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Harvard
    }

    async fn search(
        &self,
        criteria: &SearchCriteria,
        page: u32,
    ) -> Result<Vec<RawRecord>, ProviderError> {
        let url = format!("{}/object", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&self.search_params(criteria, page))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(self.name(), status));
        }

        let data: HarvardSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Harvard search response: {e}")))?;

        tracing::debug!(page, records = data.records.len(), "harvard search page fetched");
        Ok(data.records.into_iter().map(RawRecord::Harvard).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<RawRecord>, ProviderError> {
        let url = format!("{}/object/{}", self.base_url, urlencoding::encode(id));
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(classify_status(self.name(), status));
        }

        let record: HarvardRecord = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Harvard object response: {e}")))?;

        // A 200 with neither title nor objectid is the API's way of saying
        // the object does not exist.
        if record.title.is_none() && record.objectid.is_none() {
            return Ok(None);
        }

        Ok(Some(RawRecord::Harvard(record)))
    }
}

// ===== Harvard API types =====

#[derive(Debug, Deserialize)]
struct HarvardSearchResponse {
    #[serde(default)]
    records: Vec<HarvardRecord>,
}

/// One object as returned by the Harvard Art Museums API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarvardRecord {
    pub objectid: Option<i64>,
    pub id: Option<i64>,
    pub title: Option<String>,
    #[serde(default)]
    pub titles: Vec<HarvardTitle>,
    pub dated: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub description: Option<String>,
    pub provenance: Option<String>,
    pub gallery: Option<HarvardGallery>,
    #[serde(default)]
    pub places: Vec<HarvardPlace>,
    pub creditline: Option<String>,
    pub primaryimageurl: Option<String>,
    #[serde(default)]
    pub images: Vec<HarvardImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarvardTitle {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarvardGallery {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarvardPlace {
    pub displayname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarvardImage {
    pub baseimageurl: Option<String>,
}
