//! Victoria & Albert Museum adapter.

use async_trait::async_trait;
use serde::Deserialize;

use crate::http::HttpClient;
use crate::models::{Facet, ProviderKind, SearchCriteria};
use crate::providers::{classify_status, Provider, ProviderError, RawRecord, PAGE_SIZE};

/// Victoria & Albert Museum adapter
///
/// Uses the V&A collections REST API. No API key is required; search results
/// are restricted server-side to objects with at least one image.
#[derive(Debug, Clone)]
pub struct VamProvider {
    client: HttpClient,
    base_url: String,
}

impl VamProvider {
    /// Create a new adapter against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Translate criteria into the API's native query parameters
    fn search_params(&self, criteria: &SearchCriteria, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", page.to_string()),
            ("size", PAGE_SIZE.to_string()),
            ("images_exist", "true".to_string()),
            ("order_sort", criteria.sort_order.as_param().to_string()),
        ];

        if let Some(query) = &criteria.query {
            params.push(("q", query.clone()));
        }
        if let Some(order_by) = criteria.sort.mapping().and_then(|m| m.vam.clone()) {
            params.push(("order_by", order_by));
        }
        if let Facet::Mapped(mapping) = &criteria.classification {
            params.push(("id_category", mapping.vam_id.clone()));
        }
        if let Facet::Mapped(mapping) = &criteria.technique {
            params.push(("id_technique", mapping.vam_id.clone()));
        }

        params
    }
}

#[async_trait]
impl Provider for VamProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Vam
    }

    async fn search(
        &self,
        criteria: &SearchCriteria,
        page: u32,
    ) -> Result<Vec<RawRecord>, ProviderError> {
        let url = format!("{}/objects/search", self.base_url);
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

        let data: VamSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("V&A search response: {e}")))?;

        tracing::debug!(page, records = data.records.len(), "vam search page fetched");
        Ok(data.records.into_iter().map(RawRecord::Vam).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<RawRecord>, ProviderError> {
        let url = format!("{}/object/{}", self.base_url, urlencoding::encode(id));
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(classify_status(self.name(), status));
        }

        let data: VamObjectResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("V&A object response: {e}")))?;

        let Some(mut record) = data.record else {
            return Ok(None);
        };

        // The detail endpoint carries the IIIF base in the sibling `meta`
        // block; fold it into the record so normalization sees one shape.
        record.iiif_image_base = data
            .meta
            .and_then(|meta| meta.images)
            .and_then(|images| images.iiif_image);

        Ok(Some(RawRecord::Vam(record)))
    }
}

// ===== V&A API types =====

#[derive(Debug, Deserialize)]
struct VamSearchResponse {
    #[serde(default)]
    records: Vec<VamRecord>,
}

#[derive(Debug, Deserialize)]
struct VamObjectResponse {
    record: Option<VamRecord>,
    meta: Option<VamMeta>,
}

#[derive(Debug, Deserialize)]
struct VamMeta {
    images: Option<VamMetaImages>,
}

#[derive(Debug, Deserialize)]
struct VamMetaImages {
    #[serde(rename = "_iiif_image")]
    iiif_image: Option<String>,
}

/// One object as returned by the V&A API.
///
/// Search summaries and full detail records differ in shape; this struct is a
/// superset of both, so absent fields simply stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VamRecord {
    #[serde(rename = "systemNumber")]
    pub system_number: Option<String>,
    #[serde(default)]
    pub titles: Vec<VamTitle>,
    #[serde(rename = "_primaryTitle")]
    pub primary_title: Option<String>,
    #[serde(rename = "productionDates", default)]
    pub production_dates: Vec<VamProductionDate>,
    #[serde(rename = "_primaryDate")]
    pub primary_date: Option<String>,
    #[serde(rename = "materialsAndTechniques")]
    pub materials_and_techniques: Option<String>,
    #[serde(default)]
    pub dimensions: Vec<VamDimension>,
    #[serde(rename = "summaryDescription")]
    pub summary_description: Option<String>,
    #[serde(rename = "objectHistory")]
    pub object_history: Option<String>,
    #[serde(rename = "galleryLocations", default)]
    pub gallery_locations: Vec<VamGalleryLocation>,
    #[serde(rename = "creditLine")]
    pub credit_line: Option<String>,
    #[serde(rename = "_images")]
    pub images: Option<VamImages>,
    /// IIIF base folded in from the detail response's `meta` block
    #[serde(skip)]
    pub iiif_image_base: Option<String>,
}

impl VamRecord {
    /// Best available IIIF image base for this record
    pub fn iiif_base(&self) -> Option<&str> {
        self.iiif_image_base.as_deref().or_else(|| {
            self.images
                .as_ref()
                .and_then(|images| images.iiif_image_base_url.as_deref())
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VamTitle {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VamProductionDate {
    pub date: Option<VamDateText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VamDateText {
    pub text: Option<String>,
}

/// One entry of a record's dimension list
#[derive(Debug, Clone, Deserialize)]
pub struct VamDimension {
    pub dimension: Option<String>,
    pub value: Option<DimensionValue>,
    pub unit: Option<String>,
    pub qualifier: Option<String>,
}

/// Dimension values arrive as numbers or strings depending on the record
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DimensionValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimensionValue::Number(n) => write!(f, "{n}"),
            DimensionValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VamGalleryLocation {
    pub current: Option<VamLocationText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VamLocationText {
    pub text: Option<String>,
}

/// Image block attached to search summaries
#[derive(Debug, Clone, Deserialize)]
pub struct VamImages {
    #[serde(rename = "_iiif_image_base_url")]
    pub iiif_image_base_url: Option<String>,
}
