//! Search criteria, cross-provider facet mappings, and aggregate results.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Artwork;

/// Sentinel facet value meaning "no filter for this facet".
pub const ANY_SENTINEL: &str = "any";

/// Sort order applied to provider queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire form understood by both providers
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(FacetParseError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// Provider-native identifiers for one logical facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetMapping {
    /// Harvard Art Museums identifier
    pub harvard_id: String,
    /// Victoria and Albert Museum identifier
    pub vam_id: String,
}

/// A filterable facet: either unfiltered or mapped to provider identifiers.
///
/// On the wire a facet is the sentinel string `"any"` or a mapping object.
/// The variant is decided once here; the adapters only ever match on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    Any,
    Mapped(FacetMapping),
}

impl Facet {
    /// Returns the mapping when this facet filters, `None` for [`Facet::Any`]
    pub fn mapping(&self) -> Option<&FacetMapping> {
        match self {
            Facet::Any => None,
            Facet::Mapped(mapping) => Some(mapping),
        }
    }

    /// Parse a query-string value: `"any"` or a JSON-encoded mapping object
    pub fn parse(raw: &str) -> Result<Self, FacetParseError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
            return Ok(Facet::Any);
        }
        if !trimmed.starts_with('{') {
            return Err(FacetParseError::InvalidSentinel(trimmed.to_string()));
        }
        Ok(Facet::Mapped(serde_json::from_str(trimmed)?))
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Facet::Any => serializer.serialize_str(ANY_SENTINEL),
            Facet::Mapped(mapping) => mapping.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Facet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Mapped(FacetMapping),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(s) if s.eq_ignore_ascii_case(ANY_SENTINEL) => Ok(Facet::Any),
            Repr::Sentinel(other) => Err(D::Error::custom(format!(
                "expected \"{ANY_SENTINEL}\" or a facet mapping, got {other:?}"
            ))),
            Repr::Mapped(mapping) => Ok(Facet::Mapped(mapping)),
        }
    }
}

/// Provider-native sort keys for one logical sort option.
///
/// Either key may be absent when a provider has no equivalent ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortMapping {
    /// Harvard Art Museums sort key
    pub harvard: Option<String>,
    /// Victoria and Albert Museum `order_by` value
    pub vam: Option<String>,
}

/// Sort facet: provider defaults, or mapped per-provider sort keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortFacet {
    #[default]
    Any,
    Mapped(SortMapping),
}

impl SortFacet {
    /// Returns the mapping when a sort option was chosen
    pub fn mapping(&self) -> Option<&SortMapping> {
        match self {
            SortFacet::Any => None,
            SortFacet::Mapped(mapping) => Some(mapping),
        }
    }

    /// Parse a query-string value: `"any"` or a JSON-encoded mapping object
    pub fn parse(raw: &str) -> Result<Self, FacetParseError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
            return Ok(SortFacet::Any);
        }
        if !trimmed.starts_with('{') {
            return Err(FacetParseError::InvalidSentinel(trimmed.to_string()));
        }
        Ok(SortFacet::Mapped(serde_json::from_str(trimmed)?))
    }
}

impl Serialize for SortFacet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SortFacet::Any => serializer.serialize_str(ANY_SENTINEL),
            SortFacet::Mapped(mapping) => mapping.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SortFacet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Mapped(SortMapping),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(s) if s.eq_ignore_ascii_case(ANY_SENTINEL) => Ok(SortFacet::Any),
            Repr::Sentinel(other) => Err(D::Error::custom(format!(
                "expected \"{ANY_SENTINEL}\" or a sort mapping, got {other:?}"
            ))),
            Repr::Mapped(mapping) => Ok(SortFacet::Mapped(mapping)),
        }
    }
}

/// Errors produced when decoding facet and sort parameters
#[derive(Debug, thiserror::Error)]
pub enum FacetParseError {
    /// A facet string other than the `"any"` sentinel
    #[error("expected \"any\" or a mapping object, got {0:?}")]
    InvalidSentinel(String),

    /// A mapping object that failed to decode
    #[error("invalid facet mapping: {0}")]
    InvalidMapping(#[from] serde_json::Error),

    /// A sort order other than `asc` / `desc`
    #[error("invalid sort order {0:?} (expected \"asc\" or \"desc\")")]
    InvalidSortOrder(String),
}

/// Search criteria applied across both providers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Free-text search term
    pub query: Option<String>,

    /// First page to fetch (1-based)
    pub page: u32,

    /// Classification facet
    pub classification: Facet,

    /// Technique facet
    pub technique: Facet,

    /// Sort option
    pub sort: SortFacet,

    /// Sort order
    pub sort_order: SortOrder,

    /// Minimum number of artworks to accumulate before returning
    pub min_results: usize,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: None,
            page: 1,
            classification: Facet::Any,
            technique: Facet::Any,
            sort: SortFacet::Any,
            sort_order: SortOrder::Asc,
            min_results: 20,
        }
    }
}

impl SearchCriteria {
    /// Create criteria for a free-text search
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Set the first page to fetch
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the classification facet
    pub fn classification(mut self, facet: Facet) -> Self {
        self.classification = facet;
        self
    }

    /// Set the technique facet
    pub fn technique(mut self, facet: Facet) -> Self {
        self.technique = facet;
        self
    }

    /// Set the sort option
    pub fn sort(mut self, sort: SortFacet) -> Self {
        self.sort = sort;
        self
    }

    /// Set the sort order
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Set the accumulation threshold
    pub fn min_results(mut self, min: usize) -> Self {
        self.min_results = min;
        self
    }
}

/// Combined result of one aggregated search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    /// Normalized artworks, Harvard records before V&A records per fetched page
    pub artworks: Vec<Artwork>,

    /// Whether another page is worth requesting
    pub has_next_page: bool,
}
