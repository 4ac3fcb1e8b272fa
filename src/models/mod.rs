//! Core data models for artworks and aggregated search.

mod artwork;
mod search;

pub use artwork::{
    Artwork, ArtworkBuilder, ProviderKind, DEFAULT_CREDIT_LINE, DEFAULT_DATE, DEFAULT_DESCRIPTION,
    DEFAULT_DIMENSIONS, DEFAULT_LOCATION, DEFAULT_MEDIUM, DEFAULT_PROVENANCE, DEFAULT_TITLE,
    PLACEHOLDER_IMAGE_URL,
};
pub use search::{
    AggregatedResult, Facet, FacetMapping, FacetParseError, SearchCriteria, SortFacet, SortMapping,
    SortOrder, ANY_SENTINEL,
};
