//! Unified artwork model shared by every provider.

use serde::{Deserialize, Serialize};

/// The museum collection API a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Harvard,
    Vam,
}

impl ProviderKind {
    /// Returns the provider identifier (used in logs and configuration)
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Harvard => "harvard",
            ProviderKind::Vam => "vam",
        }
    }

    /// Returns the display name of the provider
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Harvard => "Harvard Art Museums",
            ProviderKind::Vam => "Victoria and Albert Museum",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Image shown when a provider has no image for a record.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSMZG9cIFLAsgK_y9kGQ_HBZZ5ADp1GQq4OYQ&s";

/// Default title for records without one
pub const DEFAULT_TITLE: &str = "No Title Available";
/// Default production date
pub const DEFAULT_DATE: &str = "Unknown";
/// Default medium / materials description
pub const DEFAULT_MEDIUM: &str = "Not specified";
/// Default dimensions text
pub const DEFAULT_DIMENSIONS: &str = "Not provided";
/// Default description text
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
/// Default provenance text
pub const DEFAULT_PROVENANCE: &str = "Not available";
/// Default gallery location text
pub const DEFAULT_LOCATION: &str = "No specific location";
/// Default credit line text
pub const DEFAULT_CREDIT_LINE: &str = "No credit line";

/// An artwork in the unified shape served to clients.
///
/// Every field is guaranteed present after normalization: missing or empty
/// source fields are replaced by the documented defaults, so consumers never
/// see a null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Provider-native identifier
    pub id: String,

    /// Image URL ([`PLACEHOLDER_IMAGE_URL`] when the provider has none)
    pub image: String,

    /// Title
    pub title: String,

    /// Production date text
    pub date: String,

    /// Medium / materials and techniques
    pub medium: String,

    /// Rendered dimensions text
    pub dimensions: String,

    /// Summary description
    pub description: String,

    /// Object history / provenance
    pub provenance: String,

    /// Current gallery location
    pub location: String,

    /// Credit line
    pub credit_line: String,
}

impl Artwork {
    /// Start building an artwork for the given provider-native id
    pub fn builder(id: impl Into<String>) -> ArtworkBuilder {
        ArtworkBuilder::new(id)
    }
}

/// Builder that applies the documented defaults for absent fields.
///
/// Setters take the raw `Option` pulled from a provider record; empty strings
/// count as absent, matching how the upstream responses mix the two.
#[derive(Debug, Clone, Default)]
pub struct ArtworkBuilder {
    id: String,
    image: Option<String>,
    title: Option<String>,
    date: Option<String>,
    medium: Option<String>,
    dimensions: Option<String>,
    description: Option<String>,
    provenance: Option<String>,
    location: Option<String>,
    credit_line: Option<String>,
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl ArtworkBuilder {
    /// Create a new builder for the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the image URL
    pub fn image(mut self, value: Option<String>) -> Self {
        self.image = none_if_empty(value);
        self
    }

    /// Set the title
    pub fn title(mut self, value: Option<String>) -> Self {
        self.title = none_if_empty(value);
        self
    }

    /// Set the production date text
    pub fn date(mut self, value: Option<String>) -> Self {
        self.date = none_if_empty(value);
        self
    }

    /// Set the medium
    pub fn medium(mut self, value: Option<String>) -> Self {
        self.medium = none_if_empty(value);
        self
    }

    /// Set the dimensions text
    pub fn dimensions(mut self, value: Option<String>) -> Self {
        self.dimensions = none_if_empty(value);
        self
    }

    /// Set the description
    pub fn description(mut self, value: Option<String>) -> Self {
        self.description = none_if_empty(value);
        self
    }

    /// Set the provenance
    pub fn provenance(mut self, value: Option<String>) -> Self {
        self.provenance = none_if_empty(value);
        self
    }

    /// Set the gallery location
    pub fn location(mut self, value: Option<String>) -> Self {
        self.location = none_if_empty(value);
        self
    }

    /// Set the credit line
    pub fn credit_line(mut self, value: Option<String>) -> Self {
        self.credit_line = none_if_empty(value);
        self
    }

    /// Build the artwork, filling defaults for anything left unset
    pub fn build(self) -> Artwork {
        Artwork {
            id: self.id,
            image: self.image.unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            date: self.date.unwrap_or_else(|| DEFAULT_DATE.to_string()),
            medium: self.medium.unwrap_or_else(|| DEFAULT_MEDIUM.to_string()),
            dimensions: self
                .dimensions
                .unwrap_or_else(|| DEFAULT_DIMENSIONS.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            provenance: self
                .provenance
                .unwrap_or_else(|| DEFAULT_PROVENANCE.to_string()),
            location: self.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            credit_line: self
                .credit_line
                .unwrap_or_else(|| DEFAULT_CREDIT_LINE.to_string()),
        }
    }
}
