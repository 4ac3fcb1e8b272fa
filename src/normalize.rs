//! Per-provider normalization into the unified artwork model.
//!
//! Normalization is total: whatever a provider omits, the resulting
//! [`Artwork`] carries the documented default instead, so no absent value
//! ever reaches a client.

use crate::models::Artwork;
use crate::providers::{HarvardRecord, RawRecord, VamDimension, VamRecord};

/// Suffix appended to a IIIF base to request a full-resolution default rendering.
pub const IIIF_FULL_IMAGE_SUFFIX: &str = "full/full/0/default.jpg";

/// Map a raw provider record into the unified artwork shape
pub fn normalize(record: &RawRecord) -> Artwork {
    match record {
        RawRecord::Harvard(record) => normalize_harvard(record),
        RawRecord::Vam(record) => normalize_vam(record),
    }
}

fn normalize_harvard(record: &HarvardRecord) -> Artwork {
    let id = record
        .objectid
        .or(record.id)
        .map(|id| id.to_string())
        .unwrap_or_default();

    Artwork::builder(id)
        .image(record.primaryimageurl.clone())
        .title(record.title.clone().or_else(|| {
            record
                .titles
                .first()
                .and_then(|title| title.title.clone())
        }))
        .date(record.dated.clone())
        .medium(record.medium.clone())
        .dimensions(record.dimensions.clone())
        .description(record.description.clone())
        .provenance(record.provenance.clone())
        .location(
            record
                .gallery
                .as_ref()
                .and_then(|gallery| gallery.name.clone())
                .or_else(|| {
                    record
                        .places
                        .first()
                        .and_then(|place| place.displayname.clone())
                }),
        )
        .credit_line(record.creditline.clone())
        .build()
}

fn normalize_vam(record: &VamRecord) -> Artwork {
    let image = record
        .iiif_base()
        .map(|base| format!("{base}{IIIF_FULL_IMAGE_SUFFIX}"));

    Artwork::builder(record.system_number.clone().unwrap_or_default())
        .image(image)
        .title(
            record
                .titles
                .first()
                .and_then(|title| title.title.clone())
                .or_else(|| record.primary_title.clone()),
        )
        .date(
            record
                .production_dates
                .first()
                .and_then(|entry| entry.date.as_ref())
                .and_then(|date| date.text.clone())
                .or_else(|| record.primary_date.clone()),
        )
        .medium(record.materials_and_techniques.clone())
        .dimensions(render_dimensions(&record.dimensions))
        .description(record.summary_description.clone())
        .provenance(record.object_history.clone())
        .location(
            record
                .gallery_locations
                .first()
                .and_then(|location| location.current.as_ref())
                .and_then(|current| current.text.clone()),
        )
        .credit_line(record.credit_line.clone())
        .build()
}

/// Render a V&A dimension list as display text; an empty list renders as absent
fn render_dimensions(dimensions: &[VamDimension]) -> Option<String> {
    if dimensions.is_empty() {
        return None;
    }

    let rendered = dimensions
        .iter()
        .map(|dim| {
            let name = dim.dimension.as_deref().unwrap_or_default();
            let value = dim
                .value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            let unit = dim.unit.as_deref().unwrap_or_default();
            match dim.qualifier.as_deref().filter(|q| !q.is_empty()) {
                Some(qualifier) => format!("{name}: {value} {unit} ({qualifier})"),
                None => format!("{name}: {value} {unit}"),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(rendered)
}
