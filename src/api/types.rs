use serde::Serialize;
use uuid::Uuid;

use crate::domain::GeometryType;
use crate::models::fact::Fact;
use crate::services::ResolvedPainting;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Public shape of a painting resolved through its canonical slugs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintingView {
    pub id: Uuid,
    pub name: String,
    pub artist_name: String,
    pub artist_slug: String,
    pub painting_slug: String,
    pub museum_name: Option<String>,
    pub genre_name: Option<Vec<String>>,
    pub image_url: String,
    pub source_url: String,
    pub license_name: Option<String>,
    pub license_url: Option<String>,
    pub facts_count: u64,
}

impl From<ResolvedPainting> for PaintingView {
    fn from(resolved: ResolvedPainting) -> Self {
        let painting = resolved.painting;
        Self {
            id: painting.id.value(),
            name: painting.name,
            artist_name: painting.artist_name,
            artist_slug: painting.artist_slug,
            painting_slug: painting.painting_slug,
            museum_name: painting.museum_name,
            genre_name: painting.genres,
            image_url: painting.image_url,
            source_url: painting.source_url,
            license_name: painting.license_name,
            license_url: painting.license_url,
            facts_count: resolved.facts_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactView {
    pub id: Uuid,
    pub painting_id: Uuid,
    pub name: String,
    pub description_md: String,
    pub geometry_type: GeometryType,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub order_index: i32,
}

impl From<Fact> for FactView {
    fn from(fact: Fact) -> Self {
        Self {
            id: fact.id.value(),
            painting_id: fact.painting_id.value(),
            name: fact.name,
            description_md: fact.description_md,
            geometry_type: fact.geometry,
            x: fact.bbox.x,
            y: fact.bbox.y,
            w: fact.bbox.w,
            h: fact.bbox.h,
            order_index: fact.order_index,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
