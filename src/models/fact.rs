use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{BoundingBox, FactId, GeometryType, PaintingId};

/// An annotated region of a painting image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub id: FactId,
    pub painting_id: PaintingId,
    pub name: String,
    pub description_md: String,
    pub geometry: GeometryType,
    pub bbox: BoundingBox,
    /// Display position; duplicates are allowed.
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
