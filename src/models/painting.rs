use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{PaintingId, SlugPair};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Painting {
    pub id: PaintingId,
    pub name: String,
    pub artist_name: String,
    pub artist_slug: String,
    pub painting_slug: String,
    pub museum_name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_url: String,
    pub source_url: String,
    pub license_name: Option<String>,
    pub license_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Painting {
    #[must_use]
    pub fn canonical_slugs(&self) -> SlugPair {
        SlugPair::new(self.artist_slug.clone(), self.painting_slug.clone())
    }
}
