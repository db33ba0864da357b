use crate::domain::{PaintingId, SlugPair};
use crate::entities::{paintings, prelude::*};
use crate::models::painting::Painting;
use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

pub(crate) fn map_model_to_painting(model: paintings::Model) -> Painting {
    Painting {
        id: PaintingId::from(model.id),
        name: model.name,
        artist_name: model.artist_name,
        artist_slug: model.artist_slug,
        painting_slug: model.painting_slug,
        museum_name: model.museum_name,
        genres: model.genre_name.and_then(|s| serde_json::from_str(&s).ok()),
        image_url: model.image_url,
        source_url: model.source_url,
        license_name: model.license_name,
        license_url: model.license_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

pub struct PaintingRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PaintingRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_slugs(&self, slugs: &SlugPair) -> Result<Option<Painting>> {
        let model = Paintings::find()
            .filter(paintings::Column::ArtistSlug.eq(slugs.artist_slug.as_str()))
            .filter(paintings::Column::PaintingSlug.eq(slugs.painting_slug.as_str()))
            .one(self.conn)
            .await?;

        Ok(model.map(map_model_to_painting))
    }

    pub async fn get(&self, id: PaintingId) -> Result<Option<Painting>> {
        let model = Paintings::find_by_id(id.value()).one(self.conn).await?;
        Ok(model.map(map_model_to_painting))
    }

    pub async fn list_all(&self) -> Result<Vec<Painting>> {
        let rows = Paintings::find()
            .order_by_asc(paintings::Column::ArtistSlug)
            .order_by_asc(paintings::Column::PaintingSlug)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(map_model_to_painting).collect())
    }

    pub async fn insert(&self, painting: &Painting) -> Result<()> {
        let active_model = paintings::ActiveModel {
            id: Set(painting.id.value()),
            name: Set(painting.name.clone()),
            artist_name: Set(painting.artist_name.clone()),
            artist_slug: Set(painting.artist_slug.clone()),
            painting_slug: Set(painting.painting_slug.clone()),
            museum_name: Set(painting.museum_name.clone()),
            genre_name: Set(painting
                .genres
                .as_ref()
                .and_then(|g| serde_json::to_string(g).ok())),
            image_url: Set(painting.image_url.clone()),
            source_url: Set(painting.source_url.clone()),
            license_name: Set(painting.license_name.clone()),
            license_url: Set(painting.license_url.clone()),
            created_at: Set(painting.created_at),
            updated_at: Set(painting.updated_at),
        };

        Paintings::insert(active_model).exec(self.conn).await?;
        Ok(())
    }

    /// Deletes one painting. Facts and aliases go with it through the
    /// foreign-key cascade.
    pub async fn delete(&self, id: PaintingId) -> Result<bool> {
        let result = Paintings::delete_by_id(id.value()).exec(self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = Paintings::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
