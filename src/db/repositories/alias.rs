use crate::db::repositories::painting::map_model_to_painting;
use crate::domain::{AliasTarget, PaintingId, SlugPair};
use crate::entities::{painting_aliases, prelude::*};
use crate::models::alias::PaintingAlias;
use crate::models::painting::Painting;
use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// Lookups over the alias registry.
pub struct AliasRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AliasRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model_to_alias(model: painting_aliases::Model) -> Result<PaintingAlias> {
        let target =
            AliasTarget::from_parts(model.artist_slug, model.painting_slug, model.combined_slug)
                .with_context(|| format!("alias {} has an invalid shape", model.id))?;

        Ok(PaintingAlias {
            id: model.id,
            painting_id: PaintingId::from(model.painting_id),
            target,
        })
    }

    /// Painting that a pair-shaped alias points at.
    pub async fn find_painting_by_pair(&self, slugs: &SlugPair) -> Result<Option<Painting>> {
        let row = PaintingAliases::find()
            .filter(painting_aliases::Column::ArtistSlug.eq(slugs.artist_slug.as_str()))
            .filter(painting_aliases::Column::PaintingSlug.eq(slugs.painting_slug.as_str()))
            .find_also_related(Paintings)
            .one(self.conn)
            .await?;

        Ok(row
            .and_then(|(_, painting)| painting)
            .map(map_model_to_painting))
    }

    /// Painting that a combined-slug alias points at.
    pub async fn find_painting_by_combined(&self, combined_slug: &str) -> Result<Option<Painting>> {
        let row = PaintingAliases::find()
            .filter(painting_aliases::Column::CombinedSlug.eq(combined_slug))
            .find_also_related(Paintings)
            .one(self.conn)
            .await?;

        Ok(row
            .and_then(|(_, painting)| painting)
            .map(map_model_to_painting))
    }

    pub async fn list_for_painting(&self, painting_id: PaintingId) -> Result<Vec<PaintingAlias>> {
        let rows = PaintingAliases::find()
            .filter(painting_aliases::Column::PaintingId.eq(painting_id.value()))
            .order_by_asc(painting_aliases::Column::CombinedSlug)
            .order_by_asc(painting_aliases::Column::ArtistSlug)
            .order_by_asc(painting_aliases::Column::PaintingSlug)
            .all(self.conn)
            .await?;

        rows.into_iter().map(Self::map_model_to_alias).collect()
    }

    pub async fn insert_many(&self, aliases: &[PaintingAlias]) -> Result<()> {
        if aliases.is_empty() {
            return Ok(());
        }

        let models: Vec<painting_aliases::ActiveModel> = aliases
            .iter()
            .map(|alias| {
                let (artist_slug, painting_slug, combined_slug) = alias.target.clone().into_parts();
                painting_aliases::ActiveModel {
                    id: Set(alias.id),
                    painting_id: Set(alias.painting_id.value()),
                    artist_slug: Set(artist_slug),
                    painting_slug: Set(painting_slug),
                    combined_slug: Set(combined_slug),
                }
            })
            .collect();

        PaintingAliases::insert_many(models).exec(self.conn).await?;
        Ok(())
    }
}
