use crate::domain::{BoundingBox, FactId, GeometryType, PaintingId};
use crate::entities::{facts, prelude::*};
use crate::models::fact::Fact;
use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

pub struct FactRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> FactRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model_to_fact(model: facts::Model) -> Result<Fact> {
        let geometry = model
            .geometry_type
            .parse::<GeometryType>()
            .with_context(|| format!("fact {} has an invalid geometry", model.id))?;
        let bbox = BoundingBox::new(model.x, model.y, model.w, model.h)
            .with_context(|| format!("fact {} has an invalid bounding box", model.id))?;

        Ok(Fact {
            id: FactId::from(model.id),
            painting_id: PaintingId::from(model.painting_id),
            name: model.name,
            description_md: model.description_md,
            geometry,
            bbox,
            order_index: model.order_index,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    /// Facts of one painting, by `order_index`. Equal indexes fall back to
    /// creation time and then id so repeated reads agree.
    pub async fn list_for_painting(&self, painting_id: PaintingId) -> Result<Vec<Fact>> {
        let rows = Facts::find()
            .filter(facts::Column::PaintingId.eq(painting_id.value()))
            .order_by_asc(facts::Column::OrderIndex)
            .order_by_asc(facts::Column::CreatedAt)
            .order_by_asc(facts::Column::Id)
            .all(self.conn)
            .await?;

        rows.into_iter().map(Self::map_model_to_fact).collect()
    }

    pub async fn count_for_painting(&self, painting_id: PaintingId) -> Result<u64> {
        let count = Facts::find()
            .filter(facts::Column::PaintingId.eq(painting_id.value()))
            .count(self.conn)
            .await?;
        Ok(count)
    }

    pub async fn insert_many(&self, facts: &[Fact]) -> Result<()> {
        if facts.is_empty() {
            return Ok(());
        }

        let models: Vec<facts::ActiveModel> = facts
            .iter()
            .map(|fact| facts::ActiveModel {
                id: Set(fact.id.value()),
                painting_id: Set(fact.painting_id.value()),
                name: Set(fact.name.clone()),
                description_md: Set(fact.description_md.clone()),
                geometry_type: Set(fact.geometry.as_str().to_string()),
                x: Set(fact.bbox.x),
                y: Set(fact.bbox.y),
                w: Set(fact.bbox.w),
                h: Set(fact.bbox.h),
                order_index: Set(fact.order_index),
                created_at: Set(fact.created_at),
                updated_at: Set(fact.updated_at),
            })
            .collect();

        Facts::insert_many(models).exec(self.conn).await?;
        Ok(())
    }
}
