//! `SeaORM` implementation of the `PaintingService` trait.

use crate::db::Store;
use crate::db::repositories::alias::AliasRepository;
use crate::db::repositories::fact::FactRepository;
use crate::db::repositories::painting::PaintingRepository;
use crate::domain::{PaintingId, SlugPair};
use crate::models::fact::Fact;
use crate::services::painting_service::{
    PaintingError, PaintingService, ResolvedPainting, Resolution,
};
use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

pub struct SeaOrmPaintingService {
    store: Store,
}

impl SeaOrmPaintingService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn resolve_with<C: ConnectionTrait>(
        conn: &C,
        slugs: &SlugPair,
    ) -> Result<Resolution, PaintingError> {
        if let Some(painting) = PaintingRepository::new(conn).find_by_slugs(slugs).await? {
            let facts_count = FactRepository::new(conn)
                .count_for_painting(painting.id)
                .await?;
            return Ok(Resolution::Found(ResolvedPainting {
                painting,
                facts_count,
            }));
        }

        let aliased = AliasRepository::new(conn)
            .find_painting_by_pair(slugs)
            .await?;

        Ok(aliased.map_or(Resolution::NotFound, |painting| {
            Resolution::Redirect(painting.canonical_slugs())
        }))
    }
}

fn record_resolution(route: &'static str, outcome: &'static str) {
    metrics::counter!("painting_resolutions_total", "route" => route, "outcome" => outcome)
        .increment(1);
}

#[async_trait]
impl PaintingService for SeaOrmPaintingService {
    async fn resolve(&self, slugs: &SlugPair) -> Result<Resolution, PaintingError> {
        // One read transaction per resolution; dropping it on the error path
        // rolls back and returns the connection.
        let txn = self.store.begin().await?;
        let resolution = Self::resolve_with(&txn, slugs).await?;
        txn.commit().await?;

        match &resolution {
            Resolution::Found(resolved) => debug!(
                slugs = %slugs,
                painting_id = %resolved.painting.id,
                facts_count = resolved.facts_count,
                "Resolved painting"
            ),
            Resolution::Redirect(target) => {
                info!(from = %slugs, to = %target, "Redirecting alias to canonical slugs");
            }
            Resolution::NotFound => debug!(slugs = %slugs, "No painting or alias for slugs"),
        }
        record_resolution("pair", resolution.outcome());

        Ok(resolution)
    }

    async fn resolve_combined(
        &self,
        combined_slug: &str,
    ) -> Result<Option<SlugPair>, PaintingError> {
        let painting = AliasRepository::new(&self.store.conn)
            .find_painting_by_combined(combined_slug)
            .await?;
        let target = painting.map(|p| p.canonical_slugs());

        match &target {
            Some(target) => {
                info!(from = combined_slug, to = %target, "Redirecting combined alias");
                record_resolution("combined", "redirect");
            }
            None => {
                debug!(combined_slug, "No alias for combined slug");
                record_resolution("combined", "not_found");
            }
        }

        Ok(target)
    }

    async fn facts_for(&self, painting_id: PaintingId) -> Result<Vec<Fact>, PaintingError> {
        Ok(self.store.get_facts_for_painting(painting_id).await?)
    }
}
