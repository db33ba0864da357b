//! Administrative loading of paintings, facts and aliases.
//!
//! The HTTP surface never writes. Data arrives through this loader, which
//! replaces the whole dataset in one transaction after validating it.

use crate::db::Store;
use crate::db::repositories::alias::AliasRepository;
use crate::db::repositories::fact::FactRepository;
use crate::db::repositories::painting::PaintingRepository;
use crate::domain::{
    AliasTarget, BoundingBox, DomainError, FactId, GeometryType, PaintingId, SlugPair,
};
use crate::models::alias::PaintingAlias;
use crate::models::fact::Fact;
use crate::models::painting::Painting;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

const BUILTIN_DATASET: &str = include_str!("../../seed/starry_night.toml");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse seed dataset: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Painting '{painting}': {source}")]
    Invalid {
        painting: String,
        #[source]
        source: DomainError,
    },

    #[error("Duplicate canonical slugs: {0}")]
    DuplicateCanonical(SlugPair),

    #[error("Duplicate alias: {0}")]
    DuplicateAlias(AliasTarget),

    #[error("Alias {0} collides with a painting's canonical slugs")]
    AliasCollidesWithCanonical(SlugPair),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for SeedError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for SeedError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDataset {
    #[serde(default)]
    pub paintings: Vec<PaintingSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaintingSeed {
    /// Fixed id; a random one is generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub artist_name: String,
    pub artist_slug: String,
    pub painting_slug: String,
    #[serde(default)]
    pub museum_name: Option<String>,
    #[serde(default)]
    pub genre_name: Option<Vec<String>>,
    pub image_url: String,
    pub source_url: String,
    #[serde(default)]
    pub license_name: Option<String>,
    #[serde(default)]
    pub license_url: Option<String>,
    #[serde(default)]
    pub facts: Vec<FactSeed>,
    #[serde(default)]
    pub aliases: Vec<AliasSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactSeed {
    pub name: String,
    pub description_md: String,
    #[serde(default = "default_geometry")]
    pub geometry_type: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub order_index: i32,
}

fn default_geometry() -> String {
    GeometryType::default().as_str().to_string()
}

/// Mirrors the alias table columns; shape is checked when converted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasSeed {
    #[serde(default)]
    pub artist_slug: Option<String>,
    #[serde(default)]
    pub painting_slug: Option<String>,
    #[serde(default)]
    pub combined_slug: Option<String>,
}

/// Validated rows ready to insert.
#[derive(Debug, Clone, Default)]
pub struct SeedRecords {
    pub paintings: Vec<Painting>,
    pub facts: Vec<Fact>,
    pub aliases: Vec<PaintingAlias>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub removed_paintings: u64,
    pub paintings: usize,
    pub facts: usize,
    pub aliases: usize,
}

impl SeedDataset {
    pub fn from_toml(content: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// The Starry Night dataset shipped with the binary.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_toml(BUILTIN_DATASET)
    }

    /// Validates the dataset and turns it into rows.
    ///
    /// Rejects out-of-range bounding boxes, unknown geometry, malformed
    /// aliases, duplicate canonical slugs or aliases, and pair aliases that
    /// shadow a canonical pair.
    pub fn into_records(self, now: DateTime<Utc>) -> Result<SeedRecords, SeedError> {
        let mut records = SeedRecords::default();
        let mut canonical: HashSet<SlugPair> = HashSet::new();
        let mut alias_targets: HashSet<AliasTarget> = HashSet::new();

        for seed in self.paintings {
            let invalid = |source: DomainError| SeedError::Invalid {
                painting: seed.name.clone(),
                source,
            };

            let slugs = SlugPair::new(seed.artist_slug.clone(), seed.painting_slug.clone());
            slugs.validate().map_err(invalid)?;
            if !canonical.insert(slugs.clone()) {
                return Err(SeedError::DuplicateCanonical(slugs));
            }

            let painting_id = seed.id.map_or_else(PaintingId::new_random, PaintingId::from);

            for (position, fact) in seed.facts.iter().enumerate() {
                let geometry = fact.geometry_type.parse::<GeometryType>().map_err(invalid)?;
                let bbox = BoundingBox::new(fact.x, fact.y, fact.w, fact.h).map_err(invalid)?;
                // Spread creation times so equal order_index values keep file order.
                let created_at = now + TimeDelta::microseconds(position as i64);

                records.facts.push(Fact {
                    id: FactId::new_random(),
                    painting_id,
                    name: fact.name.clone(),
                    description_md: fact.description_md.clone(),
                    geometry,
                    bbox,
                    order_index: fact.order_index,
                    created_at,
                    updated_at: created_at,
                });
            }

            for alias in &seed.aliases {
                let target = AliasTarget::from_parts(
                    alias.artist_slug.clone(),
                    alias.painting_slug.clone(),
                    alias.combined_slug.clone(),
                )
                .map_err(invalid)?;
                if !alias_targets.insert(target.clone()) {
                    return Err(SeedError::DuplicateAlias(target));
                }

                records.aliases.push(PaintingAlias {
                    id: Uuid::new_v4(),
                    painting_id,
                    target,
                });
            }

            records.paintings.push(Painting {
                id: painting_id,
                name: seed.name,
                artist_name: seed.artist_name,
                artist_slug: seed.artist_slug,
                painting_slug: seed.painting_slug,
                museum_name: seed.museum_name,
                genres: seed.genre_name,
                image_url: seed.image_url,
                source_url: seed.source_url,
                license_name: seed.license_name,
                license_url: seed.license_url,
                created_at: now,
                updated_at: now,
            });
        }

        // Checked after every painting is known; aliases may precede the
        // painting whose slugs they would shadow.
        for alias in &records.aliases {
            if let AliasTarget::Pair(pair) = &alias.target
                && canonical.contains(pair)
            {
                return Err(SeedError::AliasCollidesWithCanonical(pair.clone()));
            }
        }

        Ok(records)
    }
}

pub struct SeedService {
    store: Store,
}

impl SeedService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Replaces every painting, fact and alias with the dataset.
    ///
    /// Existing paintings are deleted first; their facts and aliases follow
    /// through the foreign-key cascade. Nothing is written if validation or
    /// any insert fails.
    pub async fn load(&self, dataset: SeedDataset) -> Result<SeedSummary, SeedError> {
        let records = dataset.into_records(Utc::now())?;

        let txn = self.store.begin().await?;

        let paintings = PaintingRepository::new(&txn);
        let removed_paintings = paintings.delete_all().await?;
        for painting in &records.paintings {
            paintings.insert(painting).await?;
        }
        FactRepository::new(&txn)
            .insert_many(&records.facts)
            .await?;
        AliasRepository::new(&txn)
            .insert_many(&records.aliases)
            .await?;

        txn.commit().await?;

        let summary = SeedSummary {
            removed_paintings,
            paintings: records.paintings.len(),
            facts: records.facts.len(),
            aliases: records.aliases.len(),
        };
        info!(
            removed = summary.removed_paintings,
            paintings = summary.paintings,
            facts = summary.facts,
            aliases = summary.aliases,
            "Seed dataset loaded"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painting_toml(artist: &str, painting: &str, extra: &str) -> String {
        format!(
            r#"
            [[paintings]]
            name = "{painting}"
            artist_name = "{artist}"
            artist_slug = "{artist}"
            painting_slug = "{painting}"
            image_url = "https://example.org/{painting}.jpg"
            source_url = "https://example.org/{painting}"
            {extra}
            "#
        )
    }

    #[test]
    fn test_builtin_dataset_is_valid() {
        let records = SeedDataset::builtin()
            .unwrap()
            .into_records(Utc::now())
            .unwrap();

        assert_eq!(records.paintings.len(), 1);
        assert_eq!(records.facts.len(), 4);
        assert_eq!(records.aliases.len(), 2);
        assert!(records.facts.iter().all(|f| f.geometry == GeometryType::Rect));
    }

    #[test]
    fn test_fact_outside_image_is_rejected() {
        let toml = painting_toml(
            "monet",
            "water-lilies",
            r#"
            [[paintings.facts]]
            name = "Too wide"
            description_md = "x"
            x = 0.5
            y = 0.5
            w = 1.2
            h = 0.1
            "#,
        );

        let err = SeedDataset::from_toml(&toml)
            .unwrap()
            .into_records(Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            SeedError::Invalid {
                source: DomainError::BoundingBoxOutOfRange { field: "w", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_geometry_is_rejected() {
        let toml = painting_toml(
            "monet",
            "water-lilies",
            r#"
            [[paintings.facts]]
            name = "Circle"
            description_md = "x"
            geometry_type = "circle"
            x = 0.5
            y = 0.5
            w = 0.2
            h = 0.1
            "#,
        );

        let err = SeedDataset::from_toml(&toml)
            .unwrap()
            .into_records(Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            SeedError::Invalid {
                source: DomainError::UnsupportedGeometry(_),
                ..
            }
        ));
    }

    #[test]
    fn test_alias_with_both_shapes_is_rejected() {
        let toml = painting_toml(
            "monet",
            "water-lilies",
            r#"
            [[paintings.aliases]]
            artist_slug = "claude-monet"
            painting_slug = "water-lilies"
            combined_slug = "monet-water-lilies"
            "#,
        );

        let err = SeedDataset::from_toml(&toml)
            .unwrap()
            .into_records(Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            SeedError::Invalid {
                source: DomainError::AmbiguousAlias,
                ..
            }
        ));
    }

    #[test]
    fn test_alias_shadowing_canonical_pair_is_rejected() {
        // The alias on the first painting claims the second painting's slugs.
        let toml = format!(
            "{}{}",
            painting_toml(
                "monet",
                "water-lilies",
                r#"
                [[paintings.aliases]]
                artist_slug = "monet"
                painting_slug = "impression-sunrise"
                "#,
            ),
            painting_toml("monet", "impression-sunrise", "")
        );

        let err = SeedDataset::from_toml(&toml)
            .unwrap()
            .into_records(Utc::now())
            .unwrap_err();
        assert!(matches!(err, SeedError::AliasCollidesWithCanonical(_)));
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let toml = format!(
            "{}{}",
            painting_toml("monet", "water-lilies", ""),
            painting_toml("monet", "water-lilies", "")
        );
        let err = SeedDataset::from_toml(&toml)
            .unwrap()
            .into_records(Utc::now())
            .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateCanonical(_)));

        let toml = painting_toml(
            "monet",
            "water-lilies",
            r#"
            [[paintings.aliases]]
            combined_slug = "monet-lilies"

            [[paintings.aliases]]
            combined_slug = "monet-lilies"
            "#,
        );
        let err = SeedDataset::from_toml(&toml)
            .unwrap()
            .into_records(Utc::now())
            .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateAlias(_)));
    }

    #[tokio::test]
    async fn test_reload_replaces_dataset_and_cascades() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let service = SeedService::new(store.clone());

        let first = service.load(SeedDataset::builtin().unwrap()).await.unwrap();
        assert_eq!(first.removed_paintings, 0);
        let old_id = store.list_paintings().await.unwrap()[0].id;

        let second = service.load(SeedDataset::builtin().unwrap()).await.unwrap();
        assert_eq!(second.removed_paintings, 1);

        assert!(store.get_facts_for_painting(old_id).await.unwrap().is_empty());
        assert!(store.get_aliases_for_painting(old_id).await.unwrap().is_empty());

        let paintings = store.list_paintings().await.unwrap();
        assert_eq!(paintings.len(), 1);
        assert_eq!(
            store.count_facts_for_painting(paintings[0].id).await.unwrap(),
            4
        );
        assert_eq!(
            store.get_aliases_for_painting(paintings[0].id).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_deleting_painting_removes_its_facts() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        SeedService::new(store.clone())
            .load(SeedDataset::builtin().unwrap())
            .await
            .unwrap();
        let id = store.list_paintings().await.unwrap()[0].id;

        assert!(store.delete_painting(id).await.unwrap());
        assert_eq!(store.count_facts_for_painting(id).await.unwrap(), 0);
        assert!(store.get_painting(id).await.unwrap().is_none());
    }
}
