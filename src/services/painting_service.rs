//! Domain service for slug resolution and fact lookup.
//!
//! A request for a painting either lands on its canonical slugs, lands on a
//! registered alias and is redirected to the canonical slugs, or finds
//! nothing. None of these outcomes is an error; only datastore failures are.

use crate::domain::{PaintingId, SlugPair};
use crate::models::fact::Fact;
use crate::models::painting::Painting;
use thiserror::Error;

/// A painting reached through its canonical slugs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPainting {
    pub painting: Painting,
    /// Number of facts referencing the painting when it was resolved.
    pub facts_count: u64,
}

/// Outcome of resolving a slug pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(ResolvedPainting),
    /// The pair is a registered alias; carries the canonical slugs.
    Redirect(SlugPair),
    NotFound,
}

impl Resolution {
    /// Label used for logs and metrics.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Redirect(_) => "redirect",
            Self::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Error)]
pub enum PaintingError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for PaintingError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for PaintingError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Read-only access to paintings by slug and to their facts.
#[async_trait::async_trait]
pub trait PaintingService: Send + Sync {
    /// Resolves an `(artist_slug, painting_slug)` pair.
    ///
    /// Canonical slugs win over aliases. A pair alias yields
    /// [`Resolution::Redirect`] to the aliased painting's canonical slugs.
    async fn resolve(&self, slugs: &SlugPair) -> Result<Resolution, PaintingError>;

    /// Resolves a combined slug through the alias registry.
    ///
    /// Returns the canonical slugs to redirect to, or `None`.
    async fn resolve_combined(&self, combined_slug: &str)
    -> Result<Option<SlugPair>, PaintingError>;

    /// Facts of a painting ordered by `order_index`. Empty when the painting
    /// has no facts or does not exist.
    async fn facts_for(&self, painting_id: PaintingId) -> Result<Vec<Fact>, PaintingError>;
}
