//! Domain types for paintings, facts and slug aliases.
//!
//! Wrappers here carry the invariants the datastore also enforces: alias
//! shape exclusivity, bounding-box ranges and the geometry tag. Anything that
//! writes rows builds these types first, so bad data is rejected before it
//! reaches a constraint violation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Column width of `artist_slug` and `painting_slug`.
pub const MAX_SLUG_LEN: usize = 200;

/// Column width of `painting_aliases.combined_slug`.
pub const MAX_COMBINED_SLUG_LEN: usize = 400;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("slug must not be empty")]
    EmptySlug,

    #[error("slug '{slug}' exceeds {max} characters")]
    SlugTooLong { slug: String, max: usize },

    #[error("alias carries both a slug pair and a combined slug")]
    AmbiguousAlias,

    #[error("alias carries neither a slug pair nor a combined slug")]
    EmptyAlias,

    #[error("alias slug pair is missing one of its halves")]
    IncompletePair,

    #[error("bounding box {field} = {value} is outside {range}")]
    BoundingBoxOutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
}

/// Unique identifier of a painting.
///
/// Newtype over the row UUID so painting and fact ids cannot be swapped.
///
/// # Examples
///
/// ```rust
/// use art_explorer::domain::PaintingId;
/// use uuid::Uuid;
///
/// let raw = Uuid::new_v4();
/// let id = PaintingId::from(raw);
/// assert_eq!(id.value(), raw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaintingId(Uuid);

impl PaintingId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PaintingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PaintingId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PaintingId> for Uuid {
    fn from(id: PaintingId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactId(Uuid);

impl FactId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for FactId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// An `(artist_slug, painting_slug)` pair as it appears in a URL.
///
/// Lookups compare both halves exactly; no case folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlugPair {
    pub artist_slug: String,
    pub painting_slug: String,
}

impl SlugPair {
    pub fn new(artist_slug: impl Into<String>, painting_slug: impl Into<String>) -> Self {
        Self {
            artist_slug: artist_slug.into(),
            painting_slug: painting_slug.into(),
        }
    }

    /// Validates both halves against the storage limits.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_slug(&self.artist_slug, MAX_SLUG_LEN)?;
        validate_slug(&self.painting_slug, MAX_SLUG_LEN)
    }
}

impl fmt::Display for SlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.artist_slug, self.painting_slug)
    }
}

pub fn validate_slug(slug: &str, max: usize) -> Result<(), DomainError> {
    if slug.is_empty() {
        return Err(DomainError::EmptySlug);
    }
    if slug.chars().count() > max {
        return Err(DomainError::SlugTooLong {
            slug: slug.to_string(),
            max,
        });
    }
    Ok(())
}

/// The address an alias claims. Exactly one shape per alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AliasTarget {
    Pair(SlugPair),
    Combined { slug: String },
}

impl AliasTarget {
    pub fn pair(
        artist_slug: impl Into<String>,
        painting_slug: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let pair = SlugPair::new(artist_slug, painting_slug);
        pair.validate()?;
        Ok(Self::Pair(pair))
    }

    pub fn combined(slug: impl Into<String>) -> Result<Self, DomainError> {
        let slug = slug.into();
        validate_slug(&slug, MAX_COMBINED_SLUG_LEN)?;
        Ok(Self::Combined { slug })
    }

    /// Builds a target from the three nullable columns of the alias table.
    pub fn from_parts(
        artist_slug: Option<String>,
        painting_slug: Option<String>,
        combined_slug: Option<String>,
    ) -> Result<Self, DomainError> {
        match (artist_slug, painting_slug, combined_slug) {
            (Some(artist), Some(painting), None) => Self::pair(artist, painting),
            (None, None, Some(combined)) => Self::combined(combined),
            (None, None, None) => Err(DomainError::EmptyAlias),
            (_, _, Some(_)) => Err(DomainError::AmbiguousAlias),
            _ => Err(DomainError::IncompletePair),
        }
    }

    /// Splits back into `(artist_slug, painting_slug, combined_slug)`.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
        match self {
            Self::Pair(pair) => (Some(pair.artist_slug), Some(pair.painting_slug), None),
            Self::Combined { slug } => (None, None, Some(slug)),
        }
    }
}

impl fmt::Display for AliasTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair(pair) => write!(f, "{pair}"),
            Self::Combined { slug } => write!(f, "{slug}"),
        }
    }
}

/// Region of a painting image, as fractions of its width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, DomainError> {
        check_closed_unit("x", x)?;
        check_closed_unit("y", y)?;
        check_positive_unit("w", w)?;
        check_positive_unit("h", h)?;
        Ok(Self { x, y, w, h })
    }
}

fn check_closed_unit(field: &'static str, value: f64) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::BoundingBoxOutOfRange {
            field,
            value,
            range: "[0, 1]",
        })
    }
}

fn check_positive_unit(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(DomainError::BoundingBoxOutOfRange {
            field,
            value,
            range: "(0, 1]",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    #[default]
    Rect,
}

impl GeometryType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(Self::Rect),
            other => Err(DomainError::UnsupportedGeometry(other.to_string())),
        }
    }
}
