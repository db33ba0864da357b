use uuid::Uuid;

use crate::domain::{AliasTarget, PaintingId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintingAlias {
    pub id: Uuid,
    pub painting_id: PaintingId,
    pub target: AliasTarget,
}
