use uuid::Uuid;

use super::ApiError;
use crate::domain::PaintingId;

pub fn parse_painting_id(raw: &str) -> Result<PaintingId, ApiError> {
    Uuid::parse_str(raw).map(PaintingId::from).map_err(|_| {
        ApiError::validation(format!(
            "Invalid painting ID: {}. ID must be a UUID",
            raw
        ))
    })
}
