use crate::error::ApiError;
use shared::Category;

pub fn parse_category(raw: &str) -> Result<Category, ApiError> {
    raw.parse().map_err(|_| ApiError::UnknownCategory(raw.to_string()))
}
