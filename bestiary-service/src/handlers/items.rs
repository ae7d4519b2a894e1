use crate::dtos::{ItemPath, ItemQuery, ItemResponse};
use axum::{
    extract::{Path, Query},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// `GET /items/{item_id}` — echo the item id and optional `item-query`.
///
/// Constraints are enforced here rather than by the extractors: the id must
/// lie in `[0, 1000]` and the query string may be at most 6 characters.
pub async fn read_item(
    Path(path): Path<ItemPath>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<ItemResponse>, AppError> {
    path.validate()?;
    query.validate()?;

    Ok(Json(ItemResponse {
        item_id: path.item_id,
        q: query.item_query,
    }))
}
