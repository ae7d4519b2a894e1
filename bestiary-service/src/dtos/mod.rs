use serde::{Deserialize, Serialize};
use validator::Validate;

/// Path parameters for `GET /items/{item_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ItemPath {
    #[validate(range(min = 0, max = 1000, message = "item_id must be between 0 and 1000"))]
    pub item_id: i64,
}

/// Query parameters for `GET /items/{item_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ItemQuery {
    #[serde(rename = "item-query")]
    #[validate(length(max = 6, message = "item-query must be at most 6 characters"))]
    pub item_query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
}

/// Query parameters for `POST /create_amphibian`.
#[derive(Debug, Deserialize)]
pub struct CreateAmphibianParams {
    pub user_level: i64,
    #[serde(default)]
    pub throws: bool,
}
