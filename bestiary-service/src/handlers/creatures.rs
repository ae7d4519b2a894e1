use crate::dtos::CreateAmphibianParams;
use crate::models::Creature;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use service_core::error::AppError;

/// `POST /create_amphibian` — register a creature, admin level required.
///
/// All three failure kinds surface here: a forced internal failure
/// (`throws=true`), a domain rejection (non-amphibian family), and an
/// authorization rejection (`user_level < 2`).
pub async fn create_amphibian(
    State(state): State<AppState>,
    Query(params): Query<CreateAmphibianParams>,
    Json(creature): Json<Creature>,
) -> Result<Json<bool>, AppError> {
    let created = state
        .bestiary
        .create_amphibian(creature, params.user_level, params.throws)
        .await?;

    Ok(Json(created))
}
