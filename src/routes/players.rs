use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use crate::error::ApiError;
use crate::store::SharedStore;

// GET /players/{name} - Get a player's win count as plain text
pub async fn get_player_score(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    let wins = store
        .get_player_score(&name)
        .await
        .ok_or(ApiError::NotFound)?;

    Ok(wins.to_string())
}

// POST /players/{name} - Record a win for a player
pub async fn record_win(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.record_win(&name).await?;

    tracing::info!(player = %name, "win recorded");
    Ok(StatusCode::ACCEPTED)
}
