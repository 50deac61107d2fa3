use axum::{extract::State, response::Json};
use crate::models::League;
use crate::store::SharedStore;

// GET /league - Every tracked player with their wins, as JSON
pub async fn get_league(State(store): State<SharedStore>) -> Json<League> {
    Json(store.get_league().await)
}
