use axum::{routing::get, Router};

use crate::store::SharedStore;

pub mod league;
pub mod players;

/// Routes every request to the given store. Middleware is left to the caller.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/players/{name}",
            get(players::get_player_score).post(players::record_win),
        )
        .route("/league", get(league::get_league))
        .with_state(store)
}
