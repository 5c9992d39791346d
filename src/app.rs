use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/buy", post(handlers::buy))
        .route("/films/:id/select", post(handlers::select))
        .route("/films/:id/delete", post(handlers::delete))
        .route("/api/view", get(handlers::get_view))
        .route("/api/buy", post(handlers::api_buy))
        .route("/api/films/:id/select", post(handlers::api_select))
        .route("/api/films/:id", axum::routing::delete(handlers::api_delete))
        .with_state(state)
}
