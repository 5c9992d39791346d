use crate::errors::AppError;
use crate::models::{FilmId, ViewSnapshot};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.view.lock().await;
    Html(render_index(&view.snapshot()))
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    let view = state.view.lock().await;
    Json(view.snapshot())
}

pub async fn buy(State(state): State<AppState>) -> Redirect {
    state.view.lock().await.purchase();
    Redirect::to("/")
}

pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    apply_select(&state, FilmId::new(id)).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.view.lock().await.delete(&FilmId::new(id));
    Redirect::to("/")
}

pub async fn api_buy(State(state): State<AppState>) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.purchase();
    Json(view.snapshot())
}

pub async fn api_select(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ViewSnapshot>, AppError> {
    Ok(Json(apply_select(&state, FilmId::new(id)).await?))
}

pub async fn api_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ViewSnapshot>, AppError> {
    let id = FilmId::new(id);
    let mut view = state.view.lock().await;
    if !view.delete(&id) {
        return Err(AppError::not_found(format!("film {id} is not in the menu")));
    }
    Ok(Json(view.snapshot()))
}

async fn apply_select(state: &AppState, id: FilmId) -> Result<ViewSnapshot, AppError> {
    if id.as_str().trim().is_empty() {
        return Err(AppError::bad_request("film id must not be empty"));
    }

    let mut view = state.view.lock().await;
    if view.select(&id).is_none() {
        return Err(AppError::not_found(format!("unknown film {id}")));
    }
    Ok(view.snapshot())
}
