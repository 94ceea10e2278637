//! Todo handlers.

use crate::error::AppError;
use crate::extract::Payload;
use crate::handlers::parse_id;
use crate::model::{NewTodo, TodoPatch};
use crate::query::Listing;
use crate::service::todo::{TodoService, SORT_COLUMNS};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List todos: `filterByName` filters on `task`, otherwise the remaining
/// query pairs are a sort spec.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let listing = Listing::from_pairs(&params, SORT_COLUMNS)?;
    let todos = TodoService::list(&state.pool, &listing).await?;
    Ok((StatusCode::OK, Json(todos)))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let todo = TodoService::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(todo)))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(new): Payload<NewTodo>,
) -> Result<impl IntoResponse, AppError> {
    let todo = TodoService::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(patch): Payload<TodoPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let todo = TodoService::update(&state.pool, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(todo)))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    if !TodoService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
