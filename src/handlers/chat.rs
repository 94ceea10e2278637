//! Chat message handlers.

use crate::error::AppError;
use crate::extract::Payload;
use crate::handlers::parse_id;
use crate::model::{ChatPatch, NewChatMessage};
use crate::query::Listing;
use crate::service::chat::{ChatService, SORT_COLUMNS};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let listing = Listing::from_pairs(&params, SORT_COLUMNS)?;
    let messages = ChatService::list(&state.pool, &listing).await?;
    Ok((StatusCode::OK, Json(messages)))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let msg = ChatService::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(msg)))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(new): Payload<NewChatMessage>,
) -> Result<impl IntoResponse, AppError> {
    let msg = ChatService::create(&state.pool, new).await?;
    Ok((StatusCode::CREATED, Json(msg)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(patch): Payload<ChatPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let msg = ChatService::update(&state.pool, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(msg)))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    if !ChatService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
