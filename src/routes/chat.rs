//! Chat message routes. Same table as todos, including GET /:id.

use crate::handlers::chat::{create, destroy, index, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn chat_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(create))
        .route("/:id", get(show).put(update).delete(destroy))
        .with_state(state)
}
