//! Todo routes: collection path for index/create, item path for the rest.

use crate::handlers::todo::{create, destroy, index, show, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(create))
        .route("/:id", get(show).put(update).delete(destroy))
        .with_state(state)
}
