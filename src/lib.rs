//! taskhub: REST backend for todo items and chat messages.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod query;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{chat_routes, common_routes, todo_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
