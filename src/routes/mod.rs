//! Route tables: one per resource, plus common operational routes.

pub mod chat;
pub mod common;
pub mod todo;

pub use chat::chat_routes;
pub use common::common_routes;
pub use todo::todo_routes;
