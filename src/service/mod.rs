//! Per-resource CRUD execution against PostgreSQL.

pub mod chat;
pub mod todo;

pub use chat::ChatService;
pub use todo::TodoService;
