//! Typed document shapes, create payloads, and patch types per resource.

pub mod chat;
pub mod todo;

pub use chat::{ChatMessage, ChatPatch, NewChatMessage};
pub use todo::{NewTodo, Todo, TodoPatch};
