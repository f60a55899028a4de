//! Chat with the LLM over a selected set of documents.

pub mod aggregate;
pub mod api;

pub use aggregate::{ChatRole, ChatTurn};
pub use api::{ChatRequest, ChatResponse, ChatSource, ErrorDetail, ModelsResponse};
