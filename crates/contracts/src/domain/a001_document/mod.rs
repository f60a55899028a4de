//! Document aggregate: an uploaded file the backend has parsed and indexed.

pub mod aggregate;
pub mod api;

pub use aggregate::{Document, DocumentId, FileType};
pub use api::{PreviewResponse, YoutubeIngestRequest};
