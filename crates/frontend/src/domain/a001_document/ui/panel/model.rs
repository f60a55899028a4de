//! Document Panel - Model (API functions)

use crate::shared::api_utils::{api_url, error_message};
use contracts::domain::a001_document::{Document, YoutubeIngestRequest};
use gloo_net::http::Request;

/// List the documents currently held by the backend.
pub async fn list_documents() -> Result<Vec<Document>, String> {
    let response = Request::get(&api_url("/documents"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Listing documents failed: {}", response.status()));
    }

    response
        .json::<Vec<Document>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Upload local files as a single multipart request. The browser fills
/// in the multipart boundary on its own.
pub async fn upload_files(files: Vec<web_sys::File>) -> Result<Vec<Document>, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in &files {
        form.append_with_blob("files", file)
            .map_err(|e| format!("{e:?}"))?;
    }

    let response = Request::post(&api_url("/upload"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Vec<Document>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the backend to pull a YouTube transcript in as a document.
pub async fn ingest_youtube(url: &str) -> Result<Document, String> {
    let request = YoutubeIngestRequest {
        url: url.trim().to_string(),
    };

    let response = Request::post(&api_url("/upload/youtube"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Document>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
