//! Document Preview - Model (API functions)

use crate::shared::api_utils::{api_base, error_message};
use contracts::domain::a001_document::{DocumentId, PreviewResponse};
use gloo_net::http::Request;

/// Fetch extracted text for one document.
pub async fn fetch_preview(doc_id: &DocumentId) -> Result<String, String> {
    let response = Request::get(&format!(
        "{}/documents/{}/preview",
        api_base(),
        urlencoding::encode(doc_id.as_str())
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<PreviewResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    body.into_result()
}

/// URL of the raw stored file. PDFs render in an iframe straight off
/// this endpoint.
pub fn document_file_url(doc_id: &DocumentId) -> String {
    format!(
        "{}/documents/{}/file",
        api_base(),
        urlencoding::encode(doc_id.as_str())
    )
}
