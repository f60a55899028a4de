use serde::{Deserialize, Serialize};

use super::aggregate::DocumentId;

/// Response of `GET /documents/{id}/preview`.
///
/// The backend answers HTTP 200 with `{"error": "not found"}` for unknown
/// ids instead of a 404, so every field except `error` needs a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub doc_id: DocumentId,

    #[serde(default)]
    pub filename: String,

    /// Extracted text, truncated server-side for large documents.
    #[serde(default)]
    pub preview: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PreviewResponse {
    /// Fold the 200-with-error shape into a normal Result.
    pub fn into_result(self) -> Result<String, String> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.preview),
        }
    }
}

/// Request of `POST /upload/youtube`. The backend downloads the transcript
/// (or transcribes the audio) and indexes it like any uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeIngestRequest {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ok_body() {
        let resp: PreviewResponse = serde_json::from_str(
            r#"{"doc_id":"d1","filename":"a.txt","preview":"hello world"}"#,
        )
        .unwrap();
        assert_eq!(resp.into_result().unwrap(), "hello world");
    }

    #[test]
    fn test_preview_not_found_body() {
        // 200 + {"error": "not found"} is what the backend actually sends.
        let resp: PreviewResponse = serde_json::from_str(r#"{"error":"not found"}"#).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "not found");
    }

    #[test]
    fn test_preview_missing_text_defaults_empty() {
        let resp: PreviewResponse =
            serde_json::from_str(r#"{"doc_id":"d2","filename":"b.pdf"}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), "");
    }
}
