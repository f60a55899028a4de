use serde::{Deserialize, Serialize};

use crate::domain::a001_document::DocumentId;

/// Response of `GET /models`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    /// Provider-qualified identifiers, e.g. `ollama:llama3.1`,
    /// `openai:gpt-4o-mini`.
    pub models: Vec<String>,
}

/// Request of `POST /chat`. One request per question; the whole answer
/// arrives in one response, no streaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub model: String,
    /// Documents to ground retrieval on. Must be non-empty.
    pub doc_ids: Vec<DocumentId>,
}

/// A retrieval hit backing the answer. The client keeps these typed but
/// does not render them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSource {
    #[serde(default)]
    pub doc_id: DocumentId,

    #[serde(default)]
    pub score: f32,

    #[serde(default)]
    pub snippet: String,
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,

    #[serde(default)]
    pub sources: Vec<ChatSource>,
}

/// FastAPI-style error body: `{"detail": "…"}`. Sent with 4xx/5xx statuses;
/// `detail` carries the human-readable cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let req = ChatRequest {
            question: "What is the total?".into(),
            model: "openai:gpt-4o-mini".into(),
            doc_ids: vec![DocumentId::new("d1"), DocumentId::new("d2")],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["question"], "What is the total?");
        assert_eq!(value["model"], "openai:gpt-4o-mini");
        assert_eq!(value["doc_ids"][0], "d1");
        assert_eq!(value["doc_ids"][1], "d2");
    }

    #[test]
    fn test_chat_response_with_sources() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"answer":"The total is 42.","sources":[{"doc_id":"d1","score":0.83,"snippet":"total: 42"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.answer, "The total is 42.");
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].doc_id.as_str(), "d1");
    }

    #[test]
    fn test_chat_response_sources_optional() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_error_detail_body() {
        let err: ErrorDetail = serde_json::from_str(
            r#"{"detail":"OPENAI_API_KEY not set. Choose an ollama:* model or set OPENAI_API_KEY."}"#,
        )
        .unwrap();
        assert!(err.detail.unwrap().starts_with("OPENAI_API_KEY not set"));
    }

    #[test]
    fn test_models_response() {
        let resp: ModelsResponse =
            serde_json::from_str(r#"{"models":["ollama:llama3.1","openai:gpt-4o"]}"#).unwrap();
        assert_eq!(resp.models.len(), 2);
    }
}
