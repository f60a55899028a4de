//! LLM Chat - Model (API functions)

use crate::shared::api_utils::{api_url, error_message};
use contracts::domain::a002_llm_chat::{ChatRequest, ChatResponse};
use gloo_net::http::Request;

/// Ask one question over the selected documents.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, String> {
    let response = Request::post(&api_url("/chat"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<ChatResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
