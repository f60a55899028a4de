//! Model picker for the top bar.
//!
//! Wraps a Thaw Select around the session's model list. The list loads
//! async, so sync runs both ways: the session drives the widget, and
//! only real user changes go back in as events.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_url;
use crate::shared::state::{NoticeKind, SessionEvent};
use contracts::domain::a002_llm_chat::ModelsResponse;
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::Select;

#[component]
pub fn ModelSelect() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Fetched once at startup
    leptos::task::spawn_local(async move {
        match fetch_models().await {
            Ok(models) => {
                log!("[ModelSelect] loaded {} model(s)", models.len());
                ctx.dispatch(SessionEvent::ModelsLoaded { models });
            }
            Err(e) => {
                ctx.dispatch(SessionEvent::NoticePosted {
                    kind: NoticeKind::Error,
                    text: format!("Failed to load models: {}", e),
                });
            }
        }
    });

    let models = Memo::new(move |_| ctx.session.with(|s| s.models.clone()));
    let selected = Memo::new(move |_| ctx.session.with(|s| s.selected_model.clone()));

    // Internal value for Thaw Select (String, not Option<String>)
    let select_value = RwSignal::new(String::new());

    // One-way sync: session → widget. Subscribes to the model list as
    // well, so the value is re-applied once the <option>s exist (Thaw
    // Select clears a value with no matching option).
    Effect::new(move |_| {
        let _ = models.get();
        let session_val = selected.get().unwrap_or_default();
        if select_value.get_untracked() != session_val {
            select_value.set(session_val);
        }
    });

    // Reverse sync: user changes select → event. Prev-tracking keeps
    // our own sync above from echoing back.
    Effect::new(move |prev: Option<String>| {
        let val = select_value.get();
        if prev.is_none() {
            return val;
        }
        if Some(&val) == prev.as_ref() {
            return val;
        }
        if val.is_empty() {
            return val;
        }
        log!("[ModelSelect] user picked: {}", val);
        ctx.dispatch(SessionEvent::ModelSelected { model: val.clone() });
        val
    });

    view! {
        <div class="model-select" title="LLM model used for questions">
            <Select value=select_value>
                {move || models.get().is_empty().then(|| view! {
                    <option value="">"Loading models..."</option>
                })}
                <For
                    each=move || models.get()
                    key=|m| m.clone()
                    children=move |m: String| {
                        let value = m.clone();
                        view! { <option value=value>{m}</option> }
                    }
                />
            </Select>
        </div>
    }
}

async fn fetch_models() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/models"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body = response
        .json::<ModelsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(body.models)
}
