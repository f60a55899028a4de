//! Document Preview - View Component
//!
//! Follows the preview selection in the session. Any selection change
//! starts a fetch; the reducer drops responses that come back for a
//! document the user has already left, so the pane never shows text
//! under the wrong title.

use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::state::{PreviewState, SessionEvent};
use contracts::domain::a001_document::FileType;
use leptos::prelude::*;

#[component]
pub fn PreviewPane() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // One fetch per distinct selection; the memo swallows repeats.
    let selection = Memo::new(move |_| ctx.session.with(|s| s.preview_selection.clone()));
    Effect::new(move |_| {
        let Some(doc_id) = selection.get() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_preview(&doc_id).await {
                Ok(text) => ctx.dispatch(SessionEvent::PreviewLoaded { doc_id, text }),
                Err(error) => ctx.dispatch(SessionEvent::PreviewFailed { doc_id, error }),
            }
        });
    });

    let title = move || {
        ctx.session.with(|s| match s.selected_document() {
            Some(doc) => format!("Preview: {}", doc.filename),
            None => "Preview".to_string(),
        })
    };

    // Chat traffic must not re-render the body: an iframe would reload
    // its PDF every time. The memo narrows the dependency to the
    // preview slice.
    let body = Memo::new(move |_| {
        ctx.session.with(|s| {
            let doc = s.selected_document();
            (
                doc.map(|d| d.filetype),
                doc.map(|d| model::document_file_url(&d.doc_id)),
                s.preview.clone(),
            )
        })
    });

    view! {
        <div style="display: flex; flex-direction: column; height: 100%; box-sizing: border-box;">
            <div
                style="padding: 10px 14px; border-bottom: 1px solid var(--colorNeutralStroke2); font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
                title=title
            >
                {title}
            </div>
            <div style="flex: 1; overflow: auto;">
                {move || {
                    let (filetype, file_url, preview) = body.get();
                    preview_body(filetype, file_url, preview)
                }}
            </div>
        </div>
    }
}

fn preview_body(
    filetype: Option<FileType>,
    file_url: Option<String>,
    preview: PreviewState,
) -> AnyView {
    // PDFs render natively in an iframe over the raw file, with the
    // browser's own pagination. Everything else shows extracted text.
    if let (Some(filetype), Some(url)) = (filetype, file_url) {
        if filetype.is_pdf() {
            return view! {
                <iframe
                    src=url
                    title="PDF preview"
                    style="display: block; width: 100%; height: 100%; border: 0;"
                ></iframe>
            }
            .into_any();
        }
    }

    match preview {
        PreviewState::Empty => view! {
            <div style="padding: 16px; color: var(--colorNeutralForeground3);">
                "Select a document to preview."
            </div>
        }
        .into_any(),
        PreviewState::Loading { .. } => view! {
            <div style="padding: 16px; color: var(--colorNeutralForeground3);">
                "Loading preview..."
            </div>
        }
        .into_any(),
        PreviewState::Ready { text, .. } => view! {
            <div style="padding: 16px; white-space: pre-wrap; font-size: 13px; line-height: 1.5;">
                {text}
            </div>
        }
        .into_any(),
        PreviewState::Failed { error, .. } => view! {
            <div style="padding: 16px; color: var(--colorStatusDangerForeground1);">
                {error}
            </div>
        }
        .into_any(),
    }
}
