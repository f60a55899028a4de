//! Document Panel - View Component
//!
//! Upload controls plus the document registry. The registry is the
//! only writer of `DocumentsRefreshed`: every successful ingest ends
//! with a fresh listing from the backend instead of patching the local
//! copy.

use super::model;
use super::view_model::DocumentPanelVm;
use super::DocumentCard;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::state::{NoticeKind, SessionEvent};
use contracts::domain::a001_document::FileType;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};
use wasm_bindgen::JsCast;

#[component]
pub fn DocumentPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let vm = DocumentPanelVm::new();

    // First listing on mount
    leptos::task::spawn_local(async move {
        refresh_documents(ctx).await;
    });

    let on_files_picked = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let mut files = Vec::new();
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    files.push(file);
                }
            }
        }
        input.set_value("");
        if files.is_empty() {
            return;
        }

        let count = files.len();
        vm.is_uploading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::upload_files(files).await {
                Ok(docs) => {
                    leptos::logging::log!("[DocumentPanel] uploaded {} of {} file(s)", docs.len(), count);
                    ctx.dispatch(SessionEvent::NoticePosted {
                        kind: NoticeKind::Info,
                        text: "Uploaded and indexed in memory.".to_string(),
                    });
                    refresh_documents(ctx).await;
                }
                Err(e) => {
                    ctx.dispatch(SessionEvent::NoticePosted {
                        kind: NoticeKind::Error,
                        text: format!("Upload failed: {}", e),
                    });
                }
            }
            vm.is_uploading.set(false);
        });
    };

    let open_file_dialog = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("document-upload-input") {
                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                        input.click();
                    }
                }
            }
        }
    };

    let ingest_youtube = move |_| {
        let url = vm.youtube_url.get();
        if url.trim().is_empty() {
            return;
        }
        vm.is_ingesting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::ingest_youtube(&url).await {
                Ok(doc) => {
                    vm.youtube_url.set(String::new());
                    ctx.dispatch(SessionEvent::NoticePosted {
                        kind: NoticeKind::Info,
                        text: format!("Added transcript: {}", doc.filename),
                    });
                    refresh_documents(ctx).await;
                }
                Err(e) => {
                    ctx.dispatch(SessionEvent::NoticePosted {
                        kind: NoticeKind::Error,
                        text: format!("YouTube ingest failed: {}", e),
                    });
                }
            }
            vm.is_ingesting.set(false);
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 16px; padding: 16px; height: 100%; box-sizing: border-box; overflow-y: auto;">
            // Upload
            <div>
                <h3 style="margin: 0 0 8px 0;">"Documents"</h3>
                <input
                    type="file"
                    id="document-upload-input"
                    multiple=true
                    accept=FileType::accept_attr()
                    style="display: none;"
                    on:change=on_files_picked
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_uploading
                    on_click=open_file_dialog
                >
                    {icon("upload")}
                    {move || if vm.is_uploading.get() { " Uploading..." } else { " Select files" }}
                </Button>
                <div style="font-size: 12px; color: var(--colorNeutralForeground3); margin-top: 6px;">
                    "Stored in memory (resets when backend restarts)"
                </div>
            </div>

            // YouTube ingest
            <div>
                <div style="font-weight: 600; font-size: 13px; margin-bottom: 6px;">"YouTube transcript"</div>
                <div style="display: flex; gap: 6px;">
                    <div style="flex: 1;">
                        <Input value=vm.youtube_url placeholder="Paste a video URL" />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=vm.is_ingesting
                        on_click=ingest_youtube
                    >
                        {icon("video")}
                        {move || if vm.is_ingesting.get() { " Adding..." } else { " Add" }}
                    </Button>
                </div>
            </div>

            // Registry
            <div style="display: flex; flex-direction: column; gap: 6px;">
                <div style="font-weight: 600; font-size: 13px;">"Library"</div>
                {move || {
                    let empty = ctx.session.with(|s| s.documents.is_empty());
                    empty.then(|| view! {
                        <div style="color: var(--colorNeutralForeground3); font-size: 13px;">
                            "No documents yet. Upload to get started."
                        </div>
                    })
                }}
                <For
                    each=move || ctx.session.with(|s| s.documents.clone())
                    key=|document| document.doc_id.clone()
                    let:document
                >
                    <DocumentCard document />
                </For>
            </div>
        </div>
    }
}

/// Fetches the listing and folds it into the session.
async fn refresh_documents(ctx: AppGlobalContext) {
    match model::list_documents().await {
        Ok(documents) => ctx.dispatch(SessionEvent::DocumentsRefreshed { documents }),
        Err(e) => ctx.dispatch(SessionEvent::NoticePosted {
            kind: NoticeKind::Error,
            text: format!("Failed to load documents: {}", e),
        }),
    }
}
