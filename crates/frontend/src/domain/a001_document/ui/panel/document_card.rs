//! Document card - one registry entry.
//!
//! The whole card selects the document for preview; the checkbox puts
//! it in or out of the chat subset without touching the selection.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::state::SessionEvent;
use contracts::domain::a001_document::{Document, FileType};
use leptos::prelude::*;

#[component]
pub fn DocumentCard(document: Document) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let selected_id = document.doc_id.clone();
    let is_selected = Memo::new(move |_| {
        ctx.session
            .with(|s| s.preview_selection.as_ref() == Some(&selected_id))
    });

    let checked_id = document.doc_id.clone();
    let is_checked = Memo::new(move |_| ctx.session.with(|s| s.is_chat_selected(&checked_id)));

    let preview_id = document.doc_id.clone();
    let toggle_id = document.doc_id.clone();

    let icon_name = if document.filetype == FileType::Youtube {
        "video"
    } else {
        "document"
    };

    view! {
        <div
            class="document-card"
            style=move || {
                format!(
                    "display: flex; align-items: center; gap: 8px; padding: 8px 10px; border: 1px solid {}; border-radius: 6px; cursor: pointer; background: {};",
                    if is_selected.get() { "var(--colorBrandStroke1)" } else { "var(--colorNeutralStroke2)" },
                    if is_selected.get() { "var(--colorBrandBackground2)" } else { "var(--colorNeutralBackground1)" },
                )
            }
            on:click=move |_| {
                ctx.dispatch(SessionEvent::PreviewSelected { doc_id: preview_id.clone() })
            }
        >
            {icon(icon_name)}
            <div style="flex: 1; min-width: 0;">
                <div
                    style="font-size: 13px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
                    title=document.filename.clone()
                >
                    {document.filename.clone()}
                </div>
                <span style="font-size: 11px; color: var(--colorNeutralForeground3);">
                    {document.filetype.label()}
                </span>
            </div>
            <label
                style="display: flex; align-items: center; gap: 4px; font-size: 11px; cursor: pointer;"
                title="Use this document when asking questions"
                on:click=|ev| ev.stop_propagation()
            >
                <input
                    type="checkbox"
                    prop:checked=move || is_checked.get()
                    on:change=move |_| {
                        ctx.dispatch(SessionEvent::ChatDocToggled { doc_id: toggle_id.clone() })
                    }
                />
                "chat"
            </label>
        </div>
    }
}
