//! TopHeader component - application top bar.
//!
//! Contains:
//! - Application title
//! - Model selector
//! - Toggle buttons for the document panel and the preview pane

use crate::domain::a002_llm_chat::ui::ModelSelect;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let toggle_documents = move |_| {
        ctx.toggle_left();
    };

    let toggle_preview = move |_| {
        ctx.toggle_right();
    };

    let documents_visible = move || ctx.left_open.get();
    let preview_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Document Reader"</span>
            </div>

            <div class="top-header__actions">
                <ModelSelect />

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_documents
                    title=move || if documents_visible() { "Hide documents" } else { "Show documents" }
                >
                    {move || if documents_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_preview
                    title=move || if preview_visible() { "Hide preview" } else { "Show preview" }
                >
                    {move || if preview_visible() {
                        icon("panel-right-close")
                    } else {
                        icon("panel-right-open")
                    }}
                </button>
            </div>
        </div>
    }
}
