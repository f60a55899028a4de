use crate::domain::a001_document::ui::{DocumentPanel, PreviewPane};
use crate::domain::a002_llm_chat::ui::ChatPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell
            left=|| view! { <DocumentPanel /> }.into_any()
            center=|| view! { <ChatPanel /> }.into_any()
            right=|| view! { <PreviewPane /> }.into_any()
        />
    }
}
