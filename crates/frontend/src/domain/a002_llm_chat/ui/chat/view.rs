//! LLM Chat - View Component
//!
//! The transcript plus the composer. Submission is optimistic: the
//! user turn goes on the transcript before the request leaves, and it
//! stays there even when the backend fails - the error lands in the
//! notice bar instead.

use super::model;
use super::view_model::ChatPanelVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::state::{NoticeKind, SessionEvent};
use contracts::domain::a002_llm_chat::ChatRole;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let vm = ChatPanelVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let is_sending = Memo::new(move |_| ctx.session.with(|s| s.chat_pending));
    let scope_count = Memo::new(move |_| ctx.session.with(|s| s.chat_selection.len()));

    // Send handler - validation first, then optimistic append
    let handle_send = Callback::new(move |_: ()| {
        let draft = vm.question.get();
        let request = match ctx.session.with_untracked(|s| s.chat_request(&draft)) {
            Ok(request) => request,
            Err(guard) => {
                if let Some(text) = guard.message() {
                    ctx.dispatch(SessionEvent::NoticePosted {
                        kind: NoticeKind::Warning,
                        text: text.to_string(),
                    });
                }
                return;
            }
        };

        vm.question.set(String::new());
        ctx.dispatch(SessionEvent::ChatSubmitted {
            question: request.question.clone(),
        });
        scroll_to_bottom();

        wasm_bindgen_futures::spawn_local(async move {
            match model::send_chat(&request).await {
                Ok(response) => {
                    log!("[ChatPanel] answer cites {} source(s)", response.sources.len());
                    ctx.dispatch(SessionEvent::ChatAnswered {
                        answer: response.answer,
                    });
                    scroll_to_bottom();
                }
                Err(e) => {
                    ctx.dispatch(SessionEvent::ChatFailed { error: e });
                }
            }
        });
    });

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; padding: 16px; box-sizing: border-box;">
            // Header
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 12px;">
                <span style="font-weight: 600;">"Chat"</span>
                <span style="font-size: 12px; color: var(--colorNeutralForeground3);">
                    {move || format!("{} document(s) in scope", scope_count.get())}
                </span>
            </Flex>

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                {move || {
                    let empty = ctx.session.with(|s| s.transcript.is_empty());
                    empty.then(|| view! {
                        <div style="margin: auto; text-align: center; color: var(--colorNeutralForeground3); font-size: 13px;">
                            "Upload documents, select docs for chat, then ask a question."
                        </div>
                    })
                }}
                <For
                    each=move || {
                        ctx.session
                            .with(|s| s.transcript.iter().cloned().enumerate().collect::<Vec<_>>())
                    }
                    key=|(idx, _)| *idx
                    let:entry
                >
                    {{
                        let (_, turn) = entry;
                        let is_user = turn.role == ChatRole::User;
                        view! {
                            <div
                                style=if is_user {
                                    "align-self: flex-end; max-width: 70%;"
                                } else {
                                    "align-self: flex-start; max-width: 70%;"
                                }
                            >
                                <div
                                    style=if is_user {
                                        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    <div style="white-space: pre-wrap;">{turn.text.clone()}</div>
                                </div>
                            </div>
                        }
                    }}
                </For>
                {move || {
                    is_sending.get().then(|| view! {
                        <div style="align-self: flex-start; max-width: 70%;">
                            <div style="background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px; color: var(--colorNeutralForeground3); font-style: italic;">
                                "Thinking..."
                            </div>
                        </div>
                    })
                }}
            </div>

            // Input area
            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.question
                        placeholder="Ask a question... (Ctrl+Enter to send)"
                        attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                        disabled=is_sending
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_sending
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if is_sending.get() { " Sending..." } else { " Send" }}
                </Button>
            </Flex>
        </div>
    }
}
