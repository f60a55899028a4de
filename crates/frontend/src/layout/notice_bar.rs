//! Notice bar - one transient banner under the top header.
//!
//! Shows the current [`Notice`] from the session, if any. Info and
//! warning notices expire on a timer; errors stay until the user
//! closes them. The expiry event carries the notice sequence number,
//! so a timer armed for an old notice can never clear a newer one.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::state::{Notice, NoticeKind, SessionEvent};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Arm one expiry timer per dismissable notice. The memo keeps the
    // effect from re-arming on unrelated session changes.
    let armed = Memo::new(move |_| {
        ctx.session.with(|s| {
            s.notice
                .as_ref()
                .and_then(|n| n.auto_dismisses().then_some(n.seq))
        })
    });
    Effect::new(move |_| {
        if let Some(seq) = armed.get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                ctx.dispatch(SessionEvent::NoticeExpired { seq });
            });
        }
    });

    let close = move |_| ctx.dispatch(SessionEvent::NoticeDismissed);

    view! {
        {move || {
            ctx.session.with(|s| s.notice.clone()).map(|notice: Notice| {
                let modifier = match notice.kind {
                    NoticeKind::Info => "notice-bar--info",
                    NoticeKind::Warning => "notice-bar--warning",
                    NoticeKind::Error => "notice-bar--error",
                };
                view! {
                    <div class=format!("notice-bar {}", modifier) role="status">
                        <span class="notice-bar__text">{notice.text.clone()}</span>
                        <button class="notice-bar__close" title="Dismiss" on:click=close>
                            {icon("close")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
