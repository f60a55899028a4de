use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

const DEFAULT_WIDTH: f64 = 620.0;
const MIN_WIDTH: f64 = 320.0;
const MAX_WIDTH: f64 = 900.0;

/// Right zone: the preview pane. Collapsible and resizable by
/// dragging its left edge.
#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.right_open.get();

    // Width state (px)
    let width = RwSignal::new(DEFAULT_WIDTH);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(DEFAULT_WIDTH);

    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    // The drag tracks the pointer across the whole window, so both
    // handlers hang off window rather than the resizer element.
    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }
        let dx = start_x.get_untracked() - ev.client_x() as f64;
        let new_width = (start_width.get_untracked() + dx)
            .max(MIN_WIDTH)
            .min(MAX_WIDTH);
        width.set(new_width);
    });

    let _ = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });

    // Keep the col-resize cursor while dragging, even off the handle
    Effect::new(move |_| {
        let resizing = is_resizing.get();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if resizing {
                let _ = body.style().set_property("cursor", "col-resize");
                let _ = body.style().set_property("user-select", "none");
            } else {
                let _ = body.style().set_property("cursor", "");
                let _ = body.style().set_property("user-select", "");
            }
        }
    });

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
            class:right-panel--resizing=move || is_resizing.get()
            style:width=move || if is_open() { format!("{}px", width.get()) } else { "0px".to_string() }
        >
            <div class="right-panel__resizer" on:mousedown=on_resize_start></div>
            {children()}
        </div>
    }
}
