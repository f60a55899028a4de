use leptos::prelude::*;

/// Center zone: the chat. Always visible.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="center" style="flex: 1; overflow: auto; display: flex; flex-direction: column;">
            {children()}
        </div>
    }
}
