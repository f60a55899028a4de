//! LLM Chat - View Model

use leptos::prelude::*;

/// Draft state only. The transcript and the pending flag live in the
/// session, where the reducer owns them.
#[derive(Clone, Copy)]
pub struct ChatPanelVm {
    pub question: RwSignal<String>,
}

impl ChatPanelVm {
    pub fn new() -> Self {
        Self {
            question: RwSignal::new(String::new()),
        }
    }
}
