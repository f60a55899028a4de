use crate::shared::state::{SessionEvent, SessionState};
use leptos::prelude::*;

/// Application-wide context provided at the root.
///
/// The whole session lives in one signal holding a [`SessionState`];
/// views read slices of it and send [`SessionEvent`]s back through
/// [`AppGlobalContext::dispatch`]. The two booleans are chrome, not
/// session state: they only control zone visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<SessionState>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::new()),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(true),
        }
    }

    /// Runs one event through the session reducer.
    pub fn dispatch(&self, event: SessionEvent) {
        self.session.update(|state| state.apply(event));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }
}
