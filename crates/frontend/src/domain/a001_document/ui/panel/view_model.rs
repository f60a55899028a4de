//! Document Panel - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentPanelVm {
    pub is_uploading: RwSignal<bool>,
    pub youtube_url: RwSignal<String>,
    pub is_ingesting: RwSignal<bool>,
}

impl DocumentPanelVm {
    pub fn new() -> Self {
        Self {
            is_uploading: RwSignal::new(false),
            youtube_url: RwSignal::new(String::new()),
            is_ingesting: RwSignal::new(false),
        }
    }
}
