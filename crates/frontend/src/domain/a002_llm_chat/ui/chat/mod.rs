//! LLM Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: ChatPanelVm with RwSignals
//! - view.rs: Main component ChatPanel

mod model;
mod view;
mod view_model;

pub use view::ChatPanel;
pub use view_model::ChatPanelVm;
