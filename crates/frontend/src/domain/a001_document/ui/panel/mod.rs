//! Document Panel UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: DocumentPanelVm with RwSignals
//! - view.rs: Main component DocumentPanel
//! - document_card.rs: Component for one registry entry

mod document_card;
mod model;
mod view;
mod view_model;

pub use document_card::DocumentCard;
pub use view::DocumentPanel;
pub use view_model::DocumentPanelVm;
