pub mod panel;
pub mod preview;

pub use panel::DocumentPanel;
pub use preview::PreviewPane;
