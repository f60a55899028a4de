//! Document Preview UI Module
//!
//! Structure:
//! - model.rs: API functions
//! - view.rs: Main component PreviewPane

mod model;
mod view;

pub use view::PreviewPane;
