pub mod chat;
pub mod model_select;

pub use chat::ChatPanel;
pub use model_select::ModelSelect;
