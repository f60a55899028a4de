pub mod api_utils;
pub mod icons;
pub mod state;
