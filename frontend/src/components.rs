pub use crate::components::app::App;

pub mod app;
pub mod match_form;
pub mod rematch_prompt;
pub mod winner_form;
