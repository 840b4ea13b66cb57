//! Application state module

mod app_state;
mod forms;
mod selection;
mod view_model;

pub use app_state::*;
pub use forms::*;
pub use selection::*;
pub use view_model::*;
