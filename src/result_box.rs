//! Detail box for the selected character

pub mod result_box_render;
mod result_box_state;

pub use result_box_state::ResultBoxState;
