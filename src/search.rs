//! Search module
//!
//! Debounced suggestion lookups for the search input: the controller state,
//! its key mapping, and the dropdown that presents the suggestions.

pub mod cursor;
pub mod debouncer;
pub mod highlight;
pub mod search_events;
pub mod search_render;
mod search_state;

pub use search_render::DropdownLayout;
pub use search_state::{SearchKey, SearchState, SelectionConsumer};
