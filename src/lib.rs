pub mod app;
pub mod character;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod result_box;
pub mod search;
pub mod widgets;

#[cfg(test)]
mod test_utils;
