//! Active-index cursor over the current suggestion list
//!
//! `None` means nothing is highlighted. Navigation wraps in both directions.

/// Wrapping highlight over a list of `len` suggestions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionCursor {
    active: Option<usize>,
}

impl SuggestionCursor {
    pub fn new() -> Self {
        Self { active: None }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Back to idle: nothing highlighted
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Move down one row, wrapping from the last row to the first
    ///
    /// From idle this lands on the first row. No-op when `len` is zero.
    pub fn navigate_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        self.active = Some(match self.active {
            Some(current) => (current + 1) % len,
            None => 0,
        });
    }

    /// Move up one row, wrapping from the first row to the last
    ///
    /// From idle this lands on the last row. No-op when `len` is zero.
    pub fn navigate_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        self.active = Some(match self.active {
            Some(current) => (current % len + len - 1) % len,
            None => len - 1,
        });
    }

    /// Active index, if it is in range for a list of `len`
    pub fn active_within(&self, len: usize) -> Option<usize> {
        self.active.filter(|&index| index < len)
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod cursor_tests;
