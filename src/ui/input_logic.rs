//! Cursor movement over the main screen rows. No wrap-around: the
//! cursor sticks at the first and last row.

/// Move the cursor one row up.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move the cursor one row down if another row exists.
pub fn select_next(selected: usize, row_count: usize) -> usize {
    if selected + 1 < row_count {
        selected + 1
    } else {
        selected
    }
}
