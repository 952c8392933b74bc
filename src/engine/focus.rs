//! Index arithmetic for moving focus through one list of rows.
//!
//! Nothing here touches rendering: callers pass the rows and receive the
//! index that should take focus next.

use crate::engine::item::MenuItem;

/// A row that can take focus.
pub trait Focusable {
    fn label(&self) -> &str;
    fn is_disabled(&self) -> bool;
}

impl Focusable for MenuItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Next enabled row after `current`, wrapping past the end. Returns
/// `current` when no other row is enabled.
pub fn next_enabled_index<T: Focusable>(current: usize, items: &[T]) -> usize {
    let len = items.len();
    if len == 0 {
        return current;
    }
    let base = current % len;
    for step in 1..=len {
        let candidate = (base + step) % len;
        if !items[candidate].is_disabled() {
            return candidate;
        }
    }
    current
}

/// Previous enabled row before `current`, wrapping to the last row.
pub fn previous_enabled_index<T: Focusable>(current: usize, items: &[T]) -> usize {
    let len = items.len();
    if len == 0 {
        return current;
    }
    let base = current % len;
    for step in 1..=len {
        let candidate = (base + len - step % len) % len;
        if !items[candidate].is_disabled() {
            return candidate;
        }
    }
    current
}

pub fn first_enabled_index<T: Focusable>(items: &[T]) -> Option<usize> {
    items.iter().position(|item| !item.is_disabled())
}

pub fn last_enabled_index<T: Focusable>(items: &[T]) -> Option<usize> {
    items.iter().rposition(|item| !item.is_disabled())
}

/// Case-insensitive comparison of the first character of `label`.
pub fn label_starts_with(label: &str, ch: char) -> bool {
    match label.trim_start().chars().next() {
        Some(first) => first.to_lowercase().eq(ch.to_lowercase()),
        None => false,
    }
}

/// Enabled row whose label starts with `ch`, cycling after `current`.
///
/// Disabled rows never match. When `current` is not itself a match the
/// search starts at the first match.
pub fn next_match_by_prefix<T: Focusable>(
    ch: char,
    current: Option<usize>,
    items: &[T],
) -> Option<usize> {
    let candidates: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_disabled() && label_starts_with(item.label(), ch))
        .map(|(index, _)| index)
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let start = current
        .and_then(|current| candidates.iter().position(|&index| index == current))
        .map_or(0, |pos| (pos + 1) % candidates.len());
    Some(candidates[start])
}
