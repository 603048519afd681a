//! Roving tab stop over a list of focus candidates.
//!
//! Only focusable candidates take part. Indices passed in and returned are
//! positions in the caller's full (unfiltered) list.

use super::FocusCandidate;

/// Direction of a navigation key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    Next,
    Previous,
    First,
    Last,
}

fn focusable<C: FocusCandidate>(list: &[C]) -> Vec<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.is_focusable())
        .map(|(idx, _)| idx)
        .collect()
}

/// The candidate holding the tab stop, or the first focusable one when
/// nothing is marked yet
pub fn active<C: FocusCandidate>(list: &[C]) -> Option<usize> {
    list.iter()
        .position(|candidate| candidate.is_focusable() && candidate.is_tab_stop())
        .or_else(|| first(list))
}

/// Candidate after `current`, wrapping to the first
pub fn next<C: FocusCandidate>(list: &[C], current: usize) -> Option<usize> {
    let order = focusable(list);
    let next = match order.iter().position(|&idx| idx == current) {
        Some(pos) => (pos + 1) % order.len(),
        None => 0,
    };
    order.get(next).copied()
}

/// Candidate before `current`, wrapping to the last
pub fn previous<C: FocusCandidate>(list: &[C], current: usize) -> Option<usize> {
    let order = focusable(list);
    let previous = match order.iter().position(|&idx| idx == current) {
        Some(0) | None => order.len().checked_sub(1)?,
        Some(pos) => pos - 1,
    };
    order.get(previous).copied()
}

pub fn first<C: FocusCandidate>(list: &[C]) -> Option<usize> {
    list.iter().position(|candidate| candidate.is_focusable())
}

pub fn last<C: FocusCandidate>(list: &[C]) -> Option<usize> {
    list.iter().rposition(|candidate| candidate.is_focusable())
}

/// Make `target` the only tab stop in the list
pub fn activate<C: FocusCandidate>(list: &mut [C], target: usize) {
    for (idx, candidate) in list.iter_mut().enumerate() {
        candidate.set_tab_stop(idx == target);
    }
    tracing::trace!(target: "focus", index = target, "moved tab stop");
}

/// Compute the navigation target from `current` and move the tab stop there.
///
/// Returns the new active index, or `None` (leaving the list untouched)
/// when nothing is focusable.
pub fn navigate<C: FocusCandidate>(
    list: &mut [C],
    current: usize,
    navigation: Navigation,
) -> Option<usize> {
    let target = match navigation {
        Navigation::Next => next(list, current),
        Navigation::Previous => previous(list, current),
        Navigation::First => first(list),
        Navigation::Last => last(list),
    }?;

    tracing::debug!(target: "focus", ?navigation, from = current, to = target, "navigate");
    activate(list, target);
    Some(target)
}

/// Establish a single tab stop: keep the current one if it is still
/// focusable, otherwise fall back to the first focusable candidate.
pub fn normalize<C: FocusCandidate>(list: &mut [C]) -> Option<usize> {
    let target = active(list)?;
    activate(list, target);
    Some(target)
}
