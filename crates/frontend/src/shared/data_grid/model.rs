//! State of the data-grid, independent of rendering.
//!
//! Pagination is manual: the grid never slices rows itself, it only tells
//! the owning screen which page the user asked for.

use contracts::shared::Pagination;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Zero-based
    pub page_index: usize,
    pub page_size: usize,
    /// Always at least one
    pub page_count: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            page_count: 1,
        }
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    pub fn previous(&self) -> Option<Self> {
        self.can_previous().then(|| Self {
            page_index: self.page_index - 1,
            ..*self
        })
    }

    pub fn next(&self) -> Option<Self> {
        self.can_next().then(|| Self {
            page_index: self.page_index + 1,
            ..*self
        })
    }

    /// Jump to `page_index`, clamped into range
    pub fn goto(&self, page_index: usize) -> Self {
        Self {
            page_index: page_index.min(self.page_count.saturating_sub(1)),
            ..*self
        }
    }

    /// First page, page count kept until the next fetch answers
    pub fn reset(&self) -> Self {
        Self {
            page_index: 0,
            ..*self
        }
    }

    /// Change the page size and go back to the first page
    pub fn resize(&self, page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            page_count: self.page_count,
        }
    }

    /// Apply server metadata after a fetch completed
    pub fn with_pagination(&self, pagination: &Pagination) -> Self {
        let page_count = pagination.page_count();
        Self {
            page_index: self.page_index.min(page_count - 1),
            page_size: self.page_size,
            page_count,
        }
    }

    /// Label for the pager, e.g. "Page 2 of 5"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count.max(1))
    }
}

/// Row key → selected.
///
/// In uncontrolled mode the keys are row indices of the current page; callers
/// needing selection that survives page changes use entity ids instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection(BTreeMap<String, bool>);

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, selected: bool) {
        let key = key.into();
        if selected {
            self.0.insert(key, true);
        } else {
            self.0.remove(&key);
        }
    }

    pub fn toggle(&mut self, key: &str) {
        let selected = self.is_selected(key);
        self.set(key, !selected);
    }

    /// Set every key in `keys` to `selected`, leaving all other keys untouched.
    pub fn set_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>, selected: bool) {
        for key in keys {
            self.set(key, selected);
        }
    }

    pub fn count_selected_among<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> usize {
        keys.into_iter().filter(|k| self.is_selected(k)).count()
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|s| **s).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Footer summary: selected rows among the filtered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
}

impl SelectionSummary {
    pub fn compute(selection: &RowSelection, visible_keys: &[String]) -> Self {
        Self {
            selected: selection.count_selected_among(visible_keys.iter().map(String::as_str)),
            total: visible_keys.len(),
        }
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} row(s) selected.", self.selected, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheckState {
    /// `summary` must count only the rows the header toggles, i.e. the
    /// selectable visible rows; non-selectable rows never reach `Checked`.
    pub fn compute(summary: SelectionSummary) -> Self {
        if summary.total == 0 || summary.selected == 0 {
            HeaderCheckState::Unchecked
        } else if summary.selected == summary.total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}

/// What the grid body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    /// Placeholder rows; no row data is rendered while a fetch is running
    Skeleton { rows: usize },
    Empty,
    Rows,
}

impl BodyMode {
    pub fn compute(is_loading: bool, page_size: usize, visible_rows: usize) -> Self {
        if is_loading {
            BodyMode::Skeleton { rows: page_size }
        } else if visible_rows == 0 {
            BodyMode::Empty
        } else {
            BodyMode::Rows
        }
    }
}

static NO_SELECTION: RowSelection = RowSelection(BTreeMap::new());

/// Grid-owned selection tied to one generation of `data`.
///
/// The grid bumps the generation whenever `data` changes; a selection made
/// for an older generation reads as empty and is dropped on the next write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedSelection {
    generation: u64,
    selection: RowSelection,
}

impl ScopedSelection {
    pub fn current(&self, generation: u64) -> &RowSelection {
        if self.generation == generation {
            &self.selection
        } else {
            &NO_SELECTION
        }
    }

    pub fn current_mut(&mut self, generation: u64) -> &mut RowSelection {
        if self.generation != generation {
            self.generation = generation;
            self.selection.clear();
        }
        &mut self.selection
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }
}

/// Active sort column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub direction: SortDirection,
}

/// Clicking a header sorts ascending, clicking it again flips the direction.
pub fn toggle_sort(current: Option<&SortState>, column: &'static str) -> SortState {
    match current {
        Some(s) if s.column == column => SortState {
            column,
            direction: s.direction.flip(),
        },
        _ => SortState {
            column,
            direction: SortDirection::Ascending,
        },
    }
}

/// Indices of the rows whose text contains `query`, case-insensitively.
///
/// Only the rows of the current page are searched; this is not a server-side search.
pub fn filter_indices<T>(rows: &[T], text: impl Fn(&T) -> String, query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| query.is_empty() || text(row).to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `indices` by the text of each row.
pub fn sort_indices<T>(
    rows: &[T],
    indices: &mut [usize],
    text: impl Fn(&T) -> String,
    direction: SortDirection,
) {
    indices.sort_by(|a, b| {
        let (Some(ra), Some(rb)) = (rows.get(*a), rows.get(*b)) else {
            return Ordering::Equal;
        };
        let cmp = compare_cells(&text(ra), &text(rb));
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Numbers compare numerically, everything else case-insensitively.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Key of a row in uncontrolled selection mode
pub fn index_key(index: usize) -> String {
    index.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_index: usize, page_count: usize) -> PageState {
        PageState {
            page_index,
            page_size: 10,
            page_count,
        }
    }

    fn keys(range: std::ops::Range<usize>) -> Vec<String> {
        range.map(index_key).collect()
    }

    #[test]
    fn test_next_enabled_until_last_page() {
        let count = 5;
        for i in 0..count - 1 {
            assert!(page(i, count).can_next(), "page {i}");
        }
        assert!(!page(count - 1, count).can_next());
        assert!(page(count - 1, count).next().is_none());
    }

    #[test]
    fn test_previous_disabled_only_on_first_page() {
        assert!(!page(0, 5).can_previous());
        assert!(page(0, 5).previous().is_none());
        for i in 1..5 {
            assert!(page(i, 5).can_previous(), "page {i}");
        }
    }

    #[test]
    fn test_single_page_disables_both_controls() {
        let p = PageState::new(10);
        assert!(!p.can_previous());
        assert!(!p.can_next());
        assert_eq!(p.label(), "Page 1 of 1");
    }

    #[test]
    fn test_next_and_previous_only_move_the_index() {
        let p = page(1, 3);
        assert_eq!(p.next().unwrap(), page(2, 3));
        assert_eq!(p.previous().unwrap(), page(0, 3));
    }

    #[test]
    fn test_server_pagination_updates_count_and_clamps_index() {
        let pagination = Pagination {
            total: 15,
            page: 4,
            limit: 10,
            total_pages: 2,
            has_next_page: false,
            has_prev_page: true,
        };
        let p = page(3, 4).with_pagination(&pagination);
        assert_eq!(p.page_count, 2);
        assert_eq!(p.page_index, 1);
    }

    #[test]
    fn test_goto_and_resize() {
        assert_eq!(page(0, 3).goto(7).page_index, 2);
        let resized = page(2, 3).resize(50);
        assert_eq!(resized.page_index, 0);
        assert_eq!(resized.page_size, 50);
        let reset = page(2, 3).reset();
        assert_eq!((reset.page_index, reset.page_count), (0, 3));
    }

    #[test]
    fn test_summary_counts_only_filtered_rows() {
        let rows = vec!["red shirt", "blue shirt", "red cap", "green cap"];
        let mut selection = RowSelection::new();
        selection.set_all(["0", "1", "2"], true);

        let visible: Vec<String> = filter_indices(&rows, |r| r.to_string(), "red")
            .into_iter()
            .map(index_key)
            .collect();
        let summary = SelectionSummary::compute(&selection, &visible);
        assert_eq!(summary, SelectionSummary { selected: 2, total: 2 });
        assert_eq!(summary.to_string(), "2 of 2 row(s) selected.");

        let visible: Vec<String> = filter_indices(&rows, |r| r.to_string(), "cap")
            .into_iter()
            .map(index_key)
            .collect();
        assert_eq!(SelectionSummary::compute(&selection, &visible).to_string(), "1 of 2 row(s) selected.");
    }

    #[test]
    fn test_unfiltered_summary_reports_all_rows() {
        let mut selection = RowSelection::new();
        selection.set("1", true);
        selection.set("3", true);
        let summary = SelectionSummary::compute(&selection, &keys(0..4));
        assert_eq!(summary.to_string(), "2 of 4 row(s) selected.");
    }

    #[test]
    fn test_select_all_leaves_other_keys_untouched() {
        let mut selection = RowSelection::new();
        selection.set("order-on-page-1", true);
        let visible = vec!["order-a".to_string(), "order-b".to_string()];

        selection.set_all(visible.iter().map(String::as_str), true);
        assert!(selection.is_selected("order-a"));
        assert!(selection.is_selected("order-b"));
        assert!(selection.is_selected("order-on-page-1"));

        selection.set_all(visible.iter().map(String::as_str), false);
        assert!(!selection.is_selected("order-a"));
        assert!(!selection.is_selected("order-b"));
        assert!(selection.is_selected("order-on-page-1"));
        assert_eq!(selection.selected_keys(), vec!["order-on-page-1".to_string()]);
    }

    #[test]
    fn test_header_state() {
        let visible = keys(0..3);
        let mut selection = RowSelection::new();
        let state = |s: &RowSelection| HeaderCheckState::compute(SelectionSummary::compute(s, &visible));
        assert_eq!(state(&selection), HeaderCheckState::Unchecked);
        selection.set("0", true);
        assert_eq!(state(&selection), HeaderCheckState::Indeterminate);
        selection.set_all(visible.iter().map(String::as_str), true);
        assert_eq!(state(&selection), HeaderCheckState::Checked);
        assert_eq!(
            HeaderCheckState::compute(SelectionSummary::compute(&selection, &[])),
            HeaderCheckState::Unchecked
        );
    }

    #[test]
    fn test_header_checks_when_all_selectable_rows_are_selected() {
        // r3 is not selectable (e.g. an already reviewed return)
        let visible = vec!["r1".to_string(), "r2".to_string(), "r3".to_string()];
        let selectable = vec!["r1".to_string(), "r2".to_string()];
        let mut selection = RowSelection::new();

        selection.set_all(selectable.iter().map(String::as_str), true);
        let header = HeaderCheckState::compute(SelectionSummary::compute(&selection, &selectable));
        assert_eq!(header, HeaderCheckState::Checked);
        assert_eq!(SelectionSummary::compute(&selection, &visible).to_string(), "2 of 3 row(s) selected.");

        // a second click on a checked header clears the selection
        selection.set_all(selectable.iter().map(String::as_str), false);
        let header = HeaderCheckState::compute(SelectionSummary::compute(&selection, &selectable));
        assert_eq!(header, HeaderCheckState::Unchecked);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_loading_shows_page_size_skeleton_rows_even_with_data() {
        assert_eq!(BodyMode::compute(true, 10, 4), BodyMode::Skeleton { rows: 10 });
        assert_eq!(BodyMode::compute(true, 25, 0), BodyMode::Skeleton { rows: 25 });
        assert_eq!(BodyMode::compute(false, 10, 0), BodyMode::Empty);
        assert_eq!(BodyMode::compute(false, 10, 4), BodyMode::Rows);
    }

    #[test]
    fn test_scoped_selection_resets_on_new_data() {
        let mut scoped = ScopedSelection::default();
        scoped.current_mut(0).set_all(["0", "2"], true);
        assert_eq!(scoped.current(0).len(), 2);

        // data reloaded: the old selection no longer applies
        assert!(scoped.current(1).is_empty());
        scoped.current_mut(1).set("1", true);
        assert_eq!(scoped.current(1).selected_keys(), vec!["1".to_string()]);
        assert!(!scoped.current(1).is_selected("0"));
    }

    #[test]
    fn test_toggle_and_len() {
        let mut selection = RowSelection::new();
        selection.toggle("a");
        selection.toggle("b");
        selection.toggle("a");
        assert_eq!(selection.len(), 1);
        assert!(!selection.is_empty());
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive_and_blank_matches_all() {
        let rows = vec!["Nike Air", "Adidas", "NIKE cap"];
        assert_eq!(filter_indices(&rows, |r| r.to_string(), "nike"), vec![0, 2]);
        assert_eq!(filter_indices(&rows, |r| r.to_string(), "  "), vec![0, 1, 2]);
        assert!(filter_indices(&rows, |r| r.to_string(), "puma").is_empty());
    }

    #[test]
    fn test_sort_numeric_and_text() {
        let rows = vec!["10", "9", "100"];
        let mut idx = vec![0, 1, 2];
        sort_indices(&rows, &mut idx, |r| r.to_string(), SortDirection::Ascending);
        assert_eq!(idx, vec![1, 0, 2]);

        let rows = vec!["beta", "Alpha", "gamma"];
        let mut idx = vec![0, 1, 2];
        sort_indices(&rows, &mut idx, |r| r.to_string(), SortDirection::Descending);
        assert_eq!(idx, vec![2, 0, 1]);
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let first = toggle_sort(None, "name");
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = toggle_sort(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Descending);
        let other = toggle_sort(Some(&second), "price");
        assert_eq!(other, SortState { column: "price", direction: SortDirection::Ascending });
    }
}
