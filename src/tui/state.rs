//! Application state management.

use crate::model::{BUSINESS_UNITS, DEPARTMENTS, MONTHS, VENDORS};
use crate::store::MarginStore;
use crate::view::{SortField, TableView, ViewState};

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Returns the filter value for an option label; "All" means no constraint.
fn option_value(label: &str) -> &str {
    if label == "All" { "" } else { label }
}

/// Advances `current` to the next entry of `options`, wrapping at the end.
/// Unknown values restart at the first real option.
fn cycle_option(options: &[&str], current: &str) -> String {
    let pos = options
        .iter()
        .position(|o| option_value(o) == current)
        .unwrap_or(0);
    option_value(options[(pos + 1) % options.len()]).to_string()
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Fetched records plus loading/error flags.
    pub store: MarginStore,
    /// Filter, sort, and pagination parameters.
    pub view: ViewState,
    /// Column cursor for sort selection (index into [`SortField::all`]).
    pub cursor: usize,
    /// Selected row index within the current page.
    pub selected_row: usize,
    /// Active popup.
    pub popup: PopupState,
    /// Sidebar collapsed flag.
    pub sidebar_collapsed: bool,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    /// Source mode label for the header ("LIVE" or "SAMPLE").
    pub source_label: &'static str,
}

impl AppState {
    pub fn new(source_label: &'static str) -> Self {
        Self {
            store: MarginStore::new(),
            view: ViewState::default(),
            cursor: 0,
            selected_row: 0,
            popup: PopupState::None,
            sidebar_collapsed: false,
            status_message: None,
            source_label,
        }
    }

    /// Derives the current table view from the store and view state.
    /// Recomputed on demand; the data volume makes caching pointless.
    pub fn table(&self) -> TableView {
        self.view.derive(&self.store.records)
    }

    /// Field under the column cursor.
    pub fn cursor_field(&self) -> SortField {
        SortField::all()[self.cursor.min(SortField::all().len() - 1)]
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < SortField::all().len() {
            self.cursor += 1;
        }
    }

    /// Cycles the sort on the cursor column (unset -> asc -> desc -> unset).
    pub fn toggle_sort_at_cursor(&mut self) {
        self.view.toggle_sort(self.cursor_field());
        self.selected_row = 0;
    }

    pub fn cycle_business_unit(&mut self) {
        let next = cycle_option(BUSINESS_UNITS, &self.view.filter.business_unit);
        self.view.set_business_unit(next);
        self.selected_row = 0;
    }

    pub fn cycle_department(&mut self) {
        let next = cycle_option(DEPARTMENTS, &self.view.filter.department);
        self.view.set_department(next);
        self.selected_row = 0;
    }

    pub fn cycle_vendor(&mut self) {
        let next = cycle_option(VENDORS, &self.view.filter.vendor);
        self.view.set_vendor(next);
        self.selected_row = 0;
    }

    pub fn cycle_month(&mut self) {
        let next = cycle_option(MONTHS, &self.view.filter.month);
        self.view.set_month(next);
        self.selected_row = 0;
    }

    pub fn clear_filters(&mut self) {
        self.view.clear_filters();
        self.selected_row = 0;
    }

    pub fn next_page(&mut self) {
        let total_pages = self.table().total_pages;
        self.view.next_page(total_pages);
        self.selected_row = 0;
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
        self.selected_row = 0;
    }

    pub fn select_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let max = self.table().rows.len().saturating_sub(1);
        if self.selected_row < max {
            self.selected_row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_records;

    fn loaded_state() -> AppState {
        let mut state = AppState::new("SAMPLE");
        state.store.fetch_succeeded(sample_records());
        state
    }

    #[test]
    fn filter_cycle_walks_options_and_wraps() {
        let mut state = loaded_state();
        assert_eq!(state.view.filter.business_unit, "");

        state.cycle_business_unit();
        assert_eq!(state.view.filter.business_unit, "Unit A");

        for _ in 0..3 {
            state.cycle_business_unit();
        }
        assert_eq!(state.view.filter.business_unit, "Unit D");

        // Wraps back to "All" (empty predicate).
        state.cycle_business_unit();
        assert_eq!(state.view.filter.business_unit, "");
    }

    #[test]
    fn cycling_a_filter_resets_page_and_selection() {
        let mut state = loaded_state();
        state.view.page.page = 2;
        state.selected_row = 3;

        state.cycle_vendor();
        assert_eq!(state.view.page.page, 1);
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn cursor_is_clamped_to_column_range() {
        let mut state = loaded_state();
        state.cursor_left();
        assert_eq!(state.cursor, 0);

        for _ in 0..100 {
            state.cursor_right();
        }
        assert_eq!(state.cursor, SortField::all().len() - 1);
        assert_eq!(state.cursor_field(), SortField::Date);
    }

    #[test]
    fn sort_toggle_at_cursor_cycles_three_states() {
        let mut state = loaded_state();
        state.cursor = 1; // Product

        state.toggle_sort_at_cursor();
        assert_eq!(state.view.sort.field, Some(SortField::Product));
        assert!(state.view.sort.ascending);

        state.toggle_sort_at_cursor();
        assert!(!state.view.sort.ascending);

        state.toggle_sort_at_cursor();
        assert_eq!(state.view.sort.field, None);
    }

    #[test]
    fn row_selection_stays_within_page() {
        let mut state = loaded_state();
        state.select_up();
        assert_eq!(state.selected_row, 0);

        for _ in 0..20 {
            state.select_down();
        }
        // Five records on one page of ten.
        assert_eq!(state.selected_row, 4);
    }

    #[test]
    fn page_navigation_uses_derived_total() {
        let mut state = loaded_state();
        state.view.page.page_size = 2;

        state.next_page();
        state.next_page();
        assert_eq!(state.view.page.page, 3);
        state.next_page();
        assert_eq!(state.view.page.page, 3);

        state.prev_page();
        assert_eq!(state.view.page.page, 2);
    }
}
