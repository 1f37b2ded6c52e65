//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AppState, PopupState};
use super::style::Styles;
use super::widgets::{
    ERROR_HEIGHT, FILTERS_HEIGHT, SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH, SUMMARY_HEIGHT,
    render_error, render_filters, render_header, render_help, render_quit_confirm, render_sidebar,
    render_skeleton, render_summary, render_table,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header, body, key hint line.
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Body
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_body(frame, chunks[1], state);
    render_key_hints(frame, chunks[2]);

    // Popups overlay everything.
    match &state.popup {
        PopupState::Help { scroll } => render_help(frame, area, *scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}

/// Renders sidebar and content side by side.
fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let sidebar_width = if state.sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };
    let chunks = Layout::horizontal([
        Constraint::Length(sidebar_width),
        Constraint::Min(40),
    ])
    .split(area);

    render_sidebar(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
}

/// Renders the dashboard content: error banner, summary cards, filter
/// bar, and the record table (or its skeleton while loading).
fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let error = state.store.error.as_deref().filter(|_| !state.store.loading);
    let error_height = if error.is_some() { ERROR_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(error_height),
        Constraint::Length(SUMMARY_HEIGHT),
        Constraint::Length(FILTERS_HEIGHT),
        Constraint::Min(5),
    ])
    .split(area);

    if let Some(message) = error {
        render_error(frame, chunks[0], message);
    }

    // The whole view is derived from current inputs on every frame.
    let table = state.table();
    render_summary(frame, chunks[1], &table.summary);
    render_filters(frame, chunks[2], state);

    if state.store.loading {
        render_skeleton(frame, chunks[3]);
    } else {
        render_table(frame, chunks[3], state, &table);
    }
}

fn render_key_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ?", Styles::help_key()),
        Span::styled(" help ", Styles::dim()),
        Span::styled("u/d/v/m", Styles::help_key()),
        Span::styled(" filter ", Styles::dim()),
        Span::styled("←→ s", Styles::help_key()),
        Span::styled(" sort ", Styles::dim()),
        Span::styled("n/p", Styles::help_key()),
        Span::styled(" page ", Styles::dim()),
        Span::styled("r", Styles::help_key()),
        Span::styled(" refresh ", Styles::dim()),
        Span::styled("q", Styles::help_key()),
        Span::styled(" quit", Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
