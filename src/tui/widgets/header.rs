//! Header bar showing brand, clock, source mode, and status.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Brand
        Constraint::Length(22), // Time
        Constraint::Length(10), // Mode
        Constraint::Min(10),    // Status
    ])
    .split(area);

    let brand = Paragraph::new(" margintop ").style(Styles::header());
    frame.render_widget(brand, chunks[0]);

    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let time = Paragraph::new(time_str).style(Styles::header());
    frame.render_widget(time, chunks[1]);

    let mode = Paragraph::new(format!(" {} ", state.source_label)).style(Styles::header());
    frame.render_widget(mode, chunks[2]);

    let status = if state.store.loading {
        "Loading data...".to_string()
    } else if let Some(msg) = &state.status_message {
        msg.clone()
    } else {
        format!("{} records", state.store.records.len())
    };
    frame.render_widget(Paragraph::new(status).style(Styles::header()), chunks[3]);
}
