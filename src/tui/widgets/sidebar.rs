//! Collapsible sidebar with the dashboard menu.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Menu entries. Only the back-margin view is implemented in this tool;
/// the rest mirror the dashboard navigation.
const MENU: &[&str] = &[
    "BACK MARGIN",
    "FRONT MARGIN",
    "BACK MARGIN ADHOC",
    "ADMIN SCREEN",
    "USER MANAGEMENT",
];

/// Sidebar width when expanded.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Sidebar width when collapsed.
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 3;

/// Renders the sidebar; collapsed mode shows only a slim rail.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .style(Styles::default());

    if state.sidebar_collapsed {
        let rail: Vec<Line> = MENU
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == 0 { Styles::accent() } else { Styles::dim() };
                Line::styled(item[..1].to_string(), style)
            })
            .collect();
        frame.render_widget(Paragraph::new(rail).block(block), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(MENU.len() + 1);
    lines.push(Line::styled("  MENU", Styles::dim()));
    for (i, item) in MENU.iter().enumerate() {
        let style = if i == 0 { Styles::accent() } else { Styles::dim() };
        lines.push(Line::styled(format!("  {}", item), style));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
