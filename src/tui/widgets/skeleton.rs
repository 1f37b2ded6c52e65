//! Skeleton loader shown in the table area while a fetch is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::Styles;

/// Rows of placeholder bars in the skeleton table.
const SKELETON_ROWS: usize = 5;

/// Renders placeholder bars where the record table will appear.
pub fn render_skeleton(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Back Margin Data ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::styled("Loading data...", Styles::default()),
        Line::styled("Please wait while we fetch your data", Styles::dim()),
        Line::raw(""),
    ];
    for _ in 0..SKELETON_ROWS {
        lines.push(Line::styled("░".repeat(inner_width), Styles::dim()));
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
