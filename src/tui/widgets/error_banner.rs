//! Error banner shown after a failed fetch.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::Styles;

/// Height of the error banner.
pub const ERROR_HEIGHT: u16 = 4;

/// Renders the fetch error with a retry hint.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title(" Error Loading Data ")
        .borders(Borders::ALL)
        .border_style(Styles::error())
        .style(Styles::default());

    let content = vec![
        Line::styled(message.to_string(), Styles::error()),
        Line::from(vec![
            Span::styled("Press ", Styles::dim()),
            Span::styled("r", Styles::help_key()),
            Span::styled(" to retry", Styles::dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(content).block(block), area);
}
