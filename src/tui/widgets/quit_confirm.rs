//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

/// Renders the quit confirmation dialog centered on screen.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_width = 34u16.min(area.width);
    let popup_height = 5u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());

    let content = vec![
        Line::raw("Quit margintop?"),
        Line::from(vec![
            Span::styled("y/Enter", Styles::help_key()),
            Span::styled(" quit   ", Styles::dim()),
            Span::styled("n/Esc", Styles::help_key()),
            Span::styled(" cancel", Styles::dim()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(content).block(block).style(Styles::default()),
        popup_area,
    );
}
