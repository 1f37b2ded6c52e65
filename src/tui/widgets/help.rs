//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Styles::active_filter()),
        Span::raw(desc),
    ])
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        Line::styled("Sorting", Styles::accent()),
        key_line("Left/Right", "move the column cursor"),
        key_line("s / Enter", "cycle sort on the cursor column (asc, desc, off)"),
        Line::raw(""),
        Line::styled("Filters", Styles::accent()),
        key_line("u", "cycle business unit"),
        key_line("d", "cycle department"),
        key_line("v", "cycle vendor"),
        key_line("m", "cycle month"),
        key_line("c", "clear all filters"),
        Line::raw(""),
        Line::styled("Pagination", Styles::accent()),
        key_line("n / PgDn", "next page"),
        key_line("p / PgUp", "previous page"),
        key_line("Up/Down", "move row selection"),
        Line::raw(""),
        Line::styled("General", Styles::accent()),
        key_line("r", "refresh (retry after an error)"),
        key_line("b", "toggle sidebar"),
        key_line("?", "toggle this help"),
        key_line("q", "quit"),
        Line::raw(""),
        Line::styled(
            "Summary cards always cover the filtered set, not the visible page.",
            Styles::dim(),
        ),
    ]
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 72);
    let popup_height = (area.height * 80 / 100).clamp(10, 28);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" margintop help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let content = help_content();
    let max_scroll = content.len().saturating_sub(chunks[0].height as usize);
    let scroll = scroll.min(max_scroll);

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .style(Styles::default());
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Styles::dim()),
        Span::styled("Esc", Styles::active_filter()),
        Span::styled(" to close, ", Styles::dim()),
        Span::styled("↑↓", Styles::active_filter()),
        Span::styled(" to scroll", Styles::dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}
