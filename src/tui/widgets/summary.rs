//! Summary cards over the filtered record set.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::fmt::{format_money, format_percent};
use crate::tui::style::Styles;
use crate::view::Summary;

/// Height of the summary card row.
pub const SUMMARY_HEIGHT: u16 = 4;

/// Renders the five summary cards. Values cover the filtered set
/// (pre-pagination), never just the visible page.
pub fn render_summary(frame: &mut Frame, area: Rect, summary: &Summary) {
    let cards: [(&str, String); 5] = [
        ("Total Products", summary.count.to_string()),
        ("Total Margin", format_money(summary.total_margin)),
        ("Avg Margin %", format_percent(summary.avg_margin_percentage)),
        ("Total Cost", format_money(summary.total_cost)),
        ("Total Revenue", format_money(summary.total_price)),
    ];

    let chunks = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);

    for (chunk, (title, value)) in chunks.iter().zip(cards) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Styles::default());
        let content = vec![
            Line::styled(title, Styles::dim()),
            Line::styled(value, Styles::accent()),
        ];
        frame.render_widget(Paragraph::new(content).block(block), *chunk);
    }
}
