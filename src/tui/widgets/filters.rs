//! Filter bar showing the four equality predicates.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Height of the filter bar.
pub const FILTERS_HEIGHT: u16 = 3;

fn filter_span<'a>(label: &'a str, value: &'a str) -> Vec<Span<'a>> {
    let (display, style) = if value.is_empty() {
        ("All", Styles::dim())
    } else {
        (value, Styles::active_filter())
    };
    vec![
        Span::styled(format!("{}: ", label), Styles::default()),
        Span::styled(display, style),
        Span::raw("   "),
    ]
}

/// Renders the filter bar with the current predicate values.
pub fn render_filters(frame: &mut Frame, area: Rect, state: &AppState) {
    let filter = &state.view.filter;
    let mut spans = Vec::new();
    spans.extend(filter_span("Unit (u)", &filter.business_unit));
    spans.extend(filter_span("Dept (d)", &filter.department));
    spans.extend(filter_span("Vendor (v)", &filter.vendor));
    spans.extend(filter_span("Month (m)", &filter.month));
    if !filter.is_empty() {
        spans.push(Span::styled("c: clear", Styles::help_key()));
    }

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
