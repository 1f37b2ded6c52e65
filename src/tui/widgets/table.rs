//! Back-margin record table with sort indicators and pagination footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::fmt::{format_money, format_percent};
use crate::model::MarginRecord;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::{SortField, TableView};

/// Column widths, one per [`SortField::all`] entry; the date column
/// takes the remaining space.
const WIDTHS: &[u16] = &[4, 12, 12, 13, 11, 9, 14, 9, 9, 9, 9];

fn cells(r: &MarginRecord) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.product.clone(),
        r.category.clone(),
        r.business_unit.clone(),
        r.department.clone(),
        r.vendor.clone(),
        r.month.clone(),
        format_money(r.cost),
        format_money(r.price),
        format_money(r.margin),
        format_percent(r.margin_percentage),
        r.date.to_string(),
    ]
}

/// Renders the record table plus a one-line pagination footer.
pub fn render_table(frame: &mut Frame, area: Rect, state: &AppState, table: &TableView) {
    let chunks = Layout::vertical([
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Pagination footer
    ])
    .split(area);

    // Header row: sort indicator on the active column, cursor highlight.
    let headers: Vec<Span> = SortField::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let indicator = if state.view.sort.field == Some(*field) {
                if state.view.sort.ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            let style = if i == state.cursor {
                Styles::cursor_column()
            } else {
                Styles::table_header()
            };
            Span::styled(format!("{}{}", field.title(), indicator), style)
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let style = if idx == state.selected_row {
                Styles::selected()
            } else {
                Styles::default()
            };
            Row::new(cells(r)).style(style).height(1)
        })
        .collect();

    let mut constraints: Vec<Constraint> =
        WIDTHS.iter().map(|&w| Constraint::Length(w)).collect();
    constraints.push(Constraint::Fill(1));

    let widget = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(" Back Margin Data ")
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1);
    frame.render_widget(widget, chunks[0]);

    render_pagination(frame, chunks[1], table);
}

fn render_pagination(frame: &mut Frame, area: Rect, table: &TableView) {
    if table.total_rows == 0 {
        frame.render_widget(
            Paragraph::new(Line::styled("No matching records", Styles::dim())),
            area,
        );
        return;
    }

    let start = (table.page - 1) * table.page_size + 1;
    let end = (table.page * table.page_size).min(table.total_rows);
    let range = if start <= end {
        format!("Showing {}-{} of {}", start, end, table.total_rows)
    } else {
        format!("{} records", table.total_rows)
    };
    let mut spans = vec![Span::styled(
        format!(
            " {}   Page {} of {}  ",
            range, table.page, table.total_pages
        ),
        Styles::default(),
    )];
    if table.page > 1 {
        spans.push(Span::styled("p:prev ", Styles::help_key()));
    }
    if table.page < table.total_pages {
        spans.push(Span::styled("n:next", Styles::help_key()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
