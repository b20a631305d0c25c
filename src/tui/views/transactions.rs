//! Transactions view
//!
//! Sample and committed transactions; Enter opens the transaction report

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::White
    };

    let block = Block::default()
        .title(format!(" Transactions ({}) ", app.records.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.records.is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions found.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("ID").style(bold),
        Cell::from("Name").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Value").style(bold),
        Cell::from("Assets").style(bold),
        Cell::from("Status").style(bold),
        Cell::from("Date").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let date_format = app.settings.date_format.as_str();
    let rows: Vec<Row> = app
        .records
        .iter()
        .map(|record| {
            let status_color = if record.is_active() {
                Color::Yellow
            } else {
                Color::Green
            };
            Row::new(vec![
                Cell::from(record.id.as_str().to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(record.name.clone()),
                Cell::from(record.kind.clone()),
                Cell::from(record.value.format_whole()),
                Cell::from(record.asset_count.to_string()),
                Cell::from(record.status.to_string()).style(Style::default().fg(status_color)),
                Cell::from(record.date.format(date_format).to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.transaction_index));

    frame.render_stateful_widget(table, area, &mut state);
}
