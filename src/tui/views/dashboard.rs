//! Dashboard view
//!
//! Portfolio figures on top, the most recent transactions below

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::reports::DashboardReport;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::split_top;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = DashboardReport::generate(&app.records);
    let (cards_area, recent_area) = split_top(area, 5);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(cards_area);

    render_card(
        frame,
        cards[0],
        "Total Portfolio Value",
        report.metrics.total_value.format_whole(),
        Color::Green,
    );
    render_card(
        frame,
        cards[1],
        "Total Assets",
        report.metrics.total_assets.to_string(),
        Color::Cyan,
    );
    render_card(
        frame,
        cards[2],
        "Active Transactions",
        format!(
            "{} of {}",
            report.metrics.active_transactions, report.metrics.transaction_count
        ),
        Color::Yellow,
    );

    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::White
    };
    let block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if report.recent.is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions yet. Press n to start one.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            recent_area,
        );
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Name").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Value").style(bold),
        Cell::from("Status").style(bold),
        Cell::from("Date").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow));

    let date_format = app.settings.date_format.as_str();
    let rows: Vec<Row> = report
        .recent
        .iter()
        .map(|record| {
            let status_color = if record.is_active() {
                Color::Yellow
            } else {
                Color::Green
            };
            Row::new(vec![
                Cell::from(record.name.clone()),
                Cell::from(record.kind.clone()),
                Cell::from(record.value.format_whole()),
                Cell::from(record.status.to_string()).style(Style::default().fg(status_color)),
                Cell::from(record.date.format(date_format).to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), recent_area);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(text).block(block), area);
}
