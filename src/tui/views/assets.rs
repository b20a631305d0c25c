//! Assets view
//!
//! The portfolio table; Enter opens the asset page

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
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
        .title(" Assets ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Name").style(bold),
        Cell::from("Location").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Value").style(bold),
        Cell::from("ROI").style(bold),
        Cell::from("Buildings").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app
        .catalog
        .assets()
        .iter()
        .map(|asset| {
            Row::new(vec![
                Cell::from(asset.name.clone()),
                Cell::from(asset.location.clone()),
                Cell::from(asset.asset_type.clone()),
                Cell::from(asset.portfolio_value.format_whole())
                    .style(Style::default().fg(Color::Green)),
                Cell::from(format!("{:.1}%", asset.roi)),
                Cell::from(asset.buildings.len().to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(26),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(7),
        Constraint::Length(9),
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
    state.select(Some(app.asset_index));

    frame.render_stateful_widget(table, area, &mut state);
}
