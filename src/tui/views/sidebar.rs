//! Sidebar view
//!
//! Shows the navigation and a portfolio summary

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::metrics::dashboard_metrics;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_navigation(frame, app, layout.navigation);
    render_portfolio(frame, app, layout.portfolio);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" DealDesk ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

fn render_navigation(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Sidebar {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::NAVIGATION
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let active = app.active_view == *view;
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if active { "▶" } else { " " };
            let draft_marker = if *view == ActiveView::Wizard && app.wizard.is_some() {
                " •"
            } else {
                ""
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(view.title(), style),
                Span::styled(draft_marker, Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if app.focused_panel == FocusedPanel::Sidebar {
        state.select(Some(app.sidebar_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_portfolio(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Portfolio ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let metrics = dashboard_metrics(&app.records);
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled("Value   ", label),
            Span::styled(
                metrics.total_value.format_whole(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Assets  ", label),
            Span::raw(metrics.total_assets.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Active  ", label),
            Span::styled(
                format!("{} of {}", metrics.active_transactions, metrics.transaction_count),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
