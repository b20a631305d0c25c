//! Detail page dialog
//!
//! The report of an asset, building, estate or transaction, with the pages
//! one level down listed underneath.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{
    format_asset_details, format_building_details, format_estate_details,
    format_transaction_details,
};
use crate::error::DealResult;
use crate::routes::Route;
use crate::services::TransactionService;
use crate::tui::app::App;
use crate::tui::layout::{centered_rect, split_top};

pub fn render(frame: &mut Frame, app: &App, route: &Route) {
    let area = centered_rect(85, 90, frame.area());
    frame.render_widget(Clear, area);

    let children = app.detail_children(route);
    let (text_area, list_area) = if children.is_empty() {
        (area, None)
    } else {
        let list_height = (children.len() as u16 + 2).min(area.height / 3).max(3);
        let (top, bottom) = split_top(area, area.height.saturating_sub(list_height));
        (top, Some(bottom))
    };

    let (text, color) = match page_text(app, route) {
        Ok(text) => (text, Color::White),
        Err(e) => (e.to_string(), Color::Red),
    };

    let block = Block::default()
        .title(format!(" {} ", route))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(color))
            .scroll((app.dialog_scroll, 0)),
        text_area,
    );

    if let Some(list_area) = list_area {
        render_children(frame, app, route, &children, list_area);
    }
}

fn render_children(
    frame: &mut Frame,
    app: &App,
    route: &Route,
    children: &[(String, Route)],
    area: Rect,
) {
    let title = match route {
        Route::Asset(_) => " Buildings ",
        _ => " Units ",
    };
    let items: Vec<ListItem> = children
        .iter()
        .map(|(label, _)| ListItem::new(label.clone()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.dialog_index.min(children.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

fn page_text(app: &App, route: &Route) -> DealResult<String> {
    let date_format = app.settings.date_format.as_str();
    let text = match route {
        Route::Asset(a) => format_asset_details(app.catalog.asset(a.as_str())?),
        Route::Building(a, b) => {
            format_building_details(app.catalog.building(a.as_str(), b.as_str())?)
        }
        Route::Estate(a, b, e) => format_estate_details(
            app.catalog.estate(a.as_str(), b.as_str(), e.as_str())?,
            date_format,
        ),
        Route::Transaction(id) => {
            let record = match app.records.iter().find(|r| r.id == *id) {
                Some(record) => record.clone(),
                None => TransactionService::new(app.catalog, app.storage).get(id.as_str())?,
            };
            format_transaction_details(&record, date_format)
        }
        other => format!("{} has no detail page", other),
    };
    Ok(text)
}
