//! Status bar view
//!
//! Shows the current route, the status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveDialog, ActiveView, App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.current_route()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.active_dialog {
        ActiveDialog::Help => " Esc:Close ",
        ActiveDialog::Confirm(_) => " y:Yes  n:No ",
        ActiveDialog::Details(_) => " j/k:Select  Enter:Open  Esc:Back ",
        ActiveDialog::None => match (app.active_view, app.focused_panel) {
            (ActiveView::Wizard, FocusedPanel::Main) if app.wizard.is_some() => {
                " PgDn:Next  PgUp:Back  Esc:Discard  ?:Help "
            }
            (_, FocusedPanel::Sidebar) => " j/k:Move  Enter:Open  Tab:Main  q:Quit ",
            _ => " 1-4:Views  n:New  Enter:Open  ?:Help  q:Quit ",
        },
    }
}
