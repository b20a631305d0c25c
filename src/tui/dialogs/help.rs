//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the current context
fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1-4", "Dashboard, Assets, Transactions, New Transaction"),
        key_line("n", "Start or resume a transaction"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move selection down/up"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Dashboard => {
            lines.push(heading("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Open the transaction list"));
        }
        ActiveView::Assets | ActiveView::Transactions => {
            lines.push(heading("Lists and Detail Pages"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Open the selected page"));
            lines.push(key_line("j/k", "Select a building or unit"));
            lines.push(key_line("PgDn/PgUp", "Scroll the page"));
            lines.push(key_line("Esc", "Back to the page above"));
        }
        ActiveView::Wizard => {
            lines.push(heading("Transaction Wizard"));
            lines.push(Line::from(""));
            lines.push(key_line("PgDn", "Next step (finalize on step 6)"));
            lines.push(key_line("PgUp", "Previous step"));
            lines.push(key_line("Esc", "Discard the draft"));
            lines.push(key_line("Shift+Tab", "Focus the sidebar"));
            if let Some(view) = app.wizard.as_ref().and_then(|w| w.current_view()) {
                lines.push(Line::from(""));
                lines.push(heading(view.step().title()));
                lines.push(Line::from(""));
                for hint in view.key_hints().split("  ").filter(|h| !h.is_empty()) {
                    match hint.split_once(':') {
                        Some((key, action)) => lines.push(key_line(key, action)),
                        None => lines.push(Line::from(hint.to_string())),
                    }
                }
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key.trim()), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.trim().to_string(), Style::default().fg(Color::White)),
    ])
}
