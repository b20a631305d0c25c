//! Yes/no confirmation for finalizing or discarding a draft

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::ConfirmAction;
use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, action: ConfirmAction) {
    let area = centered_rect_fixed(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let (title, accent) = match action {
        ConfirmAction::Finalize => (" Finalize Transaction ", Color::Green),
        ConfirmAction::DiscardDraft => (" Discard Draft ", Color::Red),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(action.message(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(Color::Black).bg(accent)),
            Span::raw(" confirm    "),
            Span::styled(" n ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
            Span::raw(" go back"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
