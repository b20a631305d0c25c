//! Transaction wizard view
//!
//! Step indicator, the summary bar, the active step and its key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, WizardState};
use crate::tui::layout::WizardLayout;
use crate::tui::steps::StepContext;
use crate::wizard::{SummaryBar, WizardStep};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(wizard) = app.wizard.as_ref() else {
        render_idle(frame, area);
        return;
    };

    let layout = WizardLayout::new(area);
    render_steps(frame, wizard, layout.steps);
    render_summary(frame, app, wizard, layout.summary);

    let ctx = StepContext {
        draft: wizard.controller.draft(),
        catalog: app.catalog,
        settings: app.settings,
    };
    if let Some(view) = wizard.current_view() {
        view.render(frame, layout.content, &ctx);
    }

    render_footer(frame, app, wizard, layout.footer);
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" New Transaction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    frame.render_widget(
        Paragraph::new("Press Enter to start a new transaction.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_steps(frame: &mut Frame, wizard: &WizardState, area: Rect) {
    let current = wizard.controller.step();
    let completed = wizard.controller.draft().is_completed();

    let mut spans = Vec::new();
    for step in WizardStep::ALL {
        let style = if step == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if step < current || completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if step < current || completed { "✓" } else { " " };
        spans.push(Span::styled(
            format!(" {}{} {} ", marker, step.number(), step.title()),
            style,
        ));
        if !step.is_last() {
            spans.push(Span::styled("›", Style::default().fg(Color::DarkGray)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_summary(frame: &mut Frame, app: &App, wizard: &WizardState, area: Rect) {
    let draft = wizard.controller.draft();
    let profiles = app.catalog.risk_profiles_for(&draft.selected_assets);
    let bar = SummaryBar::for_step(
        wizard.controller.step(),
        draft,
        &profiles,
        &app.settings.date_format,
    );

    let mut spans = Vec::new();
    for field in &bar.fields {
        spans.push(Span::styled(
            format!("{}: ", field.label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            field.value.clone(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_footer(frame: &mut Frame, app: &App, wizard: &WizardState, area: Rect) {
    let line = if wizard.controller.draft().is_completed() {
        Line::from(Span::styled(
            " Transaction finalized. Returning to the dashboard…",
            Style::default().fg(Color::Green),
        ))
    } else {
        let hints = wizard.current_view().map(|v| v.key_hints()).unwrap_or("");
        let focus = if app.focused_panel == FocusedPanel::Sidebar {
            "  (sidebar focused, Tab to return)"
        } else {
            ""
        };
        Line::from(vec![
            Span::styled(format!(" {}", hints), Style::default().fg(Color::White)),
            Span::styled(
                "  PgDn:Next  PgUp:Back",
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(focus, Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
