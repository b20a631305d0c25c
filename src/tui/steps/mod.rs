//! Wizard step views
//!
//! Each of the six steps renders against the current draft and turns key
//! presses into `StepEvent`s. Steps never touch the draft themselves: field
//! writes leave as `DraftAction`s and the app feeds them to the controller.

pub mod closing;
pub mod details;
pub mod diligence;
pub mod initiation;
pub mod risk;
pub mod screening;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::catalog::Catalog;
use crate::config::settings::Settings;
use crate::models::{Asset, TransactionDraft};
use crate::services::ImportReport;
use crate::tui::widgets::{Notification, TextInput};
use crate::wizard::{DraftAction, WizardStep};

/// Read-only inputs every step renders from
pub struct StepContext<'a> {
    pub draft: &'a TransactionDraft,
    pub catalog: &'a Catalog,
    pub settings: &'a Settings,
}

/// What a step asks the app to do after a key press
#[derive(Debug)]
pub enum StepEvent {
    /// Apply a field write through the controller
    Dispatch(DraftAction),
    Notify(Notification),
    /// Store assets parsed from an upload
    Imported(ImportReport),
    /// Ask for confirmation and finalize
    RequestFinalize,
}

pub trait StepView {
    fn step(&self) -> WizardStep;

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext);

    fn handle_key(&mut self, key: KeyEvent, ctx: &StepContext) -> Vec<StepEvent>;

    /// True while a text prompt owns the keyboard
    fn is_capturing_input(&self) -> bool {
        false
    }

    fn key_hints(&self) -> &'static str;
}

/// One view per step, in step order
///
/// `universe` is the screening list the asset step starts from.
pub fn build_step_views(universe: Vec<Asset>) -> Vec<Box<dyn StepView>> {
    vec![
        Box::new(initiation::InitiationStep::new()),
        Box::new(screening::ScreeningStep::new(universe)),
        Box::new(diligence::DiligenceStep::new()),
        Box::new(risk::RiskStep::new()),
        Box::new(details::DetailsStep::new()),
        Box::new(closing::ClosingStep::new()),
    ]
}

/// Outcome of feeding a key to an open prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptKey {
    Submit(String),
    Cancel,
    Editing,
}

pub(crate) fn edit_prompt(input: &mut TextInput, key: KeyEvent) -> PromptKey {
    match key.code {
        KeyCode::Enter => PromptKey::Submit(input.value().trim().to_string()),
        KeyCode::Esc => PromptKey::Cancel,
        KeyCode::Char(c) => {
            input.insert(c);
            PromptKey::Editing
        }
        KeyCode::Backspace => {
            input.backspace();
            PromptKey::Editing
        }
        KeyCode::Delete => {
            input.delete();
            PromptKey::Editing
        }
        KeyCode::Left => {
            input.move_left();
            PromptKey::Editing
        }
        KeyCode::Right => {
            input.move_right();
            PromptKey::Editing
        }
        KeyCode::Home => {
            input.move_start();
            PromptKey::Editing
        }
        KeyCode::End => {
            input.move_end();
            PromptKey::Editing
        }
        _ => PromptKey::Editing,
    }
}

/// Draw a one-line prompt along the bottom of `area`
pub(crate) fn render_prompt(frame: &mut Frame, area: Rect, input: &TextInput) {
    if area.height < 3 {
        return;
    }
    let prompt_area = Rect::new(area.x, area.y + area.height - 3, area.width, 3);
    frame.render_widget(Clear, prompt_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Enter to save, Esc to cancel ");
    let inner = block.inner(prompt_area);
    frame.render_widget(block, prompt_area);
    frame.render_widget(input, inner);
}

/// Next value of a required choice, wrapping around
pub(crate) fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> T {
    let len = all.len();
    let index = match current.and_then(|c| all.iter().position(|v| *v == c)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    all[index]
}

/// Next value of an optional choice; "unset" sits between the last and first
pub(crate) fn cycle_optional<T: Copy + PartialEq>(
    all: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    let position = current.and_then(|c| all.iter().position(|v| *v == c));
    match (position, forward) {
        (None, true) => all.first().copied(),
        (None, false) => all.last().copied(),
        (Some(i), true) => all.get(i + 1).copied(),
        (Some(0), false) => None,
        (Some(i), false) => all.get(i - 1).copied(),
    }
}

/// Parse `YYYY-MM-DD`; an empty string clears the date
pub(crate) fn parse_date(value: &str) -> Result<Option<NaiveDate>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

pub(crate) fn is_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

pub(crate) fn is_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

/// `label: value` with the selection marker
pub(crate) fn field_line(label: &str, value: String, selected: bool, missing: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let label_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let mut spans = vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(format!("{:<18}", label), label_style),
        Span::styled(value, Style::default().fg(Color::Yellow)),
    ];
    if missing {
        spans.push(Span::styled("  (required)", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

pub(crate) fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn step_block(step: WizardStep) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn chr(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::{Region, TransactionType};

    #[test]
    fn test_cycle_wraps() {
        let all = TransactionType::ALL;
        assert_eq!(cycle(&all, None, true), TransactionType::Acquisition);
        assert_eq!(cycle(&all, Some(TransactionType::Exit), true), TransactionType::Acquisition);
        assert_eq!(cycle(&all, Some(TransactionType::Acquisition), false), TransactionType::Exit);
    }

    #[test]
    fn test_cycle_optional_passes_through_unset() {
        let all = Region::ALL;
        assert_eq!(cycle_optional(&all, None, true), Some(Region::Berlin));
        assert_eq!(cycle_optional(&all, Some(Region::Berlin), false), None);
        assert_eq!(cycle_optional(&all, Some(Region::Dusseldorf), true), None);
        assert_eq!(cycle_optional(&all, None, false), Some(Region::Dusseldorf));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("").unwrap(), None);
        assert_eq!(
            parse_date("2024-05-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 15)
        );
        assert!(parse_date("15/05/2024").is_err());
    }

    #[test]
    fn test_prompt_editing() {
        let mut input = TextInput::new();
        assert_eq!(edit_prompt(&mut input, chr('a')), PromptKey::Editing);
        assert_eq!(edit_prompt(&mut input, chr('b')), PromptKey::Editing);
        assert_eq!(edit_prompt(&mut input, key(KeyCode::Backspace)), PromptKey::Editing);
        assert_eq!(
            edit_prompt(&mut input, key(KeyCode::Enter)),
            PromptKey::Submit("a".into())
        );
        assert_eq!(edit_prompt(&mut input, key(KeyCode::Esc)), PromptKey::Cancel);
    }
}
