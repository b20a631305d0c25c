//! Step 1: transaction type, template, name, budget, target date and goal

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::models::{Money, StrategicGoal, TemplateChoice, TransactionType};
use crate::tui::widgets::{Notification, TextInput};
use crate::wizard::{missing_fields, DraftAction, WizardStep, NOT_SET};

use super::{
    cycle, cycle_optional, edit_prompt, field_line, is_down, is_up, parse_date, render_prompt,
    step_block, PromptKey, StepContext, StepEvent, StepView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Type,
    Template,
    Name,
    Budget,
    TargetDate,
    Goal,
}

impl Field {
    const ALL: [Field; 6] = [
        Self::Type,
        Self::Template,
        Self::Name,
        Self::Budget,
        Self::TargetDate,
        Self::Goal,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Type => "Transaction Type",
            Self::Template => "Template",
            Self::Name => "Name",
            Self::Budget => "Budget",
            Self::TargetDate => "Target Date",
            Self::Goal => "Strategic Goal",
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Budget | Self::TargetDate)
    }
}

pub struct InitiationStep {
    selected: usize,
    prompt: Option<TextInput>,
}

impl InitiationStep {
    pub fn new() -> Self {
        Self {
            selected: 0,
            prompt: None,
        }
    }

    fn field(&self) -> Field {
        Field::ALL[self.selected]
    }

    fn choose(&self, ctx: &StepContext, forward: bool) -> Option<DraftAction> {
        let draft = ctx.draft;
        match self.field() {
            Field::Type => Some(DraftAction::SetTransactionType(cycle(
                &TransactionType::ALL,
                draft.transaction_type,
                forward,
            ))),
            Field::Template => Some(DraftAction::SetTemplate(cycle(
                &TemplateChoice::ALL,
                draft.template,
                forward,
            ))),
            Field::Goal => Some(DraftAction::SetStrategicGoal(cycle_optional(
                &StrategicGoal::ALL,
                draft.strategic_goal,
                forward,
            ))),
            _ => None,
        }
    }

    fn submit(&self, value: &str) -> StepEvent {
        let action = match self.field() {
            Field::Name => Ok(DraftAction::SetName(value.to_string())),
            Field::Budget if value.is_empty() => Ok(DraftAction::SetBudget(None)),
            Field::Budget => Money::parse(value)
                .map(|m| DraftAction::SetBudget(Some(m)))
                .map_err(|e| e.to_string()),
            Field::TargetDate => parse_date(value).map(DraftAction::SetTargetDate),
            _ => return StepEvent::Notify(Notification::warning("Field is not editable")),
        };
        match action {
            Ok(action) => StepEvent::Dispatch(action),
            Err(message) => StepEvent::Notify(Notification::error(message)),
        }
    }

    fn current_text(&self, ctx: &StepContext) -> String {
        let draft = ctx.draft;
        match self.field() {
            Field::Name => draft.name.clone(),
            Field::Budget => draft.budget.map(|b| b.format_whole()).unwrap_or_default(),
            Field::TargetDate => draft
                .target_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

impl Default for InitiationStep {
    fn default() -> Self {
        Self::new()
    }
}

impl StepView for InitiationStep {
    fn step(&self) -> WizardStep {
        WizardStep::Initiation
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let draft = ctx.draft;
        let missing = missing_fields(WizardStep::Initiation, draft);
        let not_set = || NOT_SET.to_string();

        let mut lines = vec![
            Line::styled(
                WizardStep::Initiation.description(),
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ];
        for (i, field) in Field::ALL.iter().enumerate() {
            let (value, required) = match field {
                Field::Type => (
                    draft.transaction_type.map(|t| t.to_string()).unwrap_or_else(not_set),
                    missing.contains(&"transaction type"),
                ),
                Field::Template => (
                    draft.template.map(|t| t.to_string()).unwrap_or_else(not_set),
                    false,
                ),
                Field::Name => (
                    if draft.name.is_empty() { not_set() } else { draft.name.clone() },
                    missing.contains(&"transaction name"),
                ),
                Field::Budget => (
                    draft.budget.map(|b| b.format_whole()).unwrap_or_else(not_set),
                    missing.contains(&"budget"),
                ),
                Field::TargetDate => (
                    draft
                        .target_date
                        .map(|d| d.format(&ctx.settings.date_format).to_string())
                        .unwrap_or_else(not_set),
                    false,
                ),
                Field::Goal => (
                    draft.strategic_goal.map(|g| g.to_string()).unwrap_or_else(not_set),
                    false,
                ),
            };
            lines.push(field_line(field.label(), value, i == self.selected, required));
        }

        let block = step_block(WizardStep::Initiation);
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(input) = &self.prompt {
            render_prompt(frame, inner, input);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &StepContext) -> Vec<StepEvent> {
        if let Some(input) = self.prompt.as_mut() {
            return match edit_prompt(input, key) {
                PromptKey::Submit(value) => {
                    self.prompt = None;
                    vec![self.submit(&value)]
                }
                PromptKey::Cancel => {
                    self.prompt = None;
                    Vec::new()
                }
                PromptKey::Editing => Vec::new(),
            };
        }

        if is_down(&key) {
            self.selected = (self.selected + 1).min(Field::ALL.len() - 1);
            return Vec::new();
        }
        if is_up(&key) {
            self.selected = self.selected.saturating_sub(1);
            return Vec::new();
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('e') if self.field().is_text() => {
                let hint = match self.field() {
                    Field::Budget => "e.g. 1.5M or €1,250,000",
                    Field::TargetDate => "YYYY-MM-DD",
                    _ => "",
                };
                self.prompt = Some(
                    TextInput::new()
                        .label(self.field().label())
                        .placeholder(hint)
                        .content(self.current_text(ctx))
                        .focused(true),
                );
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                self.choose(ctx, true).map(StepEvent::Dispatch).into_iter().collect()
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.choose(ctx, false).map(StepEvent::Dispatch).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.prompt.is_some()
    }

    fn key_hints(&self) -> &'static str {
        "j/k:Field  Enter:Edit  ←/→:Choose"
    }
}
