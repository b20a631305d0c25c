//! Step 5: payment method, closing date and the approver list
//!
//! Approval statuses are set directly; there is no workflow behind them.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{ApprovalStatus, PaymentMethod, Stakeholder};
use crate::tui::layout::{split_columns, split_top};
use crate::tui::widgets::{Notification, TextInput};
use crate::wizard::{missing_fields, DraftAction, WizardStep, NOT_SET};

use super::{
    cycle_optional, edit_prompt, field_line, is_down, is_up, parse_date, render_prompt,
    step_block, PromptKey, StepContext, StepEvent, StepView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Fields,
    Directory,
    Approvers,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Self::Fields => Self::Directory,
            Self::Directory => Self::Approvers,
            Self::Approvers => Self::Fields,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    ClosingDate,
    NewStakeholder,
}

pub struct DetailsStep {
    pane: Pane,
    field: usize,
    directory_index: usize,
    approver_index: usize,
    prompt: Option<(PromptKind, TextInput)>,
}

impl DetailsStep {
    pub fn new() -> Self {
        Self {
            pane: Pane::Fields,
            field: 0,
            directory_index: 0,
            approver_index: 0,
            prompt: None,
        }
    }

    fn submit(&self, kind: PromptKind, value: &str) -> Vec<StepEvent> {
        match kind {
            PromptKind::ClosingDate => match parse_date(value) {
                Ok(date) => vec![StepEvent::Dispatch(DraftAction::SetClosingDate(date))],
                Err(e) => vec![StepEvent::Notify(Notification::error(e))],
            },
            PromptKind::NewStakeholder if value.is_empty() => Vec::new(),
            PromptKind::NewStakeholder => match parse_stakeholder(value) {
                Ok(stakeholder) => vec![StepEvent::Dispatch(DraftAction::AddStakeholder(stakeholder))],
                Err(e) => vec![StepEvent::Notify(Notification::error(e))],
            },
        }
    }

    fn handle_pane_key(&mut self, key: KeyEvent, ctx: &StepContext) -> Vec<StepEvent> {
        let draft = ctx.draft;
        match self.pane {
            Pane::Fields => {
                if is_down(&key) {
                    self.field = 1;
                } else if is_up(&key) {
                    self.field = 0;
                } else if self.field == 0 {
                    let forward = match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => true,
                        KeyCode::Left | KeyCode::Char('h') => false,
                        _ => return Vec::new(),
                    };
                    return vec![StepEvent::Dispatch(DraftAction::SetPaymentMethod(
                        cycle_optional(&PaymentMethod::ALL, draft.payment_method, forward),
                    ))];
                } else if matches!(key.code, KeyCode::Enter | KeyCode::Char('e')) {
                    let current = draft
                        .closing_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default();
                    self.prompt = Some((
                        PromptKind::ClosingDate,
                        TextInput::new()
                            .label("Closing date")
                            .placeholder("YYYY-MM-DD")
                            .content(current)
                            .focused(true),
                    ));
                }
                Vec::new()
            }
            Pane::Directory => {
                let directory = ctx.catalog.stakeholder_directory();
                if is_down(&key) {
                    self.directory_index =
                        (self.directory_index + 1).min(directory.len().saturating_sub(1));
                } else if is_up(&key) {
                    self.directory_index = self.directory_index.saturating_sub(1);
                } else if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    if let Some(person) = directory.get(self.directory_index) {
                        if draft.stakeholders.iter().any(|s| s.same_person(person)) {
                            return vec![StepEvent::Notify(Notification::warning(format!(
                                "{} is already an approver",
                                person.name
                            )))];
                        }
                        return vec![StepEvent::Dispatch(DraftAction::AddStakeholder(
                            person.clone(),
                        ))];
                    }
                }
                Vec::new()
            }
            Pane::Approvers => {
                let count = draft.stakeholders.len();
                self.approver_index = self.approver_index.min(count.saturating_sub(1));
                if is_down(&key) {
                    self.approver_index = (self.approver_index + 1).min(count.saturating_sub(1));
                    return Vec::new();
                }
                if is_up(&key) {
                    self.approver_index = self.approver_index.saturating_sub(1);
                    return Vec::new();
                }
                let Some(stakeholder) = draft.stakeholders.get(self.approver_index) else {
                    return Vec::new();
                };
                let id = stakeholder.id;
                let action = match key.code {
                    KeyCode::Char('a') => DraftAction::SetStakeholderStatus {
                        id,
                        status: ApprovalStatus::Approved,
                    },
                    KeyCode::Char('r') => DraftAction::SetStakeholderStatus {
                        id,
                        status: ApprovalStatus::Rejected,
                    },
                    KeyCode::Char('p') => DraftAction::SetStakeholderStatus {
                        id,
                        status: ApprovalStatus::Pending,
                    },
                    KeyCode::Char('d') | KeyCode::Delete => DraftAction::RemoveStakeholder(id),
                    _ => return Vec::new(),
                };
                vec![StepEvent::Dispatch(action)]
            }
        }
    }

    fn pane_block(&self, pane: Pane, title: &str) -> Block<'static> {
        let color = if self.pane == pane { Color::Cyan } else { Color::DarkGray };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title))
    }
}

impl Default for DetailsStep {
    fn default() -> Self {
        Self::new()
    }
}

/// `Name; Role; email`
fn parse_stakeholder(value: &str) -> Result<Stakeholder, String> {
    let parts: Vec<&str> = value.split(';').map(str::trim).collect();
    match parts.as_slice() {
        [name, role, email] if !name.is_empty() && !role.is_empty() => {
            Ok(Stakeholder::new(*name, *role, *email))
        }
        [name, role] if !name.is_empty() && !role.is_empty() => Ok(Stakeholder::new(*name, *role, "")),
        _ => Err("Expected 'Name; Role; email'".to_string()),
    }
}

fn status_color(status: ApprovalStatus) -> Color {
    match status {
        ApprovalStatus::Approved => Color::Green,
        ApprovalStatus::Rejected => Color::Red,
        ApprovalStatus::Pending => Color::Yellow,
    }
}

impl StepView for DetailsStep {
    fn step(&self) -> WizardStep {
        WizardStep::TransactionDetails
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let draft = ctx.draft;
        let block = step_block(WizardStep::TransactionDetails);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let missing = missing_fields(WizardStep::TransactionDetails, draft);
        let (fields_area, lists_area) = split_top(inner, 4);
        let fields_block = self.pane_block(Pane::Fields, "Closing Terms");
        let selected = |i: usize| self.pane == Pane::Fields && self.field == i;
        let lines = vec![
            field_line(
                "Payment Method",
                draft.payment_method.map(|p| p.to_string()).unwrap_or_else(|| NOT_SET.into()),
                selected(0),
                false,
            ),
            field_line(
                "Closing Date",
                draft
                    .closing_date
                    .map(|d| d.format(&ctx.settings.date_format).to_string())
                    .unwrap_or_else(|| NOT_SET.into()),
                selected(1),
                missing.contains(&"closing date"),
            ),
        ];
        frame.render_widget(Paragraph::new(lines).block(fields_block), fields_area);

        let (directory_area, approvers_area) = split_columns(lists_area, 45);

        let directory: Vec<ListItem> = ctx
            .catalog
            .stakeholder_directory()
            .iter()
            .map(|s| {
                let added = draft.stakeholders.iter().any(|d| d.same_person(s));
                let mark = if added { "[x] " } else { "[ ] " };
                ListItem::new(format!("{}{} - {}", mark, s.name, s.role))
            })
            .collect();
        let mut directory_state = ListState::default();
        if self.pane == Pane::Directory {
            directory_state.select(Some(self.directory_index));
        }
        frame.render_stateful_widget(
            List::new(directory)
                .block(self.pane_block(Pane::Directory, "Directory"))
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> "),
            directory_area,
            &mut directory_state,
        );

        let approvers: Vec<ListItem> = if draft.stakeholders.is_empty() {
            vec![ListItem::new(Span::styled(
                "No approvers yet (required)",
                Style::default().fg(Color::Red),
            ))]
        } else {
            draft
                .stakeholders
                .iter()
                .map(|s| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<9}", s.status.to_string()),
                            Style::default()
                                .fg(status_color(s.status))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!(" {} - {} {}", s.name, s.role, s.email)),
                    ]))
                })
                .collect()
        };
        let mut approvers_state = ListState::default();
        if self.pane == Pane::Approvers && !draft.stakeholders.is_empty() {
            approvers_state.select(Some(self.approver_index.min(draft.stakeholders.len() - 1)));
        }
        frame.render_stateful_widget(
            List::new(approvers)
                .block(self.pane_block(Pane::Approvers, "Approvers"))
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> "),
            approvers_area,
            &mut approvers_state,
        );

        if let Some((_, input)) = &self.prompt {
            render_prompt(frame, inner, input);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &StepContext) -> Vec<StepEvent> {
        if let Some((kind, input)) = self.prompt.as_mut() {
            let kind = *kind;
            return match edit_prompt(input, key) {
                PromptKey::Submit(value) => {
                    self.prompt = None;
                    self.submit(kind, &value)
                }
                PromptKey::Cancel => {
                    self.prompt = None;
                    Vec::new()
                }
                PromptKey::Editing => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.pane = self.pane.next();
                Vec::new()
            }
            KeyCode::Char('n') => {
                self.prompt = Some((
                    PromptKind::NewStakeholder,
                    TextInput::new()
                        .label("Approver")
                        .placeholder("Name; Role; email")
                        .focused(true),
                ));
                Vec::new()
            }
            _ => self.handle_pane_key(key, ctx),
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.prompt.is_some()
    }

    fn key_hints(&self) -> &'static str {
        "Tab:Pane  Enter:Edit/Add  n:New approver  a/r/p:Approve/Reject/Pending  d:Remove"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::settings::Settings;
    use crate::models::TransactionDraft;
    use crate::wizard::reduce;

    #[test]
    fn test_parse_stakeholder() {
        let s = parse_stakeholder("Lena Wolf; Legal Counsel; lena@example.com").unwrap();
        assert_eq!(s.name, "Lena Wolf");
        assert_eq!(s.role, "Legal Counsel");
        assert_eq!(s.email, "lena@example.com");
        assert!(parse_stakeholder("Lena Wolf").is_err());
    }

    #[test]
    fn test_directory_add_and_duplicate_warning() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut step = DetailsStep::new();
        step.handle_key(key(KeyCode::Tab), &ctx);
        let events = step.handle_key(key(KeyCode::Enter), &ctx);
        let action = match events.as_slice() {
            [StepEvent::Dispatch(action @ DraftAction::AddStakeholder(_))] => action.clone(),
            other => panic!("unexpected {:?}", other),
        };

        let draft = reduce(draft, action);
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };
        let events = step.handle_key(key(KeyCode::Enter), &ctx);
        assert!(matches!(events.as_slice(), [StepEvent::Notify(n)] if n.title == "Warning"));
    }

    #[test]
    fn test_approver_status_and_closing_date() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = reduce(
            TransactionDraft::new(),
            DraftAction::AddStakeholder(Stakeholder::new("Michael Chen", "Risk Manager", "")),
        );
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut step = DetailsStep::new();
        step.handle_key(key(KeyCode::Down), &ctx);
        step.handle_key(key(KeyCode::Enter), &ctx);
        for c in "2024-09-30".chars() {
            step.handle_key(chr(c), &ctx);
        }
        let events = step.handle_key(key(KeyCode::Enter), &ctx);
        assert!(matches!(
            events.as_slice(),
            [StepEvent::Dispatch(DraftAction::SetClosingDate(Some(_)))]
        ));

        step.handle_key(key(KeyCode::Tab), &ctx);
        step.handle_key(key(KeyCode::Tab), &ctx);
        match step.handle_key(chr('r'), &ctx).as_slice() {
            [StepEvent::Dispatch(DraftAction::SetStakeholderStatus { id, status })] => {
                assert_eq!(*id, draft.stakeholders[0].id);
                assert_eq!(*status, ApprovalStatus::Rejected);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
