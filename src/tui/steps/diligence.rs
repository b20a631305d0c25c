//! Step 3: per-asset due-diligence tasks and documents

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::metrics::{diligence_progress, draft_progress};
use crate::models::{AssetDiligence, DocumentKind, Task, TaskStatus};
use crate::services::{document_from_path, reminder_message};
use crate::tui::layout::{split_columns, split_top};
use crate::tui::widgets::{Notification, TextInput};
use crate::wizard::{DraftAction, WizardStep};

use super::{
    cycle, edit_prompt, is_down, is_up, parse_date, render_prompt, step_block, PromptKey,
    StepContext, StepEvent, StepView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Assign,
    DueDate,
    Upload,
}

pub struct DiligenceStep {
    asset_index: usize,
    task_index: usize,
    document_kind: DocumentKind,
    prompt: Option<(PromptKind, TextInput)>,
}

impl DiligenceStep {
    pub fn new() -> Self {
        Self {
            asset_index: 0,
            task_index: 0,
            document_kind: DocumentKind::default(),
            prompt: None,
        }
    }

    fn current<'a>(&self, ctx: &StepContext<'a>) -> Option<(&'a AssetDiligence, &'a Task)> {
        let diligence = ctx.draft.diligence.get(self.asset_index)?;
        let task = diligence.tasks.get(self.task_index)?;
        Some((diligence, task))
    }

    fn open_prompt(&mut self, kind: PromptKind, task: &Task) {
        let input = match kind {
            PromptKind::Assign => TextInput::new()
                .label("Assignee email")
                .content(task.assignee.clone().unwrap_or_default()),
            PromptKind::DueDate => TextInput::new()
                .label("Due date")
                .placeholder("YYYY-MM-DD")
                .content(
                    task.due_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                ),
            PromptKind::Upload => TextInput::new()
                .label(format!("{} document", self.document_kind))
                .placeholder("path/to/file.pdf"),
        };
        self.prompt = Some((kind, input.focused(true)));
    }

    fn submit(&self, kind: PromptKind, value: &str, ctx: &StepContext) -> Vec<StepEvent> {
        let Some((diligence, task)) = self.current(ctx) else {
            return Vec::new();
        };
        let asset_id = diligence.asset_id.clone();
        let task_id = task.id;

        let result = match kind {
            PromptKind::Assign => Ok(DraftAction::AssignTask {
                asset_id,
                task_id,
                assignee: Some(value.to_string()).filter(|v| !v.is_empty()),
            }),
            PromptKind::DueDate => parse_date(value).map(|due_date| DraftAction::SetTaskDueDate {
                asset_id,
                task_id,
                due_date,
            }),
            PromptKind::Upload if value.is_empty() => return Vec::new(),
            PromptKind::Upload => {
                document_from_path(Path::new(value), self.document_kind, Some(task_id))
                    .map(|document| DraftAction::AttachDocument { asset_id, document })
                    .map_err(|e| e.to_string())
            }
        };

        match result {
            Ok(action @ DraftAction::AttachDocument { .. }) => vec![
                StepEvent::Dispatch(action),
                StepEvent::Notify(Notification::success("Document uploaded")),
            ],
            Ok(action) => vec![StepEvent::Dispatch(action)],
            Err(message) => vec![StepEvent::Notify(Notification::error(message))],
        }
    }

    fn render_assets(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let mut spans = vec![Span::styled(
            format!("Overall {:.0}%  ", draft_progress(&ctx.draft.diligence)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )];
        for (i, diligence) in ctx.draft.diligence.iter().enumerate() {
            let name = ctx
                .draft
                .selected_assets
                .iter()
                .find(|a| a.id == diligence.asset_id)
                .map(|a| a.name.as_str())
                .unwrap_or(diligence.asset_id.as_str());
            let style = if i == self.asset_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(
                format!(" {} ({:.0}%) ", name, diligence_progress(&diligence.tasks)),
                style,
            ));
        }
        let lines = vec![
            Line::from(spans),
            Line::styled(
                format!("Upload type: {}", self.document_kind),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_tasks(&self, frame: &mut Frame, area: Rect, diligence: &AssetDiligence, date_format: &str) {
        let header = Row::new(vec!["Task", "Status", "Assignee", "Due", "Docs"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = diligence
            .tasks
            .iter()
            .map(|task| {
                let docs = diligence
                    .documents
                    .iter()
                    .filter(|d| d.task_id == Some(task.id))
                    .count();
                let status_color = match task.status {
                    TaskStatus::Completed => Color::Green,
                    TaskStatus::InProgress => Color::Yellow,
                    TaskStatus::NotStarted => Color::DarkGray,
                };
                Row::new(vec![
                    Cell::from(task.name.clone()),
                    Cell::from(task.status.to_string())
                        .style(Style::default().fg(status_color)),
                    Cell::from(task.assignee.clone().unwrap_or_default()),
                    Cell::from(
                        task.due_date
                            .map(|d| d.format(date_format).to_string())
                            .unwrap_or_default(),
                    ),
                    Cell::from(docs.to_string()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(24),
                Constraint::Length(13),
                Constraint::Length(4),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::TOP).title(" Tasks "))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(Some(self.task_index));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_documents(&self, frame: &mut Frame, area: Rect, diligence: &AssetDiligence) {
        let items: Vec<ListItem> = if diligence.documents.is_empty() {
            vec![ListItem::new(Span::styled(
                "No documents uploaded",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            diligence
                .documents
                .iter()
                .map(|doc| {
                    ListItem::new(format!("{} ({}, {})", doc.name, doc.kind, doc.size_label()))
                })
                .collect()
        };
        let list = List::new(items).block(Block::default().borders(Borders::TOP).title(" Documents "));
        frame.render_widget(list, area);
    }
}

impl Default for DiligenceStep {
    fn default() -> Self {
        Self::new()
    }
}

impl StepView for DiligenceStep {
    fn step(&self) -> WizardStep {
        WizardStep::DueDiligence
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let block = step_block(WizardStep::DueDiligence);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(diligence) = ctx.draft.diligence.get(self.asset_index) else {
            let text = Paragraph::new("No assets selected. Go back to screening to add some.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, inner);
            return;
        };

        let (header, body) = split_top(inner, 2);
        self.render_assets(frame, header, ctx);
        let (tasks, documents) = split_columns(body, 65);
        self.render_tasks(frame, tasks, diligence, &ctx.settings.date_format);
        self.render_documents(frame, documents, diligence);

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
                    self.submit(kind, &value, ctx)
                }
                PromptKey::Cancel => {
                    self.prompt = None;
                    Vec::new()
                }
                PromptKey::Editing => Vec::new(),
            };
        }

        let asset_count = ctx.draft.diligence.len();
        // Selection may point past the list after an asset was removed
        self.asset_index = self.asset_index.min(asset_count.saturating_sub(1));

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.asset_index = self.asset_index.saturating_sub(1);
                self.task_index = 0;
                return Vec::new();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.asset_index + 1 < asset_count {
                    self.asset_index += 1;
                    self.task_index = 0;
                }
                return Vec::new();
            }
            KeyCode::Char('t') => {
                self.document_kind = cycle(&DocumentKind::ALL, Some(self.document_kind), true);
                return Vec::new();
            }
            _ => {}
        }

        let Some((diligence, task)) = self.current(ctx) else {
            return Vec::new();
        };

        if is_down(&key) {
            self.task_index = (self.task_index + 1).min(diligence.tasks.len().saturating_sub(1));
            return Vec::new();
        }
        if is_up(&key) {
            self.task_index = self.task_index.saturating_sub(1);
            return Vec::new();
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => vec![StepEvent::Dispatch(DraftAction::SetTaskStatus {
                asset_id: diligence.asset_id.clone(),
                task_id: task.id,
                status: task.status.cycle(),
            })],
            KeyCode::Char('a') => {
                self.open_prompt(PromptKind::Assign, task);
                Vec::new()
            }
            KeyCode::Char('d') => {
                self.open_prompt(PromptKind::DueDate, task);
                Vec::new()
            }
            KeyCode::Char('u') => {
                self.open_prompt(PromptKind::Upload, task);
                Vec::new()
            }
            KeyCode::Char('r') => match reminder_message(task) {
                Ok(reminder) => vec![StepEvent::Notify(
                    Notification::info(reminder.message).with_title(reminder.title),
                )],
                Err(e) => vec![StepEvent::Notify(Notification::error(e.to_string()))],
            },
            _ => Vec::new(),
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.prompt.is_some()
    }

    fn key_hints(&self) -> &'static str {
        "h/l:Asset  j/k:Task  Space:Status  a:Assign  d:Due  t:Doc type  u:Upload  r:Remind"
    }
}
