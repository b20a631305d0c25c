//! Step 2: screen the asset universe and pick assets for the transaction
//!
//! The criteria are recorded on the draft but the list is never filtered by
//! them. Uploads append to the list this step shows.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::percent;
use crate::metrics::total_value;
use crate::models::{Asset, Money, Region, SelectedAsset};
use crate::services::{append_bulk_upload, AssetImporter};
use crate::tui::layout::split_top;
use crate::tui::widgets::{Notification, TextInput};
use crate::wizard::{DraftAction, WizardStep, NOT_SET};

use super::{
    cycle_optional, edit_prompt, is_down, is_up, render_prompt, step_block, PromptKey,
    StepContext, StepEvent, StepView,
};

const ROI_STEP: f64 = 0.5;

pub struct ScreeningStep {
    assets: Vec<Asset>,
    selected: usize,
    import_prompt: Option<TextInput>,
}

impl ScreeningStep {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            selected: 0,
            import_prompt: None,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    fn toggle(&self, ctx: &StepContext) -> Option<DraftAction> {
        let asset = self.assets.get(self.selected)?;
        Some(if ctx.draft.is_selected(&asset.id) {
            DraftAction::RemoveAsset(asset.id.clone())
        } else {
            DraftAction::AddAssets(vec![SelectedAsset::from(asset)])
        })
    }

    fn adjust_min_roi(&self, ctx: &StepContext, delta: f64) -> DraftAction {
        let mut criteria = ctx.draft.criteria.clone();
        criteria.roi.min = (criteria.roi.min + delta).clamp(0.0, criteria.roi.max);
        DraftAction::SetCriteria(criteria)
    }

    fn import(&mut self, path: &str) -> Vec<StepEvent> {
        if path.is_empty() {
            return Vec::new();
        }
        match AssetImporter::new().parse_file(&PathBuf::from(path)) {
            Ok(report) => {
                let mut events = Vec::new();
                let count = report.imported.len();
                if report.has_errors() {
                    events.push(StepEvent::Notify(Notification::warning(format!(
                        "{} row(s) skipped; first error on line {}",
                        report.errors.len(),
                        report.errors[0].line
                    ))));
                }
                self.assets.extend(report.imported.iter().cloned());
                events.push(StepEvent::Notify(
                    Notification::success(format!("{} asset(s) imported", count))
                        .with_title("Upload Complete"),
                ));
                events.push(StepEvent::Imported(report));
                events
            }
            Err(e) => vec![StepEvent::Notify(Notification::error(e.to_string()))],
        }
    }

    fn render_criteria(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let draft = ctx.draft;
        let c = &draft.criteria;
        let lines = vec![
            Line::from(format!(
                "Region: {}   Type: {}   Budget: {} - {}",
                draft.region.map(|r| r.to_string()).unwrap_or_else(|| NOT_SET.into()),
                draft.asset_type,
                c.budget_min.format_whole(),
                c.budget_max.format_whole(),
            )),
            Line::from(format!(
                "ROI {:.1}-{:.1}%   Occupancy {:.0}-{:.0}%   Tenant stability {:.0}-{:.0}%   Energy {:.0}-{:.0}%",
                c.roi.min,
                c.roi.max,
                c.occupancy.min,
                c.occupancy.max,
                c.tenant_stability.min,
                c.tenant_stability.max,
                c.energy_efficiency.min,
                c.energy_efficiency.max,
            )),
            Line::styled(
                format!(
                    "{} selected, {} total",
                    draft.selected_assets.len(),
                    total_value(&draft.selected_assets).format_whole()
                ),
                Style::default().fg(Color::Green),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl StepView for ScreeningStep {
    fn step(&self) -> WizardStep {
        WizardStep::AssetScreening
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let block = step_block(WizardStep::AssetScreening);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (criteria_area, table_area) = split_top(inner, 4);
        self.render_criteria(frame, criteria_area, ctx);

        let header = Row::new(vec!["", "Asset", "Location", "Value", "ROI", "Decarb.", "Liq.", "Match", "Source"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = self
            .assets
            .iter()
            .map(|asset| {
                let mark = if ctx.draft.is_selected(&asset.id) { "[x]" } else { "[ ]" };
                Row::new(vec![
                    mark.to_string(),
                    asset.name.clone(),
                    asset.location.clone(),
                    asset.portfolio_value.format_whole(),
                    format!("{:.1}%", asset.roi),
                    asset.decarbonization.to_string(),
                    asset.liquidity_rating.to_string(),
                    percent(asset.matching_score),
                    asset.source.to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(18),
                Constraint::Length(18),
                Constraint::Length(12),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Length(4),
                Constraint::Length(13),
                Constraint::Length(17),
            ],
        )
        .header(header)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

        let mut state = TableState::default();
        if !self.assets.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(table, table_area, &mut state);

        if let Some(input) = &self.import_prompt {
            render_prompt(frame, inner, input);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &StepContext) -> Vec<StepEvent> {
        if let Some(input) = self.import_prompt.as_mut() {
            return match edit_prompt(input, key) {
                PromptKey::Submit(path) => {
                    self.import_prompt = None;
                    self.import(&path)
                }
                PromptKey::Cancel => {
                    self.import_prompt = None;
                    Vec::new()
                }
                PromptKey::Editing => Vec::new(),
            };
        }

        if is_down(&key) {
            if self.selected + 1 < self.assets.len() {
                self.selected += 1;
            }
            return Vec::new();
        }
        if is_up(&key) {
            self.selected = self.selected.saturating_sub(1);
            return Vec::new();
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle(ctx).map(StepEvent::Dispatch).into_iter().collect()
            }
            KeyCode::Char('a') => {
                let batch: Vec<SelectedAsset> = self.assets.iter().map(SelectedAsset::from).collect();
                vec![StepEvent::Dispatch(DraftAction::AddAssets(batch))]
            }
            KeyCode::Char('r') => vec![StepEvent::Dispatch(DraftAction::SetRegion(
                cycle_optional(&Region::ALL, ctx.draft.region, true),
            ))],
            KeyCode::Char('+') => vec![StepEvent::Dispatch(self.adjust_min_roi(ctx, ROI_STEP))],
            KeyCode::Char('-') => vec![StepEvent::Dispatch(self.adjust_min_roi(ctx, -ROI_STEP))],
            KeyCode::Char('b') => {
                let budget = ctx.draft.budget.unwrap_or_else(Money::zero);
                vec![StepEvent::Dispatch(DraftAction::SetBudgetRange {
                    min: Money::zero(),
                    max: budget,
                })]
            }
            KeyCode::Char('u') => {
                let added = append_bulk_upload(&mut self.assets);
                let message = format!("{} added to the results", added.name);
                self.selected = self.assets.len() - 1;
                vec![StepEvent::Notify(
                    Notification::success(message).with_title("Upload Complete"),
                )]
            }
            KeyCode::Char('i') => {
                self.import_prompt = Some(
                    TextInput::new()
                        .label("CSV file")
                        .placeholder("path/to/assets.csv")
                        .focused(true),
                );
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.import_prompt.is_some()
    }

    fn key_hints(&self) -> &'static str {
        "Space:Select  a:All  r:Region  +/-:Min ROI  b:Budget range  u:Bulk upload  i:Import CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::catalog::{fixtures, Catalog};
    use crate::config::settings::Settings;
    use crate::models::TransactionDraft;
    use crate::services::CSV_HEADER;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_toggle_adds_then_removes() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut step = ScreeningStep::new(fixtures::screening_assets());
        let first = step.assets()[0].clone();

        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };
        match step.handle_key(chr(' '), &ctx).as_slice() {
            [StepEvent::Dispatch(DraftAction::AddAssets(batch))] => {
                assert_eq!(batch.len(), 1);
                assert_eq!(batch[0].id, first.id);
            }
            other => panic!("unexpected {:?}", other),
        }

        let mut draft = TransactionDraft::new();
        draft.selected_assets.push(SelectedAsset::from(&first));
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };
        match step.handle_key(chr(' '), &ctx).as_slice() {
            [StepEvent::Dispatch(DraftAction::RemoveAsset(id))] => assert_eq!(*id, first.id),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bulk_upload_extends_list() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut step = ScreeningStep::new(fixtures::screening_assets());
        let events = step.handle_key(chr('u'), &ctx);
        assert_eq!(step.assets().len(), 6);
        assert!(matches!(events.as_slice(), [StepEvent::Notify(_)]));
    }

    #[test]
    fn test_csv_import() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", CSV_HEADER).unwrap();
        writeln!(file, "Moabit Apartments,Berlin,,2100000,8.7,,,,").unwrap();

        let mut step = ScreeningStep::new(fixtures::screening_assets());
        step.handle_key(chr('i'), &ctx);
        assert!(step.is_capturing_input());
        for c in file.path().to_string_lossy().chars() {
            step.handle_key(chr(c), &ctx);
        }
        let events = step.handle_key(key(KeyCode::Enter), &ctx);
        assert_eq!(step.assets().len(), 6);
        assert!(events.iter().any(|e| matches!(e, StepEvent::Imported(r) if r.imported.len() == 1)));
    }
}
