//! Step 6: review the whole transaction and finalize it

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::display::percent;
use crate::metrics::{average_roi, draft_progress, risk_summary, total_value};
use crate::models::ApprovalStatus;
use crate::tui::layout::split_columns;
use crate::wizard::{WizardStep, NOT_SET};

use super::{section_title, step_block, StepContext, StepEvent, StepView};

pub struct ClosingStep;

impl ClosingStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClosingStep {
    fn default() -> Self {
        Self::new()
    }
}

impl StepView for ClosingStep {
    fn step(&self) -> WizardStep {
        WizardStep::Closing
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let draft = ctx.draft;
        let block = step_block(WizardStep::Closing);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let profiles = ctx.catalog.risk_profiles_for(&draft.selected_assets);
        let summary = risk_summary(&profiles);
        let not_set = || NOT_SET.to_string();

        let mut left = vec![
            section_title("Transaction"),
            Line::from(format!(
                "Name:            {}",
                if draft.name.is_empty() { not_set() } else { draft.name.clone() }
            )),
            Line::from(format!(
                "Type:            {}",
                draft.transaction_type.map(|t| t.to_string()).unwrap_or_else(not_set)
            )),
            Line::from(format!(
                "Budget:          {}",
                draft.budget.map(|b| b.format_whole()).unwrap_or_else(not_set)
            )),
            Line::from(format!(
                "Payment Method:  {}",
                draft.payment_method.map(|p| p.to_string()).unwrap_or_else(not_set)
            )),
            Line::from(format!(
                "Closing Date:    {}",
                draft
                    .closing_date
                    .map(|d| d.format(&ctx.settings.date_format).to_string())
                    .unwrap_or_else(not_set)
            )),
            Line::from(""),
            section_title("Figures"),
            Line::from(format!(
                "Total Value:       {}",
                total_value(&draft.selected_assets).format_whole()
            )),
            Line::from(format!(
                "Expected ROI:      {}",
                average_roi(&draft.selected_assets)
                    .map(|r| format!("{:.1}%", r))
                    .unwrap_or_else(not_set)
            )),
            Line::from(format!(
                "Total Investment:  {}",
                summary.total_investment.format_whole()
            )),
            Line::from(format!("Average Risk ROI:  {}", percent(summary.average_roi))),
            Line::from(format!(
                "Carbon Reduction:  {:.0} tons/year",
                summary.total_reduction
            )),
            Line::from(format!(
                "High Risk Assets:  {} of {}",
                summary.high_risk_count, summary.asset_count
            )),
            Line::from(format!(
                "Due Diligence:     {:.0}% complete",
                draft_progress(&draft.diligence)
            )),
        ];

        left.push(Line::from(""));
        left.push(if draft.is_completed() {
            Line::styled(
                "Transaction finalized",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(
                "Press f to finalize the transaction",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        });

        let mut right = vec![section_title("Assets")];
        if draft.selected_assets.is_empty() {
            right.push(Line::styled("No assets selected", Style::default().fg(Color::DarkGray)));
        }
        for asset in &draft.selected_assets {
            right.push(Line::from(format!(
                "{}  {}  {:.1}%",
                asset.name,
                asset.portfolio_value.format_whole(),
                asset.roi
            )));
        }
        right.push(Line::from(""));
        right.push(section_title("Approvals"));
        if draft.stakeholders.is_empty() {
            right.push(Line::styled("No approvers", Style::default().fg(Color::DarkGray)));
        }
        for s in &draft.stakeholders {
            let color = match s.status {
                ApprovalStatus::Approved => Color::Green,
                ApprovalStatus::Rejected => Color::Red,
                ApprovalStatus::Pending => Color::Yellow,
            };
            right.push(Line::from(vec![
                Span::styled(format!("{:<9}", s.status.to_string()), Style::default().fg(color)),
                Span::raw(format!(" {}", s)),
            ]));
        }

        let (left_area, right_area) = split_columns(inner, 50);
        frame.render_widget(Paragraph::new(left), left_area);
        frame.render_widget(Paragraph::new(right).wrap(Wrap { trim: true }), right_area);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &StepContext) -> Vec<StepEvent> {
        match key.code {
            KeyCode::Char('f') | KeyCode::Enter if !ctx.draft.is_completed() => {
                vec![StepEvent::RequestFinalize]
            }
            _ => Vec::new(),
        }
    }

    fn key_hints(&self) -> &'static str {
        "f:Finalize transaction"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::settings::Settings;
    use crate::models::TransactionDraft;
    use crate::wizard::{reduce, DraftAction};

    #[test]
    fn test_finalize_request_only_once() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut step = ClosingStep::new();

        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };
        assert!(matches!(
            step.handle_key(chr('f'), &ctx).as_slice(),
            [StepEvent::RequestFinalize]
        ));

        let done = reduce(draft.clone(), DraftAction::MarkCompleted);
        let ctx = StepContext { draft: &done, catalog: &catalog, settings: &settings };
        assert!(step.handle_key(chr('f'), &ctx).is_empty());
    }
}
