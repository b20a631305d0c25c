//! Step 4: risk aggregates for the selected assets and the what-if simulation

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::display::percent;
use crate::metrics::{risk_estimate, risk_summary, simulate};
use crate::models::{Money, RiskLevel, RiskProfile, SimulationInputs};
use crate::tui::layout::{split_columns, split_top};
use crate::tui::widgets::{Notification, TextInput};
use crate::wizard::{DraftAction, WizardStep};

use super::{
    edit_prompt, field_line, is_down, is_up, render_prompt, section_title, step_block, PromptKey,
    StepContext, StepEvent, StepView,
};

const INVESTMENT_STEP: Money = Money::from_euros(50_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slider {
    Investment,
    EnergySavings,
    CarbonReduction,
}

impl Slider {
    const ALL: [Slider; 3] = [Self::Investment, Self::EnergySavings, Self::CarbonReduction];

    fn label(&self) -> &'static str {
        match self {
            Self::Investment => "Initial Investment",
            Self::EnergySavings => "Energy Savings",
            Self::CarbonReduction => "Carbon Reduction",
        }
    }
}

pub struct RiskStep {
    inputs: SimulationInputs,
    slider: usize,
    prompt: Option<TextInput>,
}

impl RiskStep {
    pub fn new() -> Self {
        Self {
            inputs: SimulationInputs::default(),
            slider: 0,
            prompt: None,
        }
    }

    pub fn inputs(&self) -> &SimulationInputs {
        &self.inputs
    }

    fn current(&self) -> Slider {
        Slider::ALL[self.slider]
    }

    fn adjust(&mut self, direction: i8) {
        match self.current() {
            Slider::Investment => {
                let next = if direction > 0 {
                    self.inputs.investment + INVESTMENT_STEP
                } else {
                    self.inputs.investment - INVESTMENT_STEP
                };
                self.inputs.investment = if next.is_negative() { Money::zero() } else { next };
            }
            Slider::EnergySavings => {
                self.inputs.energy_savings_pct =
                    (self.inputs.energy_savings_pct + f64::from(direction)).clamp(0.0, 100.0);
            }
            Slider::CarbonReduction => {
                self.inputs.carbon_reduction_pct =
                    (self.inputs.carbon_reduction_pct + f64::from(direction)).clamp(0.0, 100.0);
            }
        }
    }

    fn set_typed(&mut self, value: &str) -> Option<StepEvent> {
        let slider = self.current();
        let result = match slider {
            Slider::Investment => Money::parse(value)
                .map_err(|e| e.to_string())
                .and_then(|m| {
                    if m.is_negative() {
                        Err("Investment cannot be negative".to_string())
                    } else {
                        Ok(m)
                    }
                })
                .map(|m| self.inputs.investment = m),
            Slider::EnergySavings | Slider::CarbonReduction => value
                .trim_end_matches('%')
                .parse::<f64>()
                .map_err(|_| format!("Not a number: {}", value))
                .map(|pct| {
                    let pct = pct.clamp(0.0, 100.0);
                    if slider == Slider::EnergySavings {
                        self.inputs.energy_savings_pct = pct;
                    } else {
                        self.inputs.carbon_reduction_pct = pct;
                    }
                }),
        };
        result.err().map(|e| StepEvent::Notify(Notification::error(e)))
    }

    fn render_profiles(&self, frame: &mut Frame, area: Rect, profiles: &[RiskProfile]) {
        let summary = risk_summary(profiles);
        let (summary_area, table_area) = split_top(area, 6);

        let lines = vec![
            section_title("Portfolio Risk"),
            Line::from(format!("Total Investment:  {}", summary.total_investment.format_whole())),
            Line::from(format!("Average ROI:       {}", percent(summary.average_roi))),
            Line::from(format!("Carbon Reduction:  {:.0} tons/year", summary.total_reduction)),
            Line::from(format!(
                "High Risk Assets:  {} of {}",
                summary.high_risk_count, summary.asset_count
            )),
        ];
        frame.render_widget(Paragraph::new(lines), summary_area);

        let header = Row::new(vec!["Asset", "Emissions", "Reduction", "Investment", "ROI", "Risk"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = profiles
            .iter()
            .map(|p| {
                let risk_color = match p.risk_level {
                    RiskLevel::High => Color::Red,
                    RiskLevel::Medium => Color::Yellow,
                    RiskLevel::Low => Color::Green,
                };
                Row::new(vec![
                    p.asset_name.clone(),
                    format!("{:.0} t", p.current_emissions),
                    format!("{:.0}%", p.potential_reduction),
                    p.required_investment.format_thousands(),
                    format!("{:.1}%", p.roi),
                    p.risk_level.to_string(),
                ])
                .style(Style::default().fg(risk_color))
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Length(6),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::TOP).title(" Decarbonization "));
        frame.render_widget(table, table_area);
    }

    fn render_simulation(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let result = simulate(&self.inputs);
        let mut lines = vec![section_title("Investment Simulation"), Line::from("")];
        for (i, slider) in Slider::ALL.iter().enumerate() {
            let value = match slider {
                Slider::Investment => self.inputs.investment.format_whole(),
                Slider::EnergySavings => format!("{:.0}%", self.inputs.energy_savings_pct),
                Slider::CarbonReduction => format!("{:.0}%", self.inputs.carbon_reduction_pct),
            };
            lines.push(field_line(slider.label(), value, i == self.slider, false));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Projected Annual ROI:  {:.1}%", result.projected_roi),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(format!(
            "Carbon Reduction:      {} tons CO2e/year",
            result.carbon_reduction_tons
        )));
        lines.push(Line::from(format!(
            "Payback Period:        {}",
            result
                .payback_years
                .map(|y| format!("{} years", y))
                .unwrap_or_else(|| "Never".into())
        )));
        if result.low_roi_warning {
            lines.push(Line::styled(
                "Warning: projected ROI is below 5%",
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(""));
        let saved = match &ctx.draft.risk {
            Some(estimate) => format!(
                "Saved estimate: {:.1}% ROI, {} t, {} potential",
                estimate.roi_estimate, estimate.carbon_reduction_tons, estimate.decarbonization_potential
            ),
            None => "No estimate saved yet".to_string(),
        };
        lines.push(Line::styled(saved, Style::default().fg(Color::DarkGray)));

        let block = Block::default().borders(Borders::LEFT);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Default for RiskStep {
    fn default() -> Self {
        Self::new()
    }
}

impl StepView for RiskStep {
    fn step(&self) -> WizardStep {
        WizardStep::RiskAssessment
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &StepContext) {
        let block = step_block(WizardStep::RiskAssessment);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let profiles = ctx.catalog.risk_profiles_for(&ctx.draft.selected_assets);
        let (left, right) = split_columns(inner, 55);
        self.render_profiles(frame, left, &profiles);
        self.render_simulation(frame, right, ctx);

        if let Some(input) = &self.prompt {
            render_prompt(frame, inner, input);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &StepContext) -> Vec<StepEvent> {
        if let Some(input) = self.prompt.as_mut() {
            return match edit_prompt(input, key) {
                PromptKey::Submit(value) => {
                    self.prompt = None;
                    self.set_typed(&value).into_iter().collect()
                }
                PromptKey::Cancel => {
                    self.prompt = None;
                    Vec::new()
                }
                PromptKey::Editing => Vec::new(),
            };
        }

        if is_down(&key) {
            self.slider = (self.slider + 1).min(Slider::ALL.len() - 1);
            return Vec::new();
        }
        if is_up(&key) {
            self.slider = self.slider.saturating_sub(1);
            return Vec::new();
        }

        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.adjust(1),
            KeyCode::Left | KeyCode::Char('h') => self.adjust(-1),
            KeyCode::Char('e') => {
                self.prompt = Some(
                    TextInput::new()
                        .label(self.current().label())
                        .focused(true),
                );
            }
            KeyCode::Enter | KeyCode::Char('s') => {
                return vec![
                    StepEvent::Dispatch(DraftAction::SetRiskEstimate(risk_estimate(&self.inputs))),
                    StepEvent::Notify(Notification::success("Risk estimate saved")),
                ];
            }
            _ => {}
        }
        Vec::new()
    }

    fn is_capturing_input(&self) -> bool {
        self.prompt.is_some()
    }

    fn key_hints(&self) -> &'static str {
        "j/k:Input  ←/→:Adjust  e:Type value  Enter:Save estimate"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::settings::Settings;
    use crate::models::TransactionDraft;

    #[test]
    fn test_sliders_clamp() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut step = RiskStep::new();
        step.handle_key(key(KeyCode::Right), &ctx);
        assert_eq!(step.inputs().investment, Money::from_euros(550_000));

        step.handle_key(key(KeyCode::Down), &ctx);
        for _ in 0..80 {
            step.handle_key(key(KeyCode::Right), &ctx);
        }
        assert_eq!(step.inputs().energy_savings_pct, 100.0);
    }

    #[test]
    fn test_save_estimate() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut step = RiskStep::new();
        let events = step.handle_key(key(KeyCode::Enter), &ctx);
        match events.first() {
            Some(StepEvent::Dispatch(DraftAction::SetRiskEstimate(estimate))) => {
                assert_eq!(estimate.roi_estimate, 30.0);
                assert_eq!(estimate.carbon_reduction_tons, 175);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_typed_percent() {
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let draft = TransactionDraft::new();
        let ctx = StepContext { draft: &draft, catalog: &catalog, settings: &settings };

        let mut step = RiskStep::new();
        step.handle_key(key(KeyCode::Down), &ctx);
        step.handle_key(key(KeyCode::Down), &ctx);
        step.handle_key(chr('e'), &ctx);
        for c in "20%".chars() {
            step.handle_key(chr(c), &ctx);
        }
        assert!(step.handle_key(key(KeyCode::Enter), &ctx).is_empty());
        assert_eq!(step.inputs().carbon_reduction_pct, 20.0);
    }
}
