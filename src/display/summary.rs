//! Summary bar formatting

use crate::wizard::SummaryBar;

/// Render the bar as aligned `label: value` lines under the step title
pub fn format_summary_bar(bar: &SummaryBar) -> String {
    let width = bar
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = format!("{}\n", bar.step);
    for field in &bar.fields {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            format!("{}:", field.label),
            field.value,
            width = width + 1
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionDraft;
    use crate::wizard::WizardStep;

    #[test]
    fn test_summary_bar_lines() {
        let draft = TransactionDraft::new();
        let bar = SummaryBar::for_step(WizardStep::Initiation, &draft, &[], "%b %-d, %Y");
        let output = format_summary_bar(&bar);
        assert!(output.starts_with("Step 1 of 6: Initiate Transaction"));
        assert!(output.contains("Budget:"));
        assert!(output.contains("Not set"));
    }
}
