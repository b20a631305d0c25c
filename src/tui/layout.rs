//! Layout definitions for the TUI
//!
//! Sidebar, main panel and status bar, plus the wizard's split of the main
//! panel and helpers for centered dialogs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub sidebar: Rect,
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(40)])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

pub struct SidebarLayout {
    pub header: Rect,
    pub navigation: Rect,
    pub portfolio: Rect,
}

impl SidebarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(6),
            ])
            .split(area);

        Self {
            header: chunks[0],
            navigation: chunks[1],
            portfolio: chunks[2],
        }
    }
}

/// Main panel split while the transaction wizard is open
pub struct WizardLayout {
    /// Step indicator
    pub steps: Rect,
    /// Cross-step summary bar
    pub summary: Rect,
    /// Active step view
    pub content: Rect,
    /// Key hints for the wizard
    pub footer: Rect,
}

impl WizardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            steps: chunks[0],
            summary: chunks[1],
            content: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Split an area into a top part of `top` rows and the rest
pub fn split_top(area: Rect, top: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top), Constraint::Min(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split an area into two columns by percentage
pub fn split_columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, 28);
        assert_eq!(layout.main.width, 92);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_centered_fixed_clamps() {
        let area = centered_rect_fixed(60, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(area, Rect::new(0, 0, 40, 8));
        let area = centered_rect_fixed(20, 4, Rect::new(0, 0, 40, 8));
        assert_eq!(area, Rect::new(10, 2, 20, 4));
    }
}
