//! TUI Views module
//!
//! Contains the main views: dashboard, assets, transactions and the
//! transaction wizard, as well as the sidebar and status bar.

pub mod assets;
pub mod dashboard;
pub mod sidebar;
pub mod status_bar;
pub mod transactions;
pub mod wizard;

use ratatui::{widgets::Clear, Frame};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::Assets => assets::render(frame, app, layout.main),
        ActiveView::Transactions => transactions::render(frame, app, layout.main),
        ActiveView::Wizard => wizard::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    render_dialog(frame, app);

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, *action),
        ActiveDialog::Details(route) => dialogs::details::render(frame, app, route),
    }
}
