//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::routes::Route;

use super::app::{ActiveDialog, ActiveView, App, ConfirmAction, FocusedPanel};
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.active_dialog != ActiveDialog::None {
        handle_dialog_key(app, key);
        return Ok(());
    }

    if app.active_view == ActiveView::Wizard
        && app.focused_panel == FocusedPanel::Main
        && app.wizard.is_some()
    {
        handle_wizard_key(app, key);
        return Ok(());
    }

    handle_normal_key(app, key);
    Ok(())
}

/// Keys while a wizard step has focus
fn handle_wizard_key(app: &mut App, key: KeyEvent) {
    // An open prompt gets everything, Esc included
    if app.step_capturing_input() {
        app.step_key(key);
        return;
    }

    match key.code {
        KeyCode::PageDown => app.wizard_next(),
        KeyCode::PageUp => app.wizard_previous(),
        KeyCode::Esc => {
            let completed = app
                .wizard
                .as_ref()
                .is_some_and(|w| w.controller.draft().is_completed());
            if !completed {
                app.active_dialog = ActiveDialog::Confirm(ConfirmAction::DiscardDraft);
            }
        }
        KeyCode::BackTab => app.focused_panel = FocusedPanel::Sidebar,
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.active_dialog = ActiveDialog::Help,
        _ => app.step_key(key),
    }
}

/// Keys outside dialogs and the wizard
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.active_dialog = ActiveDialog::Help;
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            app.switch_view(ActiveView::NAVIGATION[index]);
            return;
        }
        KeyCode::Char('n') => {
            open(app, Route::NewTransaction);
            app.focused_panel = FocusedPanel::Main;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focused_panel = match app.focused_panel {
                FocusedPanel::Sidebar => FocusedPanel::Main,
                FocusedPanel::Main => FocusedPanel::Sidebar,
            };
            return;
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    let count = ActiveView::NAVIGATION.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.sidebar_index = (app.sidebar_index + 1).min(count - 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_index = app.sidebar_index.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            let view = ActiveView::NAVIGATION[app.sidebar_index.min(count - 1)];
            app.switch_view(view);
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
}

fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    match app.active_view {
        ActiveView::Dashboard => {
            if key.code == KeyCode::Enter {
                app.switch_view(ActiveView::Transactions);
            }
        }
        ActiveView::Assets => {
            let count = app.catalog.assets().len();
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    app.asset_index = move_down(app.asset_index, count);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.asset_index = app.asset_index.saturating_sub(1);
                }
                KeyCode::Enter => {
                    if let Some(asset) = app.catalog.assets().get(app.asset_index) {
                        let route = Route::Asset(asset.id.clone());
                        open(app, route);
                    }
                }
                _ => {}
            }
        }
        ActiveView::Transactions => {
            let count = app.records.len();
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    app.transaction_index = move_down(app.transaction_index, count);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.transaction_index = app.transaction_index.saturating_sub(1);
                }
                KeyCode::Enter => {
                    if let Some(record) = app.records.get(app.transaction_index) {
                        let route = Route::Transaction(record.id.clone());
                        open(app, route);
                    }
                }
                _ => {}
            }
        }
        // Reached only when no wizard is running
        ActiveView::Wizard => {
            if key.code == KeyCode::Enter {
                app.start_wizard();
            }
        }
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::None => {}
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                app.active_dialog = ActiveDialog::None;
            }
        }
        ActiveDialog::Confirm(action) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm(action),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.active_dialog = ActiveDialog::None;
            }
            _ => {}
        },
        ActiveDialog::Details(route) => {
            let children = app.detail_children(&route);
            match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                    app.close_dialog();
                }
                KeyCode::Char('q') => app.active_dialog = ActiveDialog::None,
                KeyCode::Char('j') | KeyCode::Down => {
                    app.dialog_index = move_down(app.dialog_index, children.len());
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.dialog_index = app.dialog_index.saturating_sub(1);
                }
                KeyCode::PageDown => app.dialog_scroll = app.dialog_scroll.saturating_add(5),
                KeyCode::PageUp => app.dialog_scroll = app.dialog_scroll.saturating_sub(5),
                KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                    if let Some((_, child)) = children.into_iter().nth(app.dialog_index) {
                        app.open_details(child);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Navigate, reporting a failed lookup as a notification
fn open(app: &mut App, route: Route) {
    if let Err(e) = app.open_route(route) {
        app.notify(Notification::error(e.to_string()));
    }
}

fn move_down(index: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (index + 1).min(count - 1)
    }
}
