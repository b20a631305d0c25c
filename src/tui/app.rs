//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::settings::Settings;
use crate::error::{DealDeskError, DealResult};
use crate::models::TransactionRecord;
use crate::routes::Route;
use crate::services::{AssetService, TransactionService};
use crate::storage::Storage;
use crate::wizard::{GatePolicy, StepOutcome, WizardController};

use super::steps::{build_step_views, StepContext, StepEvent, StepView};
use super::widgets::{Notification, NotificationQueue};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Assets,
    Transactions,
    Wizard,
}

impl ActiveView {
    /// Sidebar entries, in display order
    pub const NAVIGATION: [ActiveView; 4] = [
        ActiveView::Dashboard,
        ActiveView::Assets,
        ActiveView::Transactions,
        ActiveView::Wizard,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Assets => "Assets",
            Self::Transactions => "Transactions",
            Self::Wizard => "New Transaction",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Something the user has to confirm first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Finalize,
    DiscardDraft,
}

impl ConfirmAction {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Finalize => "Finalize this transaction? It cannot be edited afterwards.",
            Self::DiscardDraft => "Discard the transaction in progress?",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(ConfirmAction),
    /// Detail page of an asset, building, estate or transaction
    Details(Route),
}

/// A running wizard: the controller plus one view per step
pub struct WizardState {
    pub controller: WizardController,
    pub views: Vec<Box<dyn StepView>>,
}

impl WizardState {
    /// Index of the current step's view
    pub fn current_index(&self) -> usize {
        usize::from(self.controller.step().number().saturating_sub(1))
    }

    pub fn current_view(&self) -> Option<&dyn StepView> {
        self.views.get(self.current_index()).map(|v| &**v)
    }
}

/// Main application state
pub struct App<'a> {
    pub catalog: &'a Catalog,
    pub storage: &'a Storage,
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_view: ActiveView,
    pub focused_panel: FocusedPanel,
    pub active_dialog: ActiveDialog,

    /// Selected navigation entry
    pub sidebar_index: usize,

    /// Selected row in the assets view
    pub asset_index: usize,

    /// Selected row in the transactions view
    pub transaction_index: usize,

    /// Selected child row in the details dialog
    pub dialog_index: usize,

    /// Scroll offset of the details dialog text
    pub dialog_scroll: u16,

    /// Sample and committed transactions
    pub records: Vec<TransactionRecord>,

    /// The wizard, while a transaction is being created
    pub wizard: Option<WizardState>,

    pub notifications: NotificationQueue,

    /// When to leave the wizard after a finalize
    pub redirect_at: Option<Instant>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog, storage: &'a Storage, settings: &'a Settings) -> Self {
        let records = TransactionService::new(catalog, storage)
            .list()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load transactions");
                catalog.transactions().to_vec()
            });

        Self {
            catalog,
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            sidebar_index: 0,
            asset_index: 0,
            transaction_index: 0,
            dialog_index: 0,
            dialog_scroll: 0,
            records,
            wizard: None,
            notifications: NotificationQueue::new(),
            redirect_at: None,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        debug!(title = %notification.title, message = %notification.message, "notification");
        self.notifications.push(notification);
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.active_dialog = ActiveDialog::None;
        self.clear_status();
        if let Some(index) = ActiveView::NAVIGATION.iter().position(|v| *v == view) {
            self.sidebar_index = index;
        }
        if view == ActiveView::Wizard && self.wizard.is_none() {
            self.start_wizard();
        }
    }

    /// Reload the transaction list
    pub fn refresh_records(&mut self) {
        match TransactionService::new(self.catalog, self.storage).list() {
            Ok(records) => {
                self.records = records;
                if self.transaction_index >= self.records.len() {
                    self.transaction_index = self.records.len().saturating_sub(1);
                }
            }
            Err(e) => self.notify(Notification::error(format!("Failed to load transactions: {}", e))),
        }
    }

    /// Open the wizard on step 1 with an empty draft
    pub fn start_wizard(&mut self) {
        let universe = match AssetService::new(self.catalog, self.storage).screening_universe() {
            Ok(universe) => universe,
            Err(e) => {
                self.notify(Notification::error(format!(
                    "Imported assets unavailable: {}",
                    e
                )));
                self.catalog.screening_assets().to_vec()
            }
        };

        let controller = WizardController::new(GatePolicy::from_setting(
            self.settings.validation_gating,
        ))
        .with_redirect_delay(Duration::from_millis(self.settings.finalize_redirect_ms));

        info!(draft = %controller.draft().id, "Started transaction wizard");
        self.wizard = Some(WizardState {
            controller,
            views: build_step_views(universe),
        });
        self.redirect_at = None;
        self.active_view = ActiveView::Wizard;
        self.active_dialog = ActiveDialog::None;
        self.sidebar_index = 3;
    }

    /// Drop the wizard and its draft
    pub fn discard_wizard(&mut self) {
        if let Some(wizard) = self.wizard.take() {
            info!(draft = %wizard.controller.draft().id, "Discarded transaction draft");
        }
        self.redirect_at = None;
        self.switch_view(ActiveView::Dashboard);
    }

    /// Path of what is on screen
    pub fn current_route(&self) -> Route {
        if let ActiveDialog::Details(route) = &self.active_dialog {
            return route.clone();
        }
        match self.active_view {
            ActiveView::Dashboard => Route::Dashboard,
            ActiveView::Assets => Route::Assets,
            ActiveView::Transactions => Route::Transactions,
            ActiveView::Wizard => Route::NewTransaction,
        }
    }

    /// Navigate to a route
    ///
    /// Ids are checked before anything changes; an unknown id leaves the
    /// screen as it was.
    pub fn open_route(&mut self, route: Route) -> DealResult<()> {
        match &route {
            Route::Dashboard => self.switch_view(ActiveView::Dashboard),
            Route::Assets => self.switch_view(ActiveView::Assets),
            Route::Transactions => self.switch_view(ActiveView::Transactions),
            Route::NewTransaction => {
                if self.wizard.is_none() {
                    self.start_wizard();
                } else {
                    self.switch_view(ActiveView::Wizard);
                }
            }
            Route::Asset(a) => {
                self.catalog.asset(a.as_str())?;
                self.show_asset_details(a.as_str(), route.clone());
            }
            Route::Building(a, b) => {
                self.catalog.building(a.as_str(), b.as_str())?;
                self.show_asset_details(a.as_str(), route.clone());
            }
            Route::Estate(a, b, e) => {
                self.catalog.estate(a.as_str(), b.as_str(), e.as_str())?;
                self.show_asset_details(a.as_str(), route.clone());
            }
            Route::Transaction(id) => {
                let record = TransactionService::new(self.catalog, self.storage).get(id.as_str())?;
                if !self.records.iter().any(|r| r.id == record.id) {
                    self.refresh_records();
                }
                self.active_view = ActiveView::Transactions;
                self.sidebar_index = 2;
                if let Some(index) = self.records.iter().position(|r| r.id == record.id) {
                    self.transaction_index = index;
                }
                self.open_details(route.clone());
            }
        }
        debug!(route = %route, "Navigated");
        Ok(())
    }

    fn show_asset_details(&mut self, asset_id: &str, route: Route) {
        self.active_view = ActiveView::Assets;
        self.sidebar_index = 1;
        if let Some(index) = self
            .catalog
            .assets()
            .iter()
            .position(|a| a.id.as_str() == asset_id)
        {
            self.asset_index = index;
        }
        self.open_details(route);
    }

    pub fn open_details(&mut self, route: Route) {
        self.active_dialog = ActiveDialog::Details(route);
        self.dialog_index = 0;
        self.dialog_scroll = 0;
    }

    /// Close the active dialog
    ///
    /// A building or estate page goes back to the page above it.
    pub fn close_dialog(&mut self) {
        let parent = match &self.active_dialog {
            ActiveDialog::Details(route @ (Route::Building(..) | Route::Estate(..))) => {
                route.parent()
            }
            _ => None,
        };
        match parent {
            Some(route) => self.open_details(route),
            None => self.active_dialog = ActiveDialog::None,
        }
    }

    /// Child pages listed in a details dialog
    pub fn detail_children(&self, route: &Route) -> Vec<(String, Route)> {
        match route {
            Route::Asset(a) => self
                .catalog
                .asset(a.as_str())
                .map(|asset| {
                    asset
                        .buildings
                        .iter()
                        .map(|b| {
                            (
                                format!("{} ({} units)", b.name, b.units),
                                Route::Building(a.clone(), b.id.clone()),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default(),
            Route::Building(a, b) => self
                .catalog
                .building(a.as_str(), b.as_str())
                .map(|building| {
                    building
                        .estates
                        .iter()
                        .map(|e| {
                            (
                                format!("Unit {} ({})", e.unit_number, e.occupancy),
                                Route::Estate(a.clone(), b.clone(), e.id.clone()),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Apply what a wizard step asked for
    pub fn apply_step_events(&mut self, events: Vec<StepEvent>) {
        for event in events {
            match event {
                StepEvent::Dispatch(action) => {
                    let Some(wizard) = self.wizard.as_mut() else {
                        continue;
                    };
                    if let Err(e) = wizard.controller.dispatch(action) {
                        self.notify(Notification::error(e.to_string()));
                    }
                }
                StepEvent::Notify(notification) => self.notify(notification),
                StepEvent::Imported(report) => {
                    if let Err(e) =
                        AssetService::new(self.catalog, self.storage).save_imported(&report)
                    {
                        self.notify(Notification::error(format!(
                            "Imported assets were not saved: {}",
                            e
                        )));
                    }
                }
                StepEvent::RequestFinalize => {
                    self.active_dialog = ActiveDialog::Confirm(ConfirmAction::Finalize);
                }
            }
        }
    }

    /// Feed a key to the current wizard step
    pub fn step_key(&mut self, key: KeyEvent) {
        let events = match self.wizard.as_mut() {
            Some(WizardState { controller, views }) => {
                let index = usize::from(controller.step().number().saturating_sub(1));
                let ctx = StepContext {
                    draft: controller.draft(),
                    catalog: self.catalog,
                    settings: self.settings,
                };
                match views.get_mut(index) {
                    Some(view) => view.handle_key(key, &ctx),
                    None => Vec::new(),
                }
            }
            None => return,
        };
        self.apply_step_events(events);
    }

    /// Whether the current step has a text prompt open
    pub fn step_capturing_input(&self) -> bool {
        self.wizard
            .as_ref()
            .and_then(|w| w.current_view())
            .is_some_and(|v| v.is_capturing_input())
    }

    pub fn wizard_next(&mut self) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        if wizard.controller.draft().is_completed() {
            return;
        }
        match wizard.controller.next() {
            StepOutcome::Moved(step) => {
                self.set_status(format!("Step {}: {}", step.number(), step.title()));
            }
            StepOutcome::Unchanged(_) => {}
            StepOutcome::Blocked { step, missing } => {
                self.notify(
                    Notification::warning(format!("Missing: {}", missing.join(", ")))
                        .with_title(format!("Step {} incomplete", step.number())),
                );
            }
            StepOutcome::AwaitingConfirmation => {
                self.active_dialog = ActiveDialog::Confirm(ConfirmAction::Finalize);
            }
        }
    }

    pub fn wizard_previous(&mut self) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        if let StepOutcome::Moved(step) = wizard.controller.previous() {
            self.set_status(format!("Step {}: {}", step.number(), step.title()));
        }
    }

    /// Finalize the draft, store it and schedule the return to the dashboard
    pub fn finalize(&mut self) -> DealResult<()> {
        let wizard = self
            .wizard
            .as_mut()
            .ok_or_else(|| DealDeskError::Wizard("No transaction in progress".into()))?;

        let before = wizard.controller.draft().clone();
        let Some(outcome) = wizard.controller.finalize(true)? else {
            return Ok(());
        };
        let record = match TransactionService::new(self.catalog, self.storage)
            .commit(&outcome.draft)
        {
            Ok(record) => record,
            Err(e) => {
                // Keep the draft open so finalizing can be retried
                wizard.controller.replace(before);
                return Err(e);
            }
        };

        self.notify(
            Notification::success(format!("{} has been finalized", record.name))
                .with_title("Transaction Completed"),
        );
        self.refresh_records();
        self.redirect_at = Some(Instant::now() + outcome.redirect_after);
        Ok(())
    }

    /// Run the confirmed action
    pub fn confirm(&mut self, action: ConfirmAction) {
        self.active_dialog = ActiveDialog::None;
        match action {
            ConfirmAction::Finalize => {
                if let Err(e) = self.finalize() {
                    warn!(error = %e, "Finalize failed");
                    self.notify(Notification::error(e.to_string()));
                }
            }
            ConfirmAction::DiscardDraft => self.discard_wizard(),
        }
    }

    /// Periodic housekeeping: expire notifications and run a pending redirect
    pub fn tick(&mut self, now: Instant) {
        self.notifications.expire(now);
        if self.redirect_at.is_some_and(|at| now >= at) {
            self.redirect_at = None;
            self.wizard = None;
            self.switch_view(ActiveView::Dashboard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DealDeskPaths;
    use crate::models::{Money, SelectedAsset, Stakeholder, TransactionType};
    use crate::wizard::{DraftAction, WizardStep};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_open_route_and_back() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &storage, &settings);

        let route = Route::parse("/assets/1/buildings/b1/estates/e1").unwrap();
        app.open_route(route.clone()).unwrap();
        assert_eq!(app.active_view, ActiveView::Assets);
        assert_eq!(app.current_route(), route);

        app.close_dialog();
        assert_eq!(app.current_route().to_string(), "/assets/1/buildings/b1");
        app.close_dialog();
        assert_eq!(app.current_route().to_string(), "/assets/1");
        assert!(!app.detail_children(&app.current_route()).is_empty());
        app.close_dialog();
        assert_eq!(app.current_route(), Route::Assets);
    }

    #[test]
    fn test_unknown_route_keeps_screen() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &storage, &settings);

        let err = app.open_route(Route::parse("/assets/99").unwrap()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(app.current_route(), Route::Dashboard);

        app.open_route(Route::parse("/transactions/1").unwrap()).unwrap();
        assert_eq!(app.active_view, ActiveView::Transactions);
        assert_eq!(app.records[app.transaction_index].id.as_str(), "1");
    }

    #[test]
    fn test_blocked_step_notifies() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &storage, &settings);

        app.open_route(Route::NewTransaction).unwrap();
        assert!(app.wizard.is_some());
        app.wizard_next();
        let wizard = app.wizard.as_ref().unwrap();
        assert_eq!(wizard.controller.step(), WizardStep::FIRST);
        assert_eq!(app.notifications.len(), 1);
    }

    /// Fill every step and advance to the finalize confirmation
    fn ready_to_finalize(app: &mut App, catalog: &Catalog) {
        app.start_wizard();
        let assets: Vec<_> = catalog
            .screening_assets()
            .iter()
            .take(2)
            .map(SelectedAsset::from)
            .collect();
        app.apply_step_events(
            vec![
                DraftAction::SetTransactionType(TransactionType::Acquisition),
                DraftAction::SetName("Hamburg Harbour".into()),
                DraftAction::SetBudget(Some(Money::from_euros(15_000_000))),
                DraftAction::AddAssets(assets),
                DraftAction::SetClosingDate(NaiveDate::from_ymd_opt(2024, 10, 31)),
                DraftAction::AddStakeholder(Stakeholder::new(
                    "Michael Chen",
                    "Risk Manager",
                    "michael.chen@example.com",
                )),
            ]
            .into_iter()
            .map(StepEvent::Dispatch)
            .collect(),
        );

        for _ in 0..5 {
            app.wizard_next();
        }
        assert!(app.wizard.as_ref().unwrap().controller.step().is_last());
        app.wizard_next();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::Finalize)
        );
    }

    #[test]
    fn test_finalize_commits_and_redirects() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &storage, &settings);
        let before = app.records.len();

        ready_to_finalize(&mut app, &catalog);
        app.confirm(ConfirmAction::Finalize);
        assert_eq!(app.records.len(), before + 1);
        assert!(app.redirect_at.is_some());
        assert_eq!(app.active_view, ActiveView::Wizard);

        app.tick(Instant::now() + Duration::from_secs(60));
        assert!(app.wizard.is_none());
        assert_eq!(app.active_view, ActiveView::Dashboard);
    }

    #[test]
    fn test_failed_commit_keeps_draft_open() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &storage, &settings);
        let before = app.records.len();

        // A directory at the file path makes the save fail
        let blocker = storage.paths().transactions_file();
        std::fs::create_dir(&blocker).unwrap();

        ready_to_finalize(&mut app, &catalog);
        app.confirm(ConfirmAction::Finalize);

        let wizard = app.wizard.as_ref().unwrap();
        assert!(!wizard.controller.draft().is_completed());
        assert!(wizard.controller.step().is_last());
        assert!(app.redirect_at.is_none());
        assert_eq!(app.records.len(), before);
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(!app.notifications.is_empty());

        std::fs::remove_dir(&blocker).unwrap();
        app.wizard_next();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::Finalize)
        );
        app.confirm(ConfirmAction::Finalize);
        assert!(app.wizard.as_ref().unwrap().controller.draft().is_completed());
        assert_eq!(app.records.len(), before + 1);
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert!(app.redirect_at.is_some());
    }
}
