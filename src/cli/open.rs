//! Open a route path from the command line
//!
//! Renders the same view the TUI shows for the path.

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::settings::Settings;
use crate::display::{
    format_asset_details, format_asset_list, format_building_details, format_estate_details,
    format_summary_bar, format_transaction_details, format_transaction_list,
};
use crate::error::DealResult;
use crate::models::TransactionDraft;
use crate::reports::DashboardReport;
use crate::routes::Route;
use crate::services::TransactionService;
use crate::storage::Storage;
use crate::wizard::{SummaryBar, WizardStep};

pub fn handle_open_command(
    catalog: &Catalog,
    storage: &Storage,
    settings: &Settings,
    path: &str,
) -> DealResult<()> {
    let route = Route::parse(path)?;
    debug!(%route, "Opening route");
    print!("{}", render_route(catalog, storage, settings, &route)?);
    Ok(())
}

/// Text rendering of a route
pub fn render_route(
    catalog: &Catalog,
    storage: &Storage,
    settings: &Settings,
    route: &Route,
) -> DealResult<String> {
    let transactions = TransactionService::new(catalog, storage);
    let fmt = settings.date_format.as_str();

    let output = match route {
        Route::Dashboard => DashboardReport::generate(&transactions.list()?).format_terminal(fmt),
        Route::Assets => format_asset_list(catalog.assets()),
        Route::Asset(a) => format_asset_details(catalog.asset(a.as_str())?),
        Route::Building(a, b) => format_building_details(catalog.building(a.as_str(), b.as_str())?),
        Route::Estate(a, b, e) => format_estate_details(
            catalog.estate(a.as_str(), b.as_str(), e.as_str())?,
            fmt,
        ),
        Route::Transactions => format_transaction_list(&transactions.list()?, fmt),
        Route::Transaction(id) => {
            format_transaction_details(&transactions.get(id.as_str())?, fmt)
        }
        Route::NewTransaction => {
            let bar = SummaryBar::for_step(
                WizardStep::Initiation,
                &TransactionDraft::new(),
                &[],
                fmt,
            );
            format!(
                "{}\nThe transaction wizard is interactive. Run `dealdesk tui --route /transactions/new`.\n",
                format_summary_bar(&bar)
            )
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DealDeskPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Catalog, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, Catalog::builtin(), Settings::default())
    }

    #[test]
    fn test_render_nested_routes() {
        let (_temp_dir, storage, catalog, settings) = setup();
        let render = |path: &str| {
            render_route(&catalog, &storage, &settings, &Route::parse(path).unwrap())
        };

        assert!(render("/").unwrap().contains("Dashboard"));
        assert!(render("/assets/1").unwrap().contains("Kreuzberg"));
        assert!(render("/assets/1/buildings/b1")
            .unwrap()
            .contains("Bergmannstraße Building"));
        assert!(render("/assets/1/buildings/b1/estates/e2")
            .unwrap()
            .starts_with("Unit 102"));
        assert!(render("/transactions/new").unwrap().contains("Step 1 of 6"));
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let (_temp_dir, storage, catalog, settings) = setup();
        let err = render_route(
            &catalog,
            &storage,
            &settings,
            &Route::parse("/assets/9/buildings/b1").unwrap(),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
