//! Asset service
//!
//! Portfolio lookups go to the catalog. The screening universe is the
//! built-in list followed by every asset the user imported.

use tracing::{debug, info};

use crate::catalog::{fixtures, Catalog};
use crate::error::DealResult;
use crate::models::{Asset, Building, Estate};
use crate::storage::Storage;

use super::import::ImportReport;

pub struct AssetService<'a> {
    catalog: &'a Catalog,
    storage: &'a Storage,
}

impl<'a> AssetService<'a> {
    pub fn new(catalog: &'a Catalog, storage: &'a Storage) -> Self {
        Self { catalog, storage }
    }

    /// Assets held in the portfolio
    pub fn portfolio(&self) -> &'a [Asset] {
        self.catalog.assets()
    }

    pub fn get(&self, id: &str) -> DealResult<&'a Asset> {
        self.catalog.asset(id)
    }

    pub fn building(&self, asset_id: &str, building_id: &str) -> DealResult<&'a Building> {
        self.catalog.building(asset_id, building_id)
    }

    pub fn estate(
        &self,
        asset_id: &str,
        building_id: &str,
        estate_id: &str,
    ) -> DealResult<&'a Estate> {
        self.catalog.estate(asset_id, building_id, estate_id)
    }

    /// Built-in screening candidates followed by imported ones
    pub fn screening_universe(&self) -> DealResult<Vec<Asset>> {
        let mut assets = self.catalog.screening_assets().to_vec();
        let imported = self.storage.assets.get_all()?;
        debug!(imported = imported.len(), "Loaded screening universe");
        assets.extend(imported);
        Ok(assets)
    }

    /// Store the successfully parsed rows of an import
    pub fn save_imported(&self, report: &ImportReport) -> DealResult<usize> {
        if report.imported.is_empty() {
            return Ok(0);
        }
        let count = report.imported.len();
        self.storage.assets.append(report.imported.clone())?;
        self.storage.assets.save()?;
        info!(count, errors = report.errors.len(), "Stored imported assets");
        Ok(count)
    }
}

/// Append the bulk-upload placeholder asset to a visible screening list
///
/// The new asset gets the next free numeric id.
pub fn append_bulk_upload(list: &mut Vec<Asset>) -> &Asset {
    let next_id = list
        .iter()
        .filter_map(|a| a.id.as_str().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    let index = list.len();
    list.push(fixtures::bulk_upload_asset(&next_id.to_string()));
    &list[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DealDeskPaths;
    use crate::models::{AssetSource, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_screening_universe_includes_imports() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let service = AssetService::new(&catalog, &storage);
        assert_eq!(service.screening_universe().unwrap().len(), 5);

        let report = ImportReport {
            imported: vec![Asset::new(
                "imp-1",
                "Wedding Lofts",
                "Berlin, Germany",
                "Multi Family Home",
                Money::from_euros(3_200_000),
                9.1,
            )],
            errors: Vec::new(),
        };
        assert_eq!(service.save_imported(&report).unwrap(), 1);

        let universe = service.screening_universe().unwrap();
        assert_eq!(universe.len(), 6);
        assert_eq!(universe[5].name, "Wedding Lofts");
    }

    #[test]
    fn test_nested_lookups() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let service = AssetService::new(&catalog, &storage);

        assert_eq!(service.portfolio().len(), 2);
        assert_eq!(service.estate("1", "b1", "e1").unwrap().unit_number, "101");
        assert!(service.building("2", "b1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_bulk_upload_takes_next_id() {
        let mut list = fixtures::screening_assets();
        let added = append_bulk_upload(&mut list);
        assert_eq!(added.id.as_str(), "6");
        assert_eq!(added.source, AssetSource::Upload);
        assert_eq!(added.source.to_string(), "Manually Uploaded");
        assert_eq!(list.len(), 6);
    }
}
