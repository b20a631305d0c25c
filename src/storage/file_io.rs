//! File I/O with atomic writes
//!
//! Every write goes to a sibling temp file that is synced and renamed over
//! the target, so readers see either the old or the new contents.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::DealDeskError;

/// Read JSON from a file, returning the default value if it does not exist
pub fn read_json<T, P>(path: P) -> Result<T, DealDeskError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| DealDeskError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DealDeskError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write pretty-printed JSON atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), DealDeskError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    atomic_write(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| DealDeskError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write a string atomically
pub fn write_string_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), DealDeskError> {
    atomic_write(path.as_ref(), |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| DealDeskError::Storage(format!("Failed to write data: {}", e)))
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn atomic_write<F>(path: &Path, write: F) -> Result<(), DealDeskError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), DealDeskError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DealDeskError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| DealDeskError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    write(&mut writer)?;

    writer
        .flush()
        .map_err(|e| DealDeskError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| DealDeskError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DealDeskError::Storage(format!("Failed to rename temp file: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Ledger {
        names: Vec<String>,
    }

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: Ledger = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(data, Ledger::default());
    }

    #[test]
    fn test_json_round_trip_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("ledger.json");
        let data = Ledger {
            names: vec!["Kreuzberg".into()],
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(!temp_dir.path().join("nested").join("ledger.json.tmp").exists());

        let loaded: Ledger = read_json(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_write_string() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.yaml");
        write_string_atomic(&path, "name: Berlin\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: Berlin\n");
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        let err = read_json::<Ledger, _>(&path).unwrap_err();
        assert!(matches!(err, DealDeskError::Storage(_)));
    }
}
