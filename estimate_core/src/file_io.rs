//! # File I/O Module
//!
//! Reads and writes reference tables as plain JSON files:
//!
//! ```text
//! <data dir>/
//! ├── services.json         [{ "id": 1, "name": "...", "rate": 100 }, ...]
//! ├── qualities.json        [{ "id": 1, "label": "High", "percentage": 100 }, ...]
//! ├── urgencies.json        [{ "id": 1, "label": "Very Urgent", "percentage": 200 }, ...]
//! └── quality_factors.json  optional; built-in factors are used when absent
//! ```
//!
//! Saves are atomic per file: write to `.tmp`, sync, rename.
//!
//! ## Example
//!
//! ```rust,no_run
//! use estimate_core::file_io::{load_rate_tables, save_rate_tables};
//! use estimate_core::rates::RateTables;
//! use std::path::Path;
//!
//! let dir = Path::new("rates");
//! save_rate_tables(&RateTables::builtin(), dir)?;
//! let tables = load_rate_tables(dir)?;
//! # Ok::<(), estimate_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::rates::{builtin_quality_factors, RateTables};

pub const SERVICES_FILE: &str = "services.json";
pub const QUALITIES_FILE: &str = "qualities.json";
pub const URGENCIES_FILE: &str = "urgencies.json";
pub const QUALITY_FACTORS_FILE: &str = "quality_factors.json";

/// Load all reference tables from a data directory.
///
/// # Returns
///
/// * `Ok(RateTables)` - Tables loaded and indexed
/// * `Err(CalcError::FileError)` - A required file could not be read
/// * `Err(CalcError::SerializationError)` - A file is not a valid record array
/// * `Err(CalcError::InvalidInput)` - A table repeats an id
pub fn load_rate_tables(dir: &Path) -> CalcResult<RateTables> {
    let services = read_records(&dir.join(SERVICES_FILE))?;
    let qualities = read_records(&dir.join(QUALITIES_FILE))?;
    let urgencies = read_records(&dir.join(URGENCIES_FILE))?;

    let factors_path = dir.join(QUALITY_FACTORS_FILE);
    let quality_factors = match read_records(&factors_path) {
        Ok(records) => records,
        Err(CalcError::FileError { .. }) if !factors_path.exists() => {
            debug!(path = %factors_path.display(), "no quality factor file, using built-in factors");
            builtin_quality_factors()
        }
        Err(e) => return Err(e),
    };

    let tables = RateTables::from_records(services, qualities, urgencies, quality_factors)?;
    info!(
        dir = %dir.display(),
        services = tables.services().count(),
        qualities = tables.qualities().count(),
        urgencies = tables.urgencies().count(),
        "loaded rate tables"
    );
    Ok(tables)
}

/// Write all reference tables into a data directory, creating it if needed.
pub fn save_rate_tables(tables: &RateTables, dir: &Path) -> CalcResult<()> {
    fs::create_dir_all(dir).map_err(|e| {
        CalcError::file_error("create directory", dir.display().to_string(), e.to_string())
    })?;

    write_json_atomic(&dir.join(SERVICES_FILE), &tables.services().collect::<Vec<_>>())?;
    write_json_atomic(&dir.join(QUALITIES_FILE), &tables.qualities().collect::<Vec<_>>())?;
    write_json_atomic(&dir.join(URGENCIES_FILE), &tables.urgencies().collect::<Vec<_>>())?;
    write_json_atomic(
        &dir.join(QUALITY_FACTORS_FILE),
        &tables.quality_factors().collect::<Vec<_>>(),
    )?;

    info!(dir = %dir.display(), "saved rate tables");
    Ok(())
}

fn read_records<T: DeserializeOwned>(path: &Path) -> CalcResult<Vec<T>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let operation = if e.kind() == ErrorKind::NotFound { "open" } else { "read" };
        CalcError::file_error(operation, path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

/// Serialize to a `.tmp` sibling, sync, then rename over `path`.
fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_data_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join(format!("estimate_test_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = temp_data_dir("roundtrip");
        let tables = RateTables::builtin();

        save_rate_tables(&tables, &dir).unwrap();
        let loaded = load_rate_tables(&dir).unwrap();
        assert_eq!(loaded, tables);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_leaves_no_tmp_files() {
        let dir = temp_data_dir("atomic");
        save_rate_tables(&RateTables::builtin(), &dir).unwrap();

        for name in [SERVICES_FILE, QUALITIES_FILE, URGENCIES_FILE, QUALITY_FACTORS_FILE] {
            let path = dir.join(name);
            assert!(path.exists());
            assert!(!path.with_extension("json.tmp").exists());
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_legacy_files_without_factors() {
        let dir = temp_data_dir("legacy");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(SERVICES_FILE),
            r#"[{"id": 1, "name": "Architectural design", "rate": 100}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(QUALITIES_FILE),
            r#"[{"id": 1, "quality": "High", "percentage": 100},
                {"id": 2, "quality": "Standard", "percentage": 50}]"#,
        )
        .unwrap();
        fs::write(
            dir.join(URGENCIES_FILE),
            r#"[{"id": 1, "urgency": "Very Urgent", "percentage": 200}]"#,
        )
        .unwrap();

        let tables = load_rate_tables(&dir).unwrap();
        assert_eq!(tables.quality(2).unwrap().label, "Standard");
        assert_eq!(tables.quality_factor(1).unwrap().factor, 1.5);

        let project = crate::project::define_project(500.0, 2, 50.0);
        let cost = tables.calculate_cost(&project, 1, 2, 1).unwrap();
        assert!((cost - 18_000_000.0).abs() < 1e-6);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_services_file() {
        let dir = temp_data_dir("missing");
        fs::create_dir_all(&dir).unwrap();

        let err = load_rate_tables(&dir).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_json() {
        let dir = temp_data_dir("invalid_json");
        save_rate_tables(&RateTables::builtin(), &dir).unwrap();
        fs::write(dir.join(URGENCIES_FILE), "{ not json").unwrap();

        let err = load_rate_tables(&dir).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_duplicate_ids_in_file() {
        let dir = temp_data_dir("duplicates");
        save_rate_tables(&RateTables::builtin(), &dir).unwrap();
        fs::write(
            dir.join(SERVICES_FILE),
            r#"[{"id": 1, "name": "A", "rate": 1}, {"id": 1, "name": "B", "rate": 2}]"#,
        )
        .unwrap();

        let err = load_rate_tables(&dir).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let _ = fs::remove_dir_all(&dir);
    }
}
