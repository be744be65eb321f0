//! # File I/O Module
//!
//! Reads input forms and writes computed results:
//! - **Forms**: a [`FacilityForm`] JSON document, tagged by `"facility"`
//! - **Atomic saves**: results are written to `.tmp`, synced, then renamed
//! - **Version validation**: saved results carry the schema version they were written with
//!
//! ## Example
//!
//! ```rust,no_run
//! use coldload_core::file_io::{load_form, save_result, load_result};
//! use std::path::Path;
//!
//! let form = load_form(Path::new("room.json"))?;
//! let result = form.compute();
//!
//! save_result(&result, Path::new("room.result.json"))?;
//! let saved = load_result(Path::new("room.result.json"))?;
//! println!("{} saved at {}", saved.result.facility, saved.saved_at);
//! # Ok::<(), coldload_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{FacilityForm, LoadResult};
use crate::errors::{CalcError, CalcResult};

/// Schema version written into every saved result
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A computed result as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    pub version: String,
    pub saved_at: DateTime<Utc>,
    pub result: LoadResult,
}

impl SavedResult {
    /// Wrap a result with the current schema version and time
    pub fn new(result: LoadResult) -> Self {
        SavedResult {
            version: SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
            result,
        }
    }
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Load an input form from a JSON file.
///
/// The form is not validated; call [`FacilityForm::validate`] for strict checking.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON or unknown facility tag
pub fn load_form(path: &Path) -> CalcResult<FacilityForm> {
    let contents = read_to_string(path)?;
    let form: FacilityForm = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid form in {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), facility = %form.facility(), "loaded input form");
    Ok(form)
}

/// Save a result to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the result with version and timestamp
/// 2. Write to a temporary file (`.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename over the target
pub fn save_result(result: &LoadResult, path: &Path) -> CalcResult<()> {
    let saved = SavedResult::new(result.clone());
    let json = serde_json::to_string_pretty(&saved).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);

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

    debug!(path = %path.display(), "saved load result");
    Ok(())
}

/// Load a previously saved result.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_result(path: &Path) -> CalcResult<SavedResult> {
    let contents = read_to_string(path)?;
    let saved: SavedResult = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&saved.version)?;
    Ok(saved)
}

/// `result.json` -> `result.json.tmp`
fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
