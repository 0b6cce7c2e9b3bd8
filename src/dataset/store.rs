//! Flat-file store for per-state facility datasets.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::dataset::error::{DatasetError, DatasetResult};
use crate::dataset::records::{FacilityRow, VillagePoint};

/// Location equality: case-insensitive on trimmed values.
///
/// Every district/block/village match in the store goes through this.
fn loc_eq(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Reduce one column to its distinct values, preserving first-seen order.
///
/// Values differing only in case or surrounding whitespace count as the
/// same entry; the first-seen trimmed form is the one surfaced.
fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Read-only store over a directory of `{State}.csv` files.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    dir: PathBuf,
}

impl DatasetStore {
    /// Create a store rooted at the given dataset directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn state_path(&self, state: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", state.trim()))
    }

    /// Whether a dataset file exists for the given state.
    pub fn state_exists(&self, state: &str) -> bool {
        self.state_path(state).is_file()
    }

    /// List available state identifiers (file stems of `*.csv`), sorted.
    pub fn list_states(&self) -> DatasetResult<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| DatasetError::Io {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut states = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DatasetError::Io {
                path: self.dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                states.push(stem.to_string());
            }
        }
        states.sort();
        Ok(states)
    }

    /// Read and parse the full dataset file for a state.
    ///
    /// An absent file is [`DatasetError::StateNotFound`]; callers decide
    /// whether that maps to a 404 (`/villageinfo`) or a 500 (dropdowns).
    pub fn load_state(&self, state: &str) -> DatasetResult<Vec<FacilityRow>> {
        let path = self.state_path(state);
        if !path.is_file() {
            return Err(DatasetError::StateNotFound(state.trim().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|e| DatasetError::Parse {
                path: path.clone(),
                source: e,
            })?;

        let mut rows = Vec::new();
        for row in reader.deserialize() {
            let row: FacilityRow = row.map_err(|e| DatasetError::Parse {
                path: path.clone(),
                source: e,
            })?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Distinct district names for a state, order of first appearance.
    pub fn districts(&self, state: &str) -> DatasetResult<Vec<String>> {
        let rows = self.load_state(state)?;
        Ok(distinct(rows.into_iter().map(|r| r.district)))
    }

    /// Distinct block names for a district within a state.
    pub fn blocks(&self, state: &str, district: &str) -> DatasetResult<Vec<String>> {
        let rows = self.load_state(state)?;
        Ok(distinct(
            rows.into_iter()
                .filter(|r| loc_eq(&r.district, district))
                .map(|r| r.block),
        ))
    }

    /// Villages under a district and block, coordinates as raw text.
    pub fn villages(
        &self,
        state: &str,
        district: &str,
        block: &str,
    ) -> DatasetResult<Vec<VillagePoint>> {
        let rows = self.load_state(state)?;
        Ok(rows
            .into_iter()
            .filter(|r| loc_eq(&r.district, district) && loc_eq(&r.block, block))
            .map(|r| VillagePoint {
                name: r.habitation_name,
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect())
    }

    /// All facility rows matching the district/block/village triple.
    pub fn find_village(
        &self,
        state: &str,
        district: &str,
        block: &str,
        village: &str,
    ) -> DatasetResult<Vec<FacilityRow>> {
        let rows = self.load_state(state)?;
        Ok(rows
            .into_iter()
            .filter(|r| {
                loc_eq(&r.district, district)
                    && loc_eq(&r.block, block)
                    && loc_eq(&r.habitation_name, village)
            })
            .collect())
    }
}
