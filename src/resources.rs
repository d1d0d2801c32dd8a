//! Country-boundary path resources.
//!
//! Boundary outlines ship as property files mapping a country code to a
//! `;`-separated list of path-drawing command strings. Parsing them is cheap
//! but not free, so the parsed mapping is published once per store and shared
//! behind an `Arc` afterwards.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::error::Result;

/// Country name/code to its list of path-drawing command strings.
pub type CountryPathMap = HashMap<String, Vec<String>>;

/// Parses java-properties-style text: `#`/`!` comment lines, `key=value`
/// entries, values split on `;` into individual path strings.
pub fn parse_path_properties(text: &str) -> CountryPathMap {
    let mut paths = CountryPathMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let path_list: Vec<String> = value
            .split(';')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_owned)
            .collect();
        paths.insert(key.trim().to_owned(), path_list);
    }
    paths
}

/// Reads and parses a boundary property file from disk.
pub fn load_path_properties(path: &Path) -> Result<CountryPathMap> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_path_properties(&text))
}

/// Compute-once-and-publish cache for one parsed boundary resource.
///
/// The populate step is not serialized: two concurrent first readers may
/// both run the loader, which is wasteful but deterministic; the first
/// publish wins. Once populated, readers only clone the `Arc`.
pub struct CountryPathStore {
    paths: RwLock<Option<Arc<CountryPathMap>>>,
}

impl CountryPathStore {
    pub const fn new() -> Self {
        Self {
            paths: RwLock::new(None),
        }
    }

    /// Returns the cached mapping, running `load` at most effectively once.
    /// A failing loader is reported through `tracing` and publishes an empty
    /// mapping rather than failing the caller.
    pub fn get_or_load<F>(&self, load: F) -> Arc<CountryPathMap>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        if let Some(existing) = self.paths.read().clone() {
            return existing;
        }

        let parsed = match load() {
            Ok(text) => Arc::new(parse_path_properties(&text)),
            Err(error) => {
                warn!(%error, "country path resource failed to load, publishing empty mapping");
                Arc::new(CountryPathMap::new())
            }
        };

        let mut guard = self.paths.write();
        if let Some(existing) = guard.clone() {
            return existing;
        }
        *guard = Some(Arc::clone(&parsed));
        parsed
    }

    pub fn is_loaded(&self) -> bool {
        self.paths.read().is_some()
    }

    /// Drops the published mapping so the next reader reloads. Teardown hook
    /// for tests.
    pub fn reset(&self) {
        *self.paths.write() = None;
    }
}

impl Default for CountryPathStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide store for the high-resolution boundary set.
pub static HIRES_COUNTRY_PATHS: CountryPathStore = CountryPathStore::new();
/// Process-wide store for the low-resolution boundary set.
pub static LORES_COUNTRY_PATHS: CountryPathStore = CountryPathStore::new();

pub fn hires_country_paths<F>(load: F) -> Arc<CountryPathMap>
where
    F: FnOnce() -> std::io::Result<String>,
{
    HIRES_COUNTRY_PATHS.get_or_load(load)
}

pub fn lores_country_paths<F>(load: F) -> Arc<CountryPathMap>
where
    F: FnOnce() -> std::io::Result<String>,
{
    LORES_COUNTRY_PATHS.get_or_load(load)
}
