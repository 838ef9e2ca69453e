// crates/addrcheck-core/src/gazetteer/source.rs

//! Where gazetteer data comes from.

use super::{io, CityMap, CountryMap, Gazetteer, CACHE_SUFFIX};
use super::{DEFAULT_CITIES_FILE, DEFAULT_COUNTRIES_FILE};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Produces a fully materialized [`Gazetteer`].
///
/// Called at most once per successful [`GazetteerCache`](super::GazetteerCache)
/// initialization; implementations may be slow.
pub trait GazetteerSource: Send + Sync {
    fn load(&self) -> Result<Gazetteer>;
}

/// In-memory mappings, cloned on load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub cities: CityMap,
    pub countries: CountryMap,
}

impl StaticSource {
    pub fn new(cities: CityMap, countries: CountryMap) -> Self {
        Self { cities, countries }
    }
}

impl GazetteerSource for StaticSource {
    fn load(&self) -> Result<Gazetteer> {
        Ok(Gazetteer::new(self.cities.clone(), self.countries.clone()))
    }
}

// -----------------------------------------------------------------------------
// JSON SOURCES
// -----------------------------------------------------------------------------

/// Two geonames JSON files (optionally `.gz`).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub cities_path: PathBuf,
    pub countries_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(cities_path: impl Into<PathBuf>, countries_path: impl Into<PathBuf>) -> Self {
        Self {
            cities_path: cities_path.into(),
            countries_path: countries_path.into(),
        }
    }

    /// Both default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_CITIES_FILE), dir.join(DEFAULT_COUNTRIES_FILE))
    }
}

impl GazetteerSource for JsonFileSource {
    fn load(&self) -> Result<Gazetteer> {
        let cities: CityMap = serde_json::from_reader(io::open_stream(&self.cities_path)?)?;
        let countries: CountryMap =
            serde_json::from_reader(io::open_stream(&self.countries_path)?)?;
        tracing::debug!(
            cities = cities.len(),
            countries = countries.len(),
            path = %self.cities_path.display(),
            "parsed gazetteer json"
        );
        Ok(Gazetteer::new(cities, countries))
    }
}

/// **Smart Load:** JSON source fronted by a bincode snapshot stored next to
/// the cities file. The snapshot is used when it is newer than both JSON
/// files; otherwise the JSON is parsed and the snapshot rewritten
/// (best-effort, a failed write is only logged).
#[derive(Debug, Clone)]
pub struct CachedJsonSource {
    pub json: JsonFileSource,
    pub cache_path: PathBuf,
}

impl CachedJsonSource {
    pub fn new(json: JsonFileSource) -> Self {
        let cache_path = io::get_cache_path(&json.cities_path, CACHE_SUFFIX);
        Self { json, cache_path }
    }

    fn is_cache_fresh(&self) -> bool {
        let cache_time = match std::fs::metadata(&self.cache_path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => return false,
        };
        // A snapshot without its JSON is orphaned, never fresh.
        [&self.json.cities_path, &self.json.countries_path]
            .into_iter()
            .all(|source| {
                std::fs::metadata(source)
                    .and_then(|m| m.modified())
                    .is_ok_and(|source_time| source_time <= cache_time)
            })
    }
}

impl GazetteerSource for CachedJsonSource {
    fn load(&self) -> Result<Gazetteer> {
        // 1. Check snapshot
        if self.is_cache_fresh() {
            match Gazetteer::load_binary_file(&self.cache_path) {
                Ok(gz) => return Ok(gz),
                Err(e) => tracing::warn!(error = %e, "stale or corrupt gazetteer snapshot, rebuilding"),
            }
        }

        // 2. Build from JSON
        let gz = self.json.load()?;

        // 3. Refresh snapshot
        if let Err(e) = gz.save_as(&self.cache_path) {
            tracing::warn!(
                error = %e,
                path = %self.cache_path.display(),
                "could not write gazetteer snapshot"
            );
        }
        Ok(gz)
    }
}

/// `<CARGO_MANIFEST_DIR>/data`, where the bundled sample dataset lives.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
