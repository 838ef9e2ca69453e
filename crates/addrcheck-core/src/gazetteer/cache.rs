// crates/addrcheck-core/src/gazetteer/cache.rs

//! Lazily-initialized, read-only gazetteer shared by every lookup.

use super::{Gazetteer, GazetteerSource};
use crate::error::{AddrError, Result};
use once_cell::sync::OnceCell;
use std::time::Instant;

/// Owns a [`GazetteerSource`] and loads it once, on first use.
///
/// `get` is single-flight: concurrent first callers block on the same
/// initialization and all observe the same immutable [`Gazetteer`]. Once
/// loaded it is never reloaded, even if the backing files change. A failed
/// load caches nothing and is reported as [`AddrError::GazetteerLoad`].
pub struct GazetteerCache {
    source: Box<dyn GazetteerSource>,
    cell: OnceCell<Gazetteer>,
}

impl GazetteerCache {
    pub fn new(source: impl GazetteerSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cell: OnceCell::new(),
        }
    }

    /// Wraps an already built gazetteer; `get` never touches a source.
    pub fn preloaded(gazetteer: Gazetteer) -> Self {
        Self {
            source: Box::new(super::StaticSource::default()),
            cell: OnceCell::with_value(gazetteer),
        }
    }

    pub fn get(&self) -> Result<&Gazetteer> {
        self.cell.get_or_try_init(|| {
            let started = Instant::now();
            let gz = self
                .source
                .load()
                .map_err(|e| AddrError::GazetteerLoad(e.to_string()))?;
            let stats = gz.stats();
            tracing::info!(
                cities = stats.cities,
                countries = stats.countries,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "gazetteer loaded"
            );
            Ok(gz)
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Process-wide cache over the bundled dataset in
    /// [`default_data_dir`](super::default_data_dir).
    pub fn global() -> &'static GazetteerCache {
        static GLOBAL: once_cell::sync::Lazy<GazetteerCache> = once_cell::sync::Lazy::new(|| {
            let json = super::JsonFileSource::in_dir(super::default_data_dir());
            GazetteerCache::new(super::CachedJsonSource::new(json))
        });
        &GLOBAL
    }
}

impl std::fmt::Debug for GazetteerCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GazetteerCache")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::{CityMap, CountryMap, GazetteerCity, GazetteerCountry};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        loads: Arc<AtomicUsize>,
        fail: bool,
    }

    impl GazetteerSource for CountingSource {
        fn load(&self) -> Result<Gazetteer> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AddrError::NotFound("cities.json".into()));
            }
            let mut cities = CityMap::new();
            cities.insert("1".into(), GazetteerCity::new("Asmara", "ER"));
            let mut countries = CountryMap::new();
            countries.insert("ER".into(), GazetteerCountry::new("ER", "Eritrea"));
            Ok(Gazetteer::new(cities, countries))
        }
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let cache = Arc::new(GazetteerCache::new(CountingSource {
            loads: loads.clone(),
            fail: false,
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.get().unwrap().stats().cities)
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 1);
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn preloaded_cache_never_reads_a_source() {
        let mut cities = CityMap::new();
        cities.insert("1".into(), GazetteerCity::new("Keren", "ER"));
        let cache = GazetteerCache::preloaded(Gazetteer::new(cities, CountryMap::new()));
        assert!(cache.is_loaded());
        assert_eq!(cache.get().unwrap().stats().cities, 1);
    }

    #[test]
    fn failed_load_is_fatal_and_not_cached() {
        let loads = Arc::new(AtomicUsize::new(0));
        let cache = GazetteerCache::new(CountingSource {
            loads: loads.clone(),
            fail: true,
        });
        assert!(matches!(cache.get(), Err(AddrError::GazetteerLoad(_))));
        assert!(!cache.is_loaded());
        assert!(cache.get().is_err());
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }
}
