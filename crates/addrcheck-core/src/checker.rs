// crates/addrcheck-core/src/checker.rs

//! Front door over a [`GazetteerCache`]: the same operations as the free
//! functions, but the gazetteer is loaded on first need and load failures
//! surface as errors instead of "no match".

use crate::error::Result;
use crate::extract::{extract_city_country, ParsedRegion};
use crate::gazetteer::{Gazetteer, GazetteerCache};
use crate::plausibility::looks_like_address;
use crate::region::{validate_address_region, DisputedRegion};

#[derive(Debug, Clone, Copy)]
pub struct AddressChecker<'c> {
    cache: &'c GazetteerCache,
}

impl<'c> AddressChecker<'c> {
    pub fn new(cache: &'c GazetteerCache) -> Self {
        Self { cache }
    }

    pub fn gazetteer(&self) -> Result<&'c Gazetteer> {
        self.cache.get()
    }

    /// Never touches the gazetteer.
    pub fn looks_like_address(&self, address: &str) -> bool {
        looks_like_address(address)
    }

    pub fn extract(&self, address: &str, two_part_country: bool) -> Result<ParsedRegion> {
        Ok(extract_city_country(self.gazetteer()?, address, two_part_country))
    }

    /// Empty inputs and disputed-region seeds are answered without loading
    /// the gazetteer.
    pub fn validate_region(&self, generated: &str, seed: &str) -> Result<bool> {
        if generated.is_empty() || seed.is_empty() {
            return Ok(false);
        }
        if let Some(region) = DisputedRegion::from_seed(&seed.to_lowercase()) {
            return Ok(region.matches(generated));
        }
        Ok(validate_address_region(self.gazetteer()?, generated, seed))
    }
}
