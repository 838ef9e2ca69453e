// crates/addrcheck-core/src/gazetteer/io.rs

//! Physical layer: opening (optionally gzipped) streams and reading/writing
//! the bincode snapshot.

use super::{Gazetteer, GazetteerData};
use crate::error::{AddrError, Result};
use bincode::Options;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Snapshots larger than this are rejected instead of allocated.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

/// Opens a file and buffers it. `.gz` files are transparently decompressed
/// when the `compact` feature is on.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AddrError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    if gzipped {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(AddrError::InvalidData(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }
    Ok(Box::new(reader))
}

/// `<dir>/<file name>.<suffix>`
pub(crate) fn get_cache_path(source_path: &Path, suffix: &str) -> PathBuf {
    let filename = source_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gazetteer".to_string());
    source_path.with_file_name(format!("{filename}.{suffix}"))
}

impl Gazetteer {
    /// Writes a binary snapshot (gzip framed with `compact`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        // The gzip trailer is only written by `finish`; dropping the encoder
        // would swallow the error.
        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            bincode::serialize_into(&mut encoder, self.data())?;
            encoder.finish()?.flush()?;
        }
        #[cfg(not(feature = "compact"))]
        {
            let mut writer = writer;
            bincode::serialize_into(&mut writer, self.data())?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Reads a snapshot written by [`Gazetteer::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AddrError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        let mut stream: Box<dyn Read> = Box::new(GzDecoder::new(reader));
        #[cfg(not(feature = "compact"))]
        let mut stream: Box<dyn Read> = Box::new(reader);

        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Decodes an (uncompressed) bincode payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let data: GazetteerData = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(bytes)?;
        Ok(Self::from_data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::{CityMap, CountryMap, GazetteerCity, GazetteerCountry};

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/geonames_cities.json"), "gaz.bin");
        assert_eq!(p, PathBuf::from("/data/geonames_cities.json.gaz.bin"));
    }

    #[test]
    fn snapshot_round_trip_preserves_lookups() {
        let mut cities = CityMap::new();
        cities.insert("7".into(), GazetteerCity::new("Dakar", "SN"));
        let mut countries = CountryMap::new();
        countries.insert("SN".into(), GazetteerCountry::new("SN", "Senegal"));
        let gz = Gazetteer::new(cities, countries);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.bin");
        gz.save_as(&path).unwrap();

        let back = Gazetteer::load_binary_file(&path).unwrap();
        assert_eq!(back.stats(), gz.stats());
        assert!(back.city_in_country("dakar", "senegal"));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn snapshot_carries_complete_gzip_trailer() {
        let mut cities = CityMap::new();
        cities.insert("1".into(), GazetteerCity::new("Asmara", "ER"));
        let gz = Gazetteer::new(cities, CountryMap::new());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.comp.bin");
        gz.save_as(&path).unwrap();

        // ISIZE: the last four bytes hold the uncompressed length
        let raw = bincode::serialize(gz.data()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let trailer: [u8; 4] = bytes[bytes.len() - 4..].try_into().unwrap();
        assert_eq!(u32::from_le_bytes(trailer) as usize, raw.len());
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let err = Gazetteer::load_binary_file("/definitely/not/here.bin").unwrap_err();
        assert!(matches!(err, AddrError::NotFound(_)));
    }
}
