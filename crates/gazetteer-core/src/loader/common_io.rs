// crates/gazetteer-core/src/loader/common_io.rs
use crate::common::Level;
use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a data file, transparently un-gzipping `*.gz` files.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GazetteerError::MissingData(path.to_path_buf()),
        _ => GazetteerError::Io(e),
    })?;

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
    }

    Ok(Box::new(BufReader::new(file)))
}

/// Resolves the data file for `level` inside `dir`.
///
/// The plain file wins; with `compact` enabled a `.gz` sibling is accepted too.
pub fn data_file_path(dir: &Path, level: Level) -> Result<PathBuf> {
    let plain = dir.join(level.data_file_name());
    if plain.is_file() {
        return Ok(plain);
    }

    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{}.gz", level.data_file_name()));
        if gz.is_file() {
            return Ok(gz);
        }
    }

    Err(GazetteerError::MissingData(plain))
}

/// All three data files with their levels in ingestion order, failing before
/// any is read.
pub fn locate_data_files(dir: &Path) -> Result<Vec<(Level, PathBuf)>> {
    Level::ALL
        .into_iter()
        .map(|level| Ok((level, data_file_path(dir, level)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GazetteerError;
    use std::fs;

    #[test]
    fn located_files_carry_their_level() {
        let dir = tempfile::tempdir().unwrap();
        for level in Level::ALL {
            fs::write(dir.path().join(level.data_file_name()), "").unwrap();
        }
        let files = locate_data_files(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        for (level, path) in files {
            assert_eq!(Level::from_file_name(&path), Some(level));
        }
    }

    #[test]
    fn missing_file_is_reported_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("provinces.data"), "").unwrap();
        assert!(matches!(
            locate_data_files(dir.path()),
            Err(GazetteerError::MissingData(path)) if path.ends_with("cities.data")
        ));
    }
}
