// crates/gazetteer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (file lookup, decompression) and feeds the
//! parsed rows into a [`GazetteerBuilder`].

use crate::common::Level;
use crate::error::Result;
use crate::model::Gazetteer;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

mod builder;
pub mod common_io;
pub mod ingest;

pub use builder::GazetteerBuilder;
pub use ingest::{parse_row, Row, RowReader};

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "GAZETTEER_DATA_DIR";

static GAZETTEER_CACHE: OnceCell<Arc<Gazetteer>> = OnceCell::new();

impl Gazetteer {
    /// `$GAZETTEER_DATA_DIR` if set, else the `data/` directory shipped with the crate.
    pub fn default_data_dir() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Loads the default dataset once per process and hands out the shared snapshot.
    pub fn load() -> Result<Arc<Self>> {
        GAZETTEER_CACHE
            .get_or_try_init(|| Self::load_from_dir(Self::default_data_dir()).map(Arc::new))
            .cloned()
    }

    /// Builds a fresh snapshot from the three data files in `dir`.
    ///
    /// All files must be present before any row is read.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let files = common_io::locate_data_files(dir)?;

        let mut builder = GazetteerBuilder::new();
        for (level, path) in files {
            debug!(path = %path.display(), %level, "reading data file");
            for row in Self::read_rows(&path, level)? {
                builder.insert(row?)?;
            }
        }
        builder.finish()
    }

    /// Lazily reads the rows of one data file.
    pub fn read_rows(path: &Path, level: Level) -> Result<RowReader<Box<dyn std::io::BufRead>>> {
        Ok(RowReader::new(level, common_io::open_stream(path)?))
    }
}
