// crates/gazetteer-core/src/common.rs
//! Shared types used by the store, the index builder and the loader.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Code of the synthetic root node standing in for the whole country.
///
/// Never handed out to callers; it only terminates ancestor walks.
pub const ROOT_CODE: &str = "ROOT";

/// Province codes dropped by the mainland-only province listing
/// (Macau, Taiwan and Hong Kong).
pub const MAINLAND_EXCLUDED: [&str; 3] = ["CN002000000", "CN027000000", "CN029000000"];

/// Administrative level of a row / node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    City,
    District,
}

impl Level {
    /// Levels in ingestion order.
    pub const ALL: [Level; 3] = [Level::Province, Level::City, Level::District];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Province => "province",
            Level::City => "city",
            Level::District => "district",
        }
    }

    /// Level of the unit containing a unit of this level.
    pub fn parent_level(self) -> Option<Level> {
        match self {
            Level::Province => None,
            Level::City => Some(Level::Province),
            Level::District => Some(Level::City),
        }
    }

    /// Name of the data file holding rows of this level.
    pub fn data_file_name(self) -> &'static str {
        match self {
            Level::Province => "provinces.data",
            Level::City => "cities.data",
            Level::District => "districts.data",
        }
    }

    /// Derives the level from a data file path (`cities.data`, `cities.data.gz`, ...).
    pub fn from_file_name(path: &Path) -> Option<Level> {
        let name = path.file_name()?.to_str()?;
        let name = name.strip_suffix(".gz").unwrap_or(name);
        Level::ALL
            .into_iter()
            .find(|level| level.data_file_name() == name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simple aggregate statistics for a built snapshot.
///
/// Returned by [`crate::Gazetteer::stats`]; `index_keys` counts the surviving
/// prefix keys after tombstones were dropped, so it equals the number of
/// named units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub provinces: usize,
    pub cities: usize,
    pub districts: usize,
    pub index_keys: usize,
}
