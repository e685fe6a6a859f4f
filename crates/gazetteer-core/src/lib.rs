// crates/gazetteer-core/src/lib.rs

//! # gazetteer-core
//!
//! Resolves China's province → city → district hierarchy between opaque
//! codes and standard names. Names may be abbreviated down to their shortest
//! unambiguous prefix (two characters minimum), e.g. `"杭州"` for `"杭州市"`.
//!
//! ```no_run
//! use gazetteer_core::prelude::*;
//!
//! let gz = Gazetteer::load()?;
//! assert_eq!(gz.code_of_district_name("杭州", "西湖"), Some("CN033001012"));
//! let address = gz.parse_address("", "杭州", "西湖")?;
//! assert_eq!(address.province, "浙江省");
//! # Ok::<(), GazetteerError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod export;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
mod search;
pub mod shared;
pub mod traits;

// Re-exports
pub use crate::common::{GazetteerStats, Level, MAINLAND_EXCLUDED, ROOT_CODE};
pub use crate::error::{GazetteerError, Result};
pub use crate::index::{NameIndex, NameIndexBuilder, Scope};
pub use crate::loader::{GazetteerBuilder, Row};
pub use crate::model::{Address, AddressCodes, Gazetteer, HierarchyStore};
pub use crate::shared::SharedGazetteer;
// Query surface
pub use crate::traits::GazetteerSearch;
