// crates/gazetteer-core/src/prelude.rs
pub use crate::common::{GazetteerStats, Level};
pub use crate::error::{GazetteerError, Result};
pub use crate::loader::{GazetteerBuilder, Row};
pub use crate::model::{Address, AddressCodes, Gazetteer};
pub use crate::shared::SharedGazetteer;
pub use crate::traits::GazetteerSearch;
