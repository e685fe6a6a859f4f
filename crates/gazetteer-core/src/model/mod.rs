// crates/gazetteer-core/src/model/mod.rs
pub mod address;
pub mod store;

pub use address::{Address, AddressCodes};
pub use store::{HierarchyStore, Node, NodeId};

use crate::common::{GazetteerStats, ROOT_CODE};
use crate::index::NameIndex;

/// One immutable, fully built snapshot: the hierarchy plus its name index.
///
/// Built once by [`crate::loader::GazetteerBuilder`] and never mutated
/// afterwards, so any number of threads may query it concurrently. A rebuild
/// produces a new `Gazetteer`; see [`crate::SharedGazetteer`] for swapping it
/// in.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    pub(crate) store: HierarchyStore,
    pub(crate) index: NameIndex,
}

impl Gazetteer {
    pub(crate) fn new(store: HierarchyStore, index: NameIndex) -> Self {
        Self { store, index }
    }

    pub fn store(&self) -> &HierarchyStore {
        &self.store
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    pub fn stats(&self) -> GazetteerStats {
        let provinces = self.store.children_of(ROOT_CODE);
        let cities: Vec<&str> = provinces
            .iter()
            .flat_map(|code| self.store.children_of(code))
            .collect();
        let districts = cities
            .iter()
            .map(|code| self.store.children_of(code).len())
            .sum();
        GazetteerStats {
            provinces: provinces.len(),
            cities: cities.len(),
            districts,
            index_keys: self.index.len(),
        }
    }
}
