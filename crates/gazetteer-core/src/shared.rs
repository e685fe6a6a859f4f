// crates/gazetteer-core/src/shared.rs

//! Atomic publication of snapshots.
//!
//! Readers grab an `Arc` to the current [`Gazetteer`] and query it without
//! holding any lock. A rebuild runs entirely off to the side and only the
//! finished snapshot is swapped in; a failed rebuild leaves the live one
//! untouched.

use crate::error::Result;
use crate::loader::Row;
use crate::model::Gazetteer;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Handle to the currently published snapshot.
#[derive(Debug)]
pub struct SharedGazetteer {
    current: RwLock<Arc<Gazetteer>>,
}

impl SharedGazetteer {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self::from_arc(Arc::new(gazetteer))
    }

    pub fn from_arc(gazetteer: Arc<Gazetteer>) -> Self {
        Self {
            current: RwLock::new(gazetteer),
        }
    }

    /// The snapshot readers should query. Later publications do not affect it.
    pub fn current(&self) -> Arc<Gazetteer> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the published snapshot in one step and returns the previous one.
    pub fn publish(&self, gazetteer: Gazetteer) -> Arc<Gazetteer> {
        let next = Arc::new(gazetteer);
        let stats = next.stats();
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!(
            provinces = stats.provinces,
            cities = stats.cities,
            districts = stats.districts,
            "published gazetteer snapshot"
        );
        previous
    }

    /// Builds a new snapshot from `rows` and publishes it on success.
    pub fn rebuild_with<I>(&self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = Row>,
    {
        self.publish_built(Gazetteer::from_rows(rows))
    }

    /// Reloads the data files in `dir` and publishes the result on success.
    pub fn rebuild_from_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.publish_built(Gazetteer::load_from_dir(dir))
    }

    fn publish_built(&self, built: Result<Gazetteer>) -> Result<()> {
        match built {
            Ok(gazetteer) => {
                self.publish(gazetteer);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "rebuild failed, keeping the current snapshot");
                Err(e)
            }
        }
    }
}
