// libsuica/src/station/shared.rs

use std::path::Path;
use std::sync::{Arc, OnceLock};

use log::{debug, error};

use crate::Result;
use crate::station::StationDirectory;

/// Station directory that is built on first use and then only read.
///
/// Concurrent first calls run the loader once; every caller gets the same
/// `Arc`. A failed load is logged and replaced by an empty directory so
/// decoding carries on without names.
#[derive(Debug, Default)]
pub struct SharedDirectory {
    cell: OnceLock<Arc<StationDirectory>>,
}

impl SharedDirectory {
    /// Not yet built.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The directory, if it has been built.
    pub fn get(&self) -> Option<Arc<StationDirectory>> {
        self.cell.get().cloned()
    }

    /// Build with `load` on first use.
    pub fn get_or_init_with<F>(&self, load: F) -> Arc<StationDirectory>
    where
        F: FnOnce() -> Result<StationDirectory>,
    {
        self.cell
            .get_or_init(|| match load() {
                Ok(dir) => {
                    debug!("station directory ready ({} entries)", dir.len());
                    Arc::new(dir)
                }
                Err(e) => {
                    error!("error loading station table, names will be unresolved: {}", e);
                    Arc::new(StationDirectory::empty())
                }
            })
            .clone()
    }

    /// Load the table at `path` on first use.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Arc<StationDirectory> {
        self.get_or_init_with(|| StationDirectory::from_path(path))
    }
}
