//! In-process load cache keyed by source path. A path is read at most
//! once per process; uploads bypass the cache entirely since a byte
//! buffer has no source identity to key on.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use icp_core::{ExplorerResult, Frame};
use tracing::debug;

use crate::loader;

pub struct LoadCache {
    store: DashMap<PathBuf, Arc<Frame>>,
}

impl LoadCache {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Return the cached frame for `path`, loading and caching it on the
    /// first request. Load errors are not cached; a later call retries.
    pub fn get_or_load(&self, path: &Path) -> ExplorerResult<Arc<Frame>> {
        if let Some(entry) = self.store.get(path) {
            debug!(path = %path.display(), "load cache hit");
            return Ok(Arc::clone(entry.value()));
        }
        let frame = Arc::new(loader::load_path(path)?);
        self.store.insert(path.to_path_buf(), Arc::clone(&frame));
        Ok(frame)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for LoadCache {
    fn default() -> Self {
        Self::new()
    }
}
