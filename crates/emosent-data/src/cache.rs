//! Memoized dataset loading
//!
//! [`TableCache`] runs the load pipeline at most once per version of the
//! source file. A version is identified by the file's modification time and
//! length; when either changes the next [`TableCache::get`] reloads. If the
//! file can no longer be read at all, the cached table keeps being served.
//!
//! The whole check-and-load runs under one mutex. Concurrent first callers
//! therefore trigger a single load, and every caller receives the same
//! fully-built `Arc<EmojiTable>`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::SystemTime,
};

use tracing::{debug, info, warn};

use crate::{DataError, record::EmojiTable};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FileVersion {
    modified: Option<SystemTime>,
    len: u64,
}

impl FileVersion {
    fn probe(path: &Path) -> Result<Self, DataError> {
        let metadata = fs::metadata(path)
            .map_err(|e| DataError::unavailable(path.display().to_string(), e))?;
        Ok(Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

#[derive(Debug)]
struct CachedTable {
    version: FileVersion,
    table: Arc<EmojiTable>,
}

#[derive(Debug, Default)]
struct CacheState {
    cached: Option<CachedTable>,
    loads: usize,
}

/// Compute-once cache of the [`EmojiTable`] loaded from one file.
#[derive(Debug)]
pub struct TableCache {
    path: PathBuf,
    state: Mutex<CacheState>,
}

impl TableCache {
    /// Creates an empty cache; nothing is read until [`get`](Self::get).
    #[must_use]
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            state: Mutex::default(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the table, loading it if nothing is cached or the file changed.
    ///
    /// A failed load leaves the cache as it was and returns the error. When
    /// the file has vanished after a successful load, the cached table is
    /// returned instead.
    pub fn get(&self) -> Result<Arc<EmojiTable>, DataError> {
        let mut state = self.lock();
        let version = match FileVersion::probe(&self.path) {
            Ok(version) => version,
            Err(e) => {
                let Some(cached) = &state.cached else {
                    return Err(e);
                };
                warn!(path = %self.path.display(), error = %e, "serving cached dataset");
                return Ok(Arc::clone(&cached.table));
            }
        };

        if let Some(cached) = &state.cached
            && cached.version == version
        {
            debug!(path = %self.path.display(), "dataset cache hit");
            return Ok(Arc::clone(&cached.table));
        }

        debug!(path = %self.path.display(), "dataset cache miss");
        let table = Arc::new(crate::load(&self.path)?);
        state.loads += 1;
        state.cached = Some(CachedTable {
            version,
            table: Arc::clone(&table),
        });
        info!(
            path = %self.path.display(),
            rows = table.len(),
            loads = state.loads,
            "dataset cached"
        );
        Ok(table)
    }

    /// Drops the cached table; the next [`get`](Self::get) reloads.
    pub fn invalidate(&self) {
        if self.lock().cached.take().is_some() {
            debug!(path = %self.path.display(), "dataset cache invalidated");
        }
    }

    /// Modification time of the file version currently cached.
    #[must_use]
    pub fn cached_modified(&self) -> Option<SystemTime> {
        self.lock().cached.as_ref()?.version.modified
    }

    /// Number of completed loads since creation.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
