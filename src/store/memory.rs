//! In-memory store.
//!
//! Reference implementation of `PanStore`: four element vectors plus a
//! stylesheet behind RwLocks.
//!
//! ## Limitations
//!
//! - **No persistence**: contents vanish with the value.
//! - **No isolation**: `load` then `save` from two threads interleaves the
//!   same way two browser sessions racing on `relations.json` would.
//!
//! Use this store for:
//! - Testing the editor and snapshot operations without a filesystem
//! - Embedding pan-graph in applications that don't need durable files

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::model::{Element, Stylesheet};
use crate::Result;
use super::{Collection, PanStore};

/// In-memory PAN storage. Cheap to clone; clones share contents.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    collections: RwLock<HashMap<Collection, Vec<Element>>>,
    stylesheet: RwLock<Stylesheet>,
}

impl MemoryStore {
    /// Empty store: every collection loads as empty, blank stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stylesheet document.
    pub fn set_stylesheet(&self, stylesheet: Stylesheet) {
        *self.inner.stylesheet.write() = stylesheet;
    }
}

impl PanStore for MemoryStore {
    fn load_collection(&self, collection: Collection) -> Result<Vec<Element>> {
        let collections = self.inner.collections.read();
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    fn save_collection(&self, collection: Collection, elements: &[Element]) -> Result<()> {
        debug!(%collection, count = elements.len(), "saving collection to memory");
        self.inner
            .collections
            .write()
            .insert(collection, elements.to_vec());
        Ok(())
    }

    fn load_stylesheet(&self) -> Result<Stylesheet> {
        Ok(self.inner.stylesheet.read().clone())
    }
}
