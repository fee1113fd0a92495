//! # PAN Store Trait
//!
//! This is THE contract between the editing operations and any storage
//! engine. The collections are the unit of access: load one, overwrite one,
//! load all four as a snapshot.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `FileStore` | `fs` | JSON files in an asset directory (durable) |
//! | `MemoryStore` | `memory` | In-memory collections for testing/embedding |

pub mod fs;
pub mod memory;

use tracing::warn;

use crate::model::{Category, Element, GraphSnapshot, Relation, Stylesheet};
use crate::{Error, Result};

pub use fs::FileStore;
pub use memory::MemoryStore;

// ============================================================================
// Collections
// ============================================================================

/// One of the four named element collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Processes,
    Resources,
    Relations,
}

impl Collection {
    /// Snapshot order. The rendering widget may treat element order as a
    /// z-order hint, so this sequence is fixed: nodes first, relations last.
    pub const ALL: [Collection; 4] = [
        Collection::Products,
        Collection::Processes,
        Collection::Resources,
        Collection::Relations,
    ];

    /// File name backing this collection in a `FileStore` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Products => "products.json",
            Collection::Processes => "processes.json",
            Collection::Resources => "resources.json",
            Collection::Relations => "relations.json",
        }
    }

    /// The category stamped on nodes loaded from this collection.
    /// `None` for the relations collection.
    pub fn category(self) -> Option<Category> {
        match self {
            Collection::Products => Some(Category::Product),
            Collection::Processes => Some(Category::Process),
            Collection::Resources => Some(Category::Resource),
            Collection::Relations => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Processes => "processes",
            Collection::Resources => "resources",
            Collection::Relations => "relations",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PanStore Trait
// ============================================================================

/// The universal storage contract.
///
/// Deliberately narrow — load a collection, overwrite a collection, load the
/// stylesheet — so a transactional store could later replace the flat files
/// without touching any caller.
///
/// Every operation is a full read or full overwrite; nothing is cached
/// across calls and nothing is locked. Concurrent read-modify-write cycles
/// race (last writer wins) — an accepted limitation of the single-user
/// deployment, not something implementations should quietly fix.
pub trait PanStore: Send + Sync {
    /// Load one collection in file order.
    ///
    /// Fails with `Error::NotFound` when the backing file is absent and
    /// `Error::Parse` when its content is not a JSON array of the
    /// collection's element shape.
    fn load_collection(&self, collection: Collection) -> Result<Vec<Element>>;

    /// Replace one collection wholesale. Either the full sequence lands or
    /// the previous content stays intact.
    fn save_collection(&self, collection: Collection, elements: &[Element]) -> Result<()>;

    /// Load the stylesheet document. Its lifecycle is independent of the
    /// element collections: reloading style never reloads graph data.
    fn load_stylesheet(&self) -> Result<Stylesheet>;

    /// Load all four collections, in fixed order, into one snapshot.
    ///
    /// All-or-nothing: the first load error wins and no partial snapshot is
    /// produced.
    fn load_snapshot(&self) -> Result<GraphSnapshot> {
        let mut elements = Vec::new();
        for collection in Collection::ALL {
            elements.extend(self.load_collection(collection)?);
        }
        let snapshot = GraphSnapshot::new(elements);
        let dangling = snapshot.dangling().len();
        if dangling > 0 {
            warn!(dangling, "snapshot contains relations with missing endpoints");
        }
        Ok(snapshot)
    }

    /// Typed view of the relations collection.
    fn load_relations(&self) -> Result<Vec<Relation>> {
        self.load_collection(Collection::Relations)?
            .into_iter()
            .map(|element| match element {
                Element::Relation(relation) => Ok(relation),
                Element::Node(_) => Err(Error::Parse {
                    origin: Collection::Relations.to_string(),
                    message: "expected an edge-shaped object".to_string(),
                }),
            })
            .collect()
    }

    /// Overwrite the relations collection with a typed sequence.
    fn save_relations(&self, relations: Vec<Relation>) -> Result<()> {
        let elements: Vec<Element> = relations.into_iter().map(Element::from).collect();
        self.save_collection(Collection::Relations, &elements)
    }
}
