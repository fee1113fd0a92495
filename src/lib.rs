//! # pan-graph — File-backed Process-Asset-Network Graph Core
//!
//! The reusable core of a PAN dashboard: products, processes and resources
//! are nodes, relations are directed edges, and four flat JSON files on disk
//! are the database. The presentation layer (tabs, routing, the rendering
//! widget) lives outside this crate and talks to it through three
//! operations: refresh the element snapshot, refresh the stylesheet, and
//! connect two selected nodes.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `PanStore` is the contract between operations and storage
//! 2. **Clean DTOs**: `Node`, `Relation`, `GraphSnapshot` cross all boundaries
//! 3. **Typed on load**: malformed entries fail fast with `Error::Parse`
//!    instead of leaking into the rendering collaborator
//! 4. **Verbatim passthrough**: fields the core doesn't know about survive a
//!    load/save round trip untouched
//!
//! ## Quick Start
//!
//! ```rust
//! use pan_graph::{Pan, PanStore, Collection, Element, Node, Category, NodeRef};
//!
//! # fn main() -> pan_graph::Result<()> {
//! let pan = Pan::open_memory();
//!
//! pan.store().save_collection(Collection::Products, &[
//!     Element::Node(Node::new("p1", "Gear", Category::Product)),
//!     Element::Node(Node::new("p2", "Axle", Category::Product)),
//! ])?;
//!
//! // Connect the two selected nodes, then reload the full snapshot.
//! pan.connect(&[NodeRef::new("p1"), NodeRef::new("p2")])?;
//! let refresh = pan.refresh(1)?;
//!
//! assert_eq!(refresh.snapshot.node_count(), 2);
//! assert_eq!(refresh.snapshot.relation_count(), 1);
//! assert_eq!(refresh.status, "reload #1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Stores
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `FileStore` | `store::fs` | JSON files in an asset directory (the durable store) |
//! | `MemoryStore` | `store::memory` | In-memory collections for testing/embedding |
//!
//! ## Concurrency
//!
//! Single-user by design. `connect` is a read-modify-write on the relations
//! file with no locking: two concurrent sessions can interleave and the last
//! writer wins, silently. Saves themselves are atomic (temp file + rename),
//! so a crash never leaves a truncated collection on disk.

// ============================================================================
// Modules
// ============================================================================

pub mod asset_types;
pub mod editor;
pub mod model;
pub mod store;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Category, Element, GraphSnapshot, Node, NodeData, NodeId, Position,
    PropertyMap, Relation, RelationData, StyleRule, Stylesheet,
};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::{Collection, FileStore, MemoryStore, PanStore};

// ============================================================================
// Re-exports: Editor
// ============================================================================

pub use editor::{NodeRef, add_relation};

// ============================================================================
// Re-exports: Asset type catalog
// ============================================================================

pub use asset_types::AssetTypes;

// ============================================================================
// Top-level Pan handle
// ============================================================================

/// The primary entry point. A `Pan` wraps a store and exposes the three
/// operations the presentation layer calls.
pub struct Pan<S: PanStore> {
    store: S,
}

/// Result of a snapshot refresh: the element list for the rendering widget
/// plus a human-readable status line for the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub snapshot: GraphSnapshot,
    /// Presentation-only, e.g. `"reload #3"`. Not part of the data contract.
    pub status: String,
}

impl<S: PanStore> Pan<S> {
    /// Create a Pan with the given store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Reload all four collections and produce a fresh snapshot.
    ///
    /// All-or-nothing: the first collection that fails to load fails the
    /// whole refresh. `reloads` is the caller's click counter and only feeds
    /// the status line.
    pub fn refresh(&self, reloads: u64) -> Result<Refresh> {
        let snapshot = self.store.load_snapshot()?;
        Ok(Refresh {
            snapshot,
            status: format!("reload #{reloads}"),
        })
    }

    /// Reload the stylesheet. Independent of the graph lifecycle: this never
    /// touches the four element collections.
    pub fn refresh_style(&self) -> Result<Stylesheet> {
        self.store.load_stylesheet()
    }

    /// Append a relation between the two selected nodes and persist it.
    pub fn connect(&self, selection: &[NodeRef]) -> Result<Relation> {
        editor::add_relation(&self.store, selection)
    }

    /// Access the underlying store (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Pan<FileStore> {
    /// Open a Pan over a directory of JSON asset files.
    pub fn open(root: impl Into<std::path::PathBuf>) -> Self {
        Self::with_store(FileStore::new(root))
    }
}

/// In-memory Pan for testing and embedding.
impl Pan<MemoryStore> {
    pub fn open_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error in {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Invalid selection: expected exactly two nodes, got {0}")]
    InvalidSelection(usize),

    #[error("Write error on {target}: {message}")]
    Write { target: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
