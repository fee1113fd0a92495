//! # PAN Graph Model
//!
//! Clean DTOs mirroring the on-disk element shapes.
//! These types cross every boundary: store ↔ editor ↔ presentation layer.
//!
//! Design rule: this module is pure data — no I/O, no state.

pub mod node;
pub mod relation;
pub mod snapshot;
pub mod style;

pub use node::{Category, Node, NodeData, NodeId, Position};
pub use relation::{Relation, RelationData};
pub use snapshot::{Element, GraphSnapshot};
pub use style::{StyleRule, Stylesheet};

/// Untyped key-value payload carried verbatim alongside the typed fields.
///
/// The external authoring tool is free to put extra keys on any element
/// (`classes`, weights, tooltips, …); they round-trip through this map.
pub type PropertyMap = serde_json::Map<String, serde_json::Value>;
