//! Node (product, process or resource) in the PAN graph.

use serde::{Deserialize, Serialize};
use super::PropertyMap;

/// Node identifier, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Which of the three node collections an element belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Product,
    Process,
    Resource,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Product => write!(f, "product"),
            Category::Process => write!(f, "process"),
            Category::Resource => write!(f, "resource"),
        }
    }
}

/// Preset layout position, consumed as-is by the rendering widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node in the PAN graph, wire-shaped: the identifying payload sits in a
/// nested `data` object, the layout position at the top level.
///
/// `category` never appears on disk — the loader stamps it from the owning
/// collection (products.json ⇒ `Product`, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(skip)]
    pub category: Category,
    pub data: NodeData,
    pub position: Position,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

/// The `data` payload of a node element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: NodeId,
    pub label: String,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, category: Category) -> Self {
        Self {
            category,
            data: NodeData {
                id: id.into(),
                label: label.into(),
                extra: PropertyMap::new(),
            },
            position: Position::default(),
            extra: PropertyMap::new(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.data.id
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}
