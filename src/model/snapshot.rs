//! The ordered element list handed to the rendering collaborator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use super::{Node, Relation};

/// One entry of a collection file: a node or a relation.
///
/// Untagged on the wire — a relation is recognized by `data.source` /
/// `data.target` (tried first), everything else must be node-shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Relation(Relation),
    Node(Node),
}

impl Element {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Relation(_) => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Element::Relation(relation) => Some(relation),
            Element::Node(_) => None,
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Relation> for Element {
    fn from(relation: Relation) -> Self {
        Element::Relation(relation)
    }
}

/// Immutable, ordered concatenation of all four collections: products,
/// processes, resources, then relations, file order preserved within each.
///
/// The order is part of the contract — the rendering widget may use it as a
/// z-order hint. A fresh snapshot fully replaces the previous one; there is
/// no incremental patching.
///
/// Serializes transparently as the flat JSON array the widget consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GraphSnapshot {
    elements: Vec<Element>,
}

impl GraphSnapshot {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.elements.iter().filter_map(Element::as_node)
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.elements.iter().filter_map(Element::as_relation)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn relation_count(&self) -> usize {
        self.relations().count()
    }

    /// Relations whose source or target is not a node in this snapshot.
    ///
    /// Endpoint existence is a render-time invariant, not a write-time one:
    /// the collections are independently owned files and can drift apart.
    /// Dangling relations are reported, never rejected.
    pub fn dangling(&self) -> Vec<&Relation> {
        let ids: HashSet<_> = self.nodes().map(Node::id).collect();
        self.relations()
            .filter(|r| !ids.contains(r.source()) || !ids.contains(r.target()))
            .collect()
    }
}
