//! Relation (directed edge) between two PAN node identifiers.

use serde::{Deserialize, Serialize};
use super::{NodeId, PropertyMap};

/// A directed edge, wire-shaped like the node elements: the endpoints sit in
/// a nested `data` object.
///
/// Relations have no identity of their own beyond the (source, target) pair.
/// Duplicates and self-loops are allowed — the store appends whatever the
/// editor hands it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub data: RelationData,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

/// The `data` payload of a relation element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationData {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

impl Relation {
    /// Build the relation the "Connect Nodes" action appends.
    pub fn connect(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            data: RelationData {
                source: source.into(),
                target: target.into(),
                extra: PropertyMap::new(),
            },
            extra: PropertyMap::new(),
        }
    }

    pub fn source(&self) -> &NodeId {
        &self.data.source
    }

    pub fn target(&self) -> &NodeId {
        &self.data.target
    }

    pub fn is_self_loop(&self) -> bool {
        self.data.source == self.data.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_round_trips() {
        let json = r#"{"data": {"source": "p1", "target": "r2", "weight": 3}}"#;
        let relation: Relation = serde_json::from_str(json).unwrap();
        assert_eq!(relation.source().as_str(), "p1");
        assert_eq!(relation.target().as_str(), "r2");

        let back = serde_json::to_value(&relation).unwrap();
        assert_eq!(back["data"]["weight"], 3);
    }

    #[test]
    fn missing_endpoint_is_rejected() {
        let json = r#"{"data": {"source": "p1"}}"#;
        assert!(serde_json::from_str::<Relation>(json).is_err());
    }

    #[test]
    fn self_loop_is_representable() {
        assert!(Relation::connect("p1", "p1").is_self_loop());
        assert!(!Relation::connect("p1", "p2").is_self_loop());
    }
}
