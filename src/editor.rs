//! Relation editor — the "Connect Nodes" action.
//!
//! The presentation layer hands over whatever the rendering widget reported
//! as selected; the editor validates the selection size, appends one
//! relation and persists the full relations collection.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{NodeId, PropertyMap, Relation};
use crate::store::PanStore;
use crate::{Error, Result};

/// A node reference as supplied by the UI selection mechanism.
///
/// Only `id` matters to the editor; the rest of the widget's selection
/// payload (label, position, classes, …) rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: NodeId,
    #[serde(flatten)]
    pub extra: PropertyMap,
}

impl NodeRef {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            extra: PropertyMap::new(),
        }
    }
}

/// Append a relation from the first selected node to the second and persist
/// the relations collection.
///
/// Fails with `Error::InvalidSelection` unless exactly two refs are
/// supplied; on that failure the store is never touched. No duplicate
/// detection and no self-loop rejection: selecting the same node twice
/// yields a self-referencing relation, and repeating a pair appends a second
/// identical entry.
///
/// This is a read-modify-write with no locking. Two concurrent invocations
/// race on the same collection and the last writer wins.
pub fn add_relation<S: PanStore + ?Sized>(store: &S, selection: &[NodeRef]) -> Result<Relation> {
    let [source, target] = selection else {
        return Err(Error::InvalidSelection(selection.len()));
    };
    debug!(source = %source.id, target = %target.id, "connecting nodes");

    let mut relations = store.load_relations()?;
    let relation = Relation::connect(source.id.clone(), target.id.clone());
    relations.push(relation.clone());
    store.save_relations(relations)?;

    info!(source = %relation.source(), target = %relation.target(), "relation persisted");
    Ok(relation)
}
