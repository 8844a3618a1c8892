//! The editor document and incremental change application.
//!
//! The rendering collaborator reports drag, selection, and removal
//! interactions as batches of changes. Application is pure: the previous
//! collection is left untouched so the caller can journal it.

use crate::edge::Edge;
use crate::node::{Node, Position};
use serde::{Deserialize, Serialize};

/// The serializable unit of editor state: the full node and edge
/// collections. Snapshots for history and persistence are values of this
/// type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// An incremental change to the node collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    /// A node moved.
    Position { id: String, position: Position },
    /// A node's selection flag flipped.
    Select { id: String, selected: bool },
    /// A node was removed.
    Remove { id: String },
}

/// An incremental change to the edge collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    /// An edge's selection flag flipped.
    Select { id: String, selected: bool },
    /// An edge was removed.
    Remove { id: String },
}

/// Applies a batch of node changes, returning the new collection.
#[must_use]
pub fn apply_node_changes(changes: &[NodeChange], nodes: &[Node]) -> Vec<Node> {
    let mut next = nodes.to_vec();
    for change in changes {
        match change {
            NodeChange::Position { id, position } => {
                if let Some(node) = next.iter_mut().find(|n| n.id == *id) {
                    node.position = *position;
                }
            }
            NodeChange::Select { id, selected } => {
                if let Some(node) = next.iter_mut().find(|n| n.id == *id) {
                    node.selected = *selected;
                }
            }
            NodeChange::Remove { id } => {
                next.retain(|n| n.id != *id);
            }
        }
    }
    next
}

/// Applies a batch of edge changes, returning the new collection.
#[must_use]
pub fn apply_edge_changes(changes: &[EdgeChange], edges: &[Edge]) -> Vec<Edge> {
    let mut next = edges.to_vec();
    for change in changes {
        match change {
            EdgeChange::Select { id, selected } => {
                if let Some(edge) = next.iter_mut().find(|e| e.id == *id) {
                    edge.selected = *selected;
                }
            }
            EdgeChange::Remove { id } => {
                next.retain(|e| e.id != *id);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NodeData;
    use crate::node::NodeType;

    fn node(node_type: &str, x: f64, y: f64) -> Node {
        let node_type = NodeType::from(node_type);
        let data = NodeData::empty_for(&node_type);
        Node::new(node_type, Position::new(x, y), data)
    }

    #[test]
    fn position_change_moves_matching_node() {
        let nodes = vec![node("crm", 0.0, 0.0), node("filter", 10.0, 10.0)];
        let id = nodes[0].id.clone();

        let changes = [NodeChange::Position {
            id: id.clone(),
            position: Position::new(42.0, 7.0),
        }];
        let next = apply_node_changes(&changes, &nodes);

        assert_eq!(next[0].position, Position::new(42.0, 7.0));
        assert_eq!(next[1].position, nodes[1].position);
        // input untouched
        assert_eq!(nodes[0].position, Position::new(0.0, 0.0));
    }

    #[test]
    fn remove_change_filters_node() {
        let nodes = vec![node("crm", 0.0, 0.0), node("filter", 10.0, 10.0)];
        let id = nodes[0].id.clone();

        let next = apply_node_changes(&[NodeChange::Remove { id }], &nodes);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, nodes[1].id);
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn select_change_flips_flag() {
        let nodes = vec![node("crm", 0.0, 0.0)];
        let id = nodes[0].id.clone();

        let next = apply_node_changes(
            &[NodeChange::Select { id, selected: true }],
            &nodes,
        );
        assert!(next[0].selected);
        assert!(!nodes[0].selected);
    }

    #[test]
    fn changes_for_unknown_ids_are_ignored() {
        let nodes = vec![node("crm", 0.0, 0.0)];
        let changes = [
            NodeChange::Position {
                id: "missing".to_string(),
                position: Position::new(1.0, 1.0),
            },
            NodeChange::Remove {
                id: "also-missing".to_string(),
            },
        ];

        let next = apply_node_changes(&changes, &nodes);
        assert_eq!(next, nodes);
    }

    #[test]
    fn edge_changes_select_and_remove() {
        let edges = vec![Edge::connect("a", "b"), Edge::connect("b", "c")];
        let first = edges[0].id.clone();
        let second = edges[1].id.clone();

        let selected = apply_edge_changes(
            &[EdgeChange::Select {
                id: first,
                selected: true,
            }],
            &edges,
        );
        assert!(selected[0].selected);

        let removed = apply_edge_changes(&[EdgeChange::Remove { id: second }], &edges);
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn node_change_serde_is_tagged() {
        let change = NodeChange::Position {
            id: "crm-abc".to_string(),
            position: Position::new(5.0, 6.0),
        };
        let value = serde_json::to_value(&change).expect("serialize");
        assert_eq!(value.get("type"), Some(&serde_json::json!("position")));

        let back: NodeChange = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, change);
    }
}
