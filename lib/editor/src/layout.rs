//! Deterministic canvas layout.
//!
//! Auto-layout assigns each node a grid position on one of four vertical
//! layers by type (data sources, processing, AI models, outputs). Pure
//! functions of the node collection; edges are never touched.

use crate::node::{Node, Position};

/// Horizontal distance between layers.
pub const LAYER_WIDTH: f64 = 320.0;

/// Nominal node height used for vertical spacing.
pub const NODE_HEIGHT: f64 = 200.0;

/// Vertical gap between nodes within a layer.
pub const NODE_SPACING: f64 = 50.0;

/// Canvas margin applied to both axes.
const MARGIN: f64 = 100.0;

/// Number of layout layers.
const LAYER_COUNT: usize = 4;

/// Repositions every node onto the layer grid.
///
/// Each node moves to `x = layer * 320 + 100`, `y = row * 250 + 100`,
/// where `row` counts earlier nodes on the same layer. Only positions
/// change; the collection order is preserved.
#[must_use]
pub fn auto_layout(nodes: &[Node]) -> Vec<Node> {
    let mut rows = [0usize; LAYER_COUNT];
    nodes
        .iter()
        .map(|n| {
            let layer = n.node_type.layer();
            let row = rows[layer];
            rows[layer] += 1;

            let mut node = n.clone();
            node.position = Position::new(
                layer as f64 * LAYER_WIDTH + MARGIN,
                row as f64 * (NODE_HEIGHT + NODE_SPACING) + MARGIN,
            );
            node
        })
        .collect()
}

/// Sets every selected node's x to the average x of the selected set,
/// leaving y untouched. With fewer than two selected nodes the collection
/// is returned unchanged.
#[must_use]
pub fn align_selected_x(nodes: &[Node]) -> Vec<Node> {
    let selected: Vec<&Node> = nodes.iter().filter(|n| n.selected).collect();
    if selected.len() < 2 {
        return nodes.to_vec();
    }

    let average = selected.iter().map(|n| n.position.x).sum::<f64>() / selected.len() as f64;
    nodes
        .iter()
        .map(|n| {
            let mut node = n.clone();
            if node.selected {
                node.position.x = average;
            }
            node
        })
        .collect()
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
    fn nodes_land_on_their_layer_column() {
        let nodes = vec![
            node("crm", 0.0, 0.0),
            node("filter", 0.0, 0.0),
            node("gpt4", 0.0, 0.0),
            node("email", 0.0, 0.0),
        ];

        let laid_out = auto_layout(&nodes);
        let xs: Vec<f64> = laid_out.iter().map(|n| n.position.x).collect();
        assert_eq!(xs, vec![100.0, 420.0, 740.0, 1060.0]);
        assert!(laid_out.iter().all(|n| n.position.y == 100.0));
    }

    #[test]
    fn rows_stack_within_a_layer() {
        let nodes = vec![
            node("crm", 50.0, 90.0),
            node("cms", 10.0, 20.0),
            node("database", 0.0, 0.0),
        ];

        let laid_out = auto_layout(&nodes);
        let ys: Vec<f64> = laid_out.iter().map(|n| n.position.y).collect();
        assert_eq!(ys, vec![100.0, 350.0, 600.0]);
        assert!(laid_out.iter().all(|n| n.position.x == 100.0));
        // relative order inside the layer is preserved
        assert_eq!(laid_out[0].id, nodes[0].id);
        assert_eq!(laid_out[1].id, nodes[1].id);
    }

    #[test]
    fn layout_keeps_collection_order() {
        let nodes = vec![
            node("gpt4", 3.0, 1.0),
            node("crm", 2.0, 4.0),
            node("email", 9.0, 9.0),
            node("filter", 1.0, 5.0),
        ];

        let laid_out = auto_layout(&nodes);
        let ids: Vec<&str> = laid_out.iter().map(|n| n.id.as_str()).collect();
        let expected: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(laid_out[0].position, Position::new(740.0, 100.0));
        assert_eq!(laid_out[1].position, Position::new(100.0, 100.0));
        assert_eq!(laid_out[2].position, Position::new(1060.0, 100.0));
        assert_eq!(laid_out[3].position, Position::new(420.0, 100.0));
    }

    #[test]
    fn unknown_types_fall_back_to_layer_zero() {
        let nodes = vec![node("quantum-widget", 500.0, 500.0)];
        let laid_out = auto_layout(&nodes);
        assert_eq!(laid_out[0].position, Position::new(100.0, 100.0));
    }

    #[test]
    fn layout_is_deterministic() {
        let nodes = vec![
            node("gpt4", 3.0, 1.0),
            node("crm", 2.0, 4.0),
            node("webhook", 1.0, 5.0),
        ];
        assert_eq!(auto_layout(&nodes), auto_layout(&nodes));
    }

    #[test]
    fn align_averages_selected_x_only() {
        let mut nodes = vec![
            node("crm", 100.0, 10.0),
            node("cms", 250.0, 20.0),
            node("database", 300.0, 30.0),
        ];
        nodes[0].selected = true;
        nodes[2].selected = true;

        let aligned = align_selected_x(&nodes);
        assert_eq!(aligned[0].position, Position::new(200.0, 10.0));
        // unselected nodes keep their x
        assert_eq!(aligned[1].position, Position::new(250.0, 20.0));
        assert_eq!(aligned[2].position, Position::new(200.0, 30.0));
    }

    #[test]
    fn align_with_one_selected_is_unchanged() {
        let mut nodes = vec![node("crm", 100.0, 10.0), node("cms", 200.0, 20.0)];
        nodes[0].selected = true;

        assert_eq!(align_selected_x(&nodes), nodes);
    }
}
