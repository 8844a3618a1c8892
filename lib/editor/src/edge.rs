//! Canvas edge types.

use crate::data::JsonMap;
use crate::node::{is_false, random_suffix};
use serde::{Deserialize, Serialize};

/// Stroke color applied to newly created edges.
pub const DEFAULT_EDGE_STROKE: &str = "#CBD5E1";

/// Stroke width applied to newly created edges.
pub const DEFAULT_EDGE_STROKE_WIDTH: f64 = 2.0;

/// Visual styling attached to an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: DEFAULT_EDGE_STROKE.to_string(),
            stroke_width: DEFAULT_EDGE_STROKE_WIDTH,
        }
    }
}

/// A directed connection between two nodes.
///
/// `source` and `target` hold node ids. Unrecognized top-level keys
/// (handle ids and the like) round-trip through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<EdgeStyle>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl Edge {
    /// Creates the edge produced by connecting two nodes on the canvas:
    /// default type, animated, default stroke styling.
    #[must_use]
    pub fn connect(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: format!("edge-{}", random_suffix()),
            source: source.into(),
            target: target.into(),
            edge_type: Some("default".to_string()),
            animated: true,
            style: Some(EdgeStyle::default()),
            selected: false,
            extra: JsonMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn connect_applies_canvas_defaults() {
        let edge = Edge::connect("a", "b");
        assert!(edge.id.starts_with("edge-"));
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
        assert_eq!(edge.edge_type.as_deref(), Some("default"));
        assert!(edge.animated);
        assert_eq!(edge.style, Some(EdgeStyle::default()));
    }

    #[test]
    fn edge_serde_preserves_unknown_keys() {
        let value = json!({
            "id": "edge-x1",
            "source": "a",
            "target": "b",
            "sourceHandle": null,
            "targetHandle": "in"
        });

        let edge: Edge = serde_json::from_value(value).expect("deserialize");
        assert!(!edge.animated);
        assert_eq!(edge.extra.get("targetHandle"), Some(&json!("in")));

        let back = serde_json::to_value(&edge).expect("serialize");
        assert_eq!(back.get("sourceHandle"), Some(&json!(null)));
        assert!(back.get("animated").is_none());
    }

    #[test]
    fn edge_style_serializes_camel_case() {
        let style = EdgeStyle::default();
        let value = serde_json::to_value(&style).expect("serialize");
        assert_eq!(value, json!({ "stroke": "#CBD5E1", "strokeWidth": 2.0 }));
    }
}
