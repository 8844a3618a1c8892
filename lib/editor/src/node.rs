//! Canvas node types.
//!
//! Nodes are the building blocks of the editor document. Each node has:
//! - A unique string id of the form `{type}-{6-char suffix}`
//! - A node type drawn from the palette (unknown types are preserved)
//! - A position on the canvas
//! - Data shaped by the node type

use crate::data::{JsonMap, NodeData};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Length of the random id suffix appended to the node type.
const SUFFIX_LEN: usize = 6;

/// Offset applied to both axes when duplicating a node.
pub const DUPLICATE_OFFSET: f64 = 50.0;

/// A position on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The type of a canvas node.
///
/// The nineteen palette types are first-class variants; anything else is
/// carried through as `Other` so that documents containing node types from
/// newer palettes still load, lay out, and save unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    Gpt4,
    Claude,
    CustomLlm,
    Crm,
    Cms,
    Database,
    GoogleSheets,
    Filter,
    Transform,
    Merge,
    Email,
    Social,
    Webhook,
    AdGenerator,
    CampaignPlanner,
    ContentWriter,
    LeadGenerator,
    OutreachSequence,
    SalesAnalytics,
    Other(String),
}

impl NodeType {
    /// Returns the serialized type string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gpt4 => "gpt4",
            Self::Claude => "claude",
            Self::CustomLlm => "custom-llm",
            Self::Crm => "crm",
            Self::Cms => "cms",
            Self::Database => "database",
            Self::GoogleSheets => "google-sheets",
            Self::Filter => "filter",
            Self::Transform => "transform",
            Self::Merge => "merge",
            Self::Email => "email",
            Self::Social => "social",
            Self::Webhook => "webhook",
            Self::AdGenerator => "ad-generator",
            Self::CampaignPlanner => "campaign-planner",
            Self::ContentWriter => "content-writer",
            Self::LeadGenerator => "lead-generator",
            Self::OutreachSequence => "outreach-sequence",
            Self::SalesAnalytics => "sales-analytics",
            Self::Other(s) => s,
        }
    }

    /// Returns the auto-layout layer for this node type.
    ///
    /// Data sources sit in layer 0, processing in 1, AI models in 2,
    /// outputs in 3. Unrecognized types fall back to layer 0.
    #[must_use]
    pub fn layer(&self) -> usize {
        match self {
            Self::Crm | Self::Cms | Self::Database => 0,
            Self::Filter | Self::Transform | Self::Merge => 1,
            Self::Gpt4 | Self::Claude | Self::CustomLlm => 2,
            Self::Email | Self::Social | Self::Webhook => 3,
            _ => 0,
        }
    }
}

impl From<&str> for NodeType {
    fn from(s: &str) -> Self {
        match s {
            "gpt4" => Self::Gpt4,
            "claude" => Self::Claude,
            "custom-llm" => Self::CustomLlm,
            "crm" => Self::Crm,
            "cms" => Self::Cms,
            "database" => Self::Database,
            "google-sheets" => Self::GoogleSheets,
            "filter" => Self::Filter,
            "transform" => Self::Transform,
            "merge" => Self::Merge,
            "email" => Self::Email,
            "social" => Self::Social,
            "webhook" => Self::Webhook,
            "ad-generator" => Self::AdGenerator,
            "campaign-planner" => Self::CampaignPlanner,
            "content-writer" => Self::ContentWriter,
            "lead-generator" => Self::LeadGenerator,
            "outreach-sequence" => Self::OutreachSequence,
            "sales-analytics" => Self::SalesAnalytics,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

/// Generates a fresh node id for the given type.
pub(crate) fn generate_node_id(node_type: &NodeType) -> String {
    format!("{}-{}", node_type.as_str(), random_suffix())
}

/// Generates a random alphanumeric suffix for node and edge ids.
pub(crate) fn random_suffix() -> String {
    use rand::{Rng, distr::Alphanumeric};

    rand::rng()
        .sample_iter(Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect()
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// A node in the editor document.
///
/// Top-level keys not recognized here (render dimensions, drag state and
/// the like) round-trip through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub position: Position,
    pub data: NodeData,
    #[serde(skip_serializing_if = "is_false")]
    pub selected: bool,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl Node {
    /// Creates a node of the given type with a freshly generated id.
    #[must_use]
    pub fn new(node_type: NodeType, position: Position, data: NodeData) -> Self {
        Self {
            id: generate_node_id(&node_type),
            node_type,
            position,
            data,
            selected: false,
            extra: JsonMap::new(),
        }
    }

    /// Clones this node under a fresh id, offset by
    /// [`DUPLICATE_OFFSET`] on both axes. The clone carries no edges and
    /// is not selected.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_node_id(&self.node_type),
            node_type: self.node_type.clone(),
            position: Position::new(
                self.position.x + DUPLICATE_OFFSET,
                self.position.y + DUPLICATE_OFFSET,
            ),
            data: self.data.clone(),
            selected: false,
            extra: self.extra.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The data shape depends on the node type, so deserialization is
        // two-phase: raw fields first, then type-directed data decoding.
        #[derive(Deserialize)]
        struct RawNode {
            id: String,
            #[serde(rename = "type")]
            node_type: NodeType,
            #[serde(default)]
            position: Position,
            #[serde(default)]
            data: JsonValue,
            #[serde(default)]
            selected: bool,
            #[serde(flatten)]
            extra: JsonMap,
        }

        let raw = RawNode::deserialize(deserializer)?;
        let data = NodeData::for_type(&raw.node_type, raw.data).map_err(D::Error::custom)?;

        Ok(Self {
            id: raw.id,
            node_type: raw.node_type,
            position: raw.position,
            data,
            selected: raw.selected,
            extra: raw.extra,
        })
    }
}
