//! Visual workflow editor for the copper-circular platform.
//!
//! This crate provides the canvas-facing editing model, including:
//!
//! - **Graph Model**: Nodes and edges with positions, selection flags, and open JSON payloads
//! - **Node Data**: Per-type configuration shapes keyed by the node type
//! - **Palette**: Built-in node definitions and the drag-and-drop payload format
//! - **History**: Snapshot-based undo/redo journaling
//! - **Layout**: Layer-grid auto-layout and selection alignment
//! - **Store**: The single mutation facade tying document, history, and selection together

pub mod data;
pub mod edge;
pub mod error;
pub mod graph;
pub mod history;
pub mod layout;
pub mod node;
pub mod palette;
pub mod store;

pub use data::{JsonMap, NodeData};
pub use edge::{Edge, EdgeStyle};
pub use error::EditorError;
pub use graph::{EdgeChange, NodeChange, WorkflowData};
pub use history::HistoryJournal;
pub use node::{Node, NodeType, Position};
pub use palette::{NodeCategory, NodeDefinition, built_in_definitions};
pub use store::WorkflowStore;
