//! The workflow editor store.
//!
//! `WorkflowStore` aggregates the live document (nodes and edges), the
//! undo/redo journal, the selection draft, UI flags, and workflow
//! metadata behind one explicitly constructed object. Every structural
//! mutation records a pre-mutation snapshot first, so a single undo
//! reverses a single operation.
//!
//! The store is forgiving at its edges: operations against stale ids,
//! empty history stacks, or an empty selection are no-ops rather than
//! errors.

use crate::data::NodeData;
use crate::edge::Edge;
use crate::error::EditorError;
use crate::graph::{self, EdgeChange, NodeChange, WorkflowData};
use crate::history::HistoryJournal;
use crate::layout;
use crate::node::{Node, Position};
use crate::palette::NodeDefinition;
use copper_circular_core::WorkflowId;

/// Name given to workflows that have not been saved yet.
pub const DEFAULT_WORKFLOW_NAME: &str = "Untitled Workflow";

#[derive(Debug, Clone, PartialEq)]
enum Selection {
    Unselected,
    Selected { node_id: String, draft: NodeData },
}

/// Editor state for one open workflow.
#[derive(Debug, Clone)]
pub struct WorkflowStore {
    workflow_id: Option<WorkflowId>,
    workflow_name: String,
    workflow_description: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    sidebar_collapsed: bool,
    show_property_panel: bool,
    selection: Selection,
    history: HistoryJournal,
}

impl WorkflowStore {
    /// Creates an empty store with unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_journal(HistoryJournal::new())
    }

    /// Creates an empty store keeping at most `limit` undo entries.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_journal(HistoryJournal::with_limit(limit))
    }

    fn with_journal(history: HistoryJournal) -> Self {
        Self {
            workflow_id: None,
            workflow_name: DEFAULT_WORKFLOW_NAME.to_string(),
            workflow_description: String::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            sidebar_collapsed: false,
            show_property_panel: false,
            selection: Selection::Unselected,
            history,
        }
    }

    // --- metadata ---

    #[must_use]
    pub fn workflow_id(&self) -> Option<WorkflowId> {
        self.workflow_id
    }

    pub fn set_workflow_id(&mut self, id: Option<WorkflowId>) {
        self.workflow_id = id;
    }

    #[must_use]
    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn set_workflow_name(&mut self, name: impl Into<String>) {
        self.workflow_name = name.into();
    }

    #[must_use]
    pub fn workflow_description(&self) -> &str {
        &self.workflow_description
    }

    pub fn set_workflow_description(&mut self, description: impl Into<String>) {
        self.workflow_description = description.into();
    }

    // --- UI flags ---

    #[must_use]
    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    #[must_use]
    pub fn show_property_panel(&self) -> bool {
        self.show_property_panel
    }

    pub fn set_show_property_panel(&mut self, show: bool) {
        self.show_property_panel = show;
    }

    // --- document access ---

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns a snapshot of the document for persistence.
    #[must_use]
    pub fn get_workflow_data(&self) -> WorkflowData {
        self.snapshot()
    }

    /// Replaces the document wholesale and clears both history stacks.
    /// Loading is a reset boundary, not an undoable mutation.
    pub fn load_workflow(&mut self, data: WorkflowData) {
        self.nodes = data.nodes;
        self.edges = data.edges;
        self.history.clear();
        self.prune_selection();
    }

    // --- mutations ---

    /// Applies a batch of node changes from the rendering collaborator.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        self.save_state();
        self.nodes = graph::apply_node_changes(changes, &self.nodes);
        self.prune_selection();
    }

    /// Applies a batch of edge changes from the rendering collaborator.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        self.save_state();
        self.edges = graph::apply_edge_changes(changes, &self.edges);
    }

    /// Connects two nodes with a default-styled animated edge. A pair
    /// that is already connected is left as is.
    pub fn connect(&mut self, source: &str, target: &str) {
        self.save_state();
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return;
        }
        self.edges.push(Edge::connect(source, target));
    }

    /// Stamps a node from a palette definition at the given position.
    pub fn add_node(
        &mut self,
        definition: &NodeDefinition,
        position: Position,
    ) -> Result<(), EditorError> {
        let node = definition.instantiate(position)?;
        self.save_state();
        self.nodes.push(node);
        Ok(())
    }

    /// Handles a canvas drop: parses the drag payload and stamps a node.
    /// Malformed payloads create no node and surface no error.
    pub fn add_node_from_payload(&mut self, payload: &str, position: Position) {
        let Ok(definition) = NodeDefinition::from_drag_payload(payload) else {
            return;
        };
        let _ = self.add_node(&definition, position);
    }

    /// Replaces a node's data. If the node is selected, the draft is
    /// refreshed to the committed value.
    pub fn update_node_data(&mut self, node_id: &str, data: NodeData) {
        self.save_state();
        let mut updated = false;
        for node in &mut self.nodes {
            if node.id == node_id {
                node.data = data.clone();
                updated = true;
            }
        }
        if updated {
            if let Selection::Selected {
                node_id: selected_id,
                draft,
            } = &mut self.selection
            {
                if selected_id == node_id {
                    *draft = data;
                }
            }
        }
    }

    /// Removes a node and every edge referencing it.
    pub fn delete_node(&mut self, node_id: &str) {
        self.save_state();
        self.nodes.retain(|n| n.id != node_id);
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
        self.prune_selection();
    }

    /// Removes every selected node and edge, plus any edge referencing a
    /// removed node.
    pub fn delete_selected(&mut self) {
        self.save_state();
        let removed: Vec<String> = self
            .nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.id.clone())
            .collect();
        self.nodes.retain(|n| !n.selected);
        self.edges.retain(|e| {
            !e.selected && !removed.contains(&e.source) && !removed.contains(&e.target)
        });
        self.prune_selection();
    }

    /// Clones a node under a fresh id at a (+50, +50) offset. The clone
    /// carries no edges.
    pub fn duplicate_node(&mut self, node_id: &str) {
        self.save_state();
        let Some(node) = self.nodes.iter().find(|n| n.id == node_id) else {
            return;
        };
        let duplicate = node.duplicate();
        self.nodes.push(duplicate);
    }

    /// Aligns the selected nodes to their average x. Requires at least
    /// two selected nodes; otherwise nothing happens and nothing is
    /// journaled.
    pub fn align_selected(&mut self) {
        if self.nodes.iter().filter(|n| n.selected).count() < 2 {
            return;
        }
        self.save_state();
        self.nodes = layout::align_selected_x(&self.nodes);
    }

    /// Repositions every node onto the layer grid. One journal entry, so
    /// the relayout undoes in a single step.
    pub fn auto_layout(&mut self) {
        self.save_state();
        self.nodes = layout::auto_layout(&self.nodes);
    }

    // --- history ---

    pub fn undo(&mut self) {
        if let Some(previous) = self.history.undo(self.snapshot()) {
            self.nodes = previous.nodes;
            self.edges = previous.edges;
            self.prune_selection();
        }
    }

    pub fn redo(&mut self) {
        if let Some(next) = self.history.redo(self.snapshot()) {
            self.nodes = next.nodes;
            self.edges = next.edges;
            self.prune_selection();
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- selection ---

    /// Selects a node for property editing, seeding the draft from its
    /// committed data and showing the property panel. Unknown ids are
    /// ignored.
    pub fn select_node(&mut self, node_id: &str) {
        let Some(node) = self.nodes.iter().find(|n| n.id == node_id) else {
            return;
        };
        let draft = node.data.clone();
        self.selection = Selection::Selected {
            node_id: node_id.to_string(),
            draft,
        };
        self.show_property_panel = true;
    }

    #[must_use]
    pub fn selected_node_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Selected { node_id, .. } => Some(node_id),
            Selection::Unselected => None,
        }
    }

    /// The editable draft of the selected node's data, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&NodeData> {
        match &self.selection {
            Selection::Selected { draft, .. } => Some(draft),
            Selection::Unselected => None,
        }
    }

    /// Mutable access to the draft for the property panel.
    pub fn draft_mut(&mut self) -> Option<&mut NodeData> {
        match &mut self.selection {
            Selection::Selected { draft, .. } => Some(draft),
            Selection::Unselected => None,
        }
    }

    /// Commits the draft into the committed graph. Journals first, so the
    /// property edit is undoable. No-op when nothing is selected.
    pub fn apply_edits(&mut self) {
        let Selection::Selected { node_id, draft } = &self.selection else {
            return;
        };
        let node_id = node_id.clone();
        let draft = draft.clone();
        self.update_node_data(&node_id, draft);
    }

    /// Reloads the draft from the committed node data, discarding
    /// in-progress edits. The journal is untouched.
    pub fn reset_edits(&mut self) {
        let Selection::Selected { node_id, .. } = &self.selection else {
            return;
        };
        let node_id = node_id.clone();
        let Some(data) = self
            .nodes
            .iter()
            .find(|n| n.id == node_id)
            .map(|n| n.data.clone())
        else {
            return;
        };
        if let Selection::Selected { draft, .. } = &mut self.selection {
            *draft = data;
        }
    }

    /// Clears the selection and hides the property panel. The draft is
    /// discarded.
    pub fn close_panel(&mut self) {
        self.selection = Selection::Unselected;
        self.show_property_panel = false;
    }

    /// Whether any node or edge carries the selected flag.
    #[must_use]
    pub fn has_selected_elements(&self) -> bool {
        self.nodes.iter().any(|n| n.selected) || self.edges.iter().any(|e| e.selected)
    }

    // --- internals ---

    fn snapshot(&self) -> WorkflowData {
        WorkflowData {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn prune_selection(&mut self) {
        if let Selection::Selected { node_id, .. } = &self.selection {
            if !self.nodes.iter().any(|n| n.id == *node_id) {
                self.selection = Selection::Unselected;
                self.show_property_panel = false;
            }
        }
    }
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new()
    }
}
