//! Snapshot-based undo/redo journaling.
//!
//! The journal holds whole-document snapshots. The store records one
//! snapshot immediately before every mutating operation; undo swaps the
//! current document for the top of the undo stack, redo reverses that
//! swap, and any fresh mutation invalidates the redo stack.

use crate::graph::WorkflowData;

/// Undo and redo stacks of document snapshots.
#[derive(Debug, Clone, Default)]
pub struct HistoryJournal {
    undo: Vec<WorkflowData>,
    redo: Vec<WorkflowData>,
    limit: Option<usize>,
}

impl HistoryJournal {
    /// Creates an unbounded journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a journal that keeps at most `limit` undo entries,
    /// discarding the oldest once full.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Records a pre-mutation snapshot. Invalidates the redo stack.
    pub fn record(&mut self, snapshot: WorkflowData) {
        self.undo.push(snapshot);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.remove(0);
            }
        }
        self.redo.clear();
    }

    /// Pops the most recent snapshot, banking `current` for redo.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: WorkflowData) -> Option<WorkflowData> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pops the most recently undone snapshot, banking `current` for
    /// undo. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: WorkflowData) -> Option<WorkflowData> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Drops both stacks. Used when a workflow is loaded wholesale.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NodeData;
    use crate::node::{Node, NodeType, Position};

    fn snapshot_with(count: usize) -> WorkflowData {
        let nodes = (0..count)
            .map(|i| {
                Node::new(
                    NodeType::Crm,
                    Position::new(i as f64, 0.0),
                    NodeData::empty_for(&NodeType::Crm),
                )
            })
            .collect();
        WorkflowData {
            nodes,
            edges: Vec::new(),
        }
    }

    #[test]
    fn empty_journal_has_nothing_to_undo() {
        let mut journal = HistoryJournal::new();
        assert!(!journal.can_undo());
        assert!(!journal.can_redo());
        assert_eq!(journal.undo(snapshot_with(0)), None);
        assert_eq!(journal.redo(snapshot_with(0)), None);
    }

    #[test]
    fn undo_returns_recorded_snapshot_and_banks_current() {
        let mut journal = HistoryJournal::new();
        let before = snapshot_with(0);
        let after = snapshot_with(1);

        journal.record(before.clone());
        let restored = journal.undo(after.clone()).expect("undo");
        assert_eq!(restored, before);
        assert!(journal.can_redo());

        let replayed = journal.redo(before.clone()).expect("redo");
        assert_eq!(replayed, after);
        assert!(journal.can_undo());

        // A second undo lands back on the original snapshot.
        let restored_again = journal.undo(replayed).expect("undo");
        assert_eq!(restored_again, before);
    }

    #[test]
    fn record_invalidates_redo() {
        let mut journal = HistoryJournal::new();
        journal.record(snapshot_with(0));
        journal.undo(snapshot_with(1));
        assert!(journal.can_redo());

        journal.record(snapshot_with(2));
        assert!(!journal.can_redo());
    }

    #[test]
    fn limit_discards_oldest_entries() {
        let mut journal = HistoryJournal::with_limit(2);
        journal.record(snapshot_with(0));
        journal.record(snapshot_with(1));
        journal.record(snapshot_with(2));

        let first = journal.undo(snapshot_with(3)).expect("undo");
        assert_eq!(first.nodes.len(), 2);
        let second = journal.undo(first).expect("undo");
        assert_eq!(second.nodes.len(), 1);
        assert!(!journal.can_undo());
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut journal = HistoryJournal::new();
        journal.record(snapshot_with(0));
        journal.undo(snapshot_with(1));
        journal.record(snapshot_with(2));

        journal.clear();
        assert!(!journal.can_undo());
        assert!(!journal.can_redo());
    }
}
