//! Linear undo/redo history over whole-document snapshots.

use std::collections::VecDeque;

use crate::Document;

/// Past/present/future snapshot log.
///
/// Every checkpoint stores a full copy of the document; there is no
/// field-level or per-element history. `future` is discarded on every new
/// forward checkpoint, so history stays linear.
///
/// A gesture spanning many intermediate mutations commits as one undo step:
/// the caller brackets it with [`HistoryLog::begin_transaction`] and
/// [`HistoryLog::commit_transaction`], and checkpoints requested while the
/// transaction is open are deferred until the commit.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    past: Vec<Document>,
    present: Document,
    future: VecDeque<Document>,
    open_transaction: bool,
}

impl HistoryLog {
    /// Create a history log whose present snapshot is `initial`.
    #[must_use]
    pub fn new(initial: Document) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
            open_transaction: false,
        }
    }

    /// Record the live document as the new present snapshot.
    ///
    /// Pushes the old present onto `past` and clears `future` (the only
    /// operation that may discard redo state). Deferred while a transaction
    /// is open.
    pub fn checkpoint(&mut self, live: &Document) {
        if self.open_transaction {
            return;
        }
        let old_present = std::mem::replace(&mut self.present, live.clone());
        self.past.push(old_present);
        self.future.clear();
    }

    /// Open a transaction: subsequent checkpoints are deferred until
    /// [`HistoryLog::commit_transaction`]. Opening while already open is a
    /// no-op, so a re-entrant gesture cannot split an undo step.
    pub fn begin_transaction(&mut self) {
        self.open_transaction = true;
    }

    /// Close the open transaction and checkpoint the live document as one
    /// undo step. Without an open transaction this degrades to a plain
    /// checkpoint.
    pub fn commit_transaction(&mut self, live: &Document) {
        self.open_transaction = false;
        self.checkpoint(live);
    }

    /// Whether a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.open_transaction
    }

    /// Step back one snapshot, returning the restored document.
    ///
    /// Returns `None` without changing state when `past` is empty.
    pub fn undo(&mut self) -> Option<Document> {
        let previous = self.past.pop()?;
        let old_present = std::mem::replace(&mut self.present, previous.clone());
        self.future.push_front(old_present);
        Some(previous)
    }

    /// Step forward one snapshot, returning the restored document.
    ///
    /// Returns `None` without changing state when `future` is empty.
    pub fn redo(&mut self) -> Option<Document> {
        let next = self.future.pop_front()?;
        let old_present = std::mem::replace(&mut self.present, next.clone());
        self.past.push(old_present);
        Some(next)
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The current present snapshot.
    #[must_use]
    pub fn present(&self) -> &Document {
        &self.present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, ElementType};

    fn doc_with(n: usize) -> Document {
        let mut doc = Document::new();
        for _ in 0..n {
            doc.push(Element::new(ElementType::Text));
        }
        doc
    }

    #[test]
    fn test_undo_on_empty_past_is_noop() {
        let mut history = HistoryLog::new(doc_with(1));
        assert!(history.undo().is_none());
        assert!(!history.can_undo());
        assert_eq!(history.present().len(), 1);
    }

    #[test]
    fn test_redo_on_empty_future_is_noop() {
        let mut history = HistoryLog::new(Document::new());
        assert!(history.redo().is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_checkpoint_then_undo_restores_previous() {
        let mut history = HistoryLog::new(Document::new());
        let one = doc_with(1);
        history.checkpoint(&one);

        let restored = history.undo().expect("should undo");
        assert!(restored.is_empty());
        assert!(history.can_redo());

        let redone = history.redo().expect("should redo");
        assert_eq!(redone, one);
    }

    #[test]
    fn test_new_checkpoint_clears_future() {
        let mut history = HistoryLog::new(Document::new());
        history.checkpoint(&doc_with(1));
        history.undo().expect("undo");
        assert!(history.can_redo());

        history.checkpoint(&doc_with(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_inverse_over_sequence() {
        let snapshots: Vec<Document> = (1..=4usize).map(doc_with).collect();
        let mut history = HistoryLog::new(Document::new());
        for snapshot in &snapshots {
            history.checkpoint(snapshot);
        }

        for _ in 0..snapshots.len() {
            history.undo().expect("undo");
        }
        assert!(history.present().is_empty());
        assert!(!history.can_undo());

        let mut last = None;
        for _ in 0..snapshots.len() {
            last = history.redo();
        }
        assert_eq!(last.expect("redo"), snapshots[3]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_transaction_defers_checkpoints() {
        let mut history = HistoryLog::new(Document::new());
        history.begin_transaction();
        history.checkpoint(&doc_with(1));
        history.checkpoint(&doc_with(2));
        assert!(!history.can_undo());

        history.commit_transaction(&doc_with(3));
        assert!(history.can_undo());

        // One undo reverses the whole transaction
        let restored = history.undo().expect("undo");
        assert!(restored.is_empty());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_commit_without_begin_is_plain_checkpoint() {
        let mut history = HistoryLog::new(Document::new());
        history.commit_transaction(&doc_with(1));
        assert!(history.can_undo());
        assert_eq!(history.present().len(), 1);
    }

    #[test]
    fn test_nested_begin_keeps_one_step() {
        let mut history = HistoryLog::new(Document::new());
        history.begin_transaction();
        history.begin_transaction();
        history.commit_transaction(&doc_with(2));
        assert!(!history.in_transaction());
        assert_eq!(history.past.len(), 1);
    }
}
