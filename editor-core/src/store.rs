//! The editor store: single source of truth for the live document,
//! selection, transient interaction state, and history.
//!
//! Every UI affordance (drag, resize, property panel, AI import) mutates the
//! canvas through this surface so the document and the history log stay
//! consistent. The store is a plain constructible object; the composing
//! application owns it and decides how to share it.

use serde::{Deserialize, Serialize};

use crate::{
    Document, Element, ElementContent, ElementId, ElementStyle, ElementType, HistoryLog, Position,
    Size, Template,
};

/// Default position for elements added without an explicit one.
const DEFAULT_ADD_POSITION: Position = Position { x: 50.0, y: 50.0 };

/// A shallow patch applied to an element.
///
/// Each present field replaces the element's field wholesale; absent fields
/// are left untouched. Replacing `content` carries the type discriminant
/// with it, so the payload always matches the element's type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    /// New position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// New size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// New style block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    /// New content payload (including the type tag).
    #[serde(default, flatten)]
    pub content: Option<ElementContent>,
    /// New stacking key.
    #[serde(default, rename = "zIndex", skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// Owns the live document, selection, and transient state, and is the only
/// component that drives the [`HistoryLog`].
///
/// All id-keyed operations targeting a missing id are silent no-ops: the
/// element may have been concurrently deleted, and that race is benign for
/// UI callers. A no-op never checkpoints.
#[derive(Debug, Default)]
pub struct EditorStore {
    document: Document,
    selected: Option<ElementId>,
    dragged: Option<Element>,
    generating: bool,
    template: Option<Template>,
    history: HistoryLog,
}

impl EditorStore {
    /// Create a store with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing document. The seed becomes
    /// the history's present snapshot, so it is not itself undoable.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            history: HistoryLog::new(document.clone()),
            document,
            ..Self::default()
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new default element of `element_type` at `position`
    /// (default `(50, 50)`), select it, and return its id.
    pub fn add_element(
        &mut self,
        element_type: ElementType,
        position: Option<Position>,
    ) -> ElementId {
        let element =
            Element::new(element_type).at(position.unwrap_or(DEFAULT_ADD_POSITION).clamped());
        let id = self.document.push(element);
        self.selected = Some(id);
        tracing::debug!(%id, ?element_type, "element added");
        self.history.checkpoint(&self.document);
        id
    }

    /// Shallow-merge `patch` into the element matching `id`.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        let Some(element) = self.document.get_mut(id) else {
            return;
        };
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(size) = patch.size {
            element.size = size;
        }
        if let Some(style) = patch.style {
            element.style = style;
        }
        if let Some(content) = patch.content {
            element.content = content;
        }
        if let Some(z_index) = patch.z_index {
            element.z_index = z_index;
        }
        self.history.checkpoint(&self.document);
    }

    /// Remove the element by id, clearing the selection if it pointed there.
    pub fn delete_element(&mut self, id: ElementId) {
        if self.document.remove(id).is_none() {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::debug!(%id, "element deleted");
        self.history.checkpoint(&self.document);
    }

    /// Append an offset clone of the element and select it.
    /// Returns the clone's id.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let clone = self.document.get(id)?.clone_with_offset();
        let clone_id = self.document.push(clone);
        self.selected = Some(clone_id);
        self.history.checkpoint(&self.document);
        Some(clone_id)
    }

    /// Set the element's position only, clamped non-negative.
    ///
    /// Used during a continuous drag; no checkpoint is taken here — the
    /// gesture commits as one undo step at [`EditorStore::end_drag`].
    pub fn move_element(&mut self, id: ElementId, position: Position) {
        if let Some(element) = self.document.get_mut(id) {
            element.position = position.clamped();
        }
    }

    /// Set the element's size only, clamped to the 50x30 interaction
    /// minimums, and re-clamp the position non-negative.
    ///
    /// Used during a continuous resize; the caller commits the gesture via
    /// [`EditorStore::commit_gesture`] when the interaction ends.
    pub fn resize_element(&mut self, id: ElementId, size: Size) {
        if let Some(element) = self.document.get_mut(id) {
            element.size = size.clamped();
            element.position = element.position.clamped();
        }
    }

    /// Replace the whole document (AI import). A selection that no longer
    /// resolves is dropped.
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.document = Document::from_elements(elements);
        self.drop_stale_selection();
        self.history.checkpoint(&self.document);
    }

    /// Set the selection. An id that does not resolve clears the selection,
    /// keeping the "selection references a live element or is null"
    /// invariant. Selection is not historized.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.selected = id.filter(|id| self.document.contains(*id));
    }

    /// Begin a drag gesture: remember the dragged element for overlay
    /// rendering and open a history transaction so intermediate moves
    /// collapse into one undo step.
    pub fn start_drag(&mut self, element: Element) {
        self.dragged = Some(element);
        self.history.begin_transaction();
    }

    /// End the drag gesture: clear the transient snapshot and commit the
    /// whole gesture as a single checkpoint.
    pub fn end_drag(&mut self) {
        self.dragged = None;
        self.history.commit_transaction(&self.document);
    }

    /// Commit the current gesture as one undo step. This is the resize-end
    /// path; with no open transaction it takes a plain checkpoint.
    pub fn commit_gesture(&mut self) {
        self.history.commit_transaction(&self.document);
    }

    /// Replace the document from a template and remember the template
    /// reference. Clears the selection.
    pub fn load_template(&mut self, template: Template) {
        self.document = Document::from_elements(template.elements.clone());
        self.selected = None;
        tracing::debug!(template = %template.id, "template loaded");
        self.template = Some(template);
        self.history.checkpoint(&self.document);
    }

    /// Empty the document and clear selection and template.
    pub fn clear_canvas(&mut self) {
        self.document = Document::new();
        self.selected = None;
        self.template = None;
        self.history.checkpoint(&self.document);
    }

    /// Raise the element above every other: `z = max(existing, 0) + 1`.
    pub fn bring_to_front(&mut self, id: ElementId) {
        if !self.document.contains(id) {
            return;
        }
        let top = self.document.max_z_index() + 1;
        if let Some(element) = self.document.get_mut(id) {
            element.z_index = top;
        }
        self.history.checkpoint(&self.document);
    }

    /// Lower the element below every other: `z = min(existing, 1) - 1`.
    pub fn send_to_back(&mut self, id: ElementId) {
        if !self.document.contains(id) {
            return;
        }
        let bottom = self.document.min_z_index() - 1;
        if let Some(element) = self.document.get_mut(id) {
            element.z_index = bottom;
        }
        self.history.checkpoint(&self.document);
    }

    /// Step the document back one undo step. No-op when there is nothing
    /// to undo. Selection is not restored from history; a selection that no
    /// longer resolves is dropped.
    pub fn undo(&mut self) {
        if let Some(document) = self.history.undo() {
            self.document = document;
            self.drop_stale_selection();
        }
    }

    /// Step the document forward one redo step. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        if let Some(document) = self.history.redo() {
            self.document = document;
            self.drop_stale_selection();
        }
    }

    /// Mark a generation request as in flight.
    pub fn begin_generation(&mut self) {
        self.generating = true;
    }

    /// Mark the generation request as finished. Callers must reach this on
    /// every exit path, success or failure.
    pub fn finish_generation(&mut self) {
        self.generating = false;
    }

    // -----------------------------------------------------------------------
    // Derived queries
    // -----------------------------------------------------------------------

    /// The live document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The selected element's id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// Resolve the selection to an element. Returns `None` for a stale or
    /// empty selection, never panics.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.document.get(self.selected?)
    }

    /// The element currently being dragged, for overlay rendering.
    #[must_use]
    pub fn dragged_element(&self) -> Option<&Element> {
        self.dragged.as_ref()
    }

    /// Whether a generation request is in flight.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// The template the document was last loaded from, if any.
    #[must_use]
    pub fn current_template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether there is anything to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop the selection when its id no longer resolves.
    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.document.contains(id) {
                self.selected = None;
            }
        }
    }
}
