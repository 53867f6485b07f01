//! API route handlers.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use editor_core::{EditorStore, Element, ElementId, GenerationRequest, Template};

use crate::{metrics, validation, AppState};

/// The document projection returned by read endpoints: the live element
/// collection plus the derived queries UI chrome needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    /// Elements in insertion order.
    pub elements: Vec<Element>,
    /// The selected element id, if any.
    pub selected_element_id: Option<ElementId>,
    /// Whether history has anything to undo.
    pub can_undo: bool,
    /// Whether history has anything to redo.
    pub can_redo: bool,
    /// Whether a generation request is in flight.
    pub is_generating: bool,
}

impl DocumentView {
    fn from_store(store: &EditorStore) -> Self {
        Self {
            elements: store.document().elements().to_vec(),
            selected_element_id: store.selected_id(),
            can_undo: store.can_undo(),
            can_redo: store.can_redo(),
            is_generating: store.is_generating(),
        }
    }
}

/// Body of a document replacement request.
#[derive(Debug, Deserialize)]
pub struct ReplaceDocument {
    /// The full replacement element array.
    pub elements: Vec<Element>,
}

/// Clears the store's generating flag when dropped, so the flag cannot
/// stick on any exit path of the generation handler.
struct GenerationGuard {
    state: AppState,
}

impl GenerationGuard {
    fn begin(state: &AppState) -> Self {
        state.with_store(EditorStore::begin_generation);
        Self {
            state: state.clone(),
        }
    }
}

impl Drop for GenerationGuard {
    fn drop(&mut self) {
        self.state.with_store(EditorStore::finish_generation);
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Generate a page from a structured prompt and import it into the store.
///
/// Validation failures return 400 before any state mutation; the
/// generating flag is cleared on every exit path.
#[tracing::instrument(name = "generate", skip(state, request), fields(product = %request.product_name))]
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Response {
    if let Err(e) = validation::validate_generation_request(&request) {
        tracing::debug!("generation request rejected: {e}");
        metrics::record_generation("validation_error");
        metrics::record_validation_failure("generation_request");
        return error_response(StatusCode::BAD_REQUEST, &e.to_string());
    }

    let _guard = GenerationGuard::begin(&state);

    match editor_core::generate(&request) {
        Ok(result) => {
            state.with_store(|store| store.set_elements(result.elements.clone()));
            metrics::record_generation("ok");
            metrics::record_document_mutation("set_elements");
            Json(json!({
                "elements": result.elements,
                "suggestions": result.suggestions,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!("generation failed: {e}");
            metrics::record_generation("error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Get the current document view.
pub async fn get_document(State(state): State<AppState>) -> Json<DocumentView> {
    Json(state.with_store(|store| DocumentView::from_store(store)))
}

/// Replace the document wholesale.
#[tracing::instrument(name = "replace_document", skip(state, body), fields(elements = body.elements.len()))]
pub async fn replace_document(
    State(state): State<AppState>,
    Json(body): Json<ReplaceDocument>,
) -> Response {
    if let Err(e) = validation::validate_element_count(body.elements.len()) {
        metrics::record_validation_failure("replace_document");
        return error_response(StatusCode::BAD_REQUEST, &e.to_string());
    }
    metrics::record_document_mutation("set_elements");
    let view = state.with_store(|store| {
        store.set_elements(body.elements);
        DocumentView::from_store(store)
    });
    Json(view).into_response()
}

/// Step the document back one undo step.
pub async fn undo_document(State(state): State<AppState>) -> Json<DocumentView> {
    metrics::record_document_mutation("undo");
    Json(state.with_store(|store| {
        store.undo();
        DocumentView::from_store(store)
    }))
}

/// Step the document forward one redo step.
pub async fn redo_document(State(state): State<AppState>) -> Json<DocumentView> {
    metrics::record_document_mutation("redo");
    Json(state.with_store(|store| {
        store.redo();
        DocumentView::from_store(store)
    }))
}

/// Empty the canvas.
pub async fn clear_document(State(state): State<AppState>) -> Json<DocumentView> {
    metrics::record_document_mutation("clear");
    Json(state.with_store(|store| {
        store.clear_canvas();
        DocumentView::from_store(store)
    }))
}

/// List the built-in templates.
pub async fn list_templates() -> Json<Vec<Template>> {
    Json(vec![Template::starter()])
}

/// Load a template into the store.
#[tracing::instrument(name = "load_template", skip(state, template), fields(template = %template.id))]
pub async fn load_template(
    State(state): State<AppState>,
    Json(template): Json<Template>,
) -> Response {
    if let Err(e) = validation::validate_element_count(template.elements.len()) {
        metrics::record_validation_failure("load_template");
        return error_response(StatusCode::BAD_REQUEST, &e.to_string());
    }
    metrics::record_document_mutation("load_template");
    let view = state.with_store(|store| {
        store.load_template(template);
        DocumentView::from_store(store)
    });
    Json(view).into_response()
}
