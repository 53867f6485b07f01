//! # Pagecraft Editor Core
//!
//! Core state machine for a visual page-layout editor: the typed element
//! document model, a linear undo/redo history over whole-document
//! snapshots, and the store that is the single mutation contract for every
//! UI affordance.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                editor-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Element Model   │  Geometry Utilities      │
//! │  - Sum-type      │  - Bounds containment    │
//! │    content       │  - Overlap test          │
//! │  - Defaults      │  - Stable z-sort         │
//! ├─────────────────────────────────────────────┤
//! │  History Log     │  Editor Store            │
//! │  - past/present/ │  - Mutation contract     │
//! │    future        │  - Selection, drag       │
//! │  - Transactions  │  - Generation import     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod element;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod history;
pub mod store;
pub mod template;

pub use document::Document;
pub use element::{
    ButtonVariant, ContainerLayout, Element, ElementContent, ElementId, ElementStyle, ElementType,
    Position, Size, TextAlign, TextTag, CLONE_OFFSET,
};
pub use error::{EditorError, EditorResult};
pub use generate::{
    generate, parse_key_features, GenerationRequest, GenerationResult, StylePreset, Tone,
};
pub use geometry::{in_bounds, overlaps, sort_by_z, Rect};
pub use history::HistoryLog;
pub use store::{EditorStore, ElementPatch};
pub use template::{current_timestamp_ms, Template};

/// Editor core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
