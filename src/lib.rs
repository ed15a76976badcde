//! Prompt construction for architectural visualization: a style catalog, the
//! editor state model, a deterministic prompt synthesizer and a debounced
//! state store that keeps the published prompt current.

pub mod config;
pub mod prompt;
pub mod state;
pub mod store;
pub mod styles;
pub mod utils;

pub use prompt::{synthesize, synthesize_with_report, SynthesisReport};
pub use state::{AppState, GenerationMode, StateError};
pub use store::{reduce, Action, Store, StoreOptions};
pub use styles::{CatalogError, StyleCatalog, StylePreset};
