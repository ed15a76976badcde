pub mod builtin;
pub mod catalog;
pub mod index;
pub mod loader;
pub mod types;

pub use catalog::{CatalogError, StyleCatalog};
pub use types::{PromptBundle, StylePreset};
