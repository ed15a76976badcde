use std::collections::HashMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::styles::builtin::built_in_styles;
use crate::styles::types::StylePreset;

static STYLE_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("style id pattern is valid")
});

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("style catalog must contain at least one preset")]
    Empty,
    #[error("duplicate style id '{0}'")]
    DuplicateId(String),
    #[error("invalid style id '{0}': expected a lowercase kebab-case slug")]
    InvalidId(String),
    #[error("failed to read style catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse style catalog '{path}': {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unsupported style catalog format '{0}'")]
    UnsupportedFormat(PathBuf),
}

/// Read-only table of style presets. Registration order is preserved and the
/// first preset is the fallback for any id that does not resolve.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    presets: Vec<StylePreset>,
    by_id: HashMap<String, usize>,
}

pub fn is_valid_style_id(id: &str) -> bool {
    STYLE_ID_PATTERN.is_match(id)
}

impl StyleCatalog {
    pub fn new(presets: Vec<StylePreset>) -> Result<Self, CatalogError> {
        if presets.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = HashMap::with_capacity(presets.len());
        for (index, preset) in presets.iter().enumerate() {
            if !is_valid_style_id(&preset.id) {
                return Err(CatalogError::InvalidId(preset.id.clone()));
            }
            if by_id.insert(preset.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(preset.id.clone()));
            }
        }

        Ok(StyleCatalog { presets, by_id })
    }

    pub fn built_in() -> Self {
        StyleCatalog::new(built_in_styles()).expect("built-in styles form a valid catalog")
    }

    pub fn lookup(&self, id: &str) -> Option<&StylePreset> {
        self.by_id.get(id).map(|index| &self.presets[*index])
    }

    pub fn default_style(&self) -> &StylePreset {
        &self.presets[0]
    }

    /// Looks up `id`, falling back to the default preset on a miss.
    pub fn resolve(&self, id: &str) -> &StylePreset {
        self.lookup(id).unwrap_or_else(|| self.default_style())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StylePreset> {
        self.presets.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|preset| preset.id.as_str())
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a StylePreset> {
        self.presets
            .iter()
            .filter(move |preset| preset.category.eq_ignore_ascii_case(category))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::types::PromptBundle;

    fn bare(id: &str, name: &str) -> StylePreset {
        StylePreset {
            id: id.to_string(),
            name: name.to_string(),
            category: "Test".to_string(),
            description: String::new(),
            preview_url: None,
            prompt_bundle: PromptBundle::default(),
        }
    }

    #[test]
    fn rejects_duplicate_ids_instead_of_overwriting() {
        let err = StyleCatalog::new(vec![bare("loft", "Loft"), bare("loft", "Other Loft")])
            .expect_err("duplicate id must fail");
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "loft"));
    }

    #[test]
    fn rejects_empty_and_malformed_ids() {
        assert!(matches!(StyleCatalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(
            StyleCatalog::new(vec![bare("Bad Id", "Bad")]),
            Err(CatalogError::InvalidId(_))
        ));
        assert!(is_valid_style_id("mid-century"));
        assert!(!is_valid_style_id("mid--century"));
    }

    #[test]
    fn resolve_falls_back_to_first_registered() {
        let catalog = StyleCatalog::new(vec![bare("first", "First"), bare("second", "Second")])
            .expect("valid catalog");
        assert_eq!(catalog.resolve("second").id, "second");
        assert_eq!(catalog.resolve("missing").id, "first");
        assert!(catalog.lookup("missing").is_none());
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn built_in_catalog_groups_by_category() {
        let catalog = StyleCatalog::built_in();
        assert_eq!(catalog.default_style().id, "contemporary-minimalist");
        let cultural = catalog
            .by_category("cultural")
            .map(|preset| preset.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(cultural, vec!["brutalist", "japanese-zen", "bauhaus"]);
    }
}
