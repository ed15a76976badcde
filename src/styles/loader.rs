use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::styles::catalog::{CatalogError, StyleCatalog};
use crate::styles::types::StylePreset;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StyleCatalogFile {
    Wrapped { styles: Vec<StylePreset> },
    Bare(Vec<StylePreset>),
}

impl StyleCatalogFile {
    fn into_presets(self) -> Vec<StylePreset> {
        match self {
            StyleCatalogFile::Wrapped { styles } => styles,
            StyleCatalogFile::Bare(styles) => styles,
        }
    }
}

enum CatalogFormat {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> Result<CatalogFormat, CatalogError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("json") => Ok(CatalogFormat::Json),
        Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
        _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn normalize_preset(preset: StylePreset) -> StylePreset {
    StylePreset {
        id: preset.id.trim().to_lowercase(),
        name: preset.name.trim().to_string(),
        category: preset.category.trim().to_string(),
        description: preset.description.trim().to_string(),
        preview_url: preset
            .preview_url
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
        prompt_bundle: preset.prompt_bundle.normalized(),
    }
}

pub fn parse_catalog(raw: &str, path: &Path) -> Result<StyleCatalog, CatalogError> {
    let parsed: StyleCatalogFile = match detect_format(path)? {
        CatalogFormat::Json => {
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        }
        CatalogFormat::Yaml => {
            serde_yaml::from_str(raw).map_err(|err| CatalogError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        }
    };

    let presets = parsed
        .into_presets()
        .into_iter()
        .map(normalize_preset)
        .collect::<Vec<_>>();
    StyleCatalog::new(presets)
}

pub fn load_catalog(path: &Path) -> Result<StyleCatalog, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&raw, path)
}

/// Loads the catalog at `path`, or the built-in presets when no path is
/// configured or the file cannot be used.
pub fn build_catalog(path: Option<&Path>) -> StyleCatalog {
    let Some(path) = path else {
        debug!("No style catalog file configured; using built-in styles");
        return StyleCatalog::built_in();
    };

    if !path.exists() {
        warn!("Style catalog not found at {}; using built-in styles", path.display());
        return StyleCatalog::built_in();
    }

    match load_catalog(path) {
        Ok(catalog) => {
            info!(
                "Loaded {} style preset(s) from {}",
                catalog.len(),
                path.display()
            );
            catalog
        }
        Err(err) => {
            warn!("{}; falling back to built-in styles", err);
            StyleCatalog::built_in()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const JSON_CATALOG: &str = r#"{
        "styles": [
            {
                "id": " Harbour-Warehouse ",
                "name": "Harbour Warehouse",
                "category": "Commercial",
                "promptBundle": {
                    "architectureVocabulary": ["sawtooth roof", "  ", "loading docks"],
                    "materialBias": { "primary": ["red brick"], "avoid": ["vinyl"] }
                }
            }
        ]
    }"#;

    #[test]
    fn parses_wrapped_json_and_normalizes_phrases() {
        let catalog = parse_catalog(JSON_CATALOG, Path::new("styles.json")).expect("valid json");
        let preset = catalog.lookup("harbour-warehouse").expect("normalized id");
        assert_eq!(
            preset.prompt_bundle.architecture_vocabulary,
            vec!["sawtooth roof", "loading docks"]
        );
        assert_eq!(preset.prompt_bundle.material_bias.avoid, vec!["vinyl"]);
        assert!(preset.prompt_bundle.lighting_bias.preferred.is_empty());
    }

    #[test]
    fn parses_bare_yaml_list() {
        let yaml = "- id: nordic-cabin\n  name: Nordic Cabin\n  promptBundle:\n    architectureVocabulary: [turf roof]\n";
        let catalog = parse_catalog(yaml, Path::new("styles.yml")).expect("valid yaml");
        assert_eq!(catalog.default_style().name, "Nordic Cabin");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = parse_catalog("[]", Path::new("styles.toml")).expect_err("toml unsupported");
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }

    #[test]
    fn falls_back_to_built_in_on_invalid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("styles.json");
        fs::write(&path, r#"[{"id": "a", "name": "A"}, {"id": "a", "name": "B"}]"#)
            .expect("write catalog");

        assert!(matches!(load_catalog(&path), Err(CatalogError::DuplicateId(_))));
        let catalog = build_catalog(Some(&path));
        assert_eq!(catalog.default_style().id, "contemporary-minimalist");

        let missing = PathBuf::from(dir.path()).join("missing.json");
        assert_eq!(build_catalog(Some(&missing)).len(), 14);
    }
}
