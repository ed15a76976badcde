use crate::styles::catalog::StyleCatalog;
use crate::styles::types::StylePreset;

fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Lists the catalog, or only the presets of `category` (matched
/// case-insensitively) when one is given.
pub fn build_style_index(catalog: &StyleCatalog, category: Option<&str>) -> String {
    let styles: Vec<&StylePreset> = match category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.iter().collect(),
    };
    let default_id = catalog.default_style().id.as_str();

    let mut lines = Vec::new();
    match category {
        Some(category) => lines.push(format!(
            "Style catalog, category {} ({} presets):",
            category,
            styles.len()
        )),
        None => lines.push(format!("Style catalog ({} presets):", styles.len())),
    }

    for style in styles {
        let marker = if style.id == default_id { " [default]" } else { "" };
        lines.push(format!(
            "- {}{}: {} ({}) - {}",
            style.id, marker, style.name, style.category, style.description
        ));
        lines.push(format!(
            "    vocabulary: {}",
            list_or_dash(&style.prompt_bundle.architecture_vocabulary)
        ));
        lines.push(format!(
            "    camera: {} / {}",
            list_or_dash(&style.prompt_bundle.camera_bias.preferred_angles),
            list_or_dash(&style.prompt_bundle.camera_bias.preferred_framing)
        ));
        lines.push(format!(
            "    avoid: {}",
            list_or_dash(&style.prompt_bundle.material_bias.avoid)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_default_and_lists_every_style() {
        let index = build_style_index(&StyleCatalog::built_in(), None);
        assert!(index.starts_with("Style catalog (14 presets):"));
        assert!(index.contains("- contemporary-minimalist [default]: Contemporary Minimalist"));
        assert!(index.contains("- desert-modern: Desert Modernism (Residential)"));
        assert!(index.contains("camera: low angle, worm-eye / monumental, imposing"));
    }

    #[test]
    fn category_filter_lists_only_matching_presets() {
        let index = build_style_index(&StyleCatalog::built_in(), Some("cultural"));
        assert!(index.starts_with("Style catalog, category cultural (3 presets):"));
        assert!(index.contains("- brutalist: Neo-Brutalist (Cultural)"));
        assert!(index.contains("- bauhaus: Bauhaus (Cultural)"));
        assert!(!index.contains("contemporary-minimalist"));

        let empty = build_style_index(&StyleCatalog::built_in(), Some("maritime"));
        assert_eq!(empty, "Style catalog, category maritime (0 presets):");
    }
}
