use tracing::debug;

use crate::prompt::fragments::{
    emphasis_weight, join_phrases, weighted, FragmentList, CLOSING_DIRECTIVE,
    EMPHASIS_MIDPOINT, HUMAN_SCALE_WEIGHT,
};
use crate::prompt::projection::{project, CompositionInputs, PromptSource};
use crate::state::types::{EdgeDefinition, FovMode, Weather};
use crate::state::AppState;
use crate::styles::{StyleCatalog, StylePreset};

const VOCABULARY_LIMIT: usize = 3;
const SECONDARY_MATERIAL_LIMIT: usize = 2;
const STRONG_BOKEH_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisReport {
    pub prompt: String,
    /// Style the prompt was composed from; `None` when an override won.
    pub style_id: Option<String>,
    /// True when `active_style_id` did not resolve and the default was used.
    pub style_fallback: bool,
    pub overridden: bool,
}

pub fn synthesize(state: &AppState, catalog: &StyleCatalog) -> String {
    synthesize_with_report(state, catalog).prompt
}

pub fn synthesize_with_report(state: &AppState, catalog: &StyleCatalog) -> SynthesisReport {
    let inputs = match project(state) {
        PromptSource::Override(text) => {
            return SynthesisReport {
                prompt: text.to_string(),
                style_id: None,
                style_fallback: false,
                overridden: true,
            };
        }
        PromptSource::Compose(inputs) => inputs,
    };

    let style_fallback = !catalog.contains(inputs.style_id);
    if style_fallback {
        debug!(
            "Style '{}' not in catalog; using default '{}'",
            inputs.style_id,
            catalog.default_style().id
        );
    }
    let style = catalog.resolve(inputs.style_id);

    SynthesisReport {
        prompt: compose(&inputs, style),
        style_id: Some(style.id.clone()),
        style_fallback,
        overridden: false,
    }
}

fn compose(inputs: &CompositionInputs<'_>, style: &StylePreset) -> String {
    let mut fragments = FragmentList::new();
    push_subject(&mut fragments, inputs, style);
    push_architecture(&mut fragments, style);
    push_geometry(&mut fragments, inputs);
    push_camera(&mut fragments, inputs);
    push_lighting(&mut fragments, inputs, style);
    push_material_emphasis(&mut fragments, inputs);
    push_context(&mut fragments, inputs);
    push_quality(&mut fragments, style);
    fragments.join()
}

fn push_subject(fragments: &mut FragmentList, inputs: &CompositionInputs<'_>, style: &StylePreset) {
    if let Some(subject) = inputs.subject {
        fragments.push_verbatim(subject);
        return;
    }

    let name = style.name.trim();
    if name.is_empty() {
        fragments.push("Architectural rendering");
    } else {
        fragments.push(format!("A {} architectural rendering", name.to_lowercase()));
    }
}

fn push_architecture(fragments: &mut FragmentList, style: &StylePreset) {
    let bundle = &style.prompt_bundle;
    fragments.push(join_phrases(&bundle.architecture_vocabulary, VOCABULARY_LIMIT));

    let primary = join_phrases(&bundle.material_bias.primary, usize::MAX);
    let secondary = join_phrases(&bundle.material_bias.secondary, SECONDARY_MATERIAL_LIMIT);
    let materials = [primary, secondary]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if !materials.is_empty() {
        fragments.push(format!("materials: {}", materials.join(", ")));
    }
}

fn push_geometry(fragments: &mut FragmentList, inputs: &CompositionInputs<'_>) {
    let geometry = inputs.geometry;
    if geometry.lock_geometry {
        let weight = emphasis_weight(geometry.geometry_preservation).max(1.0);
        fragments.push(weighted("preserve original geometry", weight));
        if geometry.suppress_hallucinations {
            fragments.push("no hallucinated structures");
        }
    } else {
        fragments.push("creative interpretation of the massing");
    }

    match geometry.edge_definition {
        EdgeDefinition::Sharp => fragments.push("crisp defined edges"),
        EdgeDefinition::Soft => fragments.push("soft diffuse edges"),
        EdgeDefinition::Adaptive => {}
    }
}

fn push_camera(fragments: &mut FragmentList, inputs: &CompositionInputs<'_>) {
    let camera = inputs.camera;
    fragments.push(format!("{} view", camera.view_type.phrase()));
    fragments.push(format!("{} projection", camera.projection.phrase()));

    match camera.fov_mode {
        FovMode::Wide => fragments.push("wide-angle lens"),
        FovMode::UltraWide => fragments.push("ultra wide-angle lens"),
        FovMode::Narrow | FovMode::Normal | FovMode::Custom => {}
    }
    if camera.depth_of_field {
        if camera.dof_strength > STRONG_BOKEH_THRESHOLD {
            fragments.push("shallow depth of field, strong bokeh");
        } else {
            fragments.push("shallow depth of field, bokeh");
        }
    }
    if camera.horizon_lock {
        fragments.push("level horizon");
    }
    if camera.vertical_correction {
        fragments.push("corrected vertical lines");
    }
}

fn push_lighting(fragments: &mut FragmentList, inputs: &CompositionInputs<'_>, style: &StylePreset) {
    let lighting = inputs.lighting;
    fragments.push(format!("{} lighting", lighting.time_of_day.phrase()));

    match lighting.weather {
        Weather::Clear => {}
        Weather::Cloudy => fragments.push("overcast cloudy sky"),
        Weather::Rain => fragments.push("rainy weather with wet surfaces"),
        Weather::Snow => fragments.push("snowy weather"),
    }
    if lighting.fog {
        fragments.push("atmospheric fog and mist");
    }
    fragments.push(format!(
        "sun azimuth {}°, sun altitude {}°",
        lighting.sun_azimuth, lighting.sun_altitude
    ));
    fragments.push(join_phrases(
        &style.prompt_bundle.lighting_bias.preferred,
        usize::MAX,
    ));
}

fn push_material_emphasis(fragments: &mut FragmentList, inputs: &CompositionInputs<'_>) {
    let materials = inputs.materials;
    let emphases = [
        ("exposed concrete texture", materials.concrete_emphasis),
        ("natural wood grain", materials.wood_emphasis),
        ("reflective glass", materials.glass_emphasis),
    ];
    for (token, value) in emphases {
        if value > EMPHASIS_MIDPOINT {
            fragments.push(weighted(token, emphasis_weight(value)));
        }
    }
}

fn push_context(fragments: &mut FragmentList, inputs: &CompositionInputs<'_>) {
    let context = inputs.context;
    if context.people {
        fragments.push(format!(
            "{} pedestrian activity",
            context.people_density.phrase()
        ));
        if context.scale_check {
            fragments.push(weighted("accurate human scale", HUMAN_SCALE_WEIGHT));
        }
    } else {
        fragments.push("no people");
    }

    if context.vegetation {
        fragments.push(format!(
            "{} vegetation and landscaping",
            context.season.phrase()
        ));
    }
    if context.vehicles {
        fragments.push("vehicles on the street");
    }
    if context.urban_furniture {
        fragments.push("urban street furniture");
    }
}

fn push_quality(fragments: &mut FragmentList, style: &StylePreset) {
    let language = &style.prompt_bundle.rendering_language;
    fragments.push(join_phrases(&language.quality, usize::MAX));
    fragments.push(join_phrases(&language.atmosphere, usize::MAX));
    fragments.push(CLOSING_DIRECTIVE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::PeopleDensity;
    use crate::state::GenerationMode;
    use crate::styles::types::PromptBundle;

    fn brutalist_scene() -> AppState {
        let mut state = AppState::default();
        state.mode = GenerationMode::Render3d;
        state.active_style_id = "brutalist".to_string();
        state.geometry.lock_geometry = true;
        state.geometry.suppress_hallucinations = true;
        state.context.people = false;
        state.context.vegetation = false;
        state
    }

    #[test]
    fn composes_brutalist_scene_in_section_order() {
        let catalog = StyleCatalog::built_in();
        let prompt = synthesize(&brutalist_scene(), &catalog);

        assert!(prompt.starts_with("A neo-brutalist architectural rendering, massive forms, monolithic, geometric, "));
        assert!(!prompt.contains("raw materiality"));
        assert!(prompt.contains(
            "materials: exposed concrete, raw timber, beton brut, weathered steel, glass"
        ));
        assert!(!prompt.contains("rough stone"));
        for phrase in [
            "(preserve original geometry:1.6)",
            "no hallucinated structures",
            "eye-level view",
            "perspective projection",
            "morning lighting",
            "sun azimuth 135°, sun altitude 45°",
            "dramatic shadows, contrast, volumetric fog",
            "no people",
            "cinematic, 8k, imposing, atmospheric, moody",
        ] {
            assert!(prompt.contains(phrase), "missing {phrase:?} in {prompt}");
        }
        assert!(prompt.ends_with("8k resolution, highly detailed, architectural visualization"));
        assert!(!prompt.contains("exposed concrete texture:"));

        let order = ["massive forms", "eye-level view", "morning lighting", "no people", "cinematic"];
        let positions = order
            .iter()
            .map(|phrase| prompt.find(phrase).expect("phrase present"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn full_concrete_emphasis_adds_weight_two() {
        let catalog = StyleCatalog::built_in();
        let mut state = brutalist_scene();
        state.materials.concrete_emphasis = 100;
        let prompt = synthesize(&state, &catalog);
        assert!(prompt.contains("(exposed concrete texture:2.0)"));

        state.materials.concrete_emphasis = 75;
        assert!(synthesize(&state, &catalog).contains("(exposed concrete texture:1.5)"));

        state.materials.concrete_emphasis = 50;
        assert!(!synthesize(&state, &catalog).contains("exposed concrete texture"));
    }

    #[test]
    fn material_tokens_follow_concrete_wood_glass_order() {
        let catalog = StyleCatalog::built_in();
        let mut state = brutalist_scene();
        state.materials.glass_emphasis = 90;
        state.materials.wood_emphasis = 60;
        state.materials.concrete_emphasis = 80;
        state.materials.metal_emphasis = 100;
        let prompt = synthesize(&state, &catalog);
        assert!(prompt.contains(
            "(exposed concrete texture:1.6), (natural wood grain:1.2), (reflective glass:1.8)"
        ));
    }

    #[test]
    fn text_prompt_wins_in_generate_text_mode() {
        let catalog = StyleCatalog::built_in();
        let mut state = brutalist_scene();
        state.mode = GenerationMode::GenerateText;
        state.workflow.text_prompt = "a glass pavilion at dusk".to_string();
        state.materials.concrete_emphasis = 100;
        state.context.people = true;

        let report = synthesize_with_report(&state, &catalog);
        assert_eq!(report.prompt, "a glass pavilion at dusk");
        assert!(report.overridden);
        assert_eq!(report.style_id, None);
    }

    #[test]
    fn visual_prompt_wins_in_visual_edit_mode() {
        let catalog = StyleCatalog::built_in();
        let mut state = AppState::default();
        state.mode = GenerationMode::VisualEdit;
        state.workflow.visual_prompt = "replace sky with sunset".to_string();
        assert_eq!(synthesize(&state, &catalog), "replace sky with sunset");
    }

    #[test]
    fn unknown_style_matches_default_style_output() {
        let catalog = StyleCatalog::built_in();
        let mut missing = brutalist_scene();
        missing.active_style_id = "does-not-exist".to_string();
        let mut default = missing.clone();
        default.active_style_id = catalog.default_style().id.clone();

        let report = synthesize_with_report(&missing, &catalog);
        assert!(report.style_fallback);
        assert_eq!(report.style_id.as_deref(), Some("contemporary-minimalist"));
        assert_eq!(report.prompt, synthesize(&default, &catalog));
    }

    #[test]
    fn busy_people_with_scale_check() {
        let catalog = StyleCatalog::built_in();
        let mut state = AppState::default();
        state.context.people = true;
        state.context.people_density = PeopleDensity::Busy;
        state.context.scale_check = true;
        let prompt = synthesize(&state, &catalog);
        assert!(prompt.contains("busy pedestrian activity"));
        assert!(prompt.contains("(accurate human scale:1.2)"));
        assert!(!prompt.contains("no people"));
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let catalog = StyleCatalog::built_in();
        let mut state = brutalist_scene();
        state.camera.depth_of_field = true;
        state.lighting.fog = true;
        state.context.vehicles = true;
        let first = synthesize(&state, &catalog);
        for _ in 0..5 {
            assert_eq!(synthesize(&state, &catalog), first);
        }
    }

    #[test]
    fn empty_bundle_leaves_no_doubled_separators() {
        let bare = StylePreset {
            id: "bare".to_string(),
            name: String::new(),
            category: String::new(),
            description: String::new(),
            preview_url: None,
            prompt_bundle: PromptBundle::default(),
        };
        let catalog = StyleCatalog::new(vec![bare]).expect("valid catalog");
        let mut state = AppState::default();
        state.active_style_id = "bare".to_string();
        state.geometry.edge_definition = EdgeDefinition::Adaptive;
        state.camera.horizon_lock = false;
        state.camera.vertical_correction = false;
        state.context.vegetation = false;

        let prompt = synthesize(&state, &catalog);
        assert!(prompt.starts_with("Architectural rendering, (preserve original geometry:1.6)"));
        assert!(!prompt.contains("materials:"));
        assert!(!prompt.contains(", , "));
        assert!(!prompt.contains(",,"));
        assert!(!prompt.ends_with(", "));
    }

    #[test]
    fn unlocked_geometry_and_optional_camera_lighting_phrases() {
        let catalog = StyleCatalog::built_in();
        let mut state = AppState::default();
        state.prompt = "Hillside winery".to_string();
        state.geometry.lock_geometry = false;
        state.geometry.edge_definition = EdgeDefinition::Soft;
        state.camera.fov_mode = FovMode::Wide;
        state.camera.depth_of_field = true;
        state.camera.dof_strength = 80;
        state.lighting.weather = Weather::Rain;
        state.lighting.fog = true;
        state.context.urban_furniture = true;

        let prompt = synthesize(&state, &catalog);
        assert!(prompt.starts_with("Hillside winery, clean lines"));
        for phrase in [
            "creative interpretation of the massing",
            "soft diffuse edges",
            "wide-angle lens",
            "shallow depth of field, strong bokeh",
            "rainy weather with wet surfaces",
            "atmospheric fog and mist",
            "summer vegetation and landscaping",
            "urban street furniture",
        ] {
            assert!(prompt.contains(phrase), "missing {phrase:?} in {prompt}");
        }
        assert!(!prompt.contains("preserve original geometry"));
    }

    #[test]
    fn whitespace_text_prompt_and_padded_subject_stay_verbatim() {
        let catalog = StyleCatalog::built_in();
        let mut state = AppState::default();
        state.mode = GenerationMode::GenerateText;
        state.workflow.text_prompt = "   ".to_string();
        state.context.people = true;
        assert_eq!(synthesize(&state, &catalog), "   ");

        state.workflow.text_prompt = String::new();
        state.prompt = "  riverside library ".to_string();
        let prompt = synthesize(&state, &catalog);
        assert!(prompt.starts_with("  riverside library , clean lines"));
    }

    #[test]
    fn decoded_out_of_range_state_stays_within_weight_limits() {
        let catalog = StyleCatalog::built_in();
        let raw = r#"{
            "workflow": {},
            "geometry": { "geometryPreservation": 250 },
            "camera": {},
            "lighting": { "sunAltitude": 200, "sunAzimuth": 900 },
            "materials": { "concreteEmphasis": 200 },
            "context": {},
            "output": {}
        }"#;
        let state = AppState::from_json(raw).expect("valid state");
        let prompt = synthesize(&state, &catalog);
        assert!(prompt.contains("(preserve original geometry:2.0)"));
        assert!(prompt.contains("sun azimuth 360°, sun altitude 90°"));
        assert!(prompt.contains("(exposed concrete texture:2.0)"));
    }
}
