pub mod mode;
pub mod types;
pub mod workflow;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use mode::GenerationMode;
pub use types::{
    CameraState, ContextState, GeometryState, LightingState, MaterialState, OutputState,
};
pub use workflow::WorkflowSettings;

pub const DEFAULT_STYLE_ID: &str = "contemporary-minimalist";
pub const DEFAULT_RIGHT_TAB: &str = "geometry";
pub const DEFAULT_BOTTOM_TAB: &str = "prompt";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read state file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed application state: {0}")]
    Malformed(String),
    #[error("unknown generation mode '{0}'")]
    UnknownMode(String),
}

fn default_style_id() -> String {
    DEFAULT_STYLE_ID.to_string()
}

fn default_right_tab() -> String {
    DEFAULT_RIGHT_TAB.to_string()
}

fn default_bottom_tab() -> String {
    DEFAULT_BOTTOM_TAB.to_string()
}

const fn default_left_sidebar_width() -> u16 {
    280
}

const fn default_right_panel_width() -> u16 {
    320
}

const fn default_bottom_panel_height() -> u16 {
    200
}

/// Snapshot of the editor. The seven sub-objects are required when decoding
/// so a state missing one of them is rejected here rather than inside
/// synthesis; keys inside a sub-object fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default = "default_style_id")]
    pub active_style_id: String,
    #[serde(default)]
    pub uploaded_image: Option<String>,
    #[serde(default)]
    pub is_generating: bool,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub prompt: String,

    pub workflow: WorkflowSettings,
    pub geometry: GeometryState,
    pub camera: CameraState,
    pub lighting: LightingState,
    pub materials: MaterialState,
    pub context: ContextState,
    pub output: OutputState,

    #[serde(default = "default_left_sidebar_width")]
    pub left_sidebar_width: u16,
    #[serde(default = "default_right_panel_width")]
    pub right_panel_width: u16,
    #[serde(default = "default_bottom_panel_height")]
    pub bottom_panel_height: u16,
    #[serde(default)]
    pub bottom_panel_collapsed: bool,
    #[serde(default = "default_right_tab")]
    pub active_right_tab: String,
    #[serde(default = "default_bottom_tab")]
    pub active_bottom_tab: String,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            mode: GenerationMode::Render3d,
            active_style_id: default_style_id(),
            uploaded_image: None,
            is_generating: false,
            progress: 0,
            prompt: String::new(),
            workflow: WorkflowSettings::default(),
            geometry: GeometryState::default(),
            camera: CameraState::default(),
            lighting: LightingState::default(),
            materials: MaterialState::default(),
            context: ContextState::default(),
            output: OutputState::default(),
            left_sidebar_width: default_left_sidebar_width(),
            right_panel_width: default_right_panel_width(),
            bottom_panel_height: default_bottom_panel_height(),
            bottom_panel_collapsed: false,
            active_right_tab: default_right_tab(),
            active_bottom_tab: default_bottom_tab(),
        }
    }
}

impl AppState {
    /// Decodes a state and clamps every slider into its range.
    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        let mut state: AppState =
            serde_json::from_str(raw).map_err(|err| StateError::Malformed(err.to_string()))?;
        state.clamp_ranges();
        Ok(state)
    }

    pub fn clamp_ranges(&mut self) {
        self.progress = self.progress.min(types::SLIDER_MAX);
        self.workflow.clamp_ranges();
        self.geometry.clamp_ranges();
        self.camera.clamp_ranges();
        self.lighting.clamp_ranges();
        self.materials.clamp_ranges();
    }

    pub fn load(path: &Path) -> Result<Self, StateError> {
        let raw = fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{EdgeDefinition, TimeOfDay};

    #[test]
    fn default_matches_initial_editor_state() {
        let state = AppState::default();
        assert_eq!(state.mode, GenerationMode::Render3d);
        assert_eq!(state.active_style_id, "contemporary-minimalist");
        assert!(state.geometry.lock_geometry);
        assert_eq!(state.geometry.edge_definition, EdgeDefinition::Sharp);
        assert_eq!(state.lighting.time_of_day, TimeOfDay::Morning);
        assert_eq!(state.lighting.sun_azimuth, 135);
        assert_eq!(state.materials.concrete_emphasis, 50);
        assert!(state.context.vegetation);
        assert_eq!(state.output.seed, 123_456);
        assert_eq!(state.workflow.legend_items.len(), 3);
    }

    #[test]
    fn decodes_camel_case_state_with_partial_sub_objects() {
        let raw = r#"{
            "mode": "visual-edit",
            "activeStyleId": "brutalist",
            "workflow": { "visualPrompt": "replace the sky" },
            "geometry": { "lockGeometry": false },
            "camera": { "viewType": "aerial", "fovMode": "ultra-wide" },
            "lighting": { "timeOfDay": "golden-hour", "weather": "snow" },
            "materials": { "concreteEmphasis": 90 },
            "context": { "peopleDensity": "busy" },
            "output": { "aspectRatio": "9:16", "resolution": "8k" }
        }"#;
        let state = AppState::from_json(raw).expect("valid state");
        assert_eq!(state.mode, GenerationMode::VisualEdit);
        assert_eq!(state.workflow.visual_prompt, "replace the sky");
        assert!(!state.geometry.lock_geometry);
        assert_eq!(state.geometry.geometry_preservation, 80);
        assert_eq!(state.lighting.time_of_day, TimeOfDay::GoldenHour);
        assert_eq!(state.materials.concrete_emphasis, 90);
        assert_eq!(state.active_bottom_tab, "prompt");
    }

    #[test]
    fn decoding_clamps_out_of_range_sliders() {
        let raw = r#"{
            "progress": 180,
            "workflow": { "sketchFidelity": 140 },
            "geometry": { "geometryPreservation": 250 },
            "camera": { "dofStrength": 120 },
            "lighting": { "sunAltitude": 200, "sunAzimuth": 900 },
            "materials": { "concreteEmphasis": 200, "reflectivityBias": -300 },
            "context": {},
            "output": {}
        }"#;
        let state = AppState::from_json(raw).expect("valid state");
        assert_eq!(state.progress, 100);
        assert_eq!(state.workflow.sketch_fidelity, 100);
        assert_eq!(state.geometry.geometry_preservation, 100);
        assert_eq!(state.camera.dof_strength, 100);
        assert_eq!(state.lighting.sun_altitude, 90);
        assert_eq!(state.lighting.sun_azimuth, 360);
        assert_eq!(state.materials.concrete_emphasis, 100);
        assert_eq!(state.materials.reflectivity_bias, -100);
    }

    #[test]
    fn rejects_state_missing_a_sub_object() {
        let raw = r#"{
            "workflow": {}, "geometry": {}, "camera": {}, "lighting": {},
            "materials": {}, "context": {}
        }"#;
        let err = AppState::from_json(raw).expect_err("output is required");
        assert!(matches!(err, StateError::Malformed(message) if message.contains("output")));
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let state = AppState::default();
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["activeStyleId"], "contemporary-minimalist");
        assert_eq!(json["workflow"]["imgTo3DConfig"]["meshQuality"], 75);
        assert_eq!(json["output"]["aspectRatio"], "16:9");
        let decoded: AppState = serde_json::from_value(json).expect("deserialize");
        assert_eq!(decoded, state);
    }
}
