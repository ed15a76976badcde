use serde::{Deserialize, Serialize};

use crate::state::types::{
    AspectRatio, EdgeDefinition, FovMode, ImageFormat, PeopleDensity, Projection, Resolution,
    Season, TimeOfDay, ViewType, Weather,
};
use crate::state::workflow::{
    CadInterpretation, CadOutput, CadStyle, DrawingType, EditAdjustments, EditLayer,
    EditOperation, EditTool, ExplodeType, ExplodedAnnotation, ExplodedLayer, ExplodedSpacing,
    ImageTo3dConfig, Input3dType, LayoutType, LegendItem, MasterplanBuildings,
    MasterplanInterpretation, PolyCount, RenderMode, SectionStyle, SectionType, SketchCleanup,
    SketchType, Subject3d, UpscaleFactor, UpscaleFlags, VideoEffects, VideoKeyframe, VideoMotion,
    VideoType, VisualTools,
};
use crate::state::{
    CameraState, ContextState, GenerationMode, GeometryState, LightingState, MaterialState,
    OutputState, WorkflowSettings,
};

/// Declares a patch struct mirroring `$target` with every field optional.
/// `apply_to` overwrites only the fields that are present.
macro_rules! partial_update {
    (
        $(#[$meta:meta])*
        $patch:ident => $target:ty {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $patch {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $patch {
            pub fn apply_to(self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }

            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}

partial_update! {
    WorkflowPatch => WorkflowSettings {
        text_prompt: String,
        visual_prompt: String,
        render_mode: RenderMode,
        drawing_type: DrawingType,
        cad_scale: String,
        cad_style: CadStyle,
        cad_interpretation: CadInterpretation,
        layout_type: LayoutType,
        mp_scale: String,
        mp_interpretation: MasterplanInterpretation,
        mp_buildings: MasterplanBuildings,
        legend_items: Vec<LegendItem>,
        active_tool: EditTool,
        edit_operation: EditOperation,
        visual_tools: VisualTools,
        edit_adjustments: EditAdjustments,
        edit_stack: Vec<EditLayer>,
        explode_type: ExplodeType,
        exploded_layers: Vec<ExplodedLayer>,
        exploded_spacing: ExplodedSpacing,
        exploded_annotation: ExplodedAnnotation,
        section_type: SectionType,
        section_style: SectionStyle,
        section_cut_plane: u8,
        sketch_type: SketchType,
        sketch_fidelity: u8,
        sketch_cleanup: SketchCleanup,
        upscale_factor: UpscaleFactor,
        upscale_denoise: u8,
        upscale_sharpen: u8,
        upscale_enhance: u8,
        upscale_flags: UpscaleFlags,
        img_to_cad_output: CadOutput,
        #[serde(rename = "input3DType")]
        input_3d_type: Input3dType,
        #[serde(rename = "subject3D")]
        subject_3d: Subject3d,
        poly_count: PolyCount,
        #[serde(rename = "imgTo3DConfig")]
        img_to_3d_config: ImageTo3dConfig,
        video_type: VideoType,
        video_keyframes: Vec<VideoKeyframe>,
        video_duration: u16,
        video_motion: VideoMotion,
        video_effects: VideoEffects,
    }
}

partial_update! {
    GeometryPatch => GeometryState {
        lock_geometry: bool,
        lock_perspective: bool,
        lock_camera_position: bool,
        lock_framing: bool,
        geometry_preservation: u8,
        perspective_adherence: u8,
        framing_adherence: u8,
        edge_definition: EdgeDefinition,
        edge_strength: u8,
        allow_refinement: bool,
        suppress_hallucinations: bool,
        allow_reinterpretation: bool,
    }
}

partial_update! {
    CameraPatch => CameraState {
        fov_mode: FovMode,
        view_type: ViewType,
        projection: Projection,
        depth_of_field: bool,
        dof_strength: u8,
        horizon_lock: bool,
        vertical_correction: bool,
    }
}

partial_update! {
    LightingPatch => LightingState {
        time_of_day: TimeOfDay,
        sun_azimuth: u16,
        sun_altitude: u8,
        shadow_softness: u8,
        shadow_intensity: u8,
        fog: bool,
        weather: Weather,
    }
}

partial_update! {
    MaterialsPatch => MaterialState {
        texture_sharpness: u8,
        aging_level: u8,
        concrete_emphasis: u8,
        glass_emphasis: u8,
        wood_emphasis: u8,
        metal_emphasis: u8,
        reflectivity_bias: i16,
    }
}

partial_update! {
    ContextPatch => ContextState {
        people: bool,
        people_density: PeopleDensity,
        vegetation: bool,
        season: Season,
        vehicles: bool,
        urban_furniture: bool,
        scale_check: bool,
    }
}

partial_update! {
    OutputPatch => OutputState {
        resolution: Resolution,
        aspect_ratio: AspectRatio,
        format: ImageFormat,
        seed: u64,
        seed_locked: bool,
    }
}

/// Editor update. Wire form is `{"type": "UPDATE_CAMERA", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetMode(GenerationMode),
    SetStyle(String),
    SetImage(Option<String>),
    SetGenerating(bool),
    SetProgress(u8),
    SetPrompt(String),
    UpdateWorkflow(WorkflowPatch),
    UpdateGeometry(GeometryPatch),
    UpdateCamera(CameraPatch),
    UpdateLighting(LightingPatch),
    UpdateMaterials(MaterialsPatch),
    UpdateContext(ContextPatch),
    UpdateOutput(OutputPatch),
    SetActiveTab(String),
    SetActiveBottomTab(String),
    ToggleBottomPanel,
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetMode(_) => "SET_MODE",
            Action::SetStyle(_) => "SET_STYLE",
            Action::SetImage(_) => "SET_IMAGE",
            Action::SetGenerating(_) => "SET_GENERATING",
            Action::SetProgress(_) => "SET_PROGRESS",
            Action::SetPrompt(_) => "SET_PROMPT",
            Action::UpdateWorkflow(_) => "UPDATE_WORKFLOW",
            Action::UpdateGeometry(_) => "UPDATE_GEOMETRY",
            Action::UpdateCamera(_) => "UPDATE_CAMERA",
            Action::UpdateLighting(_) => "UPDATE_LIGHTING",
            Action::UpdateMaterials(_) => "UPDATE_MATERIALS",
            Action::UpdateContext(_) => "UPDATE_CONTEXT",
            Action::UpdateOutput(_) => "UPDATE_OUTPUT",
            Action::SetActiveTab(_) => "SET_ACTIVE_TAB",
            Action::SetActiveBottomTab(_) => "SET_ACTIVE_BOTTOM_TAB",
            Action::ToggleBottomPanel => "TOGGLE_BOTTOM_PANEL",
        }
    }

    /// True when the action can change the synthesized prompt. Output,
    /// image, progress and layout changes never do.
    pub fn affects_prompt(&self) -> bool {
        matches!(
            self,
            Action::SetMode(_)
                | Action::SetStyle(_)
                | Action::SetPrompt(_)
                | Action::UpdateWorkflow(_)
                | Action::UpdateGeometry(_)
                | Action::UpdateCamera(_)
                | Action::UpdateLighting(_)
                | Action::UpdateMaterials(_)
                | Action::UpdateContext(_)
        )
    }

    pub fn parse_list(raw: &str) -> Result<Vec<Action>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
