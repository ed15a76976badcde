//! Per-workflow panel settings. Synthesis reads only `text_prompt` and
//! `visual_prompt`; everything else here is panel state the reducer merges and
//! clamps but never interprets.

use serde::{Deserialize, Serialize};

use super::types::SLIDER_MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    Enhance,
    Stylize,
    Hybrid,
    Realism,
    Concept,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawingType {
    #[default]
    Plan,
    Section,
    Elevation,
    Site,
    Detail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CadStyle {
    #[default]
    Realistic,
    Conceptual,
    Diagram,
    Photo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnishingLevel {
    None,
    #[default]
    Partial,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CadInterpretation {
    pub recognize_rooms: bool,
    pub recognize_openings: bool,
    pub ceiling_height: f32,
    pub sill_height: f32,
    pub furnishing_level: FurnishingLevel,
}

impl Default for CadInterpretation {
    fn default() -> Self {
        CadInterpretation {
            recognize_rooms: true,
            recognize_openings: true,
            ceiling_height: 2.8,
            sill_height: 0.9,
            furnishing_level: FurnishingLevel::Partial,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    #[default]
    Site,
    Urban,
    Landscape,
    Zoning,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasterplanInterpretation {
    pub zone_color_coding: bool,
    pub area_calculation: bool,
    pub road_hierarchy: bool,
}

impl Default for MasterplanInterpretation {
    fn default() -> Self {
        MasterplanInterpretation {
            zone_color_coding: true,
            area_calculation: true,
            road_hierarchy: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasterplanBuildings {
    pub mass_style: String,
    pub height_variation: u8,
    pub roof_detail: u8,
    pub shadow_study: bool,
}

impl Default for MasterplanBuildings {
    fn default() -> Self {
        MasterplanBuildings {
            mass_style: "White Box".to_string(),
            height_variation: 40,
            roof_detail: 20,
            shadow_study: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendItem {
    pub id: String,
    pub zone: String,
    pub color: String,
    pub area: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditTool {
    #[default]
    Select,
    Brush,
    Lasso,
    Wand,
    AiSelect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditOperation {
    #[default]
    Texture,
    Lighting,
    Object,
    Material,
    Grade,
    Inpaint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualTools {
    pub brush_size: u16,
    pub tolerance: u8,
    pub ai_prompt: String,
}

impl Default for VisualTools {
    fn default() -> Self {
        VisualTools {
            brush_size: 30,
            tolerance: 15,
            ai_prompt: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditAdjustments {
    pub exposure: i16,
    pub contrast: i16,
    pub saturation: i16,
    pub temperature: i16,
    pub tint: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLayer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplodeType {
    #[default]
    Vertical,
    Horizontal,
    Radial,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplodedLayer {
    pub id: String,
    pub name: String,
    pub offset: u16,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingMode {
    #[default]
    Uniform,
    Progressive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplodedSpacing {
    pub distance: u16,
    pub mode: SpacingMode,
    pub connectors: bool,
}

impl Default for ExplodedSpacing {
    fn default() -> Self {
        ExplodedSpacing {
            distance: 50,
            mode: SpacingMode::Uniform,
            connectors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplodedAnnotation {
    pub show_labels: bool,
    pub show_leaders: bool,
    pub show_dimensions: bool,
    pub auto_annotate: bool,
}

impl Default for ExplodedAnnotation {
    fn default() -> Self {
        ExplodedAnnotation {
            show_labels: true,
            show_leaders: true,
            show_dimensions: false,
            auto_annotate: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    #[default]
    Building,
    Wall,
    Detail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionStyle {
    #[default]
    Line,
    Hatch,
    Poche,
    Color,
    Gradient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SketchType {
    #[default]
    Arch,
    Interior,
    Landscape,
    Furniture,
    Abstract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchCleanup {
    pub contrast: bool,
    pub background: bool,
    pub straighten: bool,
}

impl Default for SketchCleanup {
    fn default() -> Self {
        SketchCleanup {
            contrast: true,
            background: false,
            straighten: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpscaleFactor {
    #[default]
    #[serde(rename = "2x")]
    Double,
    #[serde(rename = "4x")]
    Quadruple,
    #[serde(rename = "8x")]
    Octuple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpscaleFlags {
    pub face_restoration: bool,
    pub remove_artifacts: bool,
}

impl Default for UpscaleFlags {
    fn default() -> Self {
        UpscaleFlags {
            face_restoration: true,
            remove_artifacts: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CadOutput {
    Elevation,
    #[default]
    Plan,
    Section,
    Detail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Input3dType {
    #[default]
    Single,
    Multi,
    Pano,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject3d {
    #[default]
    Exterior,
    Interior,
    Object,
    Furniture,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolyCount {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageTo3dConfig {
    pub mesh_quality: u8,
    pub symmetry: bool,
    pub infer_hidden: bool,
}

impl Default for ImageTo3dConfig {
    fn default() -> Self {
        ImageTo3dConfig {
            mesh_quality: 75,
            symmetry: false,
            infer_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoType {
    #[default]
    Flythrough,
    Timelapse,
    Reveal,
    Construction,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoKeyframe {
    pub id: String,
    pub timestamp: String,
    pub thumbnail: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathType {
    #[default]
    Orbit,
    Pan,
    Dolly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookAt {
    #[default]
    Center,
    Cursor,
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoMotion {
    pub path_type: PathType,
    pub speed: u8,
    pub ease: bool,
    pub look_at: LookAt,
}

impl Default for VideoMotion {
    fn default() -> Self {
        VideoMotion {
            path_type: PathType::Orbit,
            speed: 50,
            ease: true,
            look_at: LookAt::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoEffects {
    pub season_transition: bool,
    pub time_lapse_cloud: bool,
    pub light_cycle: bool,
}

impl Default for VideoEffects {
    fn default() -> Self {
        VideoEffects {
            season_transition: false,
            time_lapse_cloud: true,
            light_cycle: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowSettings {
    pub text_prompt: String,
    pub visual_prompt: String,

    pub render_mode: RenderMode,

    pub drawing_type: DrawingType,
    pub cad_scale: String,
    pub cad_style: CadStyle,
    pub cad_interpretation: CadInterpretation,

    pub layout_type: LayoutType,
    pub mp_scale: String,
    pub mp_interpretation: MasterplanInterpretation,
    pub mp_buildings: MasterplanBuildings,
    pub legend_items: Vec<LegendItem>,

    pub active_tool: EditTool,
    pub edit_operation: EditOperation,
    pub visual_tools: VisualTools,
    pub edit_adjustments: EditAdjustments,
    pub edit_stack: Vec<EditLayer>,

    pub explode_type: ExplodeType,
    pub exploded_layers: Vec<ExplodedLayer>,
    pub exploded_spacing: ExplodedSpacing,
    pub exploded_annotation: ExplodedAnnotation,

    pub section_type: SectionType,
    pub section_style: SectionStyle,
    pub section_cut_plane: u8,

    pub sketch_type: SketchType,
    pub sketch_fidelity: u8,
    pub sketch_cleanup: SketchCleanup,

    pub upscale_factor: UpscaleFactor,
    pub upscale_denoise: u8,
    pub upscale_sharpen: u8,
    pub upscale_enhance: u8,
    pub upscale_flags: UpscaleFlags,

    pub img_to_cad_output: CadOutput,

    #[serde(rename = "input3DType")]
    pub input_3d_type: Input3dType,
    #[serde(rename = "subject3D")]
    pub subject_3d: Subject3d,
    pub poly_count: PolyCount,
    #[serde(rename = "imgTo3DConfig")]
    pub img_to_3d_config: ImageTo3dConfig,

    pub video_type: VideoType,
    pub video_keyframes: Vec<VideoKeyframe>,
    pub video_duration: u16,
    pub video_motion: VideoMotion,
    pub video_effects: VideoEffects,
}

fn legend(id: &str, zone: &str, color: &str, area: &str) -> LegendItem {
    LegendItem {
        id: id.to_string(),
        zone: zone.to_string(),
        color: color.to_string(),
        area: area.to_string(),
    }
}

fn edit_layer(id: &str, name: &str, kind: &str) -> EditLayer {
    EditLayer {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        visible: true,
    }
}

fn exploded_layer(id: &str, name: &str, offset: u16) -> ExplodedLayer {
    ExplodedLayer {
        id: id.to_string(),
        name: name.to_string(),
        offset,
        visible: true,
    }
}

fn keyframe(id: &str, timestamp: &str, description: &str) -> VideoKeyframe {
    VideoKeyframe {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        thumbnail: String::new(),
        description: description.to_string(),
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        WorkflowSettings {
            text_prompt: String::new(),
            visual_prompt: String::new(),
            render_mode: RenderMode::Enhance,
            drawing_type: DrawingType::Plan,
            cad_scale: "1:100".to_string(),
            cad_style: CadStyle::Realistic,
            cad_interpretation: CadInterpretation::default(),
            layout_type: LayoutType::Site,
            mp_scale: "1:500".to_string(),
            mp_interpretation: MasterplanInterpretation::default(),
            mp_buildings: MasterplanBuildings::default(),
            legend_items: vec![
                legend("1", "Residential", "#FEF08A", "12,400 m²"),
                legend("2", "Commercial", "#FCA5A5", "4,500 m²"),
                legend("3", "Green Space", "#86EFAC", "8,200 m²"),
            ],
            active_tool: EditTool::Select,
            edit_operation: EditOperation::Texture,
            visual_tools: VisualTools::default(),
            edit_adjustments: EditAdjustments::default(),
            edit_stack: vec![
                edit_layer("1", "Color Grade", "adjustment"),
                edit_layer("2", "Replace Sky", "inpaint"),
            ],
            explode_type: ExplodeType::Vertical,
            exploded_layers: vec![
                exploded_layer("1", "Roof", 100),
                exploded_layer("2", "Level 2", 60),
                exploded_layer("3", "Level 1", 20),
                exploded_layer("4", "Foundation", 0),
            ],
            exploded_spacing: ExplodedSpacing::default(),
            exploded_annotation: ExplodedAnnotation::default(),
            section_type: SectionType::Building,
            section_style: SectionStyle::Line,
            section_cut_plane: 50,
            sketch_type: SketchType::Arch,
            sketch_fidelity: 50,
            sketch_cleanup: SketchCleanup::default(),
            upscale_factor: UpscaleFactor::Double,
            upscale_denoise: 30,
            upscale_sharpen: 20,
            upscale_enhance: 50,
            upscale_flags: UpscaleFlags::default(),
            img_to_cad_output: CadOutput::Plan,
            input_3d_type: Input3dType::Single,
            subject_3d: Subject3d::Exterior,
            poly_count: PolyCount::Medium,
            img_to_3d_config: ImageTo3dConfig::default(),
            video_type: VideoType::Flythrough,
            video_keyframes: vec![
                keyframe("1", "00:00", "Orbit Start"),
                keyframe("2", "00:04", "Pan Entrance"),
                keyframe("3", "00:10", "Zoom End"),
            ],
            video_duration: 10,
            video_motion: VideoMotion::default(),
            video_effects: VideoEffects::default(),
        }
    }
}

impl WorkflowSettings {
    pub fn clamp_ranges(&mut self) {
        self.section_cut_plane = self.section_cut_plane.min(SLIDER_MAX);
        self.sketch_fidelity = self.sketch_fidelity.min(SLIDER_MAX);
        self.upscale_denoise = self.upscale_denoise.min(SLIDER_MAX);
        self.upscale_sharpen = self.upscale_sharpen.min(SLIDER_MAX);
        self.upscale_enhance = self.upscale_enhance.min(SLIDER_MAX);
    }
}
