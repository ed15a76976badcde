use serde::{Deserialize, Serialize};

pub const SLIDER_MAX: u8 = 100;
pub const SUN_AZIMUTH_MAX: u16 = 360;
pub const SUN_ALTITUDE_MAX: u8 = 90;
pub const REFLECTIVITY_RANGE: i16 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeDefinition {
    #[default]
    Sharp,
    Soft,
    Adaptive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FovMode {
    Narrow,
    #[default]
    Normal,
    Wide,
    UltraWide,
    Custom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewType {
    #[default]
    EyeLevel,
    Aerial,
    Drone,
    Worm,
    Custom,
}

impl ViewType {
    pub fn phrase(self) -> &'static str {
        match self {
            ViewType::EyeLevel => "eye-level",
            ViewType::Aerial => "aerial",
            ViewType::Drone => "drone",
            ViewType::Worm => "worm's-eye",
            ViewType::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    #[default]
    Perspective,
    Axonometric,
    Isometric,
    TwoPoint,
}

impl Projection {
    pub fn phrase(self) -> &'static str {
        match self {
            Projection::Perspective => "perspective",
            Projection::Axonometric => "axonometric",
            Projection::Isometric => "isometric",
            Projection::TwoPoint => "two-point",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Midday,
    Afternoon,
    GoldenHour,
    BlueHour,
    Night,
    Overcast,
}

impl TimeOfDay {
    pub fn phrase(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Midday => "midday",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::GoldenHour => "golden hour",
            TimeOfDay::BlueHour => "blue hour",
            TimeOfDay::Night => "night",
            TimeOfDay::Overcast => "overcast",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    #[default]
    Clear,
    Cloudy,
    Rain,
    Snow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeopleDensity {
    #[default]
    Sparse,
    Moderate,
    Busy,
}

impl PeopleDensity {
    pub fn phrase(self) -> &'static str {
        match self {
            PeopleDensity::Sparse => "sparse",
            PeopleDensity::Moderate => "moderate",
            PeopleDensity::Busy => "busy",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn phrase(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "2k")]
    TwoK,
    #[default]
    #[serde(rename = "4k")]
    FourK,
    #[serde(rename = "8k")]
    EightK,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:5")]
    Portrait,
    #[serde(rename = "9:16")]
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeometryState {
    pub lock_geometry: bool,
    pub lock_perspective: bool,
    pub lock_camera_position: bool,
    pub lock_framing: bool,
    pub geometry_preservation: u8,
    pub perspective_adherence: u8,
    pub framing_adherence: u8,
    pub edge_definition: EdgeDefinition,
    pub edge_strength: u8,
    pub allow_refinement: bool,
    pub suppress_hallucinations: bool,
    pub allow_reinterpretation: bool,
}

impl Default for GeometryState {
    fn default() -> Self {
        GeometryState {
            lock_geometry: true,
            lock_perspective: true,
            lock_camera_position: true,
            lock_framing: true,
            geometry_preservation: 80,
            perspective_adherence: 80,
            framing_adherence: 80,
            edge_definition: EdgeDefinition::Sharp,
            edge_strength: 50,
            allow_refinement: true,
            suppress_hallucinations: true,
            allow_reinterpretation: false,
        }
    }
}

impl GeometryState {
    pub fn clamp_ranges(&mut self) {
        self.geometry_preservation = self.geometry_preservation.min(SLIDER_MAX);
        self.perspective_adherence = self.perspective_adherence.min(SLIDER_MAX);
        self.framing_adherence = self.framing_adherence.min(SLIDER_MAX);
        self.edge_strength = self.edge_strength.min(SLIDER_MAX);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraState {
    pub fov_mode: FovMode,
    pub view_type: ViewType,
    pub projection: Projection,
    pub depth_of_field: bool,
    pub dof_strength: u8,
    pub horizon_lock: bool,
    pub vertical_correction: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        CameraState {
            fov_mode: FovMode::Normal,
            view_type: ViewType::EyeLevel,
            projection: Projection::Perspective,
            depth_of_field: false,
            dof_strength: 30,
            horizon_lock: true,
            vertical_correction: true,
        }
    }
}

impl CameraState {
    pub fn clamp_ranges(&mut self) {
        self.dof_strength = self.dof_strength.min(SLIDER_MAX);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightingState {
    pub time_of_day: TimeOfDay,
    pub sun_azimuth: u16,
    pub sun_altitude: u8,
    pub shadow_softness: u8,
    pub shadow_intensity: u8,
    pub fog: bool,
    pub weather: Weather,
}

impl Default for LightingState {
    fn default() -> Self {
        LightingState {
            time_of_day: TimeOfDay::Morning,
            sun_azimuth: 135,
            sun_altitude: 45,
            shadow_softness: 20,
            shadow_intensity: 60,
            fog: false,
            weather: Weather::Clear,
        }
    }
}

impl LightingState {
    pub fn clamp_ranges(&mut self) {
        self.sun_azimuth = self.sun_azimuth.min(SUN_AZIMUTH_MAX);
        self.sun_altitude = self.sun_altitude.min(SUN_ALTITUDE_MAX);
        self.shadow_softness = self.shadow_softness.min(SLIDER_MAX);
        self.shadow_intensity = self.shadow_intensity.min(SLIDER_MAX);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialState {
    pub texture_sharpness: u8,
    pub aging_level: u8,
    pub concrete_emphasis: u8,
    pub glass_emphasis: u8,
    pub wood_emphasis: u8,
    pub metal_emphasis: u8,
    pub reflectivity_bias: i16,
}

impl Default for MaterialState {
    fn default() -> Self {
        MaterialState {
            texture_sharpness: 50,
            aging_level: 10,
            concrete_emphasis: 50,
            glass_emphasis: 50,
            wood_emphasis: 50,
            metal_emphasis: 50,
            reflectivity_bias: 0,
        }
    }
}

impl MaterialState {
    pub fn clamp_ranges(&mut self) {
        self.texture_sharpness = self.texture_sharpness.min(SLIDER_MAX);
        self.aging_level = self.aging_level.min(SLIDER_MAX);
        self.concrete_emphasis = self.concrete_emphasis.min(SLIDER_MAX);
        self.glass_emphasis = self.glass_emphasis.min(SLIDER_MAX);
        self.wood_emphasis = self.wood_emphasis.min(SLIDER_MAX);
        self.metal_emphasis = self.metal_emphasis.min(SLIDER_MAX);
        self.reflectivity_bias = self
            .reflectivity_bias
            .clamp(-REFLECTIVITY_RANGE, REFLECTIVITY_RANGE);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextState {
    pub people: bool,
    pub people_density: PeopleDensity,
    pub vegetation: bool,
    pub season: Season,
    pub vehicles: bool,
    pub urban_furniture: bool,
    pub scale_check: bool,
}

impl Default for ContextState {
    fn default() -> Self {
        ContextState {
            people: false,
            people_density: PeopleDensity::Sparse,
            vegetation: true,
            season: Season::Summer,
            vehicles: false,
            urban_furniture: false,
            scale_check: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputState {
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
    pub format: ImageFormat,
    pub seed: u64,
    pub seed_locked: bool,
}

impl Default for OutputState {
    fn default() -> Self {
        OutputState {
            resolution: Resolution::FourK,
            aspect_ratio: AspectRatio::Widescreen,
            format: ImageFormat::Png,
            seed: 123_456,
            seed_locked: false,
        }
    }
}
