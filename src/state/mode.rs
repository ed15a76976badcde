use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::StateError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    #[default]
    #[serde(rename = "render-3d")]
    Render3d,
    RenderCad,
    Masterplan,
    VisualEdit,
    Exploded,
    Section,
    RenderSketch,
    Upscale,
    ImgToCad,
    #[serde(rename = "img-to-3d")]
    ImgTo3d,
    Video,
    GenerateText,
}

impl GenerationMode {
    /// Workflow order used by the mode picker and the Cmd/Ctrl+digit shortcuts.
    pub const WORKFLOWS: [GenerationMode; 11] = [
        GenerationMode::Render3d,
        GenerationMode::RenderCad,
        GenerationMode::Masterplan,
        GenerationMode::VisualEdit,
        GenerationMode::Exploded,
        GenerationMode::Section,
        GenerationMode::RenderSketch,
        GenerationMode::Upscale,
        GenerationMode::ImgToCad,
        GenerationMode::ImgTo3d,
        GenerationMode::Video,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            GenerationMode::Render3d => "render-3d",
            GenerationMode::RenderCad => "render-cad",
            GenerationMode::Masterplan => "masterplan",
            GenerationMode::VisualEdit => "visual-edit",
            GenerationMode::Exploded => "exploded",
            GenerationMode::Section => "section",
            GenerationMode::RenderSketch => "render-sketch",
            GenerationMode::Upscale => "upscale",
            GenerationMode::ImgToCad => "img-to-cad",
            GenerationMode::ImgTo3d => "img-to-3d",
            GenerationMode::Video => "video",
            GenerationMode::GenerateText => "generate-text",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenerationMode::Render3d => "3D to Render",
            GenerationMode::RenderCad => "CAD to Render",
            GenerationMode::Masterplan => "Masterplan",
            GenerationMode::VisualEdit => "Visual Editor",
            GenerationMode::Exploded => "Exploded View",
            GenerationMode::Section => "Render to Section",
            GenerationMode::RenderSketch => "Sketch to Render",
            GenerationMode::Upscale => "Upscaler",
            GenerationMode::ImgToCad => "Image to CAD",
            GenerationMode::ImgTo3d => "Image to 3D",
            GenerationMode::Video => "Video Studio",
            GenerationMode::GenerateText => "Image Generation",
        }
    }

    /// Maps a shortcut digit (1-9) to a workflow. Digits past the ninth
    /// workflow have no binding.
    pub fn from_shortcut_digit(digit: u8) -> Option<Self> {
        if !(1..=9).contains(&digit) {
            return None;
        }
        Self::WORKFLOWS.get(usize::from(digit - 1)).copied()
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GenerationMode {
    type Err = StateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::WORKFLOWS
            .iter()
            .copied()
            .chain(std::iter::once(GenerationMode::GenerateText))
            .find(|mode| mode.slug() == normalized)
            .ok_or_else(|| StateError::UnknownMode(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_serde_and_from_str() {
        for mode in GenerationMode::WORKFLOWS {
            let json = serde_json::to_string(&mode).expect("serialize mode");
            assert_eq!(json, format!("\"{}\"", mode.slug()));
            assert_eq!(mode.slug().parse::<GenerationMode>().ok(), Some(mode));
        }
        assert_eq!(
            "Generate-Text".parse::<GenerationMode>().ok(),
            Some(GenerationMode::GenerateText)
        );
        assert!("material-validation".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn shortcut_digits_cover_first_nine_workflows() {
        assert_eq!(GenerationMode::from_shortcut_digit(1), Some(GenerationMode::Render3d));
        assert_eq!(GenerationMode::from_shortcut_digit(9), Some(GenerationMode::ImgToCad));
        assert_eq!(GenerationMode::from_shortcut_digit(0), None);
        assert_eq!(GenerationMode::from_shortcut_digit(10), None);
    }
}
