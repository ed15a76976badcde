use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialBias {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    /// Kept as data only. Nothing injects these as negative prompt syntax yet.
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingBias {
    pub preferred: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraBias {
    pub preferred_angles: Vec<String>,
    pub preferred_framing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingLanguage {
    pub quality: Vec<String>,
    pub atmosphere: Vec<String>,
    pub detail: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptBundle {
    pub architecture_vocabulary: Vec<String>,
    pub material_bias: MaterialBias,
    pub lighting_bias: LightingBias,
    pub camera_bias: CameraBias,
    pub rendering_language: RenderingLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub prompt_bundle: PromptBundle,
}

fn phrases(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl MaterialBias {
    pub fn from_phrases(primary: &[&str], secondary: &[&str], avoid: &[&str]) -> Self {
        MaterialBias {
            primary: phrases(primary),
            secondary: phrases(secondary),
            avoid: phrases(avoid),
        }
    }
}

impl LightingBias {
    pub fn from_phrases(preferred: &[&str], avoid: &[&str]) -> Self {
        LightingBias {
            preferred: phrases(preferred),
            avoid: phrases(avoid),
        }
    }
}

impl CameraBias {
    pub fn from_phrases(angles: &[&str], framing: &[&str]) -> Self {
        CameraBias {
            preferred_angles: phrases(angles),
            preferred_framing: phrases(framing),
        }
    }
}

impl RenderingLanguage {
    pub fn from_phrases(quality: &[&str], atmosphere: &[&str], detail: &[&str]) -> Self {
        RenderingLanguage {
            quality: phrases(quality),
            atmosphere: phrases(atmosphere),
            detail: phrases(detail),
        }
    }
}

impl PromptBundle {
    pub fn with_vocabulary(vocabulary: &[&str]) -> Self {
        PromptBundle {
            architecture_vocabulary: phrases(vocabulary),
            ..PromptBundle::default()
        }
    }

    /// Trims every phrase and drops the ones left empty.
    pub fn normalized(self) -> Self {
        fn clean(values: Vec<String>) -> Vec<String> {
            values
                .into_iter()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .collect()
        }

        PromptBundle {
            architecture_vocabulary: clean(self.architecture_vocabulary),
            material_bias: MaterialBias {
                primary: clean(self.material_bias.primary),
                secondary: clean(self.material_bias.secondary),
                avoid: clean(self.material_bias.avoid),
            },
            lighting_bias: LightingBias {
                preferred: clean(self.lighting_bias.preferred),
                avoid: clean(self.lighting_bias.avoid),
            },
            camera_bias: CameraBias {
                preferred_angles: clean(self.camera_bias.preferred_angles),
                preferred_framing: clean(self.camera_bias.preferred_framing),
            },
            rendering_language: RenderingLanguage {
                quality: clean(self.rendering_language.quality),
                atmosphere: clean(self.rendering_language.atmosphere),
                detail: clean(self.rendering_language.detail),
            },
        }
    }
}
