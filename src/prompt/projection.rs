use crate::state::{
    AppState, CameraState, ContextState, GenerationMode, GeometryState, LightingState,
    MaterialState,
};

/// The fields of the state that a composed prompt depends on.
#[derive(Debug, Clone, Copy)]
pub struct CompositionInputs<'a> {
    pub style_id: &'a str,
    pub subject: Option<&'a str>,
    pub geometry: &'a GeometryState,
    pub camera: &'a CameraState,
    pub lighting: &'a LightingState,
    pub materials: &'a MaterialState,
    pub context: &'a ContextState,
}

#[derive(Debug, Clone, Copy)]
pub enum PromptSource<'a> {
    /// Free text typed by the user for the active mode; returned verbatim,
    /// whitespace included.
    Override(&'a str),
    Compose(CompositionInputs<'a>),
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The free-text field that replaces synthesis in `mode`, if any.
pub fn override_text(mode: GenerationMode, state: &AppState) -> Option<&str> {
    match mode {
        GenerationMode::GenerateText => non_empty(&state.workflow.text_prompt),
        GenerationMode::VisualEdit => non_empty(&state.workflow.visual_prompt),
        _ => None,
    }
}

pub fn project(state: &AppState) -> PromptSource<'_> {
    if let Some(text) = override_text(state.mode, state) {
        return PromptSource::Override(text);
    }

    PromptSource::Compose(CompositionInputs {
        style_id: &state.active_style_id,
        subject: non_empty(&state.prompt),
        geometry: &state.geometry,
        camera: &state.camera,
        lighting: &state.lighting,
        materials: &state.materials,
        context: &state.context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prompt_only_overrides_in_generate_text_mode() {
        let mut state = AppState::default();
        state.workflow.text_prompt = "a glass pavilion at dusk".to_string();
        assert!(matches!(project(&state), PromptSource::Compose(_)));

        state.mode = GenerationMode::GenerateText;
        assert!(matches!(
            project(&state),
            PromptSource::Override("a glass pavilion at dusk")
        ));
    }

    #[test]
    fn visual_prompt_only_overrides_in_visual_edit_mode() {
        let mut state = AppState::default();
        state.workflow.visual_prompt = "swap facade to timber".to_string();
        state.mode = GenerationMode::Masterplan;
        assert!(override_text(state.mode, &state).is_none());

        state.mode = GenerationMode::VisualEdit;
        assert_eq!(override_text(state.mode, &state), Some("swap facade to timber"));
    }

    #[test]
    fn whitespace_override_is_returned_verbatim() {
        let mut state = AppState::default();
        state.mode = GenerationMode::GenerateText;
        state.workflow.text_prompt = "   ".to_string();
        assert!(matches!(project(&state), PromptSource::Override("   ")));
    }

    #[test]
    fn empty_override_falls_through_with_untrimmed_subject() {
        let mut state = AppState::default();
        state.mode = GenerationMode::GenerateText;
        state.prompt = "  riverside library  ".to_string();
        match project(&state) {
            PromptSource::Compose(inputs) => {
                assert_eq!(inputs.subject, Some("  riverside library  "));
                assert_eq!(inputs.style_id, "contemporary-minimalist");
            }
            PromptSource::Override(text) => panic!("unexpected override {text:?}"),
        }
    }
}
