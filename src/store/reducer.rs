use crate::state::AppState;

use super::actions::Action;

/// Tab shown in the right panel after a mode switch.
pub const MODE_SWITCH_RIGHT_TAB: &str = "default";

/// Produces the next snapshot. Patches merge shallowly into their own
/// sub-object and out-of-range slider values are clamped here, so
/// everything downstream can trust the ranges.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetMode(mode) => {
            next.mode = mode;
            next.active_right_tab = MODE_SWITCH_RIGHT_TAB.to_string();
        }
        Action::SetStyle(style_id) => next.active_style_id = style_id,
        Action::SetImage(image) => next.uploaded_image = image,
        Action::SetGenerating(generating) => next.is_generating = generating,
        Action::SetProgress(progress) => next.progress = progress,
        Action::SetPrompt(prompt) => next.prompt = prompt,
        Action::UpdateWorkflow(patch) => patch.apply_to(&mut next.workflow),
        Action::UpdateGeometry(patch) => patch.apply_to(&mut next.geometry),
        Action::UpdateCamera(patch) => patch.apply_to(&mut next.camera),
        Action::UpdateLighting(patch) => patch.apply_to(&mut next.lighting),
        Action::UpdateMaterials(patch) => patch.apply_to(&mut next.materials),
        Action::UpdateContext(patch) => patch.apply_to(&mut next.context),
        Action::UpdateOutput(patch) => patch.apply_to(&mut next.output),
        Action::SetActiveTab(tab) => next.active_right_tab = tab,
        Action::SetActiveBottomTab(tab) => next.active_bottom_tab = tab,
        Action::ToggleBottomPanel => next.bottom_panel_collapsed = !next.bottom_panel_collapsed,
    }
    next.clamp_ranges();
    next
}
