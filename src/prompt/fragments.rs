pub const CLAUSE_SEPARATOR: &str = ", ";
pub const CLOSING_DIRECTIVE: &str = "8k resolution, highly detailed, architectural visualization";

/// Sliders at or below this value contribute no emphasis token.
pub const EMPHASIS_MIDPOINT: u8 = 50;
pub const HUMAN_SCALE_WEIGHT: f32 = 1.2;

/// `value / 50` rounded to one decimal: 1.0 at the midpoint, 2.0 at 100.
pub fn emphasis_weight(value: u8) -> f32 {
    let ratio = f32::from(value) / f32::from(EMPHASIS_MIDPOINT);
    (ratio * 10.0).round() / 10.0
}

pub fn weighted(token: &str, weight: f32) -> String {
    format!("({token}:{weight:.1})")
}

/// Ordered, comma-joined list of prompt fragments. Blank fragments are
/// dropped on insert so optional clauses never leave doubled separators.
#[derive(Debug, Default)]
pub struct FragmentList {
    fragments: Vec<String>,
}

impl FragmentList {
    pub fn new() -> Self {
        FragmentList::default()
    }

    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            return;
        }
        if trimmed.len() == fragment.len() {
            self.fragments.push(fragment);
        } else {
            self.fragments.push(trimmed.to_string());
        }
    }

    /// Pushes `fragment` exactly as given; only an empty string is skipped.
    pub fn push_verbatim(&mut self, fragment: &str) {
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
    }

    pub fn join(&self) -> String {
        self.fragments.join(CLAUSE_SEPARATOR)
    }
}

/// Comma-joins the non-blank phrases of `values`, taking at most `limit`.
pub fn join_phrases(values: &[String], limit: usize) -> String {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .take(limit)
        .collect::<Vec<_>>()
        .join(CLAUSE_SEPARATOR)
}
