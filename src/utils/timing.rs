use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::prompt::SynthesisReport;
use crate::state::GenerationMode;

pub const TIMING_TARGET: &str = "archviz.timing";

pub fn preview(text: &str, max_chars: usize) -> String {
    let flattened = text.replace('\n', " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    truncated.push('…');
    truncated
}

#[derive(Debug)]
pub struct SynthesisTimer {
    trigger: String,
    mode: GenerationMode,
    requested_style: String,
    started_at: DateTime<Utc>,
    started_perf: Instant,
}

impl SynthesisTimer {
    pub fn start(trigger: &str, mode: GenerationMode, requested_style: &str) -> Self {
        SynthesisTimer {
            trigger: trigger.to_string(),
            mode,
            requested_style: requested_style.to_string(),
            started_at: Utc::now(),
            started_perf: Instant::now(),
        }
    }

    pub fn finish(self, report: &SynthesisReport, preview_chars: usize) {
        let duration_us = self.started_perf.elapsed().as_micros();
        info!(
            target: TIMING_TARGET,
            "event=prompt_synthesized trigger={} mode={} requested_style={} resolved_style={} fallback={} overridden={} started_at={} duration_us={} chars={} preview={:?}",
            self.trigger,
            self.mode,
            self.requested_style,
            report.style_id.as_deref().unwrap_or("-"),
            report.style_fallback,
            report.overridden,
            self.started_at.to_rfc3339(),
            duration_us,
            report.prompt.chars().count(),
            preview(&report.prompt, preview_chars)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_flattens_and_truncates_on_char_boundaries() {
        assert_eq!(preview("short\nprompt", 40), "short prompt");
        assert_eq!(preview("sun azimuth 135°", 15), "sun azimuth 135…");
    }
}
