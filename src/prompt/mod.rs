pub mod fragments;
pub mod projection;
pub mod synthesizer;

pub use synthesizer::{synthesize, synthesize_with_report, SynthesisReport};
