use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

pub const MIN_DEBOUNCE_MS: u64 = 10;
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub logs_dir: PathBuf,
    pub enable_file_logs: bool,
    pub style_catalog_path: Option<PathBuf>,
    pub prompt_debounce_ms: u64,
    /// Raw `PROMPT_DEBOUNCE_MS` before clamping.
    pub requested_debounce_ms: u64,
    pub prompt_preview_chars: usize,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_u64_strict(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<u64>()
            .map_err(|_| anyhow!("Invalid {name} value: {value}")),
        _ => Ok(default),
    }
}

fn normalize_debounce_ms(value: u64) -> u64 {
    value.clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS)
}

fn resolve_style_catalog_path() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(env_value) = env::var("STYLE_CATALOG_PATH") {
        let trimmed = env_value.trim();
        if !trimmed.is_empty() {
            let env_path = PathBuf::from(trimmed);
            if env_path.is_absolute() {
                return Some(env_path);
            }
            let base = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            return Some(base.join(env_path));
        }
    }

    candidates.push(PathBuf::from("styles.json"));
    candidates.push(PathBuf::from("styles.yaml"));
    candidates.push(PathBuf::from("config").join("styles.json"));

    candidates.into_iter().find(|candidate| candidate.exists())
}

impl Config {
    pub fn load() -> Result<Self> {
        let requested_debounce_ms = env_u64_strict("PROMPT_DEBOUNCE_MS", 200)?;

        Ok(Config {
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            logs_dir: PathBuf::from(env_string("LOGS_DIR", "logs")),
            enable_file_logs: env_bool("ENABLE_FILE_LOGS", true),
            style_catalog_path: resolve_style_catalog_path(),
            prompt_debounce_ms: normalize_debounce_ms(requested_debounce_ms),
            requested_debounce_ms,
            prompt_preview_chars: env_usize("PROMPT_PREVIEW_CHARS", 160).max(16),
        })
    }

    pub fn prompt_debounce(&self) -> Duration {
        Duration::from_millis(self.prompt_debounce_ms)
    }

    /// Describes a clamped `PROMPT_DEBOUNCE_MS`. `CONFIG` is first read while
    /// logging is being set up, so the caller logs this afterwards.
    pub fn debounce_clamp_warning(&self) -> Option<String> {
        (self.requested_debounce_ms != self.prompt_debounce_ms).then(|| {
            format!(
                "PROMPT_DEBOUNCE_MS={} outside {}..={}; using {}",
                self.requested_debounce_ms,
                MIN_DEBOUNCE_MS,
                MAX_DEBOUNCE_MS,
                self.prompt_debounce_ms
            )
        })
    }
}
