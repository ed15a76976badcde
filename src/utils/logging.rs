use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::CONFIG;
use crate::utils::timing::TIMING_TARGET;

const GENERAL_LOG_FILE: &str = "archviz.log";
const GENERAL_JSON_FILE: &str = "archviz.jsonl";
const TIMING_LOG_FILE: &str = "timing.log";

/// Keeps the non-blocking writers alive; dropping it flushes the files.
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

fn parse_log_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

fn daily_writer(logs_dir: &Path, file_name: &str, guards: &mut Vec<WorkerGuard>) -> NonBlocking {
    let appender = tracing_appender::rolling::daily(logs_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    guards.push(guard);
    writer
}

fn general_targets(level: LevelFilter) -> Targets {
    Targets::new()
        .with_default(level)
        .with_target(TIMING_TARGET, LevelFilter::OFF)
}

fn timing_targets() -> Targets {
    Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target(TIMING_TARGET, LevelFilter::INFO)
}

/// Console output goes to stderr so command output on stdout stays clean.
pub fn init_logging() -> LoggingGuards {
    let general_level = parse_log_level(&CONFIG.log_level);
    let mut guards = Vec::new();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(general_targets(general_level));

    let mut file_layers = None;
    if CONFIG.enable_file_logs {
        let logs_dir = CONFIG.logs_dir.as_path();
        match fs::create_dir_all(logs_dir) {
            Ok(()) => {
                let file_writer = daily_writer(logs_dir, GENERAL_LOG_FILE, &mut guards);
                let json_writer = daily_writer(logs_dir, GENERAL_JSON_FILE, &mut guards);
                let timing_writer = daily_writer(logs_dir, TIMING_LOG_FILE, &mut guards);

                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_filter(general_targets(general_level));
                let json_file_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(json_writer)
                    .with_filter(general_targets(general_level));
                let timing_layer = tracing_subscriber::fmt::layer()
                    .with_writer(timing_writer)
                    .with_ansi(false)
                    .with_filter(timing_targets());
                file_layers = Some(file_layer.and_then(json_file_layer).and_then(timing_layer));
            }
            Err(err) => {
                eprintln!(
                    "Failed to create logs directory {}: {err}",
                    logs_dir.display()
                );
            }
        }
    }

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layers)
        .init();

    LoggingGuards { _guards: guards }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_info() {
        assert_eq!(parse_log_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(parse_log_level(" warning "), LevelFilter::WARN);
        assert_eq!(parse_log_level("verbose"), LevelFilter::INFO);
    }

    #[test]
    fn timing_target_is_split_from_general_output() {
        let general = general_targets(LevelFilter::DEBUG);
        let timing = timing_targets();
        assert!(!general.would_enable(TIMING_TARGET, &tracing::Level::INFO));
        assert!(general.would_enable("archviz_prompt_studio::store", &tracing::Level::DEBUG));
        assert!(timing.would_enable(TIMING_TARGET, &tracing::Level::INFO));
        assert!(!timing.would_enable("archviz_prompt_studio::store", &tracing::Level::ERROR));
    }
}
