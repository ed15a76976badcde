use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use dotenvy::dotenv;
use tracing::{info, warn};

use archviz_prompt_studio::config::CONFIG;
use archviz_prompt_studio::state::{AppState, GenerationMode};
use archviz_prompt_studio::store::{reduce, Action, Store, StoreOptions};
use archviz_prompt_studio::styles::index::build_style_index;
use archviz_prompt_studio::styles::loader::build_catalog;
use archviz_prompt_studio::styles::StyleCatalog;
use archviz_prompt_studio::synthesize_with_report;
use archviz_prompt_studio::utils::logging::init_logging;

#[derive(Debug, Clone, PartialEq)]
struct SynthesizeArgs {
    state_path: Option<PathBuf>,
    style_id: Option<String>,
    mode: Option<GenerationMode>,
    prompt: Option<String>,
    explain: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct ReplayArgs {
    actions_path: PathBuf,
    state_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
enum CliCommand {
    Styles { category: Option<String> },
    Synthesize(SynthesizeArgs),
    Replay(ReplayArgs),
}

fn usage() -> &'static str {
    "Usage:\n  archviz-prompt styles [--category <name>]\n  archviz-prompt synthesize [--state <file.json>] [--style <id>] [--mode <mode|1-9>] [--prompt <text>] [--explain]\n  archviz-prompt replay --actions <file.json> [--state <file.json>]"
}

fn required_value<'a>(args: &'a [String], index: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(index)
        .map(|value| value.as_str())
        .ok_or_else(|| anyhow!("Missing value for {flag}"))
}

/// Accepts a mode slug or a workflow shortcut digit (1-9).
fn parse_mode(value: &str) -> anyhow::Result<GenerationMode> {
    if let Ok(digit) = value.trim().parse::<u8>() {
        return GenerationMode::from_shortcut_digit(digit)
            .ok_or_else(|| anyhow!("No workflow bound to shortcut {digit}; expected 1-9"));
    }
    Ok(value.parse::<GenerationMode>()?)
}

fn parse_styles_args(args: &[String]) -> anyhow::Result<Option<String>> {
    let mut category = None;

    let mut index = 2;
    while index < args.len() {
        match args[index].as_str() {
            "--category" => {
                index += 1;
                category = Some(required_value(args, index, "--category")?.to_string());
            }
            "--help" | "-h" => return Err(anyhow!(usage())),
            other => {
                return Err(anyhow!("Unknown styles argument: {other}\n{}", usage()));
            }
        }
        index += 1;
    }

    Ok(category)
}

fn parse_synthesize_args(args: &[String]) -> anyhow::Result<SynthesizeArgs> {
    let mut parsed = SynthesizeArgs {
        state_path: None,
        style_id: None,
        mode: None,
        prompt: None,
        explain: false,
    };

    let mut index = 2;
    while index < args.len() {
        match args[index].as_str() {
            "--state" => {
                index += 1;
                parsed.state_path = Some(PathBuf::from(required_value(args, index, "--state")?));
            }
            "--style" => {
                index += 1;
                parsed.style_id = Some(required_value(args, index, "--style")?.to_string());
            }
            "--mode" => {
                index += 1;
                let value = required_value(args, index, "--mode")?;
                parsed.mode = Some(parse_mode(value)?);
            }
            "--prompt" => {
                index += 1;
                parsed.prompt = Some(required_value(args, index, "--prompt")?.to_string());
            }
            "--explain" => {
                parsed.explain = true;
            }
            "--help" | "-h" => return Err(anyhow!(usage())),
            other => {
                return Err(anyhow!("Unknown synthesize argument: {other}\n{}", usage()));
            }
        }
        index += 1;
    }

    Ok(parsed)
}

fn parse_replay_args(args: &[String]) -> anyhow::Result<ReplayArgs> {
    let mut actions_path = None;
    let mut state_path = None;

    let mut index = 2;
    while index < args.len() {
        match args[index].as_str() {
            "--actions" => {
                index += 1;
                actions_path = Some(PathBuf::from(required_value(args, index, "--actions")?));
            }
            "--state" => {
                index += 1;
                state_path = Some(PathBuf::from(required_value(args, index, "--state")?));
            }
            "--help" | "-h" => return Err(anyhow!(usage())),
            other => {
                return Err(anyhow!("Unknown replay argument: {other}\n{}", usage()));
            }
        }
        index += 1;
    }

    let actions_path = actions_path.ok_or_else(|| anyhow!("--actions is required"))?;
    Ok(ReplayArgs {
        actions_path,
        state_path,
    })
}

fn parse_cli_args(args: &[String]) -> anyhow::Result<CliCommand> {
    match args.get(1).map(|value| value.as_str()) {
        Some("styles") => {
            parse_styles_args(args).map(|category| CliCommand::Styles { category })
        }
        Some("synthesize") => parse_synthesize_args(args).map(CliCommand::Synthesize),
        Some("replay") => parse_replay_args(args).map(CliCommand::Replay),
        Some(other) => Err(anyhow!("Unknown command: {other}\n{}", usage())),
        None => Err(anyhow!(usage())),
    }
}

fn load_state(path: Option<&PathBuf>) -> anyhow::Result<AppState> {
    match path {
        Some(path) => AppState::load(path)
            .with_context(|| format!("Failed to load state from {}", path.display())),
        None => Ok(AppState::default()),
    }
}

fn run_synthesize(args: SynthesizeArgs, catalog: &StyleCatalog) -> anyhow::Result<()> {
    let mut state = load_state(args.state_path.as_ref())?;
    if let Some(mode) = args.mode {
        state = reduce(&state, Action::SetMode(mode));
    }
    if let Some(style_id) = args.style_id {
        state = reduce(&state, Action::SetStyle(style_id));
    }
    if let Some(prompt) = args.prompt {
        state = reduce(&state, Action::SetPrompt(prompt));
    }

    let report = synthesize_with_report(&state, catalog);
    println!("{}", report.prompt);
    if args.explain {
        println!();
        println!("mode: {} ({})", state.mode, state.mode.label());
        println!("requested style: {}", state.active_style_id);
        match &report.style_id {
            Some(style_id) if report.style_fallback => {
                println!("resolved style: {style_id} (fallback)")
            }
            Some(style_id) => println!("resolved style: {style_id}"),
            None => println!("resolved style: - (override text used verbatim)"),
        }
        println!("characters: {}", report.prompt.chars().count());
    }
    Ok(())
}

async fn run_replay(args: ReplayArgs, catalog: Arc<StyleCatalog>) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(&args.actions_path)
        .await
        .with_context(|| format!("Failed to read {}", args.actions_path.display()))?;
    let actions = Action::parse_list(&raw)
        .with_context(|| format!("Invalid action list in {}", args.actions_path.display()))?;
    let state = load_state(args.state_path.as_ref())?;

    let store = Store::new(state, catalog, StoreOptions::from_config(&CONFIG));
    let total = actions.len();
    for action in actions {
        store.dispatch(action);
    }
    let prompt = store.shutdown().await;
    info!("Replayed {} action(s)", total);
    println!("{prompt}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guards = init_logging();
    if let Some(message) = CONFIG.debounce_clamp_warning() {
        warn!("{}", message);
    }

    let args: Vec<String> = std::env::args().collect();
    let command = parse_cli_args(&args)?;
    let catalog = Arc::new(build_catalog(CONFIG.style_catalog_path.as_deref()));

    match command {
        CliCommand::Styles { category } => {
            println!("{}", build_style_index(&catalog, category.as_deref()));
        }
        CliCommand::Synthesize(synthesize_args) => run_synthesize(synthesize_args, &catalog)?,
        CliCommand::Replay(replay_args) => run_replay(replay_args, catalog).await?,
    }

    Ok(())
}
