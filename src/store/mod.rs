pub mod actions;
pub mod reducer;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::Config;
use crate::prompt::{synthesize_with_report, SynthesisReport};
use crate::state::AppState;
use crate::styles::StyleCatalog;
use crate::utils::debounce::Debouncer;
use crate::utils::timing::SynthesisTimer;

pub use actions::Action;
pub use reducer::reduce;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);
pub const DEFAULT_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub debounce: Duration,
    pub preview_chars: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            debounce: DEFAULT_DEBOUNCE,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl StoreOptions {
    pub fn from_config(config: &Config) -> Self {
        StoreOptions {
            debounce: config.prompt_debounce(),
            preview_chars: config.prompt_preview_chars,
        }
    }
}

/// Holds the current editor snapshot and keeps the published prompt in step
/// with it. Prompt-relevant dispatches are debounced; the latest prompt is
/// observable through `subscribe`.
///
/// Must be created inside a tokio runtime.
pub struct Store {
    state: Arc<Mutex<Arc<AppState>>>,
    catalog: Arc<StyleCatalog>,
    prompt_tx: Arc<watch::Sender<String>>,
    debouncer: Debouncer<Arc<AppState>>,
    worker: JoinHandle<()>,
    preview_chars: usize,
}

impl Store {
    pub fn new(initial: AppState, catalog: Arc<StyleCatalog>, options: StoreOptions) -> Self {
        let initial = Arc::new(initial);
        let timer = SynthesisTimer::start("initial", initial.mode, &initial.active_style_id);
        let report = synthesize_with_report(&initial, &catalog);
        let (prompt_tx, _) = watch::channel(report.prompt.clone());
        timer.finish(&report, options.preview_chars);

        let prompt_tx = Arc::new(prompt_tx);
        let worker_tx = prompt_tx.clone();
        let worker_catalog = catalog.clone();
        let preview_chars = options.preview_chars;
        let (debouncer, worker) =
            Debouncer::spawn(options.debounce, move |snapshot: Arc<AppState>| {
                let timer =
                    SynthesisTimer::start("debounce", snapshot.mode, &snapshot.active_style_id);
                let report = synthesize_with_report(&snapshot, &worker_catalog);
                worker_tx.send_replace(report.prompt.clone());
                timer.finish(&report, preview_chars);
            });

        Store {
            state: Arc::new(Mutex::new(initial)),
            catalog,
            prompt_tx,
            debouncer,
            worker,
            preview_chars,
        }
    }

    /// Applies the action and returns the new snapshot. Synthesis is only
    /// scheduled when the action can change the prompt. The push happens
    /// under the state lock so the debouncer sees snapshots in commit order.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        let kind = action.kind();
        let affects_prompt = action.affects_prompt();
        let (next, scheduled) = {
            let mut guard = self.state.lock();
            let next = Arc::new(reduce(&**guard, action));
            *guard = next.clone();
            let scheduled = !affects_prompt || self.debouncer.push(next.clone());
            (next, scheduled)
        };
        debug!("Dispatched {} (affects_prompt={})", kind, affects_prompt);

        if !scheduled {
            warn!("Prompt worker stopped; {} will not refresh the prompt", kind);
        }
        next
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.state.lock().clone()
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.prompt_tx.subscribe()
    }

    pub fn current_prompt(&self) -> String {
        self.prompt_tx.borrow().clone()
    }

    /// Synthesizes the current snapshot right away and publishes it,
    /// bypassing the debounce.
    pub fn synthesize_now(&self) -> SynthesisReport {
        let snapshot = self.snapshot();
        let timer = SynthesisTimer::start("immediate", snapshot.mode, &snapshot.active_style_id);
        let report = synthesize_with_report(&snapshot, &self.catalog);
        self.prompt_tx.send_replace(report.prompt.clone());
        timer.finish(&report, self.preview_chars);
        report
    }

    /// Stops the worker, flushing any pending synthesis, and returns the
    /// final published prompt.
    pub async fn shutdown(self) -> String {
        let Store {
            debouncer,
            worker,
            prompt_tx,
            ..
        } = self;
        drop(debouncer);
        if let Err(err) = worker.await {
            warn!("Prompt worker ended abnormally: {}", err);
        }
        let prompt = prompt_tx.borrow().clone();
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::synthesize;
    use crate::state::types::ViewType;
    use crate::state::GenerationMode;
    use crate::store::actions::CameraPatch;

    fn store() -> Store {
        Store::new(
            AppState::default(),
            Arc::new(StyleCatalog::built_in()),
            StoreOptions::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn initial_prompt_is_published_immediately() {
        let store = store();
        let expected = synthesize(&AppState::default(), store.catalog());
        assert_eq!(store.current_prompt(), expected);
        assert!(!store.subscribe().has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_dispatches_publishes_once_after_quiet_period() {
        let store = store();
        let mut prompts = store.subscribe();
        let before = store.current_prompt();

        store.dispatch(Action::SetStyle("brutalist".to_string()));
        tokio::time::sleep(Duration::from_millis(100)).await;
        store.dispatch(Action::UpdateCamera(CameraPatch {
            view_type: Some(ViewType::Aerial),
            ..CameraPatch::default()
        }));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(store.current_prompt(), before);
        assert!(!prompts.has_changed().unwrap());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(prompts.has_changed().unwrap());
        let published = prompts.borrow_and_update().clone();
        assert_eq!(published, synthesize(&store.snapshot(), store.catalog()));
        assert!(published.contains("aerial view"));
    }

    #[tokio::test(start_paused = true)]
    async fn ui_only_actions_do_not_schedule_synthesis() {
        let store = store();
        let prompts = store.subscribe();

        let snapshot = store.dispatch(Action::ToggleBottomPanel);
        store.dispatch(Action::SetProgress(40));
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(snapshot.bottom_panel_collapsed);
        assert_eq!(store.snapshot().progress, 40);
        assert!(!prompts.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn synthesize_now_bypasses_debounce() {
        let store = store();
        store.dispatch(Action::SetMode(GenerationMode::Masterplan));
        store.dispatch(Action::SetPrompt("harbour district".to_string()));

        let report = store.synthesize_now();
        assert_eq!(store.current_prompt(), report.prompt);
        assert!(report.prompt.contains("harbour district"));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_flushes_pending_synthesis() {
        let store = store();
        store.dispatch(Action::SetStyle("cyberpunk".to_string()));
        let expected = synthesize(&store.snapshot(), store.catalog());

        let final_prompt = store.shutdown().await;
        assert_eq!(final_prompt, expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_dispatches_publish_the_final_snapshot() {
        let store = Arc::new(store());
        let styles = ["brutalist", "cyberpunk", "bauhaus", "parametric", "biophilic"];
        let mut handles = Vec::new();
        for round in 0..40 {
            let store = store.clone();
            let style = styles[round % styles.len()].to_string();
            handles.push(std::thread::spawn(move || {
                store.dispatch(Action::SetStyle(style));
            }));
        }
        for handle in handles {
            handle.join().expect("dispatch thread");
        }

        let store = Arc::into_inner(store).expect("sole owner");
        let expected = synthesize(&store.snapshot(), store.catalog());
        assert_eq!(store.shutdown().await, expected);
    }
}
