use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Trailing-edge debounce. Each `push` restarts the interval and replaces the
/// pending value; the handler sees only the last value of a burst. A value
/// still pending when the debouncer is dropped is flushed immediately.
pub struct Debouncer<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the worker on the current tokio runtime.
    pub fn spawn<F>(interval: Duration, handler: F) -> (Self, JoinHandle<()>)
    where
        F: FnMut(T) + Send + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = tokio::spawn(async move {
            debounce_worker(interval, receiver, handler).await;
        });
        (Debouncer { sender }, worker)
    }

    /// Returns false once the worker has stopped.
    pub fn push(&self, value: T) -> bool {
        self.sender.send(value).is_ok()
    }
}

async fn debounce_worker<T, F>(
    interval: Duration,
    mut receiver: mpsc::UnboundedReceiver<T>,
    mut handler: F,
) where
    F: FnMut(T),
{
    while let Some(mut pending) = receiver.recv().await {
        let mut superseded = 0usize;
        loop {
            tokio::select! {
                biased;
                next = receiver.recv() => match next {
                    Some(value) => {
                        pending = value;
                        superseded += 1;
                    }
                    None => {
                        handler(pending);
                        debug!("Debounce worker flushed pending value on close");
                        return;
                    }
                },
                _ = tokio::time::sleep(interval) => {
                    if superseded > 0 {
                        debug!("Debounce collapsed {} superseded value(s)", superseded);
                    }
                    handler(pending);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl FnMut(u32) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.lock().push(value))
    }

    #[tokio::test(start_paused = true)]
    async fn last_value_in_a_burst_wins() {
        let (seen, handler) = recorder();
        let (debouncer, _worker) = Debouncer::spawn(Duration::from_millis(200), handler);

        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push(2);
        debouncer.push(3);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(seen.lock().is_empty(), "interval restarts on every push");

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*seen.lock(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_each_fire() {
        let (seen, handler) = recorder();
        let (debouncer, _worker) = Debouncer::spawn(Duration::from_millis(50), handler);

        debouncer.push(7);
        tokio::time::sleep(Duration::from_millis(80)).await;
        debouncer.push(8);
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(*seen.lock(), vec![7, 8]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_flushes_pending_value() {
        let (seen, handler) = recorder();
        let (debouncer, worker) = Debouncer::spawn(Duration::from_secs(5), handler);

        debouncer.push(42);
        drop(debouncer);
        worker.await.expect("worker exits cleanly");
        assert_eq!(*seen.lock(), vec![42]);
    }
}
