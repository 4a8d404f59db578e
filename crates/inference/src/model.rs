use crate::controller::Event;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Loads the model once on a blocking worker and reports the result as an event.
///
/// Failures are reported, never retried.
pub fn spawn_model_load<B, F>(
    location: String,
    load: F,
    events: UnboundedSender<Event<B>>,
) -> JoinHandle<()>
where
    B: Send + 'static,
    F: FnOnce(&str) -> anyhow::Result<B> + Send + 'static,
{
    tokio::spawn(async move {
        tracing::info!(location = %location, "Loading style model");
        let start = Instant::now();

        let task_location = location.clone();
        let result = tokio::task::spawn_blocking(move || load(&task_location))
            .await
            .unwrap_or_else(|e| Err(anyhow::anyhow!("model load task failed: {e}")));

        tracing::debug!(
            location = %location,
            elapsed_ms = start.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "Model load finished"
        );

        if events.send(Event::ModelLoaded(result)).is_err() {
            tracing::warn!("Controller stopped before the model finished loading");
        }
    })
}
