use gemini_client::GeminiClient;
use sprinova_core::config::Config;
use sprinova_core::notifier::Notifier;
use std::time::Duration;
use tokio::sync::broadcast;

/// Shared application state passed to all route handlers.
///
/// Exactly one [`Notifier`] exists per server; every surface that raises a
/// toast (AI tool failures, contact intake, the notification API itself)
/// goes through it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: Notifier,
    pub ai: Option<GeminiClient>,
    pub event_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(config: Config, ai: Option<GeminiClient>) -> Self {
        let (tx, _) = broadcast::channel(64);
        let notifier = Notifier::new(
            config.notifications.capacity,
            Duration::from_millis(config.notifications.remove_delay_ms),
        );

        // Bridge every queue snapshot into the broadcast channel feeding the
        // SSE endpoint. The subscription lives for the process; dropping the
        // handle does not deregister it.
        let forward = tx.clone();
        let _subscription = notifier.subscribe(move |snapshot| {
            if let Ok(payload) = serde_json::to_string(snapshot) {
                let _ = forward.send(payload);
            }
        });

        Self {
            config,
            notifier,
            ai,
            event_tx: tx,
        }
    }
}
