use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::state::AppState;

/// GET /api/events — SSE stream of notification queue snapshots: one event
/// with the current state on connect, then one per state change.
pub async fn sse_events(State(app): State<AppState>) -> impl axum::response::IntoResponse {
    let initial = serde_json::to_string(&app.notifier.snapshot()).unwrap_or_else(|_| "[]".into());
    let first = tokio_stream::once(Ok::<Event, Infallible>(
        Event::default().event("notifications").data(initial),
    ));

    let rx = app.event_tx.subscribe();
    let updates = BroadcastStream::new(rx).filter_map(|msg| {
        msg.ok().map(|payload| {
            Ok::<Event, Infallible>(Event::default().event("notifications").data(payload))
        })
    });

    Sse::new(first.chain(updates)).keep_alive(KeepAlive::default())
}
