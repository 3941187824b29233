//! Notification center: the shared toast queue manager.
//!
//! A [`Notifier`] owns a [`ToastQueue`] plus two pieces of bookkeeping the
//! queue itself stays ignorant of: an ordered registry of subscribers that
//! receive a full snapshot after every state change, and a map of pending
//! removal timers keyed by entry id. Dismissing an entry marks it closed and
//! schedules its purge after `remove_delay`; removing it explicitly cancels
//! the pending timer. All operations are total, so callers never need to
//! check whether an id still exists before acting on it.
//!
//! The hosting application constructs one `Notifier` at startup and hands
//! out clones; tests construct their own independent instances.

use crate::notification::{Notification, NotificationId, ToastPatch, ToastQueue, ToastRequest};
use std::collections::{BTreeMap, HashMap};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default bound on simultaneously retained toasts: only the most recent
/// notification is shown.
pub const DEFAULT_CAPACITY: usize = 1;

/// Default delay between an entry being marked closed and its purge.
/// Deliberately long: dismissed entries effectively wait for the next
/// explicit cleanup rather than vanishing on their own.
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 1_000_000;

type Listener = Arc<dyn Fn(&[Notification]) + Send + Sync + 'static>;

struct NotifierInner {
    queue: ToastQueue,
    next_id: u64,
    /// Subscribers keyed by registration order; iteration order is delivery order.
    listeners: BTreeMap<u64, Listener>,
    next_listener: u64,
    /// Pending removal timers, at most one per entry id.
    timers: HashMap<NotificationId, JoinHandle<()>>,
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Mutex<NotifierInner>>,
    remove_delay: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, Duration::from_millis(DEFAULT_REMOVE_DELAY_MS))
    }
}

impl Notifier {
    pub fn new(capacity: usize, remove_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NotifierInner {
                queue: ToastQueue::new(capacity),
                next_id: 0,
                listeners: BTreeMap::new(),
                next_listener: 0,
                timers: HashMap::new(),
            })),
            remove_delay,
        }
    }

    pub fn capacity(&self) -> usize {
        self.lock().queue.capacity()
    }

    pub fn remove_delay(&self) -> Duration {
        self.remove_delay
    }

    /// Current queue state, newest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().queue.snapshot()
    }

    /// Number of entries with a removal timer still pending.
    pub fn pending_removals(&self) -> usize {
        self.lock().timers.len()
    }

    /// Add a toast: fresh id, `open = true`, prepended, queue truncated to
    /// capacity. Returns a handle carrying the id and a bound `dismiss`.
    pub fn add(&self, request: ToastRequest) -> ToastHandle {
        let (id, listeners, snapshot) = {
            let mut inner = self.lock();
            inner.next_id += 1;
            let id = NotificationId::from_raw(inner.next_id);
            inner.queue.add(Notification::new(id, request));
            (id, listeners_in_order(&inner), inner.queue.snapshot())
        };
        broadcast(&listeners, &snapshot);
        ToastHandle {
            id,
            notifier: self.clone(),
        }
    }

    /// Merge `patch` into the entry with `id`; no-op if the id is absent.
    pub fn update(&self, id: NotificationId, patch: ToastPatch) {
        let (listeners, snapshot) = {
            let mut inner = self.lock();
            inner.queue.update(id, patch);
            (listeners_in_order(&inner), inner.queue.snapshot())
        };
        broadcast(&listeners, &snapshot);
    }

    /// Mark one entry (or all, with `None`) as closed, and schedule a removal
    /// timer for each affected id that does not already have one pending.
    pub fn dismiss(&self, id: Option<NotificationId>) {
        let (listeners, snapshot) = {
            let mut inner = self.lock();
            let affected = inner.queue.dismiss(id);
            // Scheduling requires a reactor; without one, dismissed entries
            // wait for an explicit remove.
            if tokio::runtime::Handle::try_current().is_ok() {
                for id in affected {
                    if !inner.timers.contains_key(&id) {
                        let notifier = self.clone();
                        let delay = self.remove_delay;
                        let handle = tokio::spawn(async move {
                            tokio::time::sleep(delay).await;
                            notifier.expire(id);
                        });
                        inner.timers.insert(id, handle);
                    }
                }
            }
            (listeners_in_order(&inner), inner.queue.snapshot())
        };
        broadcast(&listeners, &snapshot);
    }

    /// Delete one entry (or empty the queue, with `None`), cancelling any
    /// pending removal timer for the targeted id(s).
    pub fn remove(&self, id: Option<NotificationId>) {
        let (listeners, snapshot) = {
            let mut inner = self.lock();
            inner.queue.remove(id);
            match id {
                Some(target) => {
                    if let Some(handle) = inner.timers.remove(&target) {
                        handle.abort();
                    }
                }
                None => {
                    for (_, handle) in inner.timers.drain() {
                        handle.abort();
                    }
                }
            }
            (listeners_in_order(&inner), inner.queue.snapshot())
        };
        broadcast(&listeners, &snapshot);
    }

    /// Register a listener. It is invoked synchronously with the current
    /// snapshot immediately, and again after every state change, in
    /// registration order relative to other listeners.
    pub fn subscribe(
        &self,
        listener: impl Fn(&[Notification]) + Send + Sync + 'static,
    ) -> Subscription {
        let listener: Listener = Arc::new(listener);
        let (key, snapshot) = {
            let mut inner = self.lock();
            inner.next_listener += 1;
            let key = inner.next_listener;
            inner.listeners.insert(key, listener.clone());
            (key, inner.queue.snapshot())
        };
        invoke(&listener, &snapshot);
        Subscription {
            key,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Timer body: purge the entry if it still exists. Racing an explicit
    /// `remove` is fine; firing on an already-absent id does nothing.
    fn expire(&self, id: NotificationId) {
        let notify = {
            let mut inner = self.lock();
            inner.timers.remove(&id);
            let removed = inner.queue.remove(Some(id));
            if removed.is_empty() {
                None
            } else {
                Some((listeners_in_order(&inner), inner.queue.snapshot()))
            }
        };
        if let Some((listeners, snapshot)) = notify {
            broadcast(&listeners, &snapshot);
        }
    }

    /// A poisoned mutex only means a panic happened while a past caller held
    /// the lock; the queue data is still coherent, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, NotifierInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn listeners_in_order(inner: &NotifierInner) -> Vec<Listener> {
    inner.listeners.values().cloned().collect()
}

/// Deliver `snapshot` to every listener in order. Listeners run outside the
/// state lock, so a listener may call back into the notifier freely.
fn broadcast(listeners: &[Listener], snapshot: &[Notification]) {
    for listener in listeners {
        invoke(listener, snapshot);
    }
}

/// One broken listener must not block the others or poison queue state.
fn invoke(listener: &Listener, snapshot: &[Notification]) {
    if catch_unwind(AssertUnwindSafe(|| listener(snapshot))).is_err() {
        tracing::warn!("notification listener panicked; skipping it for this broadcast");
    }
}

// ---------------------------------------------------------------------------
// ToastHandle
// ---------------------------------------------------------------------------

/// Returned by [`Notifier::add`]: the fresh id plus a zero-argument `dismiss`
/// bound to it, suitable for wiring to a close control.
#[derive(Clone)]
pub struct ToastHandle {
    id: NotificationId,
    notifier: Notifier,
}

impl ToastHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Equivalent to `notifier.dismiss(Some(self.id()))`.
    pub fn dismiss(&self) {
        self.notifier.dismiss(Some(self.id));
    }

    pub fn update(&self, patch: ToastPatch) {
        self.notifier.update(self.id, patch);
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// Handle returned by [`Notifier::subscribe`]. Unsubscribing twice is a
/// no-op; dropping the handle leaves the listener registered.
pub struct Subscription {
    key: u64,
    inner: Weak<Mutex<NotifierInner>>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
            guard.listeners.remove(&self.key);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use std::sync::Mutex as StdMutex;

    fn collector() -> (Arc<StdMutex<Vec<Vec<Notification>>>>, impl Fn(&[Notification]) + Send + Sync + 'static)
    {
        let seen: Arc<StdMutex<Vec<Vec<Notification>>>> = Arc::new(StdMutex::new(Vec::new()));
        let sink = seen.clone();
        let listener = move |snapshot: &[Notification]| {
            sink.lock().unwrap().push(snapshot.to_vec());
        };
        (seen, listener)
    }

    #[test]
    fn add_assigns_fresh_unique_ids() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        let mut ids = Vec::new();
        for _ in 0..50 {
            ids.push(notifier.add(ToastRequest::titled("t")).id());
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn add_enforces_capacity() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        notifier.add(ToastRequest::titled("Toast 1"));
        let second = notifier.add(ToastRequest::titled("Toast 2"));

        let snapshot = notifier.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, second.id());
        assert_eq!(snapshot[0].title.as_deref(), Some("Toast 2"));
        assert!(snapshot[0].open);
    }

    #[test]
    fn handle_dismiss_is_bound_to_its_id() {
        let notifier = Notifier::new(2, Duration::from_secs(1));
        let first = notifier.add(ToastRequest::titled("a"));
        notifier.add(ToastRequest::titled("b"));

        first.dismiss();

        let snapshot = notifier.snapshot();
        let a = snapshot.iter().find(|n| n.id == first.id()).unwrap();
        assert!(!a.open);
        assert!(snapshot.iter().filter(|n| n.id != first.id()).all(|n| n.open));
    }

    #[test]
    fn handle_update_targets_its_entry() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        let handle = notifier.add(ToastRequest::titled("draft"));
        handle.update(ToastPatch::default().severity(Severity::Warning));
        assert_eq!(notifier.snapshot()[0].severity, Severity::Warning);
    }

    #[test]
    fn dismiss_all_closes_every_entry() {
        let notifier = Notifier::new(3, Duration::from_secs(1));
        notifier.add(ToastRequest::titled("a"));
        notifier.add(ToastRequest::titled("b"));
        notifier.add(ToastRequest::titled("c"));

        notifier.dismiss(None);

        assert!(notifier.snapshot().iter().all(|n| !n.open));
        assert_eq!(notifier.snapshot().len(), 3);
    }

    #[test]
    fn operations_on_absent_ids_do_not_panic() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        let ghost = NotificationId::from_raw(999);
        notifier.dismiss(Some(ghost));
        notifier.remove(Some(ghost));
        notifier.update(ghost, ToastPatch::default().title("x"));
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn subscriber_gets_immediate_snapshot_then_updates() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        notifier.add(ToastRequest::titled("first"));
        notifier.add(ToastRequest::titled("second"));

        let (seen, listener) = collector();
        let _subscription = notifier.subscribe(listener);

        // Immediate delivery of the current one-entry state.
        {
            let calls = seen.lock().unwrap();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].len(), 1);
            assert_eq!(calls[0][0].title.as_deref(), Some("second"));
        }

        notifier.dismiss(None);

        let calls = seen.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(!calls[1][0].open);
    }

    #[test]
    fn listeners_receive_broadcasts_in_registration_order() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        let order: Arc<StdMutex<Vec<&'static str>>> = Arc::new(StdMutex::new(Vec::new()));

        let first = order.clone();
        let _a = notifier.subscribe(move |_| first.lock().unwrap().push("a"));
        let second = order.clone();
        let _b = notifier.subscribe(move |_| second.lock().unwrap().push("b"));

        order.lock().unwrap().clear();
        notifier.add(ToastRequest::titled("t"));

        assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn unsubscribe_stops_deliveries_and_is_idempotent() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        let (seen, listener) = collector();
        let subscription = notifier.subscribe(listener);

        subscription.unsubscribe();
        subscription.unsubscribe();

        notifier.add(ToastRequest::titled("t"));
        // Only the immediate snapshot from subscribe time.
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn panicking_listener_does_not_block_others_or_corrupt_state() {
        let notifier = Notifier::new(2, Duration::from_secs(1));
        let _bad = notifier.subscribe(|snapshot: &[Notification]| {
            if !snapshot.is_empty() {
                panic!("listener bug");
            }
        });
        let (seen, listener) = collector();
        let _good = notifier.subscribe(listener);

        notifier.add(ToastRequest::titled("still delivered"));

        let calls = seen.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1][0].title.as_deref(), Some("still delivered"));
        assert_eq!(notifier.snapshot().len(), 1);
    }

    #[test]
    fn reentrant_listener_does_not_deadlock() {
        let notifier = Notifier::new(2, Duration::from_secs(1));
        let reentrant = notifier.clone();
        let _sub = notifier.subscribe(move |snapshot: &[Notification]| {
            // Reads back into the notifier from inside a broadcast.
            let _ = reentrant.snapshot().len() + snapshot.len();
        });
        notifier.add(ToastRequest::titled("t"));
        assert_eq!(notifier.snapshot().len(), 1);
    }

    #[test]
    fn dismiss_without_runtime_closes_entry_without_scheduling() {
        let notifier = Notifier::new(1, Duration::from_secs(1));
        let handle = notifier.add(ToastRequest::titled("t"));
        notifier.dismiss(Some(handle.id()));

        assert!(!notifier.snapshot()[0].open);
        assert_eq!(notifier.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dismissed_entry_is_purged_after_remove_delay() {
        let notifier = Notifier::new(1, Duration::from_secs(5));
        let handle = notifier.add(ToastRequest::titled("t"));

        notifier.dismiss(Some(handle.id()));
        assert_eq!(notifier.snapshot().len(), 1);
        assert!(!notifier.snapshot()[0].open);
        assert_eq!(notifier.pending_removals(), 1);

        tokio::time::sleep(Duration::from_secs(6)).await;

        assert!(notifier.snapshot().is_empty());
        assert_eq!(notifier.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn second_dismiss_does_not_duplicate_timer() {
        let notifier = Notifier::new(1, Duration::from_secs(5));
        let handle = notifier.add(ToastRequest::titled("t"));

        notifier.dismiss(Some(handle.id()));
        notifier.dismiss(Some(handle.id()));
        assert_eq!(notifier.pending_removals(), 1);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(notifier.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_remove_cancels_pending_timer() {
        let notifier = Notifier::new(1, Duration::from_secs(5));
        let handle = notifier.add(ToastRequest::titled("t"));

        notifier.dismiss(Some(handle.id()));
        notifier.remove(Some(handle.id()));

        assert!(notifier.snapshot().is_empty());
        assert_eq!(notifier.pending_removals(), 0);

        // Nothing left to fire; advancing past the delay must be harmless.
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(notifier.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_firing_on_evicted_entry_is_noop() {
        let notifier = Notifier::new(1, Duration::from_secs(5));
        let first = notifier.add(ToastRequest::titled("old"));
        notifier.dismiss(Some(first.id()));

        // Eviction by capacity does not cancel the timer; the late firing
        // must leave the newer entry alone.
        let second = notifier.add(ToastRequest::titled("new"));
        tokio::time::sleep(Duration::from_secs(6)).await;

        let snapshot = notifier.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, second.id());
        assert!(snapshot[0].open);
        assert_eq!(notifier.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn remove_all_cancels_every_timer() {
        let notifier = Notifier::new(3, Duration::from_secs(5));
        notifier.add(ToastRequest::titled("a"));
        notifier.add(ToastRequest::titled("b"));
        notifier.dismiss(None);
        assert_eq!(notifier.pending_removals(), 2);

        notifier.remove(None);
        assert_eq!(notifier.pending_removals(), 0);
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn default_notifier_uses_observed_constants() {
        let notifier = Notifier::default();
        assert_eq!(notifier.capacity(), DEFAULT_CAPACITY);
        assert_eq!(
            notifier.remove_delay(),
            Duration::from_millis(DEFAULT_REMOVE_DELAY_MS)
        );
    }
}
