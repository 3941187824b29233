use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// NotificationId
// ---------------------------------------------------------------------------

/// Opaque identifier for a toast, stable for the entry's lifetime.
///
/// Ids are handed out by [`crate::notifier::Notifier`] from a monotonically
/// increasing counter, so an id is never reused while the manager lives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// ToastRequest
// ---------------------------------------------------------------------------

/// What a caller hands to `add`: everything except the id and visibility,
/// which the manager assigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToastRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    /// Opaque payload (e.g. a retry-button descriptor), passed through untouched.
    #[serde(default)]
    pub action: Option<serde_json::Value>,
}

impl ToastRequest {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            severity: Severity::Success,
            action: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            severity: Severity::Error,
            action: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_action(mut self, action: serde_json::Value) -> Self {
        self.action = Some(action);
        self
    }
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// A single toast entry. `open = true` means currently shown; `false` means
/// dismissed but not yet purged from the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Severity,
    pub open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(id: NotificationId, request: ToastRequest) -> Self {
        Self {
            id,
            title: request.title,
            description: request.description,
            severity: request.severity,
            open: true,
            action: request.action,
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// ToastPatch
// ---------------------------------------------------------------------------

/// Partial update merged into an existing entry. Fields left as `None` are
/// unchanged; `open` is only touched when explicitly present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToastPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub action: Option<serde_json::Value>,
    #[serde(default)]
    pub open: Option<bool>,
}

impl ToastPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }
}

// ---------------------------------------------------------------------------
// ToastQueue
// ---------------------------------------------------------------------------

/// Bounded, newest-first queue of toasts.
///
/// Invariant: `len() <= capacity()` after every operation. New entries are
/// prepended; when the bound is exceeded the oldest (tail) entries are
/// dropped, never the entry just added.
///
/// Every operation is total: an absent id is a benign no-op, never an error.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: Vec<Notification>,
    capacity: usize,
}

impl ToastQueue {
    /// Create an empty queue. A capacity of 0 is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    /// Owned copy of the current state, for broadcasting to subscribers.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.clone()
    }

    /// Prepend `notification`, then drop tail entries until the bound holds.
    pub fn add(&mut self, notification: Notification) {
        self.entries.insert(0, notification);
        self.entries.truncate(self.capacity);
    }

    /// Merge `patch` into the entry with `id`. Returns whether an entry was
    /// found; an absent id leaves the queue untouched.
    pub fn update(&mut self, id: NotificationId, patch: ToastPatch) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if let Some(title) = patch.title {
            entry.title = Some(title);
        }
        if let Some(description) = patch.description {
            entry.description = Some(description);
        }
        if let Some(severity) = patch.severity {
            entry.severity = severity;
        }
        if let Some(action) = patch.action {
            entry.action = Some(action);
        }
        if let Some(open) = patch.open {
            entry.open = open;
        }
        true
    }

    /// Mark one entry (or, with `None`, every entry) as closed. Entries stay
    /// in the queue until removed. Returns the ids that were touched.
    pub fn dismiss(&mut self, id: Option<NotificationId>) -> Vec<NotificationId> {
        let mut affected = Vec::new();
        for entry in &mut self.entries {
            if id.is_none_or(|target| entry.id == target) {
                entry.open = false;
                affected.push(entry.id);
            }
        }
        affected
    }

    /// Delete one entry (or, with `None`, empty the queue). Relative order of
    /// the remaining entries is preserved. Returns the ids that were removed.
    pub fn remove(&mut self, id: Option<NotificationId>) -> Vec<NotificationId> {
        match id {
            Some(target) => match self.entries.iter().position(|n| n.id == target) {
                Some(pos) => vec![self.entries.remove(pos).id],
                None => Vec::new(),
            },
            None => self.entries.drain(..).map(|n| n.id).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, title: &str) -> Notification {
        Notification::new(NotificationId::from_raw(id), ToastRequest::titled(title))
    }

    #[test]
    fn add_stores_entry_open() {
        let mut queue = ToastQueue::new(1);
        queue.add(toast(1, "Test Toast"));

        assert_eq!(queue.len(), 1);
        let entry = &queue.entries()[0];
        assert_eq!(entry.title.as_deref(), Some("Test Toast"));
        assert!(entry.open);
    }

    #[test]
    fn add_evicts_oldest_at_capacity_one() {
        let mut queue = ToastQueue::new(1);
        queue.add(toast(1, "Toast 1"));
        queue.add(toast(2, "Toast 2"));

        // Only the most recent toast survives.
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.entries()[0].id, NotificationId::from_raw(2));
        assert_eq!(queue.entries()[0].title.as_deref(), Some("Toast 2"));
    }

    #[test]
    fn add_never_evicts_the_entry_just_added() {
        let mut queue = ToastQueue::new(2);
        for i in 1..=5 {
            queue.add(toast(i, "t"));
            assert_eq!(queue.entries()[0].id, NotificationId::from_raw(i));
            assert!(queue.len() <= 2);
        }
        // Newest first: 5 then 4.
        assert_eq!(queue.entries()[0].id, NotificationId::from_raw(5));
        assert_eq!(queue.entries()[1].id, NotificationId::from_raw(4));
    }

    #[test]
    fn length_bounded_for_any_add_sequence() {
        for capacity in [1usize, 2, 3, 7] {
            let mut queue = ToastQueue::new(capacity);
            for i in 0..20 {
                queue.add(toast(i, "t"));
                assert!(queue.len() <= capacity);
            }
        }
    }

    #[test]
    fn zero_capacity_clamped_to_one() {
        let mut queue = ToastQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        queue.add(toast(1, "t"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut queue = ToastQueue::new(2);
        queue.add(Notification::new(
            NotificationId::from_raw(1),
            ToastRequest::titled("Original Title").with_description("keep me"),
        ));

        let changed = queue.update(
            NotificationId::from_raw(1),
            ToastPatch::default().title("Updated Title"),
        );

        assert!(changed);
        let entry = &queue.entries()[0];
        assert_eq!(entry.title.as_deref(), Some("Updated Title"));
        assert_eq!(entry.description.as_deref(), Some("keep me"));
        assert!(entry.open);
    }

    #[test]
    fn update_leaves_other_entries_alone() {
        let mut queue = ToastQueue::new(2);
        queue.add(toast(1, "Toast 1"));
        queue.add(toast(2, "Toast 2"));

        queue.update(
            NotificationId::from_raw(1),
            ToastPatch::default().title("Updated Toast 1"),
        );

        // Newest first: entry 2 at the head, entry 1 behind it.
        assert_eq!(queue.entries()[0].title.as_deref(), Some("Toast 2"));
        assert_eq!(queue.entries()[1].title.as_deref(), Some("Updated Toast 1"));
    }

    #[test]
    fn update_absent_id_is_noop() {
        let mut queue = ToastQueue::new(1);
        queue.add(toast(1, "Toast 1"));

        let changed = queue.update(NotificationId::from_raw(99), ToastPatch::default().title("x"));

        assert!(!changed);
        assert_eq!(queue.entries()[0].title.as_deref(), Some("Toast 1"));
    }

    #[test]
    fn update_can_set_open_explicitly() {
        let mut queue = ToastQueue::new(1);
        queue.add(toast(1, "t"));
        queue.dismiss(Some(NotificationId::from_raw(1)));
        assert!(!queue.entries()[0].open);

        queue.update(NotificationId::from_raw(1), ToastPatch::default().open(true));
        assert!(queue.entries()[0].open);
    }

    #[test]
    fn dismiss_closes_single_entry_but_keeps_it() {
        let mut queue = ToastQueue::new(1);
        queue.add(toast(1, "Toast 1"));

        let affected = queue.dismiss(Some(NotificationId::from_raw(1)));

        assert_eq!(affected, vec![NotificationId::from_raw(1)]);
        assert_eq!(queue.len(), 1);
        assert!(!queue.entries()[0].open);
    }

    #[test]
    fn dismiss_without_id_closes_everything() {
        let mut queue = ToastQueue::new(3);
        queue.add(toast(1, "a"));
        queue.add(toast(2, "b"));
        queue.add(toast(3, "c"));

        let affected = queue.dismiss(None);

        assert_eq!(affected.len(), 3);
        assert!(queue.entries().iter().all(|n| !n.open));
    }

    #[test]
    fn dismiss_absent_id_is_noop() {
        let mut queue = ToastQueue::new(1);
        queue.add(toast(1, "t"));
        let affected = queue.dismiss(Some(NotificationId::from_raw(42)));
        assert!(affected.is_empty());
        assert!(queue.entries()[0].open);
    }

    #[test]
    fn remove_deletes_exactly_one_preserving_order() {
        let mut queue = ToastQueue::new(3);
        queue.add(toast(1, "a"));
        queue.add(toast(2, "b"));
        queue.add(toast(3, "c"));

        let removed = queue.remove(Some(NotificationId::from_raw(2)));

        assert_eq!(removed, vec![NotificationId::from_raw(2)]);
        let ids: Vec<u64> = queue.entries().iter().map(|n| n.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn remove_without_id_empties_queue() {
        let mut queue = ToastQueue::new(3);
        queue.add(toast(1, "a"));
        queue.add(toast(2, "b"));

        let removed = queue.remove(None);

        assert_eq!(removed.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut queue = ToastQueue::new(2);
        queue.add(toast(1, "a"));
        let removed = queue.remove(Some(NotificationId::from_raw(9)));
        assert!(removed.is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn action_payload_passes_through_untouched() {
        let mut queue = ToastQueue::new(1);
        let action = serde_json::json!({ "label": "Retry", "command": "resubmit" });
        queue.add(Notification::new(
            NotificationId::from_raw(1),
            ToastRequest::titled("failed").with_action(action.clone()),
        ));
        assert_eq!(queue.entries()[0].action, Some(action));
    }

    #[test]
    fn severity_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(Severity::default(), Severity::Info);
    }
}
