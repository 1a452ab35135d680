//! In-memory window implementation.

use super::{KeyEvent, KeydownListener, ListenerId, OpenTarget, Window};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Window backed by plain in-process state: opened URLs are recorded for
/// inspection and keydown events are delivered synchronously from
/// [`Window::dispatch_keydown`].
#[derive(Default)]
pub struct HeadlessWindow {
    listeners: RwLock<HashMap<u64, KeydownListener>>,
    next_id: AtomicU64,
    opened: RwLock<Vec<(String, OpenTarget)>>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(url, target)` pair opened so far, in call order.
    pub fn opened(&self) -> Vec<(String, OpenTarget)> {
        self.opened.read().unwrap().clone()
    }

    /// Number of currently registered keydown listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap().len()
    }
}

impl Window for HeadlessWindow {
    fn open(&self, url: &str, target: OpenTarget) {
        tracing::debug!(url, tab_target = target.as_str(), "window.open");
        self.opened.write().unwrap().push((url.to_string(), target));
    }

    fn add_keydown_listener(&self, listener: KeydownListener) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().unwrap().insert(id, listener);
        ListenerId(id)
    }

    fn remove_keydown_listener(&self, id: ListenerId) -> bool {
        self.listeners.write().unwrap().remove(&id.0).is_some()
    }

    fn dispatch_keydown(&self, event: &KeyEvent) {
        // Snapshot under the lock, invoke outside it, so a callback may
        // add or remove listeners without deadlocking. Registration order
        // is preserved via the monotonic ids.
        let mut snapshot: Vec<(u64, KeydownListener)> = self
            .listeners
            .read()
            .unwrap()
            .iter()
            .map(|(id, l)| (*id, l.clone()))
            .collect();
        snapshot.sort_by_key(|(id, _)| *id);

        for (_, listener) in snapshot {
            listener(event);
        }
    }
}
