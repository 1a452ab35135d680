//! Keystroke listening: fire a callback when a specific key code is pressed.

use crate::window::{KeydownListener, ListenerId, Window};
use std::sync::Arc;

/// Opaque handle to a registered keystroke listener; pass it back to
/// [`remove_keystroke_listener`] to deregister.
#[derive(Debug)]
pub struct KeystrokeHandle {
    id: ListenerId,
}

/// Register `callback` against the window's keydown events, filtered by the
/// physical key `code` (e.g. `"Enter"`). Events with any other code are
/// ignored. The listener stays live until removed or the window goes away.
///
/// No debouncing and no modifier-key (Ctrl/Shift/Alt) filtering is applied.
pub fn listen_keystroke<W>(
    window: &W,
    code: &str,
    callback: impl Fn() + Send + Sync + 'static,
) -> KeystrokeHandle
where
    W: Window + ?Sized,
{
    let code = code.to_string();
    let listener: KeydownListener = Arc::new(move |event| {
        if event.code != code {
            return;
        }
        callback();
    });

    let id = window.add_keydown_listener(listener);
    tracing::debug!(?id, "keystroke listener registered");
    KeystrokeHandle { id }
}

/// Deregister a listener created by [`listen_keystroke`]. Returns `false`
/// when the handle no longer refers to a live listener.
pub fn remove_keystroke_listener<W>(window: &W, handle: KeystrokeHandle) -> bool
where
    W: Window + ?Sized,
{
    window.remove_keydown_listener(handle.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{HeadlessWindow, KeyEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let cb_hits = Arc::clone(&hits);
        (hits, move || {
            cb_hits.fetch_add(1, Ordering::Relaxed);
        })
    }

    #[test]
    fn matching_code_invokes_callback_once_per_event() {
        let win = HeadlessWindow::new();
        let (hits, cb) = counter();
        listen_keystroke(&win, "Enter", cb);

        win.dispatch_keydown(&KeyEvent::new("Enter"));
        assert_eq!(hits.load(Ordering::Relaxed), 1);

        win.dispatch_keydown(&KeyEvent::new("Enter"));
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn other_codes_are_ignored() {
        let win = HeadlessWindow::new();
        let (hits, cb) = counter();
        listen_keystroke(&win, "Enter", cb);

        win.dispatch_keydown(&KeyEvent::new("Escape"));
        win.dispatch_keydown(&KeyEvent::new("KeyA"));
        assert_eq!(hits.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn code_match_is_exact_and_case_sensitive() {
        let win = HeadlessWindow::new();
        let (hits, cb) = counter();
        listen_keystroke(&win, "Enter", cb);

        win.dispatch_keydown(&KeyEvent::new("enter"));
        win.dispatch_keydown(&KeyEvent::new("NumpadEnter"));
        assert_eq!(hits.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn removal_stops_invocations() {
        let win = HeadlessWindow::new();
        let (hits, cb) = counter();
        let handle = listen_keystroke(&win, "Enter", cb);

        win.dispatch_keydown(&KeyEvent::new("Enter"));
        assert!(remove_keystroke_listener(&win, handle));

        win.dispatch_keydown(&KeyEvent::new("Enter"));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn independent_listeners_coexist() {
        let win = HeadlessWindow::new();
        let (enter_hits, enter_cb) = counter();
        let (esc_hits, esc_cb) = counter();
        listen_keystroke(&win, "Enter", enter_cb);
        listen_keystroke(&win, "Escape", esc_cb);

        win.dispatch_keydown(&KeyEvent::new("Escape"));
        assert_eq!(enter_hits.load(Ordering::Relaxed), 0);
        assert_eq!(esc_hits.load(Ordering::Relaxed), 1);
    }
}
