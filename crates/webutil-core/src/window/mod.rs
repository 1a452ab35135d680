//! Window seam: the host surface the browser-facing helpers run against.
//!
//! A [`Window`] can open URLs and hold keydown listeners. The crate ships
//! [`HeadlessWindow`], an in-memory implementation, so the helpers work in
//! tests and headless embedders; a GUI host implements the trait over its
//! own event loop.

mod headless;

pub use headless::HeadlessWindow;

use std::sync::Arc;

/// A keydown event as reported by the host.
///
/// `code` is the physical-key identifier (e.g. `"Enter"`, `"KeyA"`),
/// independent of modifier state or locale mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: String,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Identifier of a registered keydown listener, unique per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// A registered keydown callback.
pub type KeydownListener = Arc<dyn Fn(&KeyEvent) + Send + Sync>;

/// Where a navigation should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// The current tab/context (empty target string).
    SelfTarget,
    /// A new tab (`"_blank"`).
    Blank,
}

impl OpenTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            OpenTarget::SelfTarget => "",
            OpenTarget::Blank => "_blank",
        }
    }
}

/// Window-like host surface.
pub trait Window {
    /// Open `url` in the given target. Validation is the caller's job
    /// (see [`crate::navigate::navigate_tab`]).
    fn open(&self, url: &str, target: OpenTarget);

    /// Register a keydown listener; it stays live until removed or the
    /// window is dropped. Returns the id used for removal.
    fn add_keydown_listener(&self, listener: KeydownListener) -> ListenerId;

    /// Remove a previously registered listener. Returns `false` when the id
    /// is unknown (e.g. already removed).
    fn remove_keydown_listener(&self, id: ListenerId) -> bool;

    /// Host-side injection point: deliver a keydown event to every
    /// registered listener.
    fn dispatch_keydown(&self, event: &KeyEvent);
}
