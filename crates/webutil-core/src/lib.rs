pub mod config;
pub mod logging;

// Helper components (each independent; navigate is the only one that
// calls into another, via url_check).
pub mod banner;
pub mod error;
pub mod id;
pub mod keystroke;
pub mod navigate;
pub mod random;
pub mod sanitize;
pub mod url_check;
pub mod window;

pub use error::Error;
