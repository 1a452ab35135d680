//! Tab navigation: validated `window.open` wrapper.

use crate::error::Error;
use crate::url_check::{is_url_valid_with, UrlStrategy};
use crate::window::{OpenTarget, Window};

/// Navigate the window to `url`, in a new tab when `new_tab` is set.
///
/// The URL is validated with the default strict strategy first; on failure
/// [`Error::InvalidUrl`] is returned and the window primitive is never
/// invoked.
pub fn navigate_tab<W>(window: &W, url: &str, new_tab: bool) -> Result<(), Error>
where
    W: Window + ?Sized,
{
    navigate_tab_with(window, url, new_tab, UrlStrategy::Strict)
}

/// [`navigate_tab`] with an explicit URL validation strategy.
pub fn navigate_tab_with<W>(
    window: &W,
    url: &str,
    new_tab: bool,
    strategy: UrlStrategy,
) -> Result<(), Error>
where
    W: Window + ?Sized,
{
    if !is_url_valid_with(url, strategy) {
        return Err(Error::InvalidUrl {
            url: url.to_string(),
        });
    }

    let target = if new_tab {
        OpenTarget::Blank
    } else {
        OpenTarget::SelfTarget
    };
    tracing::debug!(url, tab_target = target.as_str(), "navigating");
    window.open(url, target);
    Ok(())
}
