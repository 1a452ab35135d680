//! `webutil banner` / `webutil intro` – deferred console banners.

use anyhow::Result;
use std::thread;
use std::time::Duration;
use webutil_core::banner::{self, ConsoleIntro};

// Banner output lands on a detached thread after a fixed deferral; hold the
// process open long enough for it to print.
const EXIT_MARGIN: Duration = Duration::from_millis(50);

pub fn run_banner(title: &str) {
    banner::init_console(title);
    thread::sleep(banner::BANNER_DELAY + EXIT_MARGIN);
}

pub fn run_intro(
    author: String,
    title: String,
    repository: Option<String>,
    website: Option<String>,
) -> Result<()> {
    banner::init_console_intro(ConsoleIntro {
        author,
        title,
        repository,
        website,
    })?;
    thread::sleep(banner::INTRO_DELAY + EXIT_MARGIN);
    Ok(())
}
