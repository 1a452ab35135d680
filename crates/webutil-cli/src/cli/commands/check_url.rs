//! `webutil check-url <url>` – validate a URL string.

use webutil_core::config::WebutilConfig;
use webutil_core::url_check::{is_url_valid_with, UrlStrategy};

pub fn run_check_url(cfg: &WebutilConfig, url: &str, strategy: Option<UrlStrategy>) {
    let strategy = strategy.unwrap_or(cfg.url_strategy);
    let verdict = if is_url_valid_with(url, strategy) {
        "valid"
    } else {
        "invalid"
    };
    println!("{verdict}");
}
