//! `webutil sanitize <input>` – strip well-formed script tags.

use webutil_core::sanitize::strip_script_tags;

pub fn run_sanitize(input: &str) {
    println!("{}", strip_script_tags(input));
}
