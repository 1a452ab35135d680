//! `webutil gen-id` – generate a random identifier.

use webutil_core::config::WebutilConfig;
use webutil_core::id::{self, IdSpec};

pub fn run_gen_id(cfg: &WebutilConfig, groups: Option<usize>, no_separator: bool) {
    let mut spec: IdSpec = cfg.id.to_spec();
    if let Some(groups) = groups {
        spec.groups = groups;
    }
    if no_separator {
        spec.separated = false;
    }

    println!("{}", id::generate(&spec));
}
