mod banner;
mod check_url;
mod gen_id;
mod random;
mod sanitize;

pub use banner::{run_banner, run_intro};
pub use check_url::run_check_url;
pub use gen_id::run_gen_id;
pub use random::run_random;
pub use sanitize::run_sanitize;
