//! `webutil random <min> <max>` – sample a rounded random float.

use webutil_core::random::random_float;

pub fn run_random(min: f64, max: f64, decimals: usize) {
    println!("{:.decimals$}", random_float(min, max, decimals));
}
