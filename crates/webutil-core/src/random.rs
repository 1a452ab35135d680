//! Random float sampling with fixed decimal precision.

use rand::Rng;

/// Draw a uniform float in `[min, max)` and round it to exactly `decimals`
/// fractional digits.
///
/// `decimals == 0` yields an integer-valued float. Callers must ensure
/// `min <= max`; an inverted range is not guarded and simply reflects what
/// the underlying arithmetic yields.
pub fn random_float(min: f64, max: f64, decimals: usize) -> f64 {
    random_float_with(&mut rand::thread_rng(), min, max, decimals)
}

/// Same as [`random_float`] with a caller-provided RNG.
pub fn random_float_with<R: Rng>(rng: &mut R, min: f64, max: f64, decimals: usize) -> f64 {
    let raw = rng.gen::<f64>() * (max - min) + min;
    round_to(raw, decimals)
}

/// Round by formatting to `decimals` fractional digits and parsing back,
/// matching the to-fixed-then-parse contract of the helper.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
