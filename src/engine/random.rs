//! Randomized-range helper.

use rand::Rng;

/// Uniform sample from the closed interval spanned by `a` and `b`, in either
/// order. Callers may pass bounds as they appear in tuning tables without
/// worrying about which is larger.
pub fn between<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        return lo;
    }
    rng.gen_range(lo..=hi)
}
